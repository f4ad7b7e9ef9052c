const QUIET_ZONE: usize = 2;

/// Glyph for two vertically stacked modules. Light modules are drawn as
/// block ink and dark modules left blank, so the symbol reads correctly on a
/// dark terminal background.
fn glyph(top: bool, bottom: bool) -> char {
    match (top, bottom) {
        (false, false) => '█',
        (false, true) => '▀',
        (true, false) => '▄',
        (true, true) => ' ',
    }
}

/// Prints a row-major grid of modules, two rows per terminal line, inside a
/// light quiet zone.
pub fn display_bits(width: usize, bits: &[bool]) {
    let rows: Vec<&[bool]> = bits.chunks(width).collect();
    let margin: String = core::iter::repeat('█').take(QUIET_ZONE).collect();
    let blank: String = core::iter::repeat('█').take(width + 2 * QUIET_ZONE).collect();

    println!("{blank}");
    for pair in rows.chunks(2) {
        let top = pair[0];
        let line: String = (0..width)
            .map(|x| glyph(top[x], pair.get(1).map_or(false, |bottom| bottom[x])))
            .collect();
        println!("{margin}{line}{margin}");
    }
    println!("{blank}");
}

/// Prints which codeword owns each module, one letter per codeword.
pub fn display_owners(width: usize, owners: &[Option<u16>]) {
    for chunk in owners.chunks(width) {
        let line: String = chunk.iter()
            .map(|o| match o {
                Some(cw) => char::from(b'a' + ((cw - 1) % 26) as u8),
                None => '#',
            })
            .collect();
        println!("  {line}");
    }
}
