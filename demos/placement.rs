use ecc200::{compute_placement, SymbolSize, SYMBOL_SIZES};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod utils;

const HEIGHT: u8 = 12;
const WIDTH: u8 = 12;

// Sample data + error correction stream, one byte per codeword.
const CODEWORDS: [u8; 12] = [73, 102, 109, 109, 112, 25, 104, 52, 252, 18, 112, 207];

fn main() -> ecc200::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()))
        .init();

    let size = SymbolSize::from_symbol(HEIGHT, WIDTH).expect("12x12 is an ECC200 symbol");
    let table = compute_placement(size.mapping_rows(), size.mapping_cols())?;
    let width = table.cols() as usize;

    println!("{HEIGHT}x{WIDTH} symbol, {} codewords:", table.codeword_count());
    print!("{table}");

    let owners: Vec<_> = table.modules().iter().map(|m| m.codeword()).collect();
    utils::display_owners(width, &owners);

    let bits: Vec<bool> = table.bits(&CODEWORDS)?.collect();
    utils::display_bits(width, &bits);

    for s in SYMBOL_SIZES {
        let table = compute_placement(s.mapping_rows(), s.mapping_cols())?;
        println!("{:>3}x{:<3} mapping {:>3}x{:<3} codewords {:>4} corners {:?}",
            s.height(), s.width(), table.rows(), table.cols(), table.codeword_count(), table.corners());
    }
    Ok(())
}
