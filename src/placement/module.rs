use core::fmt;

/// One cell of the mapping matrix, packed into 16 bits.
///
/// Data modules store `codeword << 3 | bit`. Codewords are numbered from 1,
/// which leaves the values below 8 free for the unset marker and the two
/// colours of the fixed bottom-right pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Module(u16);

impl Module {
    pub const UNSET: Self = Self(0);
    /// Dark module of the fixed corner pattern.
    pub const DARK: Self = Self(1);
    /// Light module of the fixed corner pattern.
    pub const LIGHT: Self = Self(2);

    /// Largest codeword number a module can hold.
    pub const MAX_CODEWORD: u16 = u16::MAX >> 3;

    /// Bit `bit` of codeword `codeword`. Bit 0 is the most significant bit.
    ///
    /// Panics if `codeword` is 0 or above [MAX_CODEWORD](Self::MAX_CODEWORD),
    /// or if `bit` is not between 0 and 7.
    pub const fn data(codeword: u16, bit: u8) -> Self {
        assert!(codeword > 0, "codewords are numbered from 1");
        assert!(codeword <= Self::MAX_CODEWORD, "codeword does not fit in a module");
        assert!(bit < 8, "bit must be between 0 and 7 inclusive");

        Self((codeword << 3) | bit as u16)
    }

    #[inline]
    pub const fn is_unset(&self) -> bool {
        self.0 == Self::UNSET.0
    }

    #[inline]
    pub const fn is_fixed(&self) -> bool {
        self.0 == Self::DARK.0 || self.0 == Self::LIGHT.0
    }

    #[inline]
    pub const fn is_data(&self) -> bool {
        self.0 >= 8
    }

    /// Returns (codeword, bit) for a data module.
    #[inline]
    pub const fn as_pair(&self) -> Option<(u16, u8)> {
        if self.is_data() {
            Some((self.0 >> 3, (self.0 & 7) as u8))
        } else {
            None
        }
    }

    #[inline]
    pub const fn codeword(&self) -> Option<u16> {
        match self.as_pair() {
            Some((codeword, _)) => Some(codeword),
            None => None,
        }
    }

    #[inline]
    pub const fn bit(&self) -> Option<u8> {
        match self.as_pair() {
            Some((_, bit)) => Some(bit),
            None => None,
        }
    }

    /// Whether this module is printed dark for the given codeword stream.
    /// `codewords[0]` is codeword 1. Missing codewords read as zero.
    pub fn is_dark(&self, codewords: &[u8]) -> bool {
        match self.as_pair() {
            Some((codeword, bit)) => codewords.get(codeword as usize - 1)
                .map_or(false, |cw| cw & (0x80 >> bit) != 0),
            None => *self == Self::DARK,
        }
    }
}

/// `codeword.bit` for data modules, `##` / `..` for the fixed pattern and
/// `--` for an unset cell. Honours width and alignment flags.
impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_pair() {
            Some((codeword, bit)) => f.pad(&format!("{codeword}.{bit}")),
            None if *self == Self::DARK => f.pad("##"),
            None if *self == Self::LIGHT => f.pad(".."),
            None => f.pad("--"),
        }
    }
}
