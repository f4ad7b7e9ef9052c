/// Physical layout of one ECC200 symbol size.
///
/// The placement algorithm never sees the whole symbol: it works on the
/// mapping matrix, which is the symbol with every data region's finder and
/// timing border removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolSize {
    height: u8,
    width: u8,
    region_height: u8,
    region_width: u8,
    data: u16,
    ecc: u16,
}

impl SymbolSize {
    const fn new(height: u8, width: u8, region_height: u8, region_width: u8, data: u16, ecc: u16) -> Self {
        Self { height, width, region_height, region_width, data, ecc }
    }

    /// Height of the symbol in modules, borders included.
    #[inline]
    pub const fn height(&self) -> u8 {
        self.height
    }

    /// Width of the symbol in modules, borders included.
    #[inline]
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Size of one data region as (height, width), its border included.
    #[inline]
    pub const fn region(&self) -> (u8, u8) {
        (self.region_height, self.region_width)
    }

    #[inline]
    pub const fn data_codewords(&self) -> u16 {
        self.data
    }

    #[inline]
    pub const fn ecc_codewords(&self) -> u16 {
        self.ecc
    }

    /// Number of codewords the mapping matrix holds (data + error correction).
    #[inline]
    pub const fn total_codewords(&self) -> u16 {
        self.data + self.ecc
    }

    /// Rows of the mapping matrix.
    pub const fn mapping_rows(&self) -> u16 {
        let h = self.height as u16;
        h - 2 * (h / self.region_height as u16)
    }

    /// Columns of the mapping matrix.
    pub const fn mapping_cols(&self) -> u16 {
        let w = self.width as u16;
        w - 2 * (w / self.region_width as u16)
    }

    #[inline]
    pub const fn is_square(&self) -> bool {
        self.height == self.width
    }

    /// Finds the symbol whose mapping matrix is `rows` x `cols`.
    pub fn from_mapping(rows: u16, cols: u16) -> Option<Self> {
        SYMBOL_SIZES.iter()
            .copied()
            .find(|s| s.mapping_rows() == rows && s.mapping_cols() == cols)
    }

    /// Finds the symbol measuring `height` x `width` modules.
    pub fn from_symbol(height: u8, width: u8) -> Option<Self> {
        SYMBOL_SIZES.iter()
            .copied()
            .find(|s| s.height == height && s.width == width)
    }
}

/// Every ECC200 symbol size, ordered by capacity.
pub const SYMBOL_SIZES: [SymbolSize; 30] = [
    SymbolSize::new(10, 10, 10, 10, 3, 5),
    SymbolSize::new(12, 12, 12, 12, 5, 7),
    SymbolSize::new(8, 18, 8, 18, 5, 7),
    SymbolSize::new(14, 14, 14, 14, 8, 10),
    SymbolSize::new(8, 32, 8, 16, 10, 11),
    SymbolSize::new(16, 16, 16, 16, 12, 12),
    SymbolSize::new(12, 26, 12, 26, 16, 14),
    SymbolSize::new(18, 18, 18, 18, 18, 14),
    SymbolSize::new(20, 20, 20, 20, 22, 18),
    SymbolSize::new(12, 36, 12, 18, 22, 18),
    SymbolSize::new(22, 22, 22, 22, 30, 20),
    SymbolSize::new(16, 36, 16, 18, 32, 24),
    SymbolSize::new(24, 24, 24, 24, 36, 24),
    SymbolSize::new(26, 26, 26, 26, 44, 28),
    SymbolSize::new(16, 48, 16, 24, 49, 28),
    SymbolSize::new(32, 32, 16, 16, 62, 36),
    SymbolSize::new(36, 36, 18, 18, 86, 42),
    SymbolSize::new(40, 40, 20, 20, 114, 48),
    SymbolSize::new(44, 44, 22, 22, 144, 56),
    SymbolSize::new(48, 48, 24, 24, 174, 68),
    SymbolSize::new(52, 52, 26, 26, 204, 84),
    SymbolSize::new(64, 64, 16, 16, 280, 112),
    SymbolSize::new(72, 72, 18, 18, 368, 144),
    SymbolSize::new(80, 80, 20, 20, 456, 192),
    SymbolSize::new(88, 88, 22, 22, 576, 224),
    SymbolSize::new(96, 96, 24, 24, 696, 272),
    SymbolSize::new(104, 104, 26, 26, 816, 336),
    SymbolSize::new(120, 120, 20, 20, 1050, 408),
    SymbolSize::new(132, 132, 22, 22, 1304, 496),
    SymbolSize::new(144, 144, 24, 24, 1558, 620),
];

#[cfg(test)]
mod tests {
    use super::{SymbolSize, SYMBOL_SIZES};

    #[test]
    fn test_single_region_mapping() {
        let s = SymbolSize::from_symbol(12, 12).unwrap();
        assert_eq!((s.mapping_rows(), s.mapping_cols()), (10, 10));
        assert_eq!(s.total_codewords(), 12);
    }

    #[test]
    fn test_multi_region_mapping() {
        let s = SymbolSize::from_symbol(32, 32).unwrap();
        assert_eq!((s.mapping_rows(), s.mapping_cols()), (28, 28));

        let s = SymbolSize::from_symbol(144, 144).unwrap();
        assert_eq!((s.mapping_rows(), s.mapping_cols()), (132, 132));
        assert_eq!(s.total_codewords(), 2178);
    }

    #[test]
    fn test_rectangular_mapping() {
        let s = SymbolSize::from_symbol(8, 32).unwrap();
        assert!(!s.is_square());
        assert_eq!((s.mapping_rows(), s.mapping_cols()), (6, 28));
        assert_eq!(SymbolSize::from_mapping(6, 28), Some(s));
    }

    #[test]
    fn test_unknown_sizes() {
        assert_eq!(SymbolSize::from_mapping(12, 14), None);
        assert_eq!(SymbolSize::from_mapping(0, 0), None);
        // symbol dimensions are not mapping dimensions
        assert_eq!(SymbolSize::from_mapping(144, 144), None);
        assert_eq!(SymbolSize::from_symbol(11, 11), None);
    }

    #[test]
    fn test_mapping_sizes_are_unique() {
        for (i, a) in SYMBOL_SIZES.iter().enumerate() {
            for b in &SYMBOL_SIZES[i + 1..] {
                assert_ne!((a.mapping_rows(), a.mapping_cols()), (b.mapping_rows(), b.mapping_cols()));
            }
        }
    }

    #[test]
    fn test_capacity_fits_mapping_matrix() {
        for s in SYMBOL_SIZES {
            let modules = s.mapping_rows() as usize * s.mapping_cols() as usize;
            assert_eq!(modules / 8, s.total_codewords() as usize, "{}x{}", s.height(), s.width());
        }
    }
}
