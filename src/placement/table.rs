use core::fmt;

use crate::{Error, Result, SymbolSize};
use crate::placement::{corner::Corner, module::Module, sweep::Sweep};

/// The ECC200 placement map of one mapping matrix: for every module, the
/// codeword bit (or fixed pattern colour) printed there. Row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementTable {
    rows: u16,
    cols: u16,
    modules: Box<[Module]>,
    codewords: u16,
    corners: Vec<Corner>,
}

impl PlacementTable {
    /// Computes the placement of a `rows` x `cols` mapping matrix without
    /// going through a cache. The size must be the mapping matrix of an
    /// ECC200 symbol.
    pub fn new(rows: u16, cols: u16) -> Result<Self> {
        let size = SymbolSize::from_mapping(rows, cols)
            .ok_or(Error::InvalidDimensions { rows, cols })?;
        Ok(Self::for_symbol(size))
    }

    /// Computes the placement of the mapping matrix of `size`.
    pub fn for_symbol(size: SymbolSize) -> Self {
        let (rows, cols) = (size.mapping_rows(), size.mapping_cols());
        let placed = Sweep::new(rows, cols).run();
        debug_assert!(placed.modules.iter().all(|m| !m.is_unset()),
            "{rows}x{cols} placement left unset modules");

        Self {
            rows,
            cols,
            modules: placed.modules.into_boxed_slice(),
            codewords: placed.codewords,
            corners: placed.corners,
        }
    }

    #[inline]
    pub const fn rows(&self) -> u16 {
        self.rows
    }

    #[inline]
    pub const fn cols(&self) -> u16 {
        self.cols
    }

    /// Number of codewords placed, codewords being numbered `1..=count`.
    #[inline]
    pub const fn codeword_count(&self) -> u16 {
        self.codewords
    }

    /// Corner layouts used by this matrix, in placement order.
    #[inline]
    pub fn corners(&self) -> &[Corner] {
        &self.corners
    }

    /// All modules, row-major.
    #[inline]
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn get(&self, row: u16, col: u16) -> Option<Module> {
        if row < self.rows && col < self.cols {
            Some(self.modules[row as usize * self.cols as usize + col as usize])
        } else {
            None
        }
    }

    /// Iterates over the rows of the matrix.
    pub fn iter(&self) -> impl Iterator<Item = &[Module]> + '_ {
        self.modules.chunks_exact(self.cols as usize)
    }

    /// Module values of the mapping matrix, row-major, `true` being dark.
    /// `codewords` is the full data + error correction stream in placement
    /// order and must hold at least [codeword_count](Self::codeword_count)
    /// codewords.
    pub fn bits<'a>(&'a self, codewords: &'a [u8]) -> Result<impl Iterator<Item = bool> + 'a> {
        let expected = self.codewords as usize;
        if codewords.len() < expected {
            return Err(Error::NotEnoughCodewords { expected, actual: codewords.len() });
        }

        Ok(self.modules.iter().map(move |m| m.is_dark(codewords)))
    }

    /// Writes the module values into `target` as `on`/`off`. `target` must
    /// hold exactly `rows * cols` slots.
    pub fn fill<P: Clone>(&self, codewords: &[u8], target: &mut [P], on: &P, off: &P) -> Result<()> {
        if target.len() != self.modules.len() {
            return Err(Error::TargetSize { expected: self.modules.len(), actual: target.len() });
        }
        for (slot, bit) in target.iter_mut().zip(self.bits(codewords)?) {
            *slot = if bit { on.clone() } else { off.clone() };
        }
        Ok(())
    }
}

/// One line per row, modules left-aligned in 4 character columns.
impl fmt::Display for PlacementTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut line = String::new();
        for row in self.iter() {
            line.clear();
            for (i, m) in row.iter().enumerate() {
                if i > 0 {
                    line.push(' ');
                }
                line.push_str(&format!("{m:<4}"));
            }
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
