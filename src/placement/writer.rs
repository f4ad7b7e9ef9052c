use crate::placement::{corner::Corner, module::Module};

/// Offsets of the 8 bits of a utah shaped codeword from its anchor, bit 0 first.
const UTAH: [(i32, i32); 8] = [
    (-2, -2), (-2, -1),
    (-1, -2), (-1, -1), (-1, 0),
    ( 0, -2), ( 0, -1), ( 0, 0),
];

/// Owns the mapping matrix while it is being filled and writes codeword bits
/// into it.
pub(crate) struct ModuleWriter {
    rows: i32,
    cols: i32,
    modules: Vec<Module>,
}

impl ModuleWriter {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows: rows as i32,
            cols: cols as i32,
            modules: vec![Module::UNSET; rows as usize * cols as usize],
        }
    }

    #[inline]
    pub const fn rows(&self) -> i32 {
        self.rows
    }

    #[inline]
    pub const fn cols(&self) -> i32 {
        self.cols
    }

    /// Folds a position above the top edge or left of the left edge back
    /// into the matrix. The row is folded first, then the column.
    pub const fn wrap(&self, mut row: i32, mut col: i32) -> (i32, i32) {
        if row < 0 {
            row += self.rows;
            col += 4 - (self.rows + 4) % 8;
        }
        if col < 0 {
            col += self.cols;
            row += 4 - (self.cols + 4) % 8;
        }
        (row, col)
    }

    #[inline]
    fn index(&self, row: i32, col: i32) -> usize {
        debug_assert!(row >= 0 && row < self.rows && col >= 0 && col < self.cols,
            "({row}, {col}) is outside the {}x{} matrix", self.rows, self.cols);
        (row * self.cols + col) as usize
    }

    /// Returns the module at an in-bounds position.
    #[inline]
    pub fn get(&self, row: i32, col: i32) -> Module {
        self.modules[self.index(row, col)]
    }

    /// Writes `module` at (`row`, `col`) after wrapping.
    pub fn module(&mut self, row: i32, col: i32, module: Module) {
        let (row, col) = self.wrap(row, col);
        let i = self.index(row, col);
        self.modules[i] = module;
    }

    /// Places the 8 bits of `codeword` in the utah shape anchored at
    /// (`row`, `col`), the anchor holding bit 7.
    pub fn utah(&mut self, row: i32, col: i32, codeword: u16) {
        for (bit, (dr, dc)) in UTAH.into_iter().enumerate() {
            self.module(row + dr, col + dc, Module::data(codeword, bit as u8));
        }
    }

    /// Places the 8 bits of `codeword` along a fixed corner layout.
    pub fn corner(&mut self, corner: Corner, codeword: u16) {
        for (bit, (row, col)) in corner.positions(self.rows, self.cols).into_iter().enumerate() {
            self.module(row, col, Module::data(codeword, bit as u8));
        }
    }

    pub fn into_modules(self) -> Vec<Module> {
        self.modules
    }
}
