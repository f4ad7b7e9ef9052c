use tracing::{debug, trace};

use crate::placement::{corner::Corner, module::Module, writer::ModuleWriter};

/// State of one ECC200 placement run: the matrix being filled, the sweep
/// cursor and the number of the next codeword to place.
pub(crate) struct Sweep {
    writer: ModuleWriter,
    row: i32,
    col: i32,
    codeword: u16,
    corners: Vec<Corner>,
}

/// What a finished sweep hands over to [PlacementTable](crate::PlacementTable).
pub(crate) struct Placed {
    pub modules: Vec<Module>,
    pub codewords: u16,
    pub corners: Vec<Corner>,
}

impl Sweep {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            writer: ModuleWriter::new(rows, cols),
            // bit 7 of codeword 1
            row: 4,
            col: 0,
            codeword: 1,
            corners: Vec::new(),
        }
    }

    #[inline]
    fn next_codeword(&mut self) -> u16 {
        let cw = self.codeword;
        self.codeword += 1;
        cw
    }

    fn corner(&mut self) {
        let (rows, cols) = (self.writer.rows(), self.writer.cols());
        if let Some(corner) = Corner::select(self.row, self.col, rows, cols) {
            let cw = self.next_codeword();
            trace!(?corner, codeword = cw, "corner layout");
            self.writer.corner(corner, cw);
            self.corners.push(corner);
        }
    }

    /// Places a utah codeword at the cursor unless its anchor is already taken.
    fn utah(&mut self) {
        if self.writer.get(self.row, self.col).is_unset() {
            let cw = self.next_codeword();
            self.writer.utah(self.row, self.col, cw);
        }
    }

    fn sweep_up(&mut self) {
        let (rows, cols) = (self.writer.rows(), self.writer.cols());
        while self.row >= 0 && self.col < cols {
            if self.row < rows && self.col >= 0 {
                self.utah();
            }
            self.row -= 2;
            self.col += 2;
        }
        self.row += 1;
        self.col += 3;
    }

    fn sweep_down(&mut self) {
        let (rows, cols) = (self.writer.rows(), self.writer.cols());
        while self.row < rows && self.col >= 0 {
            if self.row >= 0 && self.col < cols {
                self.utah();
            }
            self.row += 2;
            self.col -= 2;
        }
        self.row += 3;
        self.col += 1;
    }

    /// Fills the 2x2 bottom-right block with the fixed pattern when the
    /// sweep left its last cell untouched.
    fn fixed_pattern(&mut self) {
        let (rows, cols) = (self.writer.rows(), self.writer.cols());
        if self.writer.get(rows - 1, cols - 1).is_unset() {
            self.writer.module(rows - 1, cols - 1, Module::DARK);
            self.writer.module(rows - 2, cols - 2, Module::DARK);
            self.writer.module(rows - 1, cols - 2, Module::LIGHT);
            self.writer.module(rows - 2, cols - 1, Module::LIGHT);
        }
    }

    pub fn run(mut self) -> Placed {
        let (rows, cols) = (self.writer.rows(), self.writer.cols());
        while self.row < rows || self.col < cols {
            self.corner();
            self.sweep_up();
            self.sweep_down();
        }
        self.fixed_pattern();

        let codewords = self.codeword - 1;
        debug!(rows, cols, codewords, corners = ?self.corners, "computed ECC200 placement");

        Placed {
            modules: self.writer.into_modules(),
            codewords,
            corners: self.corners,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Sweep;
    use crate::placement::{corner::Corner, module::Module};
    use crate::SYMBOL_SIZES;

    fn corners(rows: u16, cols: u16) -> Vec<Corner> {
        Sweep::new(rows, cols).run().corners
    }

    #[test]
    fn test_smallest_symbol() {
        let placed = Sweep::new(8, 8).run();
        assert_eq!(placed.codewords, 8);
        assert!(placed.corners.is_empty());
        assert!(placed.modules.iter().all(Module::is_data));
        // bit 7 of codeword 1 sits where the sweep starts
        assert_eq!(placed.modules[4 * 8], Module::data(1, 7));
    }

    #[test]
    fn test_corner_selection_per_size() {
        assert_eq!(corners(12, 12), [Corner::One]);
        assert_eq!(corners(20, 20), [Corner::One]);
        assert_eq!(corners(132, 132), [Corner::One]);
        assert_eq!(corners(14, 14), [Corner::Two]);
        assert_eq!(corners(22, 22), [Corner::Two]);
        assert_eq!(corners(6, 28), [Corner::Three]);
        assert_eq!(corners(14, 44), [Corner::Three]);
        assert_eq!(corners(6, 16), [Corner::Four]);
        assert_eq!(corners(14, 32), [Corner::Four]);
        assert!(corners(10, 24).is_empty());
        assert!(corners(16, 16).is_empty());
    }

    #[test]
    fn test_fixed_pattern_sizes() {
        for s in SYMBOL_SIZES {
            let (rows, cols) = (s.mapping_rows(), s.mapping_cols());
            let placed = Sweep::new(rows, cols).run();
            let fixed = placed.modules.iter().filter(|m| m.is_fixed()).count();
            let expected = if matches!((rows, cols), (10, 10) | (14, 14) | (18, 18) | (22, 22)) { 4 } else { 0 };
            assert_eq!(fixed, expected, "{rows}x{cols}");
        }
    }

    #[test]
    fn test_fixed_pattern_layout() {
        let placed = Sweep::new(14, 14).run();
        let at = |r: usize, c: usize| placed.modules[r * 14 + c];
        assert_eq!(at(13, 13), Module::DARK);
        assert_eq!(at(12, 12), Module::DARK);
        assert_eq!(at(13, 12), Module::LIGHT);
        assert_eq!(at(12, 13), Module::LIGHT);
    }

    #[test]
    fn test_every_size_stays_inside() {
        // an anchor wrapping outside the matrix trips the bounds assertion
        // of the writer
        for s in SYMBOL_SIZES {
            let (rows, cols) = (s.mapping_rows(), s.mapping_cols());
            let placed = Sweep::new(rows, cols).run();
            assert_eq!(placed.modules.len(), rows as usize * cols as usize);
            assert!(placed.modules.iter().all(|m| !m.is_unset()), "{rows}x{cols}");
        }
    }

    #[test]
    fn test_codeword_count_matches_capacity() {
        for s in SYMBOL_SIZES {
            let placed = Sweep::new(s.mapping_rows(), s.mapping_cols()).run();
            assert_eq!(placed.codewords, s.total_codewords(), "{}x{}", s.height(), s.width());
        }
    }
}
