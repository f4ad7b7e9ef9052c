//! The four special corner layouts of ECC200.
//!
//! Near the bottom-left corner the diagonal sweep cannot fit a utah shaped
//! codeword for some matrix widths. The standard places one codeword there
//! along fixed coordinates instead. The tables below are those coordinates,
//! bit 0 first, and must be kept literally as they are.

/// A coordinate measured from the top/left edge or back from the
/// bottom/right edge of the mapping matrix.
#[derive(Debug, Clone, Copy)]
enum Pos {
    Start(i32),
    End(i32),
}

impl Pos {
    #[inline]
    const fn resolve(self, len: i32) -> i32 {
        match self {
            Pos::Start(n) => n,
            Pos::End(n) => len - n,
        }
    }
}

use Pos::{End as E, Start as S};

const CORNER_1: [(Pos, Pos); 8] = [
    (E(1), S(0)), (E(1), S(1)), (E(1), S(2)),
    (S(0), E(2)), (S(0), E(1)),
    (S(1), E(1)), (S(2), E(1)), (S(3), E(1)),
];

const CORNER_2: [(Pos, Pos); 8] = [
    (E(3), S(0)), (E(2), S(0)), (E(1), S(0)),
    (S(0), E(4)), (S(0), E(3)), (S(0), E(2)), (S(0), E(1)),
    (S(1), E(1)),
];

const CORNER_3: [(Pos, Pos); 8] = [
    (E(3), S(0)), (E(2), S(0)), (E(1), S(0)),
    (S(0), E(2)), (S(0), E(1)),
    (S(1), E(1)), (S(2), E(1)), (S(3), E(1)),
];

const CORNER_4: [(Pos, Pos); 8] = [
    (E(1), S(0)), (E(1), E(1)),
    (S(0), E(3)), (S(0), E(2)), (S(0), E(1)),
    (S(1), E(3)), (S(1), E(2)), (S(1), E(1)),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    One,
    Two,
    Three,
    Four,
}

impl Corner {
    /// Returns the corner layout to emit when the sweep cursor reaches
    /// (`row`, `col`), if any. At most one layout matches a given position.
    pub const fn select(row: i32, col: i32, rows: i32, cols: i32) -> Option<Self> {
        if row == rows && col == 0 {
            Some(Corner::One)
        } else if row == rows - 2 && col == 0 && cols % 4 != 0 {
            Some(Corner::Two)
        } else if row == rows - 2 && col == 0 && cols % 8 == 4 {
            Some(Corner::Three)
        } else if row == rows + 4 && col == 2 && cols % 8 == 0 {
            Some(Corner::Four)
        } else {
            None
        }
    }

    /// Cell of every bit of the corner codeword in a `rows` x `cols` matrix,
    /// bit 0 first, as (row, col).
    pub fn positions(self, rows: i32, cols: i32) -> [(i32, i32); 8] {
        let layout = match self {
            Corner::One => &CORNER_1,
            Corner::Two => &CORNER_2,
            Corner::Three => &CORNER_3,
            Corner::Four => &CORNER_4,
        };
        layout.map(|(r, c)| (r.resolve(rows), c.resolve(cols)))
    }
}
