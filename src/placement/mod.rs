//! ECC200 module placement.
//!
//! The mapping matrix is walked along alternating up and down diagonals.
//! Every free position reached receives the 8 bits of the next codeword in
//! the utah shape, four special layouts cover the bottom-left corner of some
//! widths and a fixed 2x2 pattern fills the bottom-right corner when the
//! sweep leaves it empty.

pub mod corner;
pub mod module;
mod sweep;
mod table;
mod writer;

pub use corner::Corner;
pub use module::Module;
pub use table::PlacementTable;
