//! ECC200 (Data Matrix) module placement.
//!
//! Before an encoder can draw a Data Matrix symbol it must know which bit of
//! which codeword goes in every module of the symbol's mapping matrix. This
//! crate computes that map (ISO/IEC 16022, Annex F) and memoizes it per size.
//!
//! ```
//! let table = ecc200::compute_placement(10, 10).unwrap();
//! assert_eq!(table.codeword_count(), 12);
//! // codeword 1, most significant bit
//! assert_eq!(table.get(0, 8), Some(ecc200::Module::data(1, 0)));
//! ```

mod cache;
mod tables;
pub mod error;
pub mod placement;

pub use cache::{compute_placement, PlacementCache};
pub use error::{Error, Result};
pub use placement::{Corner, Module, PlacementTable};
pub use tables::{SymbolSize, SYMBOL_SIZES};
