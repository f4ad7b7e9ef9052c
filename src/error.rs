//! Error type shared by the placement and cache APIs.

use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested mapping matrix does not belong to any ECC200 symbol.
    #[error("{rows}x{cols} is not the mapping matrix of an ECC200 symbol")]
    InvalidDimensions { rows: u16, cols: u16 },

    /// Fewer codewords were supplied than the placement table references.
    #[error("placement references {expected} codewords but only {actual} were supplied")]
    NotEnoughCodewords { expected: usize, actual: usize },

    /// The output buffer does not hold exactly one slot per module.
    #[error("target holds {actual} slots but the mapping matrix has {expected} modules")]
    TargetSize { expected: usize, actual: usize },
}
