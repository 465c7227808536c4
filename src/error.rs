//! Validation failures raised while constructing an instance.
//!
//! The solver functions themselves are total over validated input; every
//! rejection happens here, before any table is allocated.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InstanceError {
    /// Parallel weight/value slices must describe the same items.
    #[error("weights and values differ in length: {weights} weights vs {values} values")]
    LengthMismatch { weights: usize, values: usize },

    /// Signed ingestion rejects negative weights instead of casting them.
    #[error("negative weight {value} at index {index}")]
    NegativeWeight { index: usize, value: i64 },

    /// Signed ingestion rejects negative values instead of casting them.
    #[error("negative value {value} at index {index}")]
    NegativeValue { index: usize, value: i64 },

    #[error("negative capacity {0}")]
    NegativeCapacity(i64),
}
