//! Error handling for planedit
//!
//! Edit errors report invalid indices, missing or mismatched plan
//! objects and unusable parameters.
//!
//! Degenerate geometry is not an error: angle and vector
//! queries fall back to defined values instead.

use thiserror::Error;

/// Edit error type
///
/// Represents recoverable failures of a single edit request. None of these
/// leave the edited object in a partially modified state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditError {
    /// A point index is outside of the edited point list
    #[error("Point index {index} out of range for {len} points")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of points available.
        len: usize,
    },

    /// The referenced plan object does not exist (anymore)
    #[error("Plan object {id} not found")]
    ObjectNotFound {
        /// The id of the missing object.
        id: u64,
    },

    /// The referenced plan object has the wrong kind for the request
    #[error("Plan object {id} is a {actual}, expected {expected}")]
    WrongKind {
        /// The id of the object.
        id: u64,
        /// The expected kind name.
        expected: String,
        /// The actual kind name.
        actual: String,
    },

    /// A transform parameter is not usable (NaN, infinite, ...)
    #[error("Invalid transform parameter '{param}': {reason}")]
    InvalidParameter {
        /// The parameter name.
        param: String,
        /// The reason the parameter is invalid.
        reason: String,
    },

    /// No editable object could be found for the request
    #[error("Nothing to edit: {reason}")]
    NothingToEdit {
        /// The reason nothing could be edited.
        reason: String,
    },
}

impl EditError {
    /// Shortcut for an out-of-range index error.
    pub fn index(index: usize, len: usize) -> Self {
        EditError::IndexOutOfRange { index, len }
    }
}
