//! Projection errors

use thiserror::Error;

/// An error during the projection of a sequence of optional entities.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    /// The sequence contained no entity at this position.
    #[error("no entity at index {index}")]
    MissingEntity {
        /// The zero-based position of the absent entity.
        index: usize,
    },
}
