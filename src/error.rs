use thiserror::Error;

/// Errors returned by the classifier and its distance metrics.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Two points being compared have different coordinate counts.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Dimensionality of the first point.
        expected: usize,
        /// Dimensionality of the second point.
        found: usize,
    },

    /// The training set holds fewer examples than the configured `k`.
    #[error("insufficient training data: k is {k}, but training set has {n_items} items")]
    InsufficientData {
        /// Configured number of neighbors.
        k: usize,
        /// Number of examples supplied.
        n_items: usize,
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Classification was requested before a successful `train`.
    #[error("classifier has not been trained")]
    EmptyModel,
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
