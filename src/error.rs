use thiserror::Error;

/// Errors raised by network construction, training, and persistence.
///
/// Every error is raised synchronously at the point of violation and
/// propagates to the caller; the engine never retries or degrades.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Bad constructor or `add_layer` arguments, or a precondition violation
    /// such as running a forward pass before weights were initialized.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An inputs/actuals vector disagrees in length with the relevant layer
    /// width, or a loaded weight row has the wrong width.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// A required field was absent from a persisted network record.
    #[error("undefined field: {0}")]
    UndefinedField(&'static str),

    /// An activation name in a persisted record is not in the registry.
    #[error("unknown activation function: {0}")]
    UnknownActivation(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
