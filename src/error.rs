// src/error.rs

/// Errors produced while validating fractal parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FractalError {
    #[error("invalid iteration count {0}: must be non-negative")]
    InvalidArgument(i64),
    #[error("iteration count {requested} exceeds the maximum of {max}")]
    TooManyIterations { requested: i64, max: u32 },
}

pub type Result<T> = std::result::Result<T, FractalError>;
