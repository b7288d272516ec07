use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeneratorError {
    #[error("canvas dimensions must be finite and greater than zero, got {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },
}
