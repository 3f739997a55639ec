use thiserror::Error;

/// Custom error type for the scalargrad engine and network layer.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    /// Input vector length does not match a neuron's weight count.
    ///
    /// This is the fail-fast policy for caller-contract violations: the
    /// forward pass returns this error immediately instead of silently
    /// truncating or padding the input.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Gradient check failed for input {index}: analytical {analytical} != numerical {numerical} (difference {difference})")]
    GradientMismatch {
        index: usize,
        analytical: f64,
        numerical: f64,
        difference: f64,
    },

    #[error("Gradient for input {index} is not finite: analytical {analytical}, numerical {numerical}")]
    NonFiniteGradient {
        index: usize,
        analytical: f64,
        numerical: f64,
    },
}
