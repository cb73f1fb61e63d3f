use thiserror::Error;

/// Errors produced by the affine math behind the view transform
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TransformError {
    /// The matrix collapses the plane and has no inverse
    #[error("transform is not invertible (determinant {determinant})")]
    Singular { determinant: f64 },
}
