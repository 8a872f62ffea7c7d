/// An error type for the vector and matrix operations.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum AlgebraError {
    /// A zero-length vector was given to an operation that divides by its length.
    #[error("Degenerate vector: cannot {0} a zero-length vector")]
    DegenerateVector(&'static str),

    /// The matrix determinant is zero (up to tolerance) so it has no inverse.
    #[error("Singular matrix: determinant {0} is too close to zero")]
    SingularMatrix(f32),
}
