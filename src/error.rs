use std::fmt;

/// Error demoting a float value into an exact rational
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionError {
    NotFinite(String),
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::NotFinite(msg) => {
                write!(f, "Value has no rational representation: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConversionError {}

/// Error types for matrix arithmetic
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixError {
    DivisionByZero,
    NotRepresentable(String),
    NotScalar(String),
    RaggedRows(String),
    ShapeMismatch(String),
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::DivisionByZero => write!(f, "Division by a zero entry"),
            MatrixError::NotRepresentable(msg) => {
                write!(f, "Entry result is not representable: {}", msg)
            }
            MatrixError::NotScalar(msg) => write!(f, "Operands must be 1x1: {}", msg),
            MatrixError::RaggedRows(msg) => write!(f, "Rows differ in length: {}", msg),
            MatrixError::ShapeMismatch(msg) => write!(f, "Shape mismatch: {}", msg),
        }
    }
}

impl std::error::Error for MatrixError {}

impl From<ConversionError> for MatrixError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::NotFinite(msg) => MatrixError::NotRepresentable(msg),
        }
    }
}
