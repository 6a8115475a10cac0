use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeriesError {
    #[error("Series order {order} out of range (max {max})")]
    OrderOutOfRange { order: usize, max: usize },

    #[error("Coefficient length mismatch for {family}: expected {expected}, got {actual}")]
    LengthMismatch {
        family: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Unknown series family: {0}")]
    UnknownFamily(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
