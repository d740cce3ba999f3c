// ============================================================================
// Numeric Errors
// Error types for building currency amounts from raw input
// ============================================================================

use std::fmt;

/// Errors that can occur while turning input into an [`Amount`](super::Amount).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input string is not a plain decimal numeral
    InvalidInput,
    /// Value is NaN or infinite
    NonFinite,
    /// Integer part needs more places than the 万/亿 grouping covers
    OutOfRange,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::NonFinite => write!(f, "non-finite value: NaN or infinity"),
            NumericError::OutOfRange => write!(
                f,
                "out of range: integer part exceeds the hundred-billion range"
            ),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
