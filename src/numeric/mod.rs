// ============================================================================
// Numeric Module
// Numeral values as the converter sees them
// ============================================================================
//
// This module provides:
// - Amount: sign, integer digits and cents of a parsed numeral
// - Cents: the two fractional digits (角 and 分)
// - NumericError: Error types for building amounts
//
// Design principles:
// - Integer part kept as decimal digits, so rendering never re-derives them
// - Checked constructors return Result (no panics)
// - Text input split the same way as f64 input; rust_decimal values via from_decimal

mod amount;
mod errors;

pub use amount::{Amount, Cents, MAX_INTEGER_DIGITS};
pub use errors::{NumericError, NumericResult};
