// ============================================================================
// Currency Amount
// A parsed numeral split into sign, integer digits and cents
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Number of integer places covered by the 万/亿 grouping (up to 999,999,999,999).
pub const MAX_INTEGER_DIGITS: usize = 12;

type Digits = SmallVec<[u8; MAX_INTEGER_DIGITS]>;

// ============================================================================
// Cents
// ============================================================================

/// Hundredths of a yuan, always in `0..=99`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Cents(u8);

impl Cents {
    /// No fractional amount
    pub const ZERO: Self = Self(0);

    /// Create from a value in `0..=99`.
    ///
    /// # Errors
    /// Returns `OutOfRange` for values of 100 or more.
    #[inline]
    pub fn new(value: u8) -> NumericResult<Self> {
        if value > 99 {
            Err(NumericError::OutOfRange)
        } else {
            Ok(Self(value))
        }
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Tenths digit (角).
    #[inline]
    pub const fn jiao(self) -> u8 {
        self.0 / 10
    }

    /// Hundredths digit (分).
    #[inline]
    pub const fn fen(self) -> u8 {
        self.0 % 10
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

// ============================================================================
// Amount
// ============================================================================

/// A currency amount ready to be written out in uppercase numerals.
///
/// The integer part is kept as decimal digits, most significant first, with no
/// leading zeros (zero itself is the single digit `0`). The fraction is rounded
/// to whole cents. The sign is recorded but never rendered.
///
/// # Example
/// ```
/// use rmb_uppercase::numeric::Amount;
///
/// let amount: Amount = "123.45".parse().unwrap();
/// assert_eq!(amount.integer_digits(), &[1, 2, 3]);
/// assert_eq!(amount.cents().value(), 45);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Amount {
    negative: bool,
    integer: Digits,
    cents: Cents,
}

impl Amount {
    // ========================================================================
    // Construction
    // ========================================================================

    /// The zero amount (零元整).
    pub fn zero() -> Self {
        Self {
            negative: false,
            integer: smallvec::smallvec![0],
            cents: Cents::ZERO,
        }
    }

    /// Create from a whole number of yuan and a cents value.
    ///
    /// # Errors
    /// - `OutOfRange` if `cents > 99` or `integer` has more than 12 digits
    pub fn from_parts(negative: bool, integer: u64, cents: u8) -> NumericResult<Self> {
        let cents = Cents::new(cents)?;
        Self::assemble(negative, integral_digits(&integer.to_string()), cents).checked()
    }

    /// Split a float into integer and cents parts.
    ///
    /// The integer part is the floor of the magnitude and the cents are
    /// `round((magnitude - integer) * 100)`. A rounding result of 100 carries
    /// into the integer part, so `0.999` becomes `1.00`.
    ///
    /// # Errors
    /// - `NonFinite` for NaN or infinity
    /// - `OutOfRange` if the integer part has more than 12 digits
    pub fn from_f64(value: f64) -> NumericResult<Self> {
        if !value.is_finite() {
            return Err(NumericError::NonFinite);
        }
        Self::split_f64(value).checked()
    }

    /// Same split as [`Amount::from_f64`] without the range check.
    ///
    /// Non-finite input yields zero.
    pub fn from_f64_unchecked(value: f64) -> Self {
        if !value.is_finite() {
            return Self::zero();
        }
        Self::split_f64(value)
    }

    /// Convert from an exact decimal, rounding half away from zero to cents.
    ///
    /// # Errors
    /// - `OutOfRange` if the integer part has more than 12 digits
    pub fn from_decimal(d: Decimal) -> NumericResult<Self> {
        let rounded = d
            .abs()
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let whole = rounded.trunc();
        let cents = ((rounded - whole) * Decimal::ONE_HUNDRED)
            .to_u8()
            .ok_or(NumericError::InvalidInput)?;

        Self::assemble(
            d.is_sign_negative(),
            integral_digits(&whole.to_string()),
            Cents::new(cents)?,
        )
        .checked()
    }

    fn split_f64(value: f64) -> Self {
        let magnitude = value.abs();
        let whole = magnitude.floor();
        let mut integer = integral_digits(&format!("{:.0}", whole));

        let mut cents = ((magnitude - whole) * 100.0).round() as u8;
        if cents >= 100 {
            increment(&mut integer);
            cents = 0;
        }

        Self::assemble(value < 0.0, integer, Cents(cents))
    }

    fn assemble(negative: bool, integer: Digits, cents: Cents) -> Self {
        let mut amount = Self {
            negative,
            integer,
            cents,
        };
        // -0.001 rounds to nothing; keep zero unsigned
        if amount.is_zero() {
            amount.negative = false;
        }
        amount
    }

    fn checked(self) -> NumericResult<Self> {
        if self.fits_supported_range() {
            Ok(self)
        } else {
            Err(NumericError::OutOfRange)
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Integer digits, most significant first.
    #[inline]
    pub fn integer_digits(&self) -> &[u8] {
        &self.integer
    }

    #[inline]
    pub fn cents(&self) -> Cents {
        self.cents
    }

    #[inline]
    pub fn integer_is_zero(&self) -> bool {
        self.integer.iter().all(|&d| d == 0)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.integer_is_zero() && self.cents.is_zero()
    }

    /// Whether the integer part fits the 万/亿 place table.
    #[inline]
    pub fn fits_supported_range(&self) -> bool {
        self.integer.len() <= MAX_INTEGER_DIGITS
    }

    /// Render as an uppercase currency string, e.g. `壹佰贰拾叁元肆角伍分`.
    pub fn to_chinese(&self) -> String {
        crate::engine::render_amount(self, Default::default())
    }
}

// ============================================================================
// Digit helpers
// ============================================================================

/// Digits of an integral decimal string, ignoring any fractional tail.
fn integral_digits(text: &str) -> Digits {
    let mut digits: Digits = text
        .split('.')
        .next()
        .unwrap_or_default()
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .skip_while(|&d| d == 0)
        .collect();
    if digits.is_empty() {
        digits.push(0);
    }
    digits
}

/// Add one to a digit string in place.
fn increment(digits: &mut Digits) {
    for digit in digits.iter_mut().rev() {
        if *digit == 9 {
            *digit = 0;
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, 1);
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        for digit in &self.integer {
            write!(f, "{}", digit)?;
        }
        write!(f, ".{:02}", self.cents.0)
    }
}

impl fmt::Debug for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Amount({})", self)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl FromStr for Amount {
    type Err = NumericError;

    /// Parse a plain decimal numeral, then split it like [`Amount::from_f64`].
    ///
    /// # Examples
    /// - "123" -> 123.00
    /// - "1.005" -> 1.00 (the nearest f64 lies just below 1.005)
    /// - "-45.6" -> -45.60
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !crate::engine::is_valid_number(s) {
            return Err(NumericError::InvalidInput);
        }

        let value: f64 = s.parse().map_err(|_| NumericError::InvalidInput)?;
        Self::from_f64(value)
    }
}

// ============================================================================
// Tests
// ============================================================================
