// ============================================================================
// Numeral Validator
// Accepts plain decimal numerals only: -?\d+(\.\d+)?
// ============================================================================

/// Returns true if `input`, once trimmed, is a plain decimal numeral that
/// parses to a finite number.
///
/// Accepted: an optional leading `-`, one or more ASCII digits, optionally a
/// `.` followed by one or more digits. Exponents, `+` signs, separators and
/// bare or trailing points are rejected.
///
/// # Example
/// ```
/// use rmb_uppercase::engine::is_valid_number;
///
/// assert!(is_valid_number(" -45.6 "));
/// assert!(!is_valid_number("1e5"));
/// ```
pub fn is_valid_number(input: &str) -> bool {
    let text = input.trim();
    has_plain_shape(text) && text.parse::<f64>().is_ok_and(f64::is_finite)
}

fn has_plain_shape(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    match unsigned.split_once('.') {
        Some((integer, fraction)) => is_digits(integer) && is_digits(fraction),
        None => is_digits(unsigned),
    }
}

#[inline]
fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_accepts_plain_numerals() {
        for text in ["0", "123", "-45.6", "3.14", "007", "  12.50\n"] {
            assert!(is_valid_number(text), "{:?}", text);
        }
    }

    #[test]
    fn test_rejects_malformed_text() {
        for text in [
            "abc", "", "   ", "12.", ".5", "1e5", "+3", "-", "--1", "1.2.3", "1,000", "1 000",
            "NaN", "inf", "１２３",
        ] {
            assert!(!is_valid_number(text), "{:?}", text);
        }
    }

    #[test]
    fn test_rejects_digits_that_overflow_to_infinity() {
        let huge = "9".repeat(400);
        assert!(!is_valid_number(&huge));
    }

    proptest! {
        #[test]
        fn prop_plain_numerals_are_valid(text in "-?[0-9]{1,15}(\\.[0-9]{1,6})?") {
            prop_assert!(is_valid_number(&text));
        }

        #[test]
        fn prop_valid_text_parses_as_float(text in "\\PC*") {
            if is_valid_number(&text) {
                prop_assert!(text.trim().parse::<f64>().is_ok());
            }
        }

        #[test]
        fn prop_letters_are_rejected(text in "[0-9]*[a-zA-Z]+[0-9]*") {
            prop_assert!(!is_valid_number(&text));
        }
    }
}
