// ============================================================================
// Uppercase Currency Converter
// Place-value rendering of an amount into 大写 glyphs
// ============================================================================

use crate::domain::config::WholeSuffix;
use crate::domain::glyphs::{
    digit_glyph, group_glyph, place_unit, FRACTION_UNITS, GROUP_SIZE, YUAN, ZERO,
};
use crate::numeric::{Amount, Cents};

/// Convert a number into a Chinese uppercase currency string.
///
/// Total over its input: never panics and never returns an empty string. The
/// sign is dropped and the magnitude rendered. Integer parts of 10^12 and
/// above fall outside the 万/亿 tables and come out with missing units; use
/// [`Amount::from_f64`] first when that matters.
///
/// # Example
/// ```
/// use rmb_uppercase::engine::number_to_chinese;
///
/// assert_eq!(number_to_chinese(123.45), "壹佰贰拾叁元肆角伍分");
/// assert_eq!(number_to_chinese(5.06), "伍元零陆分");
/// ```
pub fn number_to_chinese(value: f64) -> String {
    render_amount(&Amount::from_f64_unchecked(value), WholeSuffix::default())
}

/// Render an already-split amount.
pub fn render_amount(amount: &Amount, suffix: WholeSuffix) -> String {
    if amount.is_zero() {
        return format!("{}{}{}", ZERO, YUAN, suffix.glyph());
    }

    // Each glyph is 3 bytes in UTF-8; digit + unit per place plus the tail
    let mut out = String::with_capacity(amount.integer_digits().len() * 6 + 15);
    render_integer(amount.integer_digits(), &mut out);
    out.push_str(YUAN);
    render_fraction(amount.cents(), !amount.integer_is_zero(), suffix, &mut out);
    out
}

/// Integer digits, most significant first.
///
/// A run of zeros becomes one 零, written only when a non-zero digit follows.
/// 万/亿 close a group of four places that held at least one non-zero digit.
fn render_integer(digits: &[u8], out: &mut String) {
    let len = digits.len();
    let mut zero_pending = false;
    let mut group_has_digit = false;

    for (i, &digit) in digits.iter().enumerate() {
        let place = len - i - 1;

        if digit == 0 {
            zero_pending = true;
        } else {
            if zero_pending {
                out.push_str(ZERO);
                zero_pending = false;
            }
            out.push_str(digit_glyph(digit));
            out.push_str(place_unit(place));
            group_has_digit = true;
        }

        if place > 0 && place % GROUP_SIZE == 0 {
            if group_has_digit {
                if let Some(glyph) = group_glyph(place) {
                    out.push_str(glyph);
                }
            }
            group_has_digit = false;
        }
    }
}

fn render_fraction(cents: Cents, integer_nonzero: bool, suffix: WholeSuffix, out: &mut String) {
    if cents.is_zero() {
        out.push_str(suffix.glyph());
        return;
    }

    if cents.jiao() > 0 {
        out.push_str(digit_glyph(cents.jiao()));
        out.push_str(FRACTION_UNITS[0]);
    } else if integer_nonzero {
        out.push_str(ZERO);
    }

    if cents.fen() > 0 {
        out.push_str(digit_glyph(cents.fen()));
        out.push_str(FRACTION_UNITS[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero() {
        assert_eq!(number_to_chinese(0.0), "零元整");
        assert_eq!(number_to_chinese(-0.0), "零元整");
        // Rounds to nothing
        assert_eq!(number_to_chinese(0.001), "零元整");
    }

    #[test]
    fn test_whole_amounts() {
        assert_eq!(number_to_chinese(1.0), "壹元整");
        assert_eq!(number_to_chinese(10.0), "壹拾元整");
        assert_eq!(number_to_chinese(100.0), "壹佰元整");
        assert_eq!(number_to_chinese(1234.0), "壹仟贰佰叁拾肆元整");
    }

    #[test]
    fn test_internal_zeros_collapse() {
        // Formal 仟, not the everyday 千
        assert_eq!(number_to_chinese(1001.0), "壹仟零壹元整");
        assert_eq!(number_to_chinese(101.0), "壹佰零壹元整");
        assert_eq!(number_to_chinese(1010.0), "壹仟零壹拾元整");
        assert_eq!(number_to_chinese(10005.0), "壹万零伍元整");
    }

    #[test]
    fn test_grouping_glyphs() {
        assert_eq!(number_to_chinese(10000.0), "壹万元整");
        assert_eq!(number_to_chinese(15000.0), "壹万伍仟元整");
        assert_eq!(number_to_chinese(100000.0), "壹拾万元整");
        assert_eq!(number_to_chinese(100001.0), "壹拾万零壹元整");
        assert_eq!(number_to_chinese(100_000_000.0), "壹亿元整");
        assert_eq!(number_to_chinese(100_010_000.0), "壹亿零壹万元整");
        assert_eq!(number_to_chinese(101_000_000.0), "壹亿零壹佰万元整");
        assert_eq!(
            number_to_chinese(123_456_789.0),
            "壹亿贰仟叁佰肆拾伍万陆仟柒佰捌拾玖元整"
        );
        assert_eq!(
            number_to_chinese(999_999_999_999.0),
            "玖仟玖佰玖拾玖亿玖仟玖佰玖拾玖万玖仟玖佰玖拾玖元整"
        );
    }

    #[test]
    fn test_fractions() {
        assert_eq!(number_to_chinese(123.45), "壹佰贰拾叁元肆角伍分");
        assert_eq!(number_to_chinese(5.06), "伍元零陆分");
        assert_eq!(number_to_chinese(10.5), "壹拾元伍角");
        assert_eq!(number_to_chinese(3.14), "叁元壹角肆分");
    }

    #[test]
    fn test_fraction_without_integer() {
        // No placeholder zero when there is no integer part
        assert_eq!(number_to_chinese(0.5), "元伍角");
        assert_eq!(number_to_chinese(0.05), "元伍分");
    }

    #[test]
    fn test_rounding_carries_into_integer() {
        assert_eq!(number_to_chinese(1.999), "贰元整");
        assert_eq!(number_to_chinese(9999.996), "壹万元整");
    }

    #[test]
    fn test_negative_renders_magnitude_without_sign() {
        // No sign glyph is produced; only the magnitude is written
        assert_eq!(number_to_chinese(-45.6), "肆拾伍元陆角");
        assert_eq!(number_to_chinese(-0.5), "元伍角");
    }

    #[test]
    fn test_beyond_grouping_tables_does_not_panic() {
        // 10^12 needs a third grouping level the tables do not have
        let out = number_to_chinese(1e12);
        assert!(out.ends_with("元整"));
        assert!(Amount::from_f64(1e12).is_err());

        assert!(!number_to_chinese(f64::MAX).is_empty());
        assert_eq!(number_to_chinese(f64::NAN), "零元整");
    }

    #[test]
    fn test_whole_suffix() {
        let amount = Amount::from_parts(false, 100, 0).unwrap();
        assert_eq!(render_amount(&amount, WholeSuffix::ZhengAlt), "壹佰元正");
        assert_eq!(
            render_amount(&Amount::zero(), WholeSuffix::ZhengAlt),
            "零元正"
        );
    }

    proptest! {
        #[test]
        fn prop_output_is_deterministic(value in -1e15f64..1e15f64) {
            let first = number_to_chinese(value);
            let second = number_to_chinese(value);
            prop_assert!(!first.is_empty());
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_in_range_output_is_well_formed(whole in 0u64..1_000_000_000_000, cents in 0u8..100) {
            let amount = Amount::from_parts(false, whole, cents).unwrap();
            let out = render_amount(&amount, WholeSuffix::Zheng);
            prop_assert!(out.contains(YUAN));
            prop_assert!(out.ends_with('整') || out.ends_with('角') || out.ends_with('分'));
            prop_assert!(!out.contains("零零"));
            prop_assert!(!out.contains("万万") && !out.contains("亿亿"));
        }
    }
}
