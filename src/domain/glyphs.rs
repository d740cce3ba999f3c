// ============================================================================
// Glyph Tables
// Fixed uppercase numeral glyphs used for currency amounts
// ============================================================================

/// Uppercase digit glyphs, indexed by digit value.
pub const DIGIT_GLYPHS: [&str; 10] = ["零", "壹", "贰", "叁", "肆", "伍", "陆", "柒", "捌", "玖"];

/// Place glyphs, indexed by distance from the rightmost integer digit.
///
/// Positions 4 and 8 are the grouping glyphs 万 and 亿; the in-group units
/// 拾/佰/仟 repeat inside each group of four.
pub const PLACE_GLYPHS: [&str; 12] = [
    "", "拾", "佰", "仟", "万", "拾", "佰", "仟", "亿", "拾", "佰", "仟",
];

/// Fractional unit glyphs: tenths (角) then hundredths (分).
pub const FRACTION_UNITS: [&str; 2] = ["角", "分"];

/// Zero placeholder glyph
pub const ZERO: &str = "零";

/// Base currency unit (元)
pub const YUAN: &str = "元";

/// Number of places in one grouping level
pub const GROUP_SIZE: usize = 4;

/// Unit glyph written after a non-zero digit at `place`.
///
/// Empty at group boundaries (the grouping glyph is written once per group) and
/// past the end of the table.
#[inline]
pub fn place_unit(place: usize) -> &'static str {
    if place % GROUP_SIZE == 0 {
        ""
    } else {
        PLACE_GLYPHS.get(place).copied().unwrap_or("")
    }
}

/// Grouping glyph (万/亿) closing the group that ends at `place`, if any.
#[inline]
pub fn group_glyph(place: usize) -> Option<&'static str> {
    if place == 0 || place % GROUP_SIZE != 0 {
        return None;
    }
    PLACE_GLYPHS.get(place).copied()
}

#[inline]
pub fn digit_glyph(digit: u8) -> &'static str {
    DIGIT_GLYPHS.get(digit as usize).copied().unwrap_or(ZERO)
}
