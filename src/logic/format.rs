//! Number and placeholder formatting for display.

/// Placeholder rendered for any missing or invalid value.
pub const PLACEHOLDER: &str = "N/A";

/// What: Insert en-US thousands separators into a run of ASCII digits.
///
/// Inputs:
/// - `digits`: Decimal digits without sign
///
/// Output:
/// - Digits grouped in threes from the right, separated by `,`.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// What: Format a number with thousands grouping and no fraction digits.
///
/// Inputs:
/// - `value`: Number to format; may be absent
///
/// Output:
/// - `"N/A"` when `value` is `None`, NaN or infinite; otherwise the whole part with `,` grouping.
///
/// Details:
/// - Fractions are truncated toward zero (`-1234.9` renders as `"-1,234"`).
#[must_use]
pub fn format_number(value: Option<f64>) -> String {
    let Some(v) = value.filter(|v| v.is_finite()) else {
        return PLACEHOLDER.to_string();
    };
    // `{:.0}` prints every integer digit of the float, with no exponent.
    let whole = format!("{:.0}", v.trunc());
    let (negative, digits) = whole
        .strip_prefix('-')
        .map_or((false, whole.as_str()), |d| (true, d));
    let grouped = group_thousands(digits);
    if negative && digits.bytes().any(|b| b != b'0') {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// What: Format an integral count (e.g., population) with thousands grouping.
///
/// Inputs:
/// - `value`: Count; may be absent
///
/// Output:
/// - `"N/A"` when absent, otherwise the grouped digits.
#[must_use]
pub fn format_count(value: Option<u64>) -> String {
    value.map_or_else(
        || PLACEHOLDER.to_string(),
        |v| group_thousands(&v.to_string()),
    )
}

/// What: Render an optional text field with the shared placeholder.
///
/// Inputs:
/// - `value`: Field value; empty or whitespace-only strings count as absent
///
/// Output:
/// - The value, or `"N/A"`.
#[must_use]
pub fn or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Missing and invalid inputs collapse to the placeholder.
    ///
    /// - Input: None, NaN, +/- infinity
    /// - Output: "N/A" each time
    fn format_number_placeholder_paths() {
        assert_eq!(format_number(None), "N/A");
        assert_eq!(format_number(Some(f64::NAN)), "N/A");
        assert_eq!(format_number(Some(f64::INFINITY)), "N/A");
        assert_eq!(format_number(Some(f64::NEG_INFINITY)), "N/A");
    }

    #[test]
    /// What: Grouping across digit-count boundaries.
    ///
    /// - Input: 0, 999, 1000, 1234567, 1e12
    /// - Output: en-US grouped strings
    fn format_number_groups_thousands() {
        assert_eq!(format_number(Some(0.0)), "0");
        assert_eq!(format_number(Some(999.0)), "999");
        assert_eq!(format_number(Some(1000.0)), "1,000");
        assert_eq!(format_number(Some(1_234_567.0)), "1,234,567");
        assert_eq!(format_number(Some(1e12)), "1,000,000,000,000");
    }

    #[test]
    /// What: Fractions truncate toward zero and negative values keep their sign.
    ///
    /// - Input: 1234.99, -1234.9, -0.5
    /// - Output: "1,234", "-1,234", "0"
    fn format_number_truncates_and_signs() {
        assert_eq!(format_number(Some(1234.99)), "1,234");
        assert_eq!(format_number(Some(-1234.9)), "-1,234");
        assert_eq!(format_number(Some(-0.5)), "0");
    }

    #[test]
    /// What: Values beyond the 128-bit integer range still render every digit.
    ///
    /// - Input: 1e40, -1e40
    /// - Output: 41 grouped digits, sign kept on the negative value
    fn format_number_huge_values_do_not_saturate() {
        let pos = format_number(Some(1e40));
        assert!(pos.starts_with("10,000,000,000,000,000,303,786"));
        assert_eq!(pos.chars().filter(char::is_ascii_digit).count(), 41);
        assert_eq!(pos.matches(',').count(), 13);
        let neg = format_number(Some(-1e40));
        assert_eq!(neg, format!("-{pos}"));
    }

    #[test]
    /// What: Integral counts format without a float round trip.
    ///
    /// - Input: None, 83 million, u64::MAX
    /// - Output: Placeholder or grouped digits
    fn format_count_paths() {
        assert_eq!(format_count(None), "N/A");
        assert_eq!(format_count(Some(83_240_525)), "83,240,525");
        assert_eq!(format_count(Some(u64::MAX)), "18,446,744,073,709,551,615");
    }

    #[test]
    /// What: Text placeholder treats blank strings as missing.
    ///
    /// - Input: None, "", "  ", "Paris"
    /// - Output: "N/A" for the first three, the value otherwise
    fn or_placeholder_blank_is_missing() {
        assert_eq!(or_placeholder(None), "N/A");
        assert_eq!(or_placeholder(Some("")), "N/A");
        assert_eq!(or_placeholder(Some("  ")), "N/A");
        assert_eq!(or_placeholder(Some("Paris")), "Paris");
    }
}
