//! Fixed-precision and Indian-locale number formatting for display.

/// Number of fractional digits needed to write any finite `f64` exactly.
const EXACT_DIGITS: usize = 1074;

/// Formats `value` with exactly `digits` fractional digits.
///
/// Rounds to the nearest representable decimal; exact midpoints round
/// away from zero, so `2.5` becomes `"3"` and `0.25` at one digit
/// becomes `"0.3"`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let value = if is_midpoint(value, digits) {
        // Next float away from zero sits strictly past the midpoint.
        f64::from_bits(value.to_bits() + 1)
    } else {
        value
    };
    format!("{value:.digits$}")
}

/// Returns `true` if `value` lies exactly halfway between two decimals
/// with `digits` fractional digits.
fn is_midpoint(value: f64, digits: usize) -> bool {
    let exact = format!("{:.EXACT_DIGITS$}", value.abs());
    let fraction = exact
        .split_once('.')
        .map(|(_, frac)| frac.trim_end_matches('0'))
        .unwrap_or("");
    fraction.len() == digits + 1 && fraction.ends_with('5')
}

/// Inserts Indian-style digit separators: the last three integer digits
/// form one group, the rest are grouped in pairs.
///
/// `"7850000"` becomes `"78,50,000"`. A sign and fractional part are
/// carried through unchanged. Input that is not a plain decimal string
/// is returned as-is.
pub fn group_indian(number: &str) -> String {
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };
    if integer.is_empty() || !integer.bytes().all(|b| b.is_ascii_digit()) {
        return number.to_string();
    }

    let split = integer.len().saturating_sub(3);
    let (head, tail) = integer.split_at(split);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = front;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.reverse();
    groups.push(tail);

    let mut out = format!("{sign}{}", groups.join(","));
    if let Some(frac) = fraction {
        out.push('.');
        out.push_str(frac);
    }
    out
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    // --- to_fixed ---

    #[test]
    fn rounds_to_requested_precision() {
        assert_eq!(to_fixed(87.456, 1), "87.5");
        assert_eq!(to_fixed(4523891.2, 0), "4523891");
        assert_eq!(to_fixed(0.8734, 3), "0.873");
        assert_eq!(to_fixed(152345.7, 0), "152346");
        assert_eq!(to_fixed(91.23, 1), "91.2");
    }

    #[test]
    fn pads_with_zeros() {
        assert_eq!(to_fixed(87.5, 3), "87.500");
        assert_eq!(to_fixed(7200000.0, 0), "7200000");
    }

    #[test]
    fn exact_midpoints_round_away_from_zero() {
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(0.5, 0), "1");
        assert_eq!(to_fixed(0.25, 1), "0.3");
        assert_eq!(to_fixed(-2.5, 0), "-3");
    }

    #[test]
    fn inexact_near_midpoint_follows_binary_value() {
        // 1.005 is stored as 1.00499999999999989...
        assert_eq!(to_fixed(1.005, 2), "1.00");
    }

    #[test]
    fn non_finite_values_pass_through() {
        assert_eq!(to_fixed(f64::NAN, 1), "NaN");
        assert_eq!(to_fixed(f64::INFINITY, 0), "inf");
    }

    #[quickcheck]
    fn to_fixed_is_within_half_unit(value: i32, digits: u8) -> bool {
        let value = f64::from(value) / 1000.0;
        let digits = usize::from(digits % 4);
        let rendered: f64 = to_fixed(value, digits).parse().unwrap();
        let half_unit = 0.5 / 10f64.powi(digits as i32);
        (rendered - value).abs() <= half_unit + 1e-9
    }

    #[quickcheck]
    fn to_fixed_has_exact_fraction_length(value: i32, digits: u8) -> bool {
        let digits = usize::from(digits % 4);
        let rendered = to_fixed(f64::from(value) / 7.0, digits);
        match rendered.split_once('.') {
            Some((_, frac)) => frac.len() == digits,
            None => digits == 0,
        }
    }

    // --- group_indian ---

    #[test]
    fn groups_lakhs_and_crores() {
        assert_eq!(group_indian("7850000"), "78,50,000");
        assert_eq!(group_indian("123456789"), "12,34,56,789");
        assert_eq!(group_indian("100000"), "1,00,000");
    }

    #[test]
    fn short_numbers_unchanged() {
        assert_eq!(group_indian("0"), "0");
        assert_eq!(group_indian("999"), "999");
        assert_eq!(group_indian("1000"), "1,000");
    }

    #[test]
    fn sign_and_fraction_preserved() {
        assert_eq!(group_indian("-1234567.50"), "-12,34,567.50");
    }

    #[test]
    fn non_numeric_returned_as_is() {
        assert_eq!(group_indian("NaN"), "NaN");
        assert_eq!(group_indian(""), "");
    }

    #[quickcheck]
    fn grouping_only_inserts_commas(n: u64) -> bool {
        let digits = n.to_string();
        group_indian(&digits).replace(',', "") == digits
    }
}
