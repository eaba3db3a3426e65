//! Numeric coercion for user-supplied values.
//!
//! Bad input never becomes an error: non-numeric text and non-finite values
//! coerce to 0, percentages clamp to [0, 100], and negative amounts floor at 0.
//! Whole-unit values round to the nearest integer.

/// Round `value` to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Parse free text as a number, coercing anything unparseable to 0.
pub fn coerce_number(text: &str) -> f64 {
    text.trim()
        .trim_end_matches('%')
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Clamp a percentage to [0, 100]; NaN becomes 0.
pub fn clamp_percentage(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Finite, non-negative amount (grams, grams per kg, body weight).
pub fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Whole units (kcal, grams) from an arbitrary number, rounded and floored at 0.
pub fn whole_number(value: f64) -> u32 {
    let value = non_negative(value).round();
    if value >= u32::MAX as f64 {
        u32::MAX
    } else {
        value as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number("42"), 42.0);
        assert_eq!(coerce_number(" 12.5% "), 12.5);
        assert_eq!(coerce_number("abc"), 0.0);
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("NaN"), 0.0);
        assert_eq!(coerce_number("inf"), 0.0);
    }

    #[test]
    fn test_clamp_percentage() {
        assert_eq!(clamp_percentage(-5.0), 0.0);
        assert_eq!(clamp_percentage(150.0), 100.0);
        assert_eq!(clamp_percentage(f64::NAN), 0.0);
        assert_eq!(clamp_percentage(37.5), 37.5);
    }

    #[test]
    fn test_whole_number() {
        assert_eq!(whole_number(-100.0), 0);
        assert_eq!(whole_number(499.6), 500);
        assert_eq!(whole_number(f64::INFINITY), 0);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(33.333_33, 1), 33.3);
        assert_eq!(round_to(2.000_49, 3), 2.0);
    }
}
