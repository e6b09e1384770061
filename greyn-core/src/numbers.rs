//! Numeric helpers centralizing safe casts and the percentage math used by
//! progress bars and summary cards.

use num_traits::cast::cast;

/// Round a f64 and clamp it to the u32 range, returning 0 for NaN values.
#[must_use]
pub fn round_f64_to_u32(value: f64) -> u32 {
    if value.is_nan() {
        return 0;
    }
    let max = cast::<u32, f64>(u32::MAX).unwrap_or(f64::MAX);
    let clamped = value.clamp(0.0, max).round();
    cast::<f64, u32>(clamped).unwrap_or(0)
}

/// Convert u64 to f64 while allowing precision loss in a single location.
#[must_use]
pub fn u64_to_f64(value: u64) -> f64 {
    cast::<u64, f64>(value).unwrap_or(0.0)
}

/// Convert a collection length to f64.
#[must_use]
pub fn usize_to_f64(value: usize) -> f64 {
    cast::<usize, f64>(value).unwrap_or(0.0)
}

/// `part / whole * 100`, or 0 when `whole` is not positive.
#[must_use]
pub fn percent(part: f64, whole: f64) -> f64 {
    if whole <= 0.0 || !whole.is_finite() || !part.is_finite() {
        return 0.0;
    }
    part / whole * 100.0
}

/// Percentage suitable for a progress bar width: clamped to `[0, 100]`.
#[must_use]
pub fn progress_pct(part: f64, whole: f64) -> f64 {
    percent(part, whole).clamp(0.0, 100.0)
}

/// Percentage rounded to the nearest whole number for labels.
#[must_use]
pub fn rounded_pct(part: f64, whole: f64) -> u32 {
    round_f64_to_u32(percent(part, whole))
}

/// Mean of the values, or 0 for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / usize_to_f64(values.len())
}

/// Round to one decimal place.
#[must_use]
pub fn round_1dp(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Format a dollar amount in millions with two decimals: `$2.55M`.
#[must_use]
pub fn money_millions(amount: f64) -> String {
    format!("${:.2}M", amount / 1_000_000.0)
}

/// Format a dollar amount in thousands with no decimals: `$127K`.
#[must_use]
pub fn money_thousands(amount: f64) -> String {
    format!("${:.0}K", amount / 1_000.0)
}

/// Insert comma thousands separators into an integer: `1247` -> `1,247`.
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_guards_zero_whole() {
        assert!((percent(5.0, 0.0)).abs() < f64::EPSILON);
        assert!((percent(37_500.0, 50_000.0) - 75.0).abs() < f64::EPSILON);
        assert!((progress_pct(120.0, 100.0) - 100.0).abs() < f64::EPSILON);
        assert!((progress_pct(-5.0, 100.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn rounded_pct_matches_labels() {
        assert_eq!(rounded_pct(68_000.0, 75_000.0), 91);
        assert_eq!(rounded_pct(95_000.0, 150_000.0), 63);
        assert_eq!(round_f64_to_u32(f64::NAN), 0);
        assert_eq!(round_f64_to_u32(-3.0), 0);
    }

    #[test]
    fn compact_money_formats() {
        assert_eq!(money_millions(2_547_890.0), "$2.55M");
        assert_eq!(money_thousands(127_394.5), "$127K");
        assert_eq!(money_thousands(500_000.0), "$500K");
    }

    #[test]
    fn grouping_inserts_commas() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_247), "1,247");
        assert_eq!(group_thousands(125_000), "125,000");
        assert_eq!(group_thousands(2_547_890), "2,547,890");
    }

    #[test]
    fn mean_and_rounding() {
        assert!((mean(&[]) - 0.0).abs() < f64::EPSILON);
        assert!((round_1dp(mean(&[12.0, 18.0, 8.0])) - 12.7).abs() < 1e-9);
    }
}
