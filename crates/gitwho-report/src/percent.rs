//! Division helpers that stay total on a zero denominator.
//!
//! Changes reports omit a percentage whose base is zero, so
//! [`percent_suffix`] yields an empty string there. Ownership and duplicate
//! reports always print a number, so [`ratio_percent`] and [`average`] fall
//! back to `0.0`.

/// Format `value` as a rounded percentage of `total`, as `" (N%)"`.
///
/// Rounds half away from zero. Returns an empty string when `total` is zero.
///
/// # Examples
///
/// ```
/// use gitwho_report::percent::percent_suffix;
///
/// assert_eq!(percent_suffix(1.0, 3.0), " (33%)");
/// assert_eq!(percent_suffix(2.0, 3.0), " (67%)");
/// assert_eq!(percent_suffix(5.0, 0.0), "");
/// ```
pub fn percent_suffix(value: f64, total: f64) -> String {
    if total == 0.0 {
        return String::new();
    }
    format!(" ({}%)", rounded_percent(value, total))
}

/// Rounded integer percentage of `value` over a non-zero `total`.
pub(crate) fn rounded_percent(value: f64, total: f64) -> i64 {
    (100.0 * value / total).round() as i64
}

/// `100 * value / total`, or `0.0` when `total` is zero.
///
/// # Examples
///
/// ```
/// use gitwho_report::percent::ratio_percent;
///
/// assert_eq!(ratio_percent(1, 4), 25.0);
/// assert_eq!(ratio_percent(1, 0), 0.0);
/// ```
pub fn ratio_percent(value: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    100.0 * value as f64 / total as f64
}

/// `sum / count`, or `0.0` when `count` is zero.
///
/// # Examples
///
/// ```
/// use gitwho_report::percent::average;
///
/// assert_eq!(average(30.0, 4), 7.5);
/// assert_eq!(average(30.0, 0), 0.0);
/// ```
pub fn average(sum: f64, count: u64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    sum / count as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_denominator_is_empty() {
        assert_eq!(percent_suffix(5.0, 0.0), "");
        assert_eq!(percent_suffix(0.0, 0.0), "");
    }

    #[test]
    fn half_rounds_away_from_zero() {
        assert_eq!(percent_suffix(1.0, 8.0), " (13%)");
        assert_eq!(percent_suffix(-1.0, 8.0), " (-13%)");
    }

    #[test]
    fn negative_share_of_positive_total() {
        assert_eq!(percent_suffix(-6.0, 12.0), " (-50%)");
    }

    #[test]
    fn whole_is_one_hundred() {
        assert_eq!(percent_suffix(7.0, 7.0), " (100%)");
    }

    #[test]
    fn ratio_and_average_are_total() {
        assert_eq!(ratio_percent(0, 0), 0.0);
        assert_eq!(ratio_percent(3, 3), 100.0);
        assert_eq!(average(0.0, 0), 0.0);
        assert_eq!(average(9.0, 3), 3.0);
    }
}
