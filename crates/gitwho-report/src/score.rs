//! Composite contribution scores derived from [`LinesTouched`] counters.
//!
//! All scores are signed: the top-coder score subtracts churn and can go
//! below zero. Sums are taken in `i128` and clamped into the `i64` range.

use gitwho_core::LinesTouched;

/// `new + 3*refactor_other + 2*refactor_own - 2*churn_own - 4*churn_received`.
///
/// New code and refactoring other people's code weigh the most; churn on
/// one's own lines, and above all churn others had to do on them, costs.
///
/// # Examples
///
/// ```
/// use gitwho_core::LinesTouched;
/// use gitwho_report::score::top_coder_score;
///
/// let lines = LinesTouched {
///     new: 10,
///     refactor_other: 2,
///     refactor_own: 1,
///     churn_own: 3,
///     churn_received: 1,
///     ..LinesTouched::default()
/// };
/// assert_eq!(top_coder_score(&lines), 8);
/// ```
pub fn top_coder_score(lines: &LinesTouched) -> i64 {
    clamp(
        wide(lines.new) + 3 * wide(lines.refactor_other) + 2 * wide(lines.refactor_own)
            - 2 * wide(lines.churn_own)
            - 4 * wide(lines.churn_received),
    )
}

/// Lines written from scratch.
pub fn new_liner_score(lines: &LinesTouched) -> i64 {
    clamp(wide(lines.new))
}

/// Refactored lines, own and others'.
pub fn refactorer_score(lines: &LinesTouched) -> i64 {
    clamp(wide(lines.refactor_own) + wide(lines.refactor_other))
}

/// Churn done on other authors' lines ("help given").
pub fn helper_score(lines: &LinesTouched) -> i64 {
    clamp(wide(lines.churn_other))
}

/// Churn accumulated on the author's own lines, self-inflicted or received.
pub fn churner_score(lines: &LinesTouched) -> i64 {
    clamp(wide(lines.churn_own) + wide(lines.churn_received))
}

fn wide(v: u64) -> i128 {
    i128::from(v)
}

fn clamp(v: i128) -> i64 {
    i64::try_from(v).unwrap_or(if v < 0 { i64::MIN } else { i64::MAX })
}
