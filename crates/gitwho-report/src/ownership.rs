//! Current-state ownership report (who owns the lines at a revision).
//!
//! Average ages are rounded to whole days, ties away from zero (2.5 prints
//! as 3), for the global line and for every author alike.

use std::fmt::Write;

use gitwho_core::{AuthorOwnership, OwnershipResult, Verbosity};

use crate::percent::{average, ratio_percent};
use crate::NO_LINES_MESSAGE;

/// Render the ownership report.
///
/// Lists totals, then one line per author in engine order with their owned
/// lines and share of all lines. [`Verbosity::Full`] adds average line age,
/// the duplicated-lines share, author mails, and per-author duplicate
/// counters. Returns `"No lines found"` when the snapshot has no lines.
///
/// # Examples
///
/// ```
/// use gitwho_core::{AuthorOwnership, OwnershipResult, Verbosity};
/// use gitwho_report::ownership::format_ownership;
///
/// let result = OwnershipResult {
///     total_files: 1,
///     total_lines: 8,
///     authors_lines: vec![AuthorOwnership {
///         author_name: "alice".into(),
///         author_mail: "alice@example.com".into(),
///         owned_lines_total: 2,
///         owned_lines_age_days_sum: 10.0,
///         owned_lines_duplicate: 0,
///         owned_lines_duplicate_original: 0,
///         owned_lines_duplicate_original_others: 0,
///     }],
///     ..OwnershipResult::default()
/// };
/// let text = format_ownership(&result, Verbosity::Short);
/// assert!(text.ends_with("  alice: 2 (25.0%)\n"));
/// ```
pub fn format_ownership(result: &OwnershipResult, verbosity: Verbosity) -> String {
    if result.total_lines == 0 {
        return NO_LINES_MESSAGE.to_string();
    }
    tracing::debug!(
        authors = result.authors_lines.len(),
        %verbosity,
        "rendering ownership report"
    );

    let mut out = String::new();
    let _ = writeln!(out, "\nTotal authors: {}", result.authors_lines.len());
    let _ = writeln!(out, "Total files: {}", result.total_files);
    if verbosity.is_full() {
        let _ = writeln!(
            out,
            "Avg line age: {} days",
            average_days(result.lines_age_days_sum, result.total_lines)
        );
        let _ = writeln!(out, "{}", duplicated_lines_line(result));
    }
    let _ = writeln!(out, "Total lines: {}", result.total_lines);
    for author in &result.authors_lines {
        out.push_str(&format_author(author, result.total_lines, verbosity));
    }
    out
}

/// `Duplicated lines: D (P%)`, with `P` truncated to an integer.
pub(crate) fn duplicated_lines_line(result: &OwnershipResult) -> String {
    format!(
        "Duplicated lines: {} ({}%)",
        result.total_lines_duplicated,
        ratio_percent(result.total_lines_duplicated, result.total_lines) as i64
    )
}

fn average_days(age_days_sum: f64, lines: u64) -> i64 {
    average(age_days_sum, lines).round() as i64
}

fn format_author(author: &AuthorOwnership, total_lines: u64, verbosity: Verbosity) -> String {
    let mut line = format!("  {}", author.author_name);
    if verbosity.is_full() {
        let _ = write!(line, " {}", author.author_mail);
    }
    let _ = write!(
        line,
        ": {} ({:.1}%)",
        author.owned_lines_total,
        ratio_percent(author.owned_lines_total, total_lines)
    );
    if verbosity.is_full() {
        let _ = write!(
            line,
            " avg-days:{} dup:{} orig:{} dup-others:{}",
            average_days(author.owned_lines_age_days_sum, author.owned_lines_total),
            author.owned_lines_duplicate,
            author.owned_lines_duplicate_original,
            author.owned_lines_duplicate_original_others
        );
    }
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner(name: &str, owned: u64, age_sum: f64) -> AuthorOwnership {
        AuthorOwnership {
            author_name: name.into(),
            author_mail: format!("{name}@e.com"),
            owned_lines_total: owned,
            owned_lines_age_days_sum: age_sum,
            owned_lines_duplicate: 2,
            owned_lines_duplicate_original: 1,
            owned_lines_duplicate_original_others: 3,
        }
    }

    fn sample() -> OwnershipResult {
        OwnershipResult {
            total_files: 4,
            total_lines: 30,
            total_lines_duplicated: 7,
            lines_age_days_sum: 300.0,
            authors_lines: vec![owner("bob", 10, 50.0), owner("alice", 20, 250.0)],
            duplicate_line_groups: vec![],
        }
    }

    #[test]
    fn short_report_layout() {
        let expected = "\nTotal authors: 2\nTotal files: 4\nTotal lines: 30\n  bob: 10 (33.3%)\n  alice: 20 (66.7%)\n";
        assert_eq!(format_ownership(&sample(), Verbosity::Short), expected);
    }

    #[test]
    fn full_report_layout() {
        let expected = "\nTotal authors: 2\nTotal files: 4\nAvg line age: 10 days\nDuplicated lines: 7 (23%)\nTotal lines: 30\n  \
                        bob bob@e.com: 10 (33.3%) avg-days:5 dup:2 orig:1 dup-others:3\n  \
                        alice alice@e.com: 20 (66.7%) avg-days:13 dup:2 orig:1 dup-others:3\n";
        assert_eq!(format_ownership(&sample(), Verbosity::Full), expected);
    }

    #[test]
    fn owner_without_lines_has_zero_age() {
        let mut result = sample();
        result.authors_lines = vec![owner("ghost", 0, 0.0)];
        let text = format_ownership(&result, Verbosity::Full);
        assert!(text.contains("  ghost ghost@e.com: 0 (0.0%) avg-days:0 "));
    }

    #[test]
    fn half_day_ages_round_the_same_way() {
        let result = OwnershipResult {
            total_files: 1,
            total_lines: 4,
            lines_age_days_sum: 10.0,
            authors_lines: vec![owner("carol", 4, 10.0)],
            ..OwnershipResult::default()
        };
        let text = format_ownership(&result, Verbosity::Full);
        assert!(text.contains("Avg line age: 3 days\n"));
        assert!(text.contains(" avg-days:3 "));
    }

    #[test]
    fn empty_snapshot_short_circuits() {
        let result = OwnershipResult {
            total_files: 3,
            ..OwnershipResult::default()
        };
        assert_eq!(format_ownership(&result, Verbosity::Full), "No lines found");
    }
}
