//! Full-text changes report.
//!
//! Every percentage is relative to its immediate parent category: new and
//! changed lines to lines touched, refactor and churn to changed lines, own
//! and other's to their refactor or churn parent. Percentages whose base is
//! zero are left out.

use std::fmt::Write;

use gitwho_core::{ChangesResult, FileTouched, LinesTouched, ReportConfig};

use crate::percent::{average, percent_suffix};
use crate::NO_CHANGES_MESSAGE;

/// Render the full changes report: global header and breakdown, then one
/// block per active author with their breakdown and top files.
///
/// The header counts every author in the result; the per-author blocks skip
/// authors with neither new nor changed lines. Returns
/// `"No changes found"` when the result has no commits.
///
/// # Examples
///
/// ```
/// use gitwho_core::{ChangesResult, LinesTouched, ReportConfig};
/// use gitwho_report::changes::format_full_text;
///
/// let result = ChangesResult {
///     total_commits: 1,
///     total_files: 1,
///     total_lines_touched: LinesTouched { new: 3, ..LinesTouched::default() },
///     authors_lines: vec![],
/// };
/// let text = format_full_text(&result, &ReportConfig::default());
/// assert!(text.contains("- Total lines touched: 3\n"));
/// ```
pub fn format_full_text(result: &ChangesResult, config: &ReportConfig) -> String {
    if result.total_commits == 0 {
        return NO_CHANGES_MESSAGE.to_string();
    }

    let active: Vec<_> = result
        .authors_lines
        .iter()
        .filter(|a| a.lines_touched.touched() > 0)
        .collect();
    tracing::debug!(
        authors = result.authors_lines.len(),
        active = active.len(),
        "rendering full changes report"
    );

    let totals = &result.total_lines_touched;
    let mut out = String::new();
    let _ = writeln!(out, "Total authors active: {}", result.authors_lines.len());
    let _ = writeln!(out, "Total files touched: {}", result.total_files);
    if totals.changes > 0 {
        let _ = writeln!(
            out,
            "Average line age when changed: {} days",
            average(totals.age_days_sum, totals.changes).round() as i64
        );
    }
    out.push_str(&format_lines_touched(totals, None));

    for author in active {
        let _ = writeln!(out, "\nAuthor: {} {}", author.author_name, author.author_mail);
        out.push_str(&format_lines_touched(&author.lines_touched, Some(totals)));
        out.push_str(&format_top_files(&author.files_touched, config.top_files));
    }
    out
}

/// Render the nested breakdown of `lines`.
///
/// With `totals`, the first line also carries the share of `totals`' touched
/// lines; received counters are raw counts without a percentage.
///
/// # Examples
///
/// ```
/// use gitwho_core::LinesTouched;
/// use gitwho_report::changes::format_lines_touched;
///
/// let lines = LinesTouched {
///     new: 2,
///     changes: 2,
///     refactor_own: 1,
///     churn_other: 1,
///     ..LinesTouched::default()
/// };
/// let text = format_lines_touched(&lines, None);
/// assert!(text.contains("  - New lines: 2 (50%)\n"));
/// assert!(text.contains("    - Refactor: 1 (50%)\n"));
/// ```
pub fn format_lines_touched(lines: &LinesTouched, totals: Option<&LinesTouched>) -> String {
    let touched = lines.touched() as f64;
    let changes = lines.changes as f64;
    let refactor = lines.refactor() as f64;
    let churn = lines.churn() as f64;
    let totals_touched = totals.map_or(0.0, |t| t.touched() as f64);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "- Total lines touched: {}{}",
        lines.touched(),
        percent_suffix(touched, totals_touched)
    );
    let _ = writeln!(
        out,
        "  - New lines: {}{}",
        lines.new,
        percent_suffix(lines.new as f64, touched)
    );
    let _ = writeln!(
        out,
        "  - Changed lines: {}{}",
        lines.changes,
        percent_suffix(changes, touched)
    );
    let _ = writeln!(
        out,
        "    - Refactor: {}{}",
        lines.refactor(),
        percent_suffix(refactor, changes)
    );
    let _ = writeln!(
        out,
        "      - Refactor of own lines: {}{}",
        lines.refactor_own,
        percent_suffix(lines.refactor_own as f64, refactor)
    );
    let _ = writeln!(
        out,
        "      - Refactor of other's lines: {}{}",
        lines.refactor_other,
        percent_suffix(lines.refactor_other as f64, refactor)
    );
    let _ = writeln!(
        out,
        "      * Refactor done by others to own lines (help received): {}",
        lines.refactor_received
    );
    let _ = writeln!(
        out,
        "    - Churn: {}{}",
        lines.churn(),
        percent_suffix(churn, changes)
    );
    let _ = writeln!(
        out,
        "      - Churn of own lines: {}{}",
        lines.churn_own,
        percent_suffix(lines.churn_own as f64, churn)
    );
    let _ = writeln!(
        out,
        "      - Churn of other's lines (help given): {}{}",
        lines.churn_other,
        percent_suffix(lines.churn_other as f64, churn)
    );
    let _ = writeln!(
        out,
        "      * Churn done by others to own lines (help received): {}",
        lines.churn_received
    );
    out
}

/// Render the `limit` files with the most lines touched, largest first.
///
/// Equal counts are listed by path. The input slice is not reordered.
pub fn format_top_files(files: &[FileTouched], limit: usize) -> String {
    let mut sorted: Vec<&FileTouched> = files.iter().collect();
    sorted.sort_by(|a, b| b.lines.cmp(&a.lines).then_with(|| a.name.cmp(&b.name)));

    let mut out = String::from("  - Top files:\n");
    for file in sorted.into_iter().take(limit) {
        let _ = writeln!(out, "    - {} ({})", file.name, file.lines);
    }
    out
}
