//! Duplicate-code cluster report.

use std::fmt::Write;

use gitwho_core::{DuplicateLineGroup, OwnershipResult, ReportConfig, Verbosity};

use crate::ownership::duplicated_lines_line;
use crate::NO_LINES_MESSAGE;

/// Appended when a short report stops listing related entries.
pub const TRUNCATION_NOTICE: &str = "...(use --format \"full\" for more results)";

/// Render the duplicate clusters of `result` in engine order.
///
/// Each group prints as `path:start - end` with its related locations
/// indented beneath. In [`Verbosity::Short`] at most
/// `config.duplicate_limit` related entries are printed across the whole
/// report; once one more would be needed the notice is appended and no
/// further groups are visited. [`Verbosity::Full`] lists everything.
///
/// # Examples
///
/// ```
/// use gitwho_core::{DuplicateLineGroup, OwnershipResult, ReportConfig, Verbosity};
/// use gitwho_report::duplicates::format_duplicates;
///
/// let related = DuplicateLineGroup {
///     file_path: "b.rs".into(),
///     line_number: 1,
///     line_count: 4,
///     related_lines_group: vec![],
/// };
/// let result = OwnershipResult {
///     total_lines: 100,
///     total_lines_duplicated: 8,
///     duplicate_line_groups: vec![DuplicateLineGroup {
///         file_path: "a.rs".into(),
///         line_number: 10,
///         line_count: 4,
///         related_lines_group: vec![related],
///     }],
///     ..OwnershipResult::default()
/// };
/// let text = format_duplicates(&result, Verbosity::Short, &ReportConfig::default());
/// assert_eq!(text, "Total lines: 100\nDuplicated lines: 8 (8%)\na.rs:10 - 14\n  b.rs:1 - 5\n");
/// ```
pub fn format_duplicates(
    result: &OwnershipResult,
    verbosity: Verbosity,
    config: &ReportConfig,
) -> String {
    if result.total_lines == 0 {
        return NO_LINES_MESSAGE.to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "Total lines: {}", result.total_lines);
    let _ = writeln!(out, "{}", duplicated_lines_line(result));

    let limit = (!verbosity.is_full()).then_some(config.duplicate_limit);
    let mut shown = 0usize;

    for group in &result.duplicate_line_groups {
        if limit == Some(shown) && !group.related_lines_group.is_empty() {
            return truncate(out, shown);
        }
        let _ = writeln!(out, "{}", location(group));
        for related in &group.related_lines_group {
            if limit == Some(shown) {
                return truncate(out, shown);
            }
            let _ = writeln!(out, "  {}", location(related));
            shown += 1;
        }
    }
    out
}

fn location(group: &DuplicateLineGroup) -> String {
    format!(
        "{}:{} - {}",
        group.file_path,
        group.line_number,
        group.line_end()
    )
}

fn truncate(mut out: String, shown: usize) -> String {
    tracing::debug!(shown, "duplicate report truncated");
    out.push_str(TRUNCATION_NOTICE);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(path: &str, line: u64) -> DuplicateLineGroup {
        DuplicateLineGroup {
            file_path: path.into(),
            line_number: line,
            line_count: 3,
            related_lines_group: vec![],
        }
    }

    fn group_with(path: &str, related: usize) -> DuplicateLineGroup {
        DuplicateLineGroup {
            related_lines_group: (0..related)
                .map(|i| block(&format!("{path}.copy{i}"), i as u64 * 10))
                .collect(),
            ..block(path, 1)
        }
    }

    fn result(groups: Vec<DuplicateLineGroup>) -> OwnershipResult {
        OwnershipResult {
            total_lines: 1000,
            total_lines_duplicated: 75,
            duplicate_line_groups: groups,
            ..OwnershipResult::default()
        }
    }

    fn related_lines(text: &str) -> usize {
        text.lines().filter(|l| l.starts_with("  ")).count()
    }

    #[test]
    fn short_report_stops_at_limit() {
        let text = format_duplicates(
            &result(vec![group_with("a.rs", 25)]),
            Verbosity::Short,
            &ReportConfig::default(),
        );
        assert_eq!(related_lines(&text), 20);
        assert_eq!(text.matches(TRUNCATION_NOTICE).count(), 1);
        assert!(text.ends_with(&format!("  a.rs.copy19:190 - 193\n{TRUNCATION_NOTICE}\n")));
        assert!(!text.contains("copy20"));
    }

    #[test]
    fn limit_counts_across_groups() {
        let groups = vec![
            group_with("a.rs", 15),
            group_with("b.rs", 10),
            group_with("c.rs", 1),
        ];
        let text = format_duplicates(&result(groups), Verbosity::Short, &ReportConfig::default());
        assert_eq!(related_lines(&text), 20);
        assert!(text.contains("b.rs:1 - 4\n"));
        assert!(!text.contains("c.rs"));
        assert!(text.ends_with(&format!("{TRUNCATION_NOTICE}\n")));
    }

    #[test]
    fn next_group_is_not_started_after_limit() {
        let groups = vec![group_with("a.rs", 20), group_with("b.rs", 1)];
        let text = format_duplicates(&result(groups), Verbosity::Short, &ReportConfig::default());
        assert!(!text.contains("b.rs"));
        assert!(text.ends_with(&format!("{TRUNCATION_NOTICE}\n")));
    }

    #[test]
    fn exactly_limit_entries_has_no_notice() {
        let text = format_duplicates(
            &result(vec![group_with("a.rs", 20)]),
            Verbosity::Short,
            &ReportConfig::default(),
        );
        assert_eq!(related_lines(&text), 20);
        assert!(!text.contains(TRUNCATION_NOTICE));
    }

    #[test]
    fn full_report_is_uncapped() {
        let text = format_duplicates(
            &result(vec![group_with("a.rs", 25), group_with("b.rs", 5)]),
            Verbosity::Full,
            &ReportConfig::default(),
        );
        assert_eq!(related_lines(&text), 30);
        assert!(!text.contains(TRUNCATION_NOTICE));
    }

    #[test]
    fn header_and_ranges() {
        let text = format_duplicates(
            &result(vec![group_with("a.rs", 1)]),
            Verbosity::Short,
            &ReportConfig::default(),
        );
        assert_eq!(
            text,
            "Total lines: 1000\nDuplicated lines: 75 (7%)\na.rs:1 - 4\n  a.rs.copy0:0 - 3\n"
        );
    }

    #[test]
    fn configurable_limit() {
        let config = ReportConfig {
            duplicate_limit: 2,
            ..ReportConfig::default()
        };
        let text = format_duplicates(&result(vec![group_with("a.rs", 5)]), Verbosity::Short, &config);
        assert_eq!(related_lines(&text), 2);
        assert!(text.contains(TRUNCATION_NOTICE));
    }

    #[test]
    fn empty_snapshot_short_circuits() {
        let text = format_duplicates(
            &OwnershipResult::default(),
            Verbosity::Full,
            &ReportConfig::default(),
        );
        assert_eq!(text, "No lines found");
    }
}
