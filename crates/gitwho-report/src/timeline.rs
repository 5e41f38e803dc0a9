//! Ownership over time: one ownership report per snapshot date.

use gitwho_core::{OwnershipTimelineEntry, Verbosity};

use crate::ownership::format_ownership;

/// Message returned for an empty timeline.
pub const NO_TIMELINE_MESSAGE: &str = "No ownership data found";

/// Render each snapshot, oldest first, as a date heading followed by its
/// ownership report.
///
/// # Examples
///
/// ```
/// use gitwho_core::Verbosity;
/// use gitwho_report::timeline::format_timeline;
///
/// assert_eq!(format_timeline(&[], Verbosity::Short), "No ownership data found");
/// ```
pub fn format_timeline(entries: &[OwnershipTimelineEntry], verbosity: Verbosity) -> String {
    if entries.is_empty() {
        return NO_TIMELINE_MESSAGE.to_string();
    }

    let mut sorted: Vec<&OwnershipTimelineEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.date);
    tracing::debug!(snapshots = sorted.len(), "rendering ownership timeline");

    let mut out = String::new();
    for entry in sorted {
        out.push_str(&entry.date.format("%Y-%m-%d").to_string());
        out.push('\n');
        out.push_str(&format_ownership(&entry.result, verbosity));
        out.push('\n');
    }
    out
}
