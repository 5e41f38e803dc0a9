//! Contribution reports from per-author line-history aggregates.
//!
//! Consumes the [`gitwho_core::ChangesResult`] and
//! [`gitwho_core::OwnershipResult`] aggregates computed by the analysis
//! engine and renders them as text: full changes breakdowns, leaderboards
//! (top coders, new-liners, refactorers, helpers, churners), ownership
//! snapshots and timelines, and duplicate-code clusters.
//!
//! Every renderer is a pure function of its inputs and never reorders
//! caller data.

pub mod changes;
pub mod duplicates;
pub mod ownership;
pub mod percent;
pub mod ranking;
pub mod score;
pub mod timeline;

/// Returned by changes reports when the range holds no commits.
pub const NO_CHANGES_MESSAGE: &str = "No changes found";

/// Returned by ownership and duplicate reports when the snapshot has no lines.
pub const NO_LINES_MESSAGE: &str = "No lines found";
