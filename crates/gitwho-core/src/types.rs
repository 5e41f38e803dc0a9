use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::GitwhoError;

/// Line counters for a scope of history (one author, or the whole range).
///
/// `changes` is the sum of the refactor and churn counters performed by this
/// scope. The `*_received` counters are the reciprocal view (work other
/// authors did on lines owned by this scope) and are not part of that sum.
///
/// # Examples
///
/// ```
/// use gitwho_core::LinesTouched;
///
/// let lines = LinesTouched {
///     new: 10,
///     changes: 6,
///     refactor_own: 1,
///     refactor_other: 2,
///     churn_own: 3,
///     ..LinesTouched::default()
/// };
/// assert_eq!(lines.touched(), 16);
/// assert_eq!(lines.refactor(), 3);
/// assert!(lines.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinesTouched {
    /// Lines that did not exist before.
    pub new: u64,
    /// Pre-existing lines rewritten (refactor + churn).
    pub changes: u64,
    /// Substantive rewrites of lines last attributed to the same author.
    pub refactor_own: u64,
    /// Substantive rewrites of lines last attributed to someone else.
    pub refactor_other: u64,
    /// Substantive rewrites other authors did on this author's lines.
    pub refactor_received: u64,
    /// Near-identical rewrites of the author's own lines.
    pub churn_own: u64,
    /// Near-identical rewrites of someone else's lines ("help given").
    pub churn_other: u64,
    /// Near-identical rewrites other authors did on this author's lines.
    pub churn_received: u64,
    /// Sum of line age, in days, over every changed line.
    pub age_days_sum: f64,
}

impl LinesTouched {
    /// New plus changed lines. Counter sums saturate at `u64::MAX`.
    pub fn touched(&self) -> u64 {
        self.new.saturating_add(self.changes)
    }

    /// Refactored lines, own and others'.
    pub fn refactor(&self) -> u64 {
        self.refactor_own.saturating_add(self.refactor_other)
    }

    /// Churned lines, own and others'.
    pub fn churn(&self) -> u64 {
        self.churn_own.saturating_add(self.churn_other)
    }

    /// Whether this scope wrote or received any line work.
    pub fn is_active(&self) -> bool {
        self.touched() > 0 || self.refactor_received > 0 || self.churn_received > 0
    }

    /// Check the counter invariants.
    ///
    /// # Errors
    ///
    /// Returns [`GitwhoError::InvalidAggregate`] when `changes` does not equal
    /// the refactor and churn counters, when their sum overflows, or when the
    /// age sum is negative or not finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use gitwho_core::LinesTouched;
    ///
    /// let broken = LinesTouched { changes: 5, churn_own: 1, ..LinesTouched::default() };
    /// assert!(broken.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), GitwhoError> {
        let parts = self
            .refactor_own
            .checked_add(self.refactor_other)
            .and_then(|p| p.checked_add(self.churn_own))
            .and_then(|p| p.checked_add(self.churn_other))
            .ok_or_else(|| {
                GitwhoError::InvalidAggregate("refactor + churn overflows a 64-bit counter".into())
            })?;
        if self.changes != parts {
            return Err(GitwhoError::InvalidAggregate(format!(
                "changes ({}) != refactor + churn ({parts})",
                self.changes
            )));
        }
        if !self.age_days_sum.is_finite() || self.age_days_sum < 0.0 {
            return Err(GitwhoError::InvalidAggregate(format!(
                "age days sum must be a non-negative number, got {}",
                self.age_days_sum
            )));
        }
        Ok(())
    }
}

/// Lines touched by an author in one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileTouched {
    /// File path relative to repo root.
    pub name: String,
    /// Number of lines touched.
    pub lines: u64,
}

/// One author's line history within the analyzed range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorLines {
    /// Author name.
    pub author_name: String,
    /// Author email.
    pub author_mail: String,
    /// Counters for this author.
    #[serde(default)]
    pub lines_touched: LinesTouched,
    /// Per-file counts, in engine order.
    #[serde(default)]
    pub files_touched: Vec<FileTouched>,
}

/// Aggregate produced by the change-history analysis.
///
/// The per-author counters are expected to reconcile with
/// `total_lines_touched`; that is the engine's responsibility and is not
/// re-checked here.
///
/// # Examples
///
/// ```
/// use gitwho_core::ChangesResult;
///
/// let result = ChangesResult::default();
/// assert_eq!(result.total_commits, 0);
/// assert!(result.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangesResult {
    /// Commits inside the analyzed range.
    #[serde(default)]
    pub total_commits: u64,
    /// Files touched inside the analyzed range.
    #[serde(default)]
    pub total_files: u64,
    /// Counters over every author.
    #[serde(default)]
    pub total_lines_touched: LinesTouched,
    /// Per-author breakdown.
    #[serde(default)]
    pub authors_lines: Vec<AuthorLines>,
}

impl ChangesResult {
    /// Check the counter invariants of the totals and of every author.
    ///
    /// # Errors
    ///
    /// Returns [`GitwhoError::InvalidAggregate`] naming the offending scope.
    pub fn validate(&self) -> Result<(), GitwhoError> {
        self.total_lines_touched
            .validate()
            .map_err(|e| scoped("totals", e))?;
        for author in &self.authors_lines {
            author
                .lines_touched
                .validate()
                .map_err(|e| scoped(&author.author_name, e))?;
        }
        Ok(())
    }
}

/// One author's currently owned (blamed) lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorOwnership {
    /// Author name.
    pub author_name: String,
    /// Author email.
    pub author_mail: String,
    /// Lines currently attributed to this author.
    #[serde(default)]
    pub owned_lines_total: u64,
    /// Sum of age, in days, of the owned lines.
    #[serde(default)]
    pub owned_lines_age_days_sum: f64,
    /// Owned lines that duplicate code elsewhere.
    #[serde(default)]
    pub owned_lines_duplicate: u64,
    /// Owned lines that are the original of a duplicate.
    #[serde(default)]
    pub owned_lines_duplicate_original: u64,
    /// Lines owned by others that duplicate this author's originals.
    #[serde(default)]
    pub owned_lines_duplicate_original_others: u64,
}

/// A block of duplicated lines and the other places sharing its content.
///
/// # Examples
///
/// ```
/// use gitwho_core::DuplicateLineGroup;
///
/// let group = DuplicateLineGroup {
///     file_path: "src/a.rs".into(),
///     line_number: 10,
///     line_count: 4,
///     related_lines_group: vec![],
/// };
/// assert_eq!(group.line_end(), 14);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateLineGroup {
    /// File path relative to repo root.
    pub file_path: String,
    /// First line of the block.
    pub line_number: u64,
    /// Number of lines in the block.
    pub line_count: u64,
    /// Other locations with the same content.
    #[serde(default)]
    pub related_lines_group: Vec<DuplicateLineGroup>,
}

impl DuplicateLineGroup {
    /// Last line of the displayed range (`line_number + line_count`, saturating).
    pub fn line_end(&self) -> u64 {
        self.line_number.saturating_add(self.line_count)
    }
}

/// Snapshot of code ownership at a single revision.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnershipResult {
    /// Files analyzed.
    #[serde(default)]
    pub total_files: u64,
    /// Lines analyzed.
    #[serde(default)]
    pub total_lines: u64,
    /// Lines that are part of a duplicate group.
    #[serde(default)]
    pub total_lines_duplicated: u64,
    /// Sum of age, in days, of every line.
    #[serde(default)]
    pub lines_age_days_sum: f64,
    /// Per-author ownership.
    #[serde(default)]
    pub authors_lines: Vec<AuthorOwnership>,
    /// Duplicate clusters, in engine order.
    #[serde(default)]
    pub duplicate_line_groups: Vec<DuplicateLineGroup>,
}

impl OwnershipResult {
    /// Check that no count exceeds `total_lines` and age sums are sane.
    ///
    /// # Errors
    ///
    /// Returns [`GitwhoError::InvalidAggregate`] naming the offending scope.
    pub fn validate(&self) -> Result<(), GitwhoError> {
        if self.total_lines_duplicated > self.total_lines {
            return Err(GitwhoError::InvalidAggregate(format!(
                "duplicated lines ({}) exceed total lines ({})",
                self.total_lines_duplicated, self.total_lines
            )));
        }
        check_age_sum("totals", self.lines_age_days_sum)?;
        for author in &self.authors_lines {
            if author.owned_lines_total > self.total_lines {
                return Err(GitwhoError::InvalidAggregate(format!(
                    "{}: owned lines ({}) exceed total lines ({})",
                    author.author_name, author.owned_lines_total, self.total_lines
                )));
            }
            check_age_sum(&author.author_name, author.owned_lines_age_days_sum)?;
        }
        Ok(())
    }
}

/// Ownership snapshot taken at a given date of a timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnershipTimelineEntry {
    /// Date of the snapshot.
    pub date: NaiveDate,
    /// Ownership at that date.
    pub result: OwnershipResult,
}

fn check_age_sum(scope: &str, sum: f64) -> Result<(), GitwhoError> {
    if sum.is_finite() && sum >= 0.0 {
        Ok(())
    } else {
        Err(GitwhoError::InvalidAggregate(format!(
            "{scope}: age days sum must be a non-negative number, got {sum}"
        )))
    }
}

fn scoped(scope: &str, err: GitwhoError) -> GitwhoError {
    match err {
        GitwhoError::InvalidAggregate(msg) => GitwhoError::InvalidAggregate(format!("{scope}: {msg}")),
        other => other,
    }
}

/// Report detail level.
///
/// # Examples
///
/// ```
/// use gitwho_core::Verbosity;
///
/// let v: Verbosity = "short".parse().unwrap();
/// assert_eq!(v, Verbosity::Short);
/// assert!(Verbosity::Full.is_full());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Every section and every field.
    #[default]
    Full,
    /// Condensed output with truncated listings.
    Short,
}

impl Verbosity {
    /// Shorthand for `self == Verbosity::Full`.
    pub fn is_full(self) -> bool {
        self == Verbosity::Full
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verbosity::Full => write!(f, "full"),
            Verbosity::Short => write!(f, "short"),
        }
    }
}

impl FromStr for Verbosity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(Verbosity::Full),
            "short" => Ok(Verbosity::Short),
            other => Err(format!("unknown report format: {other}")),
        }
    }
}

/// Output format for CLI subcommands.
///
/// Implements [`FromStr`] so it can be used directly with `clap` argument parsing.
///
/// # Examples
///
/// ```
/// use gitwho_core::OutputFormat;
///
/// let fmt: OutputFormat = "json".parse().unwrap();
/// assert_eq!(fmt, OutputFormat::Json);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text report.
    #[default]
    Text,
    /// Machine-readable JSON with camelCase keys.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}
