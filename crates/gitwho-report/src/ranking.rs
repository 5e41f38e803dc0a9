//! Leaderboards: top authors per score category.
//!
//! Ranking works on a vector of references, so the caller's author order is
//! left untouched. Ties on score are broken by author name, then mail, both
//! ascending, which keeps the output stable across runs.

use std::fmt;
use std::fmt::Write;

use gitwho_core::{AuthorLines, ChangesResult, LinesTouched, ReportConfig};
use serde::Serialize;

use crate::percent::rounded_percent;
use crate::score;
use crate::NO_CHANGES_MESSAGE;

/// A ranking category and the score it sorts by.
///
/// # Examples
///
/// ```
/// use gitwho_core::LinesTouched;
/// use gitwho_report::ranking::ScoreCategory;
///
/// let lines = LinesTouched { churn_other: 4, ..LinesTouched::default() };
/// assert_eq!(ScoreCategory::Helper.score(&lines), 4);
/// assert_eq!(ScoreCategory::Helper.title(), "Top Helpers");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreCategory {
    /// New code plus refactoring, minus churn.
    TopCoder,
    /// New lines only.
    NewLiner,
    /// Refactored lines.
    Refactorer,
    /// Churn done on other authors' lines.
    Helper,
    /// Churn accumulated on own lines.
    Churner,
}

impl ScoreCategory {
    /// Every category, in report order.
    pub const ALL: [ScoreCategory; 5] = [
        ScoreCategory::TopCoder,
        ScoreCategory::NewLiner,
        ScoreCategory::Refactorer,
        ScoreCategory::Helper,
        ScoreCategory::Churner,
    ];

    /// Heading printed above the leaderboard.
    pub fn title(self) -> &'static str {
        match self {
            ScoreCategory::TopCoder => "Top Coders (new+refactor-churn)",
            ScoreCategory::NewLiner => "Top New Liners",
            ScoreCategory::Refactorer => "Top Refactorers",
            ScoreCategory::Helper => "Top Helpers",
            ScoreCategory::Churner => "Top Churners",
        }
    }

    /// Score of `lines` in this category.
    pub fn score(self, lines: &LinesTouched) -> i64 {
        match self {
            ScoreCategory::TopCoder => score::top_coder_score(lines),
            ScoreCategory::NewLiner => score::new_liner_score(lines),
            ScoreCategory::Refactorer => score::refactorer_score(lines),
            ScoreCategory::Helper => score::helper_score(lines),
            ScoreCategory::Churner => score::churner_score(lines),
        }
    }

    fn shows_mail(self) -> bool {
        self == ScoreCategory::TopCoder
    }
}

/// One ranked author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// Author name.
    pub author_name: String,
    /// Author email.
    pub author_mail: String,
    /// Score in the board's category.
    pub score: i64,
    /// Score as a rounded percentage of the same score over the totals.
    /// `None` when the total score is zero.
    pub percent: Option<i64>,
}

/// Top authors of a single category, best first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboard {
    /// Category ranked.
    pub category: ScoreCategory,
    /// Ranked entries, at most the requested limit.
    pub entries: Vec<LeaderboardEntry>,
}

impl fmt::Display for Leaderboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.category.title())?;
        for entry in &self.entries {
            write!(f, "  {}", entry.author_name)?;
            if self.category.shows_mail() {
                write!(f, " {}", entry.author_mail)?;
            }
            write!(f, ": {}", entry.score)?;
            if let Some(p) = entry.percent {
                write!(f, " ({p}%)")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Rank `authors` by `category`, keeping the best `limit`.
///
/// Only authors with any activity are eligible. Percentages are relative to
/// the category score computed over `totals`.
///
/// # Examples
///
/// ```
/// use gitwho_core::{AuthorLines, LinesTouched};
/// use gitwho_report::ranking::{rank_authors, ScoreCategory};
///
/// let author = |name: &str, new| AuthorLines {
///     author_name: name.into(),
///     author_mail: format!("{name}@example.com"),
///     lines_touched: LinesTouched { new, ..LinesTouched::default() },
///     files_touched: vec![],
/// };
/// let authors = vec![author("bob", 1), author("alice", 3)];
/// let totals = LinesTouched { new: 4, ..LinesTouched::default() };
///
/// let board = rank_authors(&authors, &totals, ScoreCategory::NewLiner, 3);
/// assert_eq!(board.entries[0].author_name, "alice");
/// assert_eq!(board.entries[0].percent, Some(75));
/// assert_eq!(authors[0].author_name, "bob");
/// ```
pub fn rank_authors(
    authors: &[AuthorLines],
    totals: &LinesTouched,
    category: ScoreCategory,
    limit: usize,
) -> Leaderboard {
    let total_score = category.score(totals);

    let mut ranked: Vec<(&AuthorLines, i64)> = authors
        .iter()
        .filter(|a| a.lines_touched.is_active())
        .map(|a| (a, category.score(&a.lines_touched)))
        .collect();

    ranked.sort_by(|(a, a_score), (b, b_score)| {
        b_score
            .cmp(a_score)
            .then_with(|| a.author_name.cmp(&b.author_name))
            .then_with(|| a.author_mail.cmp(&b.author_mail))
    });

    let entries = ranked
        .into_iter()
        .take(limit)
        .map(|(author, score)| LeaderboardEntry {
            author_name: author.author_name.clone(),
            author_mail: author.author_mail.clone(),
            score,
            percent: (total_score != 0)
                .then(|| rounded_percent(score as f64, total_score as f64)),
        })
        .collect();

    Leaderboard { category, entries }
}

/// Build the leaderboard of every [`ScoreCategory`].
pub fn leaderboards(result: &ChangesResult, limit: usize) -> Vec<Leaderboard> {
    ScoreCategory::ALL
        .iter()
        .map(|&category| {
            rank_authors(
                &result.authors_lines,
                &result.total_lines_touched,
                category,
                limit,
            )
        })
        .collect()
}

/// Render every leaderboard as text, each preceded by a blank line.
///
/// Returns `"No changes found"` when the result has no commits.
///
/// # Examples
///
/// ```
/// use gitwho_core::{ChangesResult, ReportConfig};
/// use gitwho_report::ranking::format_top_text;
///
/// let text = format_top_text(&ChangesResult::default(), &ReportConfig::default());
/// assert_eq!(text, "No changes found");
/// ```
pub fn format_top_text(result: &ChangesResult, config: &ReportConfig) -> String {
    if result.total_commits == 0 {
        return NO_CHANGES_MESSAGE.to_string();
    }
    tracing::debug!(
        authors = result.authors_lines.len(),
        limit = config.leaderboard_size,
        "rendering leaderboards"
    );

    let mut out = String::new();
    for board in leaderboards(result, config.leaderboard_size) {
        let _ = write!(out, "\n{board}");
    }
    out
}
