use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GitwhoError;

/// Top-level configuration loaded from `.gitwho.toml`.
///
/// Supports layered resolution: `--config` path > local `.gitwho.toml` > defaults.
///
/// # Examples
///
/// ```
/// use gitwho_core::GitwhoConfig;
///
/// let config = GitwhoConfig::default();
/// assert_eq!(config.report.leaderboard_size, 3);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GitwhoConfig {
    /// Report rendering settings.
    #[serde(default)]
    pub report: ReportConfig,
}

impl GitwhoConfig {
    /// Load configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`GitwhoError::FileNotFound`] if `path` does not exist,
    /// [`GitwhoError::Io`] if the file cannot be read, or
    /// [`GitwhoError::Toml`] if the content is not valid TOML.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use gitwho_core::GitwhoConfig;
    /// use std::path::Path;
    ///
    /// let config = GitwhoConfig::from_file(Path::new(".gitwho.toml")).unwrap();
    /// ```
    pub fn from_file(path: &Path) -> Result<Self, GitwhoError> {
        if !path.exists() {
            return Err(GitwhoError::FileNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`GitwhoError::Toml`] if parsing fails, or
    /// [`GitwhoError::Config`] if a value is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use gitwho_core::GitwhoConfig;
    ///
    /// let toml = r#"
    /// [report]
    /// top_files = 10
    /// "#;
    /// let config = GitwhoConfig::from_toml(toml).unwrap();
    /// assert_eq!(config.report.top_files, 10);
    /// ```
    pub fn from_toml(content: &str) -> Result<Self, GitwhoError> {
        let config: Self = toml::from_str(content)?;
        if config.report.leaderboard_size == 0 {
            return Err(GitwhoError::Config(
                "report.leaderboard_size must be at least 1".into(),
            ));
        }
        Ok(config)
    }
}

/// Report rendering configuration.
///
/// # Examples
///
/// ```
/// use gitwho_core::ReportConfig;
///
/// let config = ReportConfig::default();
/// assert_eq!(config.top_files, 5);
/// assert_eq!(config.duplicate_limit, 20);
/// assert!(config.validate);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Entries shown per leaderboard (default: 3).
    #[serde(default = "default_leaderboard_size")]
    pub leaderboard_size: usize,
    /// Files listed under each author's "Top files" (default: 5).
    #[serde(default = "default_top_files")]
    pub top_files: usize,
    /// Related duplicate entries shown before truncating a short report (default: 20).
    #[serde(default = "default_duplicate_limit")]
    pub duplicate_limit: usize,
    /// Check counter invariants before rendering (default: true).
    #[serde(default = "default_validate")]
    pub validate: bool,
}

fn default_leaderboard_size() -> usize {
    3
}

fn default_top_files() -> usize {
    5
}

fn default_duplicate_limit() -> usize {
    20
}

fn default_validate() -> bool {
    true
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            leaderboard_size: default_leaderboard_size(),
            top_files: default_top_files(),
            duplicate_limit: default_duplicate_limit(),
            validate: default_validate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let config = GitwhoConfig::default();
        assert_eq!(config.report.leaderboard_size, 3);
        assert_eq!(config.report.top_files, 5);
        assert_eq!(config.report.duplicate_limit, 20);
        assert!(config.report.validate);
    }

    #[test]
    fn parse_full_toml() {
        let toml = r#"
[report]
leaderboard_size = 5
top_files = 8
duplicate_limit = 50
validate = false
"#;
        let config = GitwhoConfig::from_toml(toml).unwrap();
        assert_eq!(config.report.leaderboard_size, 5);
        assert_eq!(config.report.top_files, 8);
        assert_eq!(config.report.duplicate_limit, 50);
        assert!(!config.report.validate);
    }

    #[test]
    fn empty_toml_gives_defaults() {
        let config = GitwhoConfig::from_toml("").unwrap();
        assert_eq!(config.report.top_files, 5);
        assert!(config.report.validate);
    }

    #[test]
    fn invalid_toml_returns_error() {
        let result = GitwhoConfig::from_toml("{{invalid}}");
        assert!(matches!(result, Err(GitwhoError::Toml(_))));
    }

    #[test]
    fn zero_leaderboard_size_is_rejected() {
        let result = GitwhoConfig::from_toml("[report]\nleaderboard_size = 0\n");
        assert!(matches!(result, Err(GitwhoError::Config(_))));
    }

    #[test]
    fn missing_file_is_reported() {
        let result = GitwhoConfig::from_file(Path::new("/nonexistent/.gitwho.toml"));
        assert!(matches!(result, Err(GitwhoError::FileNotFound(_))));
    }
}
