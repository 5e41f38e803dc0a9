use std::path::PathBuf;

/// Errors that can occur across gitwho.
///
/// Report rendering itself is total and never produces an error; these
/// variants cover loading inputs, configuration, and the optional boundary
/// validation of aggregates handed over by the analysis engine.
///
/// # Examples
///
/// ```
/// use gitwho_core::GitwhoError;
///
/// let err = GitwhoError::InvalidAggregate("changes mismatch".into());
/// assert!(err.to_string().contains("changes mismatch"));
/// ```
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum GitwhoError {
    /// Filesystem I/O failure.
    #[error("IO error: {0}")]
    #[diagnostic(code(gitwho::io))]
    Io(#[from] std::io::Error),

    /// Invalid or missing configuration.
    #[error("configuration error: {0}")]
    #[diagnostic(code(gitwho::config))]
    Config(String),

    /// JSON serialization / deserialization failure.
    #[error("serialization error: {0}")]
    #[diagnostic(
        code(gitwho::serialization),
        help("input must be a JSON document produced by the gitwho analysis engine")
    )]
    Serialization(#[from] serde_json::Error),

    /// TOML deserialization failure.
    #[error("TOML parse error: {0}")]
    #[diagnostic(code(gitwho::toml))]
    Toml(#[from] toml::de::Error),

    /// A required file was not found.
    #[error("file not found: {}", .0.display())]
    #[diagnostic(code(gitwho::file_not_found))]
    FileNotFound(PathBuf),

    /// An aggregate violates the counter invariants.
    #[error("invalid aggregate: {0}")]
    #[diagnostic(
        code(gitwho::invalid_aggregate),
        help("set `validate = false` under [report] in .gitwho.toml to render anyway")
    )]
    InvalidAggregate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: GitwhoError = io_err.into();
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn config_error_displays_message() {
        let err = GitwhoError::Config("bad value".into());
        assert_eq!(err.to_string(), "configuration error: bad value");
    }

    #[test]
    fn file_not_found_shows_path() {
        let err = GitwhoError::FileNotFound(PathBuf::from("/tmp/changes.json"));
        assert!(err.to_string().contains("/tmp/changes.json"));
    }

    #[test]
    fn json_error_converts() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: GitwhoError = json_err.into();
        assert!(err.to_string().starts_with("serialization error"));
    }

    #[test]
    fn invalid_aggregate_has_diagnostic_code() {
        use miette::Diagnostic;

        let err = GitwhoError::InvalidAggregate("x".into());
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("gitwho::invalid_aggregate"));
    }
}
