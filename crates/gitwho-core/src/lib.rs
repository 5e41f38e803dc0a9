//! Core types, configuration, and error handling for gitwho.
//!
//! This crate provides the shared foundation used by the report crate and
//! the `gitwho` binary:
//! - [`GitwhoError`] — unified error type using `thiserror`
//! - [`GitwhoConfig`] — configuration loaded from `.gitwho.toml`
//! - Aggregates handed over by the analysis engine: [`ChangesResult`],
//!   [`OwnershipResult`], [`OwnershipTimelineEntry`] and their parts

mod config;
mod error;
mod types;

pub use config::{GitwhoConfig, ReportConfig};
pub use error::GitwhoError;
pub use types::{
    AuthorLines, AuthorOwnership, ChangesResult, DuplicateLineGroup, FileTouched, LinesTouched,
    OutputFormat, OwnershipResult, OwnershipTimelineEntry, Verbosity,
};

/// A convenience `Result` type for gitwho operations.
pub type Result<T> = std::result::Result<T, GitwhoError>;
