//! Debian packaging for the desktop client.
//!
//! This library derives the options for an `electron-installer-debian` run:
//! - channel-qualified application and executable names
//! - an all-or-nothing architecture pair with an x64/amd64 default
//! - the complete options record, including the source bundle path
//!
//! It can be used both as a CLI tool (`package-deb`) and as a library
//! dependency.

pub mod cli;
pub mod error;
pub mod metadata;
pub mod packaging;

// Re-export commonly used types
pub use error::{CliError, ConfigError, PackagerError, PackagingError, PipelineError, Result};
