//! Error types for packaging operations.
//!
//! Two categories reach the user: configuration problems (unknown variant,
//! missing name fields, unreadable manifest) and packager failures. Neither is
//! retried; both end the process with a non-zero exit status.

use crate::packaging::PipelineState;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for packaging operations
pub type Result<T> = std::result::Result<T, PackagingError>;

/// Main error type for all packaging operations
#[derive(Error, Debug)]
pub enum PackagingError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// Build configuration errors
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// External packager errors
    #[error("Packager error: {0}")]
    Packager(#[from] PackagerError),

    /// Pipeline operation called out of order
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors from anyhow
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

/// Missing or invalid build configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The manifest could not be read from disk
    #[error("Failed to read {}: {source}", .path.display())]
    ManifestRead {
        /// Manifest path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not valid JSON or has an unexpected shape
    #[error("Failed to parse {}: {source}", .path.display())]
    ManifestParse {
        /// Manifest path
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// No build configs exist for the packaging target
    #[error("No build configs for '{target}' in electron.buildConfigs")]
    MissingTarget {
        /// Packaging target key (e.g. "linux-deb")
        target: String,
    },

    /// Requested variant key is absent from the build configs
    #[error("Unknown build variant '{variant}' (available: {})", .available.join(", "))]
    UnknownVariant {
        /// Requested variant key
        variant: String,
        /// Variant keys present in the manifest
        available: Vec<String>,
    },

    /// The variant entry is missing fields or has the wrong shape
    #[error("Invalid build variant '{variant}': {source}")]
    InvalidVariant {
        /// Variant key
        variant: String,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },

    /// A required name field is empty
    #[error("Build variant '{variant}' has an empty '{field}'")]
    EmptyField {
        /// Variant key
        variant: String,
        /// JSON field name
        field: &'static str,
    },
}

/// Failure reported by, or while driving, the external packager.
#[derive(Error, Debug)]
pub enum PackagerError {
    /// The packager executable could not be located
    #[error("Packager '{tool}' not found: {source}")]
    ToolNotFound {
        /// Tool name or path
        tool: String,
        /// Lookup error
        #[source]
        source: which::Error,
    },

    /// Writing the options file handed to the packager failed
    #[error("Failed to write packager options to {}: {source}", .path.display())]
    ConfigWrite {
        /// Options file path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Serializing the options record failed
    #[error("Failed to serialize packager options: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The packager process could not be started
    #[error("Failed to execute {command}: {source}")]
    Spawn {
        /// Command that failed to start
        command: String,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The packager ran and reported failure
    #[error("{command} failed with exit code {code:?}: {stderr}")]
    Failed {
        /// Command that failed
        command: String,
        /// Exit code, if the process was not killed by a signal
        code: Option<i32>,
        /// Captured stderr
        stderr: String,
    },
}

/// A pipeline step was requested from a state that does not allow it.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PipelineError {
    /// The step's predecessor state has not been reached, or the run already ended
    #[error("cannot {step} from state {state:?}")]
    InvalidTransition {
        /// Requested step
        step: &'static str,
        /// State the pipeline was in
        state: PipelineState,
    },
}

impl PackagingError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            PackagingError::Configuration(ConfigError::UnknownVariant { .. }) => vec![
                "Pass one of the listed variant keys as the first argument".to_string(),
                "Or add the variant to electron.buildConfigs[\"linux-deb\"] in package.json"
                    .to_string(),
            ],
            PackagingError::Configuration(_) => {
                vec!["Check electron.buildConfigs in package.json".to_string()]
            }
            PackagingError::Packager(PackagerError::ToolNotFound { .. }) => vec![
                "Install electron-installer-debian (npm install -g electron-installer-debian)"
                    .to_string(),
                "Or point --installer at the packager executable".to_string(),
            ],
            PackagingError::Packager(_) => vec![
                "Make sure the application was packaged for this architecture first".to_string(),
                "Check ARCH_OUTNAME/ARCH_ELECTRON and the desktop template path".to_string(),
            ],
            PackagingError::Pipeline(_) => {
                vec!["Create a new pipeline for each packaging run".to_string()]
            }
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }

    /// Packaging failures are terminal; nothing is retried
    pub fn is_recoverable(&self) -> bool {
        false
    }
}
