//! Command line argument parsing and driver environment.
//!
//! The variant key is the only positional argument. The architecture pair
//! and build channel come from the environment set by the outer build
//! driver, not from flags.

use crate::packaging::{ArchSelectors, ChannelContext, INSTALLER_DEBIAN};
use clap::Parser;
use std::path::PathBuf;

/// `ARCH_OUTNAME` environment variable
pub const ENV_ARCH_OUTNAME: &str = "ARCH_OUTNAME";
/// `ARCH_ELECTRON` environment variable
pub const ENV_ARCH_ELECTRON: &str = "ARCH_ELECTRON";
/// Build channel environment variable
pub const ENV_BUILD_CHANNEL: &str = "BUILD_CHANNEL";

/// Debian package builder for the desktop client
#[derive(Parser, Debug)]
#[command(
    name = "package-deb",
    version,
    about = "Creates a Debian package for a desktop client build variant",
    long_about = "Creates a Debian package for a desktop client build variant.

Looks up the variant in electron.buildConfigs[\"linux-deb\"] of package.json,
qualifies names with the active build channel and runs electron-installer-debian.

Environment:
  ARCH_OUTNAME, ARCH_ELECTRON  architecture pair (both or neither; default x64/amd64)
  BUILD_CHANNEL                build channel, e.g. beta (unset for stable)
  RUST_LOG                     log level

Usage:
  package-deb x64
  ARCH_OUTNAME=arm64 ARCH_ELECTRON=arm64 BUILD_CHANNEL=beta package-deb arm64

Exit code 0 = package created."
)]
pub struct Args {
    /// Build config variant key
    #[arg(value_name = "VARIANT")]
    pub variant: String,

    /// Project root; the packager runs here and layout paths are relative to it
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub project_root: PathBuf,

    /// package.json holding the build configs (relative to the project root)
    #[arg(long, value_name = "PATH", default_value = "package.json")]
    pub manifest: PathBuf,

    /// Packager executable name or path
    #[arg(long, value_name = "PROGRAM", default_value = INSTALLER_DEBIAN)]
    pub installer: String,

    /// Print the packager options as JSON instead of packaging
    #[arg(long)]
    pub dry_run: bool,

    /// Suppress progress and success output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.variant.trim().is_empty() {
            return Err("Variant cannot be empty".to_string());
        }

        if self.installer.trim().is_empty() {
            return Err("Installer cannot be empty".to_string());
        }

        Ok(())
    }

    /// Manifest path resolved against the project root
    pub fn manifest_path(&self) -> PathBuf {
        if self.manifest.is_absolute() {
            self.manifest.clone()
        } else {
            self.project_root.join(&self.manifest)
        }
    }
}

/// Selectors inherited from the enclosing build driver
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverEnv {
    pub arch: ArchSelectors,
    pub channel: ChannelContext,
}

impl DriverEnv {
    /// Read the driver's selectors from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the driver's selectors through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let channel = lookup(ENV_BUILD_CHANNEL);
        Self {
            arch: ArchSelectors {
                outname: lookup(ENV_ARCH_OUTNAME),
                electron: lookup(ENV_ARCH_ELECTRON),
            },
            channel: ChannelContext::from_option(channel.as_deref()),
        }
    }
}
