//! Options record handed to the Debian packager.

use crate::metadata::IconSpec;
use serde::Serialize;
use std::path::PathBuf;

/// Complete options for one `electron-installer-debian` run.
///
/// Serializes with the packager's field names (`desktopTemplate`,
/// `productName`, `startupWmClass`, ...).
///
/// `src` and `name` embed the same resolved application name, and `src`
/// embeds the Debian architecture name; the packager fails to find its input
/// if these drift apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageOptions {
    /// Desktop entry template
    pub desktop_template: PathBuf,
    /// Prebuilt application directory, with trailing separator
    pub src: String,
    /// Output directory
    pub dest: PathBuf,
    /// Package name
    pub name: String,
    /// Executable name
    pub bin: String,
    pub product_name: String,
    /// Window manager class, equal to the executable name
    pub startup_wm_class: String,
    pub generic_name: String,
    pub maintainer: String,
    pub icon: IconSpec,
    /// Architecture in outname convention (e.g. "x64")
    pub arch: String,
    pub homepage: String,
    pub categories: Vec<String>,
    pub description: String,
    pub product_description: String,
    pub section: String,
}

impl PackageOptions {
    /// Options as pretty JSON, the format written to the packager's config file.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
