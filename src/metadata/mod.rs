//! Build configs from package.json
//!
//! The desktop client's `package.json` carries one entry per packaging
//! variant under `electron.buildConfigs.<target>.<variant>`:
//!
//! ```json
//! {
//!   "electron": {
//!     "buildConfigs": {
//!       "linux-deb": {
//!         "x64": { "name": "Threema", "executableName": "threema", "icons": "app/assets/icons/png" }
//!       }
//!     }
//!   }
//! }
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

/// Build config target key for Debian packages
pub const DEB_TARGET: &str = "linux-deb";

/// Icon reference passed through to the packager.
///
/// Either a single icon (file or directory) or a map of size (e.g. "48x48")
/// to icon file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IconSpec {
    Single(PathBuf),
    Sized(BTreeMap<String, PathBuf>),
}

/// One packaging variant.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfigEntry {
    /// Base application display name
    pub name: String,

    /// Base binary name
    pub executable_name: String,

    /// Platform icon reference
    pub icons: IconSpec,
}

#[derive(Debug, Deserialize)]
struct RawManifest {
    electron: Option<ElectronSection>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ElectronSection {
    #[serde(default)]
    build_configs: HashMap<String, BTreeMap<String, serde_json::Value>>,
}

/// Build configs parsed from a package.json.
#[derive(Debug, Clone, Default)]
pub struct PackageManifest {
    // Entries stay raw until looked up; other targets may use other shapes.
    build_configs: HashMap<String, BTreeMap<String, serde_json::Value>>,
}

impl PackageManifest {
    /// Load build configs from a package.json on disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;

        let manifest = Self::from_json(&contents).map_err(|source| ConfigError::ManifestParse {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!(
            "Loaded {} build config target(s) from {}",
            manifest.build_configs.len(),
            path.display()
        );

        Ok(manifest)
    }

    /// Parse build configs from package.json contents.
    ///
    /// A manifest without an `electron` section parses to an empty set of
    /// build configs; lookups then fail with [`ConfigError::MissingTarget`].
    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        let raw: RawManifest = serde_json::from_str(contents)?;
        Ok(Self {
            build_configs: raw.electron.map(|e| e.build_configs).unwrap_or_default(),
        })
    }

    /// Variant keys available for a target, in sorted order.
    pub fn variants(&self, target: &str) -> Vec<String> {
        self.build_configs
            .get(target)
            .map(|variants| variants.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Look up and validate the build config for `variant`.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingTarget`] if the target has no build configs
    /// - [`ConfigError::UnknownVariant`] if the variant key is absent
    /// - [`ConfigError::InvalidVariant`] if the entry lacks required fields
    /// - [`ConfigError::EmptyField`] if `name` or `executableName` is blank
    pub fn build_config(&self, target: &str, variant: &str) -> Result<BuildConfigEntry, ConfigError> {
        let variants = self
            .build_configs
            .get(target)
            .ok_or_else(|| ConfigError::MissingTarget {
                target: target.to_string(),
            })?;

        let raw = variants
            .get(variant)
            .ok_or_else(|| ConfigError::UnknownVariant {
                variant: variant.to_string(),
                available: variants.keys().cloned().collect(),
            })?;

        let entry = BuildConfigEntry::deserialize(raw).map_err(|source| {
            ConfigError::InvalidVariant {
                variant: variant.to_string(),
                source,
            }
        })?;

        for (field, value) in [("name", &entry.name), ("executableName", &entry.executable_name)] {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField {
                    variant: variant.to_string(),
                    field,
                });
            }
        }

        Ok(entry)
    }
}
