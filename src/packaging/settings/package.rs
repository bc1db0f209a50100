//! Package metadata shared by every variant.

use std::path::PathBuf;

/// Metadata that does not depend on variant, channel or architecture.
///
/// Defaults carry the values shipped with the Threema desktop client.
///
/// # Examples
///
/// ```
/// use threema_desktop_packaging::packaging::StaticMetadata;
///
/// let metadata = StaticMetadata::default();
/// assert_eq!(metadata.section, "comm");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticMetadata {
    /// Generic name shown by desktop environments ("Desktop Client").
    pub generic_name: String,

    /// Maintainer in `Name <email>` form.
    pub maintainer: String,

    /// Homepage URL.
    pub homepage: String,

    /// freedesktop.org categories.
    pub categories: Vec<String>,

    /// One-line description.
    pub description: String,

    /// Long description for the control file.
    pub product_description: String,

    /// Debian archive section.
    pub section: String,
}

impl Default for StaticMetadata {
    fn default() -> Self {
        Self {
            generic_name: "Threema Desktop Client".to_string(),
            maintainer: "Threema GmbH <help@threema.ch>".to_string(),
            homepage: "https://threema.ch".to_string(),
            categories: ["Network", "InstantMessaging", "Chat"]
                .into_iter()
                .map(String::from)
                .collect(),
            description: "Desktop client for Threema (requires the mobile app)".to_string(),
            product_description: "Threema for desktop is a wrapped version of Threema Web. \
                A multi-device solution will become available at a later date."
                .to_string(),
            section: "comm".to_string(),
        }
    }
}

/// Where the packager reads its input and writes the package.
///
/// Paths are relative to the project root the packager runs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageLayout {
    /// Desktop entry template rendered by the packager.
    pub desktop_template: PathBuf,

    /// Directory holding the prebuilt `<name>-linux-<arch>` application bundles.
    pub packaged_dir: PathBuf,

    /// Directory the package is written to.
    pub dest: PathBuf,
}

impl Default for PackageLayout {
    fn default() -> Self {
        Self {
            desktop_template: PathBuf::from("app/assets/desktop.ejs"),
            packaged_dir: PathBuf::from("app/build/dist-electron/packaged"),
            dest: PathBuf::from("app/build/dist-electron/installers"),
        }
    }
}

impl PackageLayout {
    /// Source directory of the prebuilt application bundle.
    ///
    /// Keeps a trailing separator; the packager treats `src` as a directory.
    pub fn source_dir(&self, app_dir_name: &str, electron_arch: &str) -> String {
        let bundle = format!("{}-linux-{}", app_dir_name, electron_arch);
        format!("{}/", self.packaged_dir.join(bundle).display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_dir() {
        let layout = PackageLayout::default();
        assert_eq!(
            layout.source_dir("Threema Beta", "amd64"),
            "app/build/dist-electron/packaged/Threema Beta-linux-amd64/"
        );
    }

    #[test]
    fn test_default_categories() {
        let metadata = StaticMetadata::default();
        assert_eq!(
            metadata.categories,
            vec!["Network", "InstantMessaging", "Chat"]
        );
    }
}
