//! Locating the packager executable.

use crate::error::PackagerError;
use std::path::{Path, PathBuf};

/// Default packager executable name
pub const INSTALLER_DEBIAN: &str = "electron-installer-debian";

/// Find the packager executable.
///
/// Looks in the project's `node_modules/.bin` first, then on `PATH`. A tool
/// given as a path is checked directly.
pub fn find_packager(tool: &str, project_root: &Path) -> Result<PathBuf, PackagerError> {
    let local_bin = project_root.join("node_modules").join(".bin");

    if let Ok(path) = which::which_in(tool, Some(&local_bin), project_root) {
        log::info!("✓ Using project-local {}", path.display());
        return Ok(path);
    }

    match which::which(tool) {
        Ok(path) => {
            log::info!("✓ Using {}", path.display());
            Ok(path)
        }
        Err(source) => {
            log::debug!("{} not found in {} or PATH", tool, local_bin.display());
            Err(PackagerError::ToolNotFound {
                tool: tool.to_string(),
                source,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tool() {
        let root = tempfile::tempdir().unwrap();
        let err = find_packager("definitely-not-a-real-packager-tool", root.path()).unwrap_err();
        assert!(matches!(err, PackagerError::ToolNotFound { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_prefers_project_local_tool() {
        use std::os::unix::fs::PermissionsExt;

        let root = tempfile::tempdir().unwrap();
        let bin = root.path().join("node_modules").join(".bin");
        std::fs::create_dir_all(&bin).unwrap();
        let tool = bin.join("fake-installer-debian");
        std::fs::write(&tool, "#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755)).unwrap();

        let found = find_packager("fake-installer-debian", root.path()).unwrap();
        assert_eq!(found, tool);
    }
}
