//! Debian packages via `electron-installer-debian`.

use crate::error::PackagerError;
use crate::packaging::builder::{Packager, find_packager};
use crate::packaging::settings::PackageOptions;
use std::path::{Path, PathBuf};
use std::process::Stdio;

/// Drives `electron-installer-debian`.
///
/// The options record is written to a temporary JSON file and passed with
/// `--config`; the tool runs in the project root because it reads the
/// project's `package.json`.
#[derive(Debug, Clone)]
pub struct InstallerDebian {
    program: PathBuf,
    project_root: PathBuf,
}

impl InstallerDebian {
    pub fn new(program: PathBuf, project_root: PathBuf) -> Self {
        Self {
            program,
            project_root,
        }
    }

    /// Locate `tool` (see [`find_packager`]) and run it in `project_root`.
    pub fn locate(tool: &str, project_root: &Path) -> Result<Self, PackagerError> {
        let program = find_packager(tool, project_root)?;
        Ok(Self::new(program, project_root.to_path_buf()))
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn command_name(&self) -> String {
        self.program
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.program.display().to_string())
    }

    async fn invoke(&self, options: &PackageOptions, config_path: &Path) -> Result<(), PackagerError> {
        let command = self.command_name();
        log::debug!(
            "Running {} --src {} --dest {} --arch {} --config {}",
            self.program.display(),
            options.src,
            options.dest.display(),
            options.arch,
            config_path.display()
        );

        let output = tokio::process::Command::new(&self.program)
            .arg("--src")
            .arg(&options.src)
            .arg("--dest")
            .arg(&options.dest)
            .arg("--arch")
            .arg(&options.arch)
            .arg("--config")
            .arg(config_path)
            .current_dir(&self.project_root)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| PackagerError::Spawn {
                command: command.clone(),
                source,
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if !output.status.success() {
            return Err(PackagerError::Failed {
                command,
                code: output.status.code(),
                stderr,
            });
        }

        if !stderr.is_empty() {
            log::debug!("{} stderr: {}", command, stderr);
        }

        Ok(())
    }
}

impl Packager for InstallerDebian {
    async fn package(&self, options: &PackageOptions) -> Result<(), PackagerError> {
        let config_path =
            std::env::temp_dir().join(format!("package-deb-{}.json", uuid::Uuid::new_v4()));

        let json = options.to_json()?;
        tokio::fs::write(&config_path, json)
            .await
            .map_err(|source| PackagerError::ConfigWrite {
                path: config_path.clone(),
                source,
            })?;

        let result = self.invoke(options, &config_path).await;

        if let Err(e) = tokio::fs::remove_file(&config_path).await {
            log::debug!("Failed to remove {}: {}", config_path.display(), e);
        }

        result
    }
}
