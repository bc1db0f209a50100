//! Packaging pipeline orchestration.
//!
//! The pipeline is strictly linear and runs once:
//!
//! ```text
//! Start → NamesResolved → ArchitectureResolved → OptionsBuilt → Invoking → Succeeded | Failed
//! ```

use crate::error::{PackagerError, PipelineError, Result};
use crate::metadata::{DEB_TARGET, PackageManifest};
use crate::packaging::OutputManager;
use crate::packaging::settings::{
    ChannelContext, PackageLayout, PackageOptions, StaticMetadata, build_options,
    resolve_architecture, resolve_names,
};
use std::future::Future;

/// External capability that turns [`PackageOptions`] into a package.
pub trait Packager {
    /// Builds the package. Long running; awaited to completion.
    fn package(
        &self,
        options: &PackageOptions,
    ) -> impl Future<Output = std::result::Result<(), PackagerError>> + Send;
}

/// Pipeline position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Start,
    NamesResolved,
    ArchitectureResolved,
    OptionsBuilt,
    Invoking,
    Succeeded,
    Failed,
}

/// Architecture selectors as provided by the driver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchSelectors {
    /// `ARCH_OUTNAME`
    pub outname: Option<String>,
    /// `ARCH_ELECTRON`
    pub electron: Option<String>,
}

/// Everything needed to derive the options for one variant.
#[derive(Debug, Clone)]
pub struct PackageRequest<'a> {
    pub manifest: &'a PackageManifest,
    pub variant: &'a str,
    pub channel: &'a ChannelContext,
    pub arch: &'a ArchSelectors,
    pub metadata: &'a StaticMetadata,
    pub layout: &'a PackageLayout,
}

/// One packaging run.
#[derive(Debug)]
pub struct Pipeline {
    state: PipelineState,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            state: PipelineState::Start,
        }
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Moves to `next` if the current state is its predecessor.
    fn advance(
        &mut self,
        step: &'static str,
        next: PipelineState,
    ) -> std::result::Result<(), PipelineError> {
        use PipelineState::*;

        let allowed = match next {
            Start => false,
            NamesResolved => self.state == Start,
            ArchitectureResolved => self.state == NamesResolved,
            OptionsBuilt => self.state == ArchitectureResolved,
            Invoking => self.state == OptionsBuilt,
            Succeeded => self.state == Invoking,
            Failed => !matches!(self.state, Succeeded | Failed),
        };
        if !allowed {
            return Err(PipelineError::InvalidTransition {
                step,
                state: self.state,
            });
        }

        log::debug!("Pipeline: {:?} -> {:?}", self.state, next);
        self.state = next;
        Ok(())
    }

    fn require(
        &self,
        step: &'static str,
        state: PipelineState,
    ) -> std::result::Result<(), PipelineError> {
        if self.state == state {
            Ok(())
        } else {
            Err(PipelineError::InvalidTransition {
                step,
                state: self.state,
            })
        }
    }

    /// Derives the packager options for the requested variant.
    ///
    /// # Errors
    ///
    /// Fails with a configuration error if the variant is missing or invalid;
    /// nothing is built in that case. Only a fresh pipeline can prepare.
    pub fn prepare(
        &mut self,
        request: &PackageRequest<'_>,
        output: &OutputManager,
    ) -> Result<PackageOptions> {
        self.require("prepare", PipelineState::Start)?;

        let variant = match request.manifest.build_config(DEB_TARGET, request.variant) {
            Ok(variant) => variant,
            Err(e) => {
                self.advance("prepare", PipelineState::Failed)?;
                return Err(e.into());
            }
        };

        let names = resolve_names(&variant.name, &variant.executable_name, request.channel);
        self.advance("prepare", PipelineState::NamesResolved)?;
        log::debug!(
            "Resolved names: app dir '{}', executable '{}'",
            names.app_dir_name,
            names.executable_name
        );

        let arch = resolve_architecture(
            request.arch.outname.as_deref(),
            request.arch.electron.as_deref(),
        );
        if arch.is_consistent() == Some(false) {
            log::warn!(
                "ARCH_OUTNAME={} and ARCH_ELECTRON={} name different architectures",
                arch.outname,
                arch.electron
            );
            output.warn(&format!(
                "architecture pair ({}, {}) looks mismatched; packaging as given",
                arch.outname, arch.electron
            ))?;
        }
        self.advance("prepare", PipelineState::ArchitectureResolved)?;

        let options = build_options(&variant, &names, &arch, request.metadata, request.layout);
        self.advance("prepare", PipelineState::OptionsBuilt)?;

        Ok(options)
    }

    /// Invokes the packager and reports the outcome.
    ///
    /// Prints a progress line before the call and a confirmation naming the
    /// destination on success. Failures are returned without retry. The
    /// packager runs at most once per pipeline, and only after
    /// [`Pipeline::prepare`] succeeded.
    pub async fn execute<P: Packager>(
        &mut self,
        options: &PackageOptions,
        packager: &P,
        output: &OutputManager,
    ) -> Result<()> {
        self.require("execute", PipelineState::OptionsBuilt)?;

        output.progress(&format!(
            "Creating package for {} on arch {} (this may take a while)",
            options.product_name, options.arch
        ))?;
        self.advance("execute", PipelineState::Invoking)?;

        if let Err(e) = packager.package(options).await {
            self.advance("execute", PipelineState::Failed)?;
            return Err(e.into());
        }

        self.advance("execute", PipelineState::Succeeded)?;
        output.success(&format!(
            "Successfully created package at {}",
            options.dest.display()
        ))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, PackagingError};
    use std::sync::Mutex;

    const MANIFEST: &str = r#"{
        "electron": {
            "buildConfigs": {
                "linux-deb": {
                    "x64": { "name": "Threema", "executableName": "threema", "icons": "app/assets/icons/png" }
                }
            }
        }
    }"#;

    #[derive(Default)]
    struct RecordingPackager {
        calls: Mutex<Vec<PackageOptions>>,
        fail: bool,
    }

    impl Packager for RecordingPackager {
        async fn package(&self, options: &PackageOptions) -> std::result::Result<(), PackagerError> {
            self.calls.lock().unwrap().push(options.clone());
            if self.fail {
                return Err(PackagerError::Failed {
                    command: "electron-installer-debian".to_string(),
                    code: Some(1),
                    stderr: "Error: could not find the Electron app binary".to_string(),
                });
            }
            Ok(())
        }
    }

    struct Fixture {
        manifest: PackageManifest,
        channel: ChannelContext,
        arch: ArchSelectors,
        metadata: StaticMetadata,
        layout: PackageLayout,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                manifest: PackageManifest::from_json(MANIFEST).unwrap(),
                channel: ChannelContext::none(),
                arch: ArchSelectors::default(),
                metadata: StaticMetadata::default(),
                layout: PackageLayout::default(),
            }
        }

        fn request<'a>(&'a self, variant: &'a str) -> PackageRequest<'a> {
            PackageRequest {
                manifest: &self.manifest,
                variant,
                channel: &self.channel,
                arch: &self.arch,
                metadata: &self.metadata,
                layout: &self.layout,
            }
        }
    }

    #[tokio::test]
    async fn test_successful_run() {
        let fixture = Fixture::new();
        let output = OutputManager::buffered();
        let packager = RecordingPackager::default();
        let mut pipeline = Pipeline::new();

        let options = pipeline.prepare(&fixture.request("x64"), &output).unwrap();
        assert_eq!(pipeline.state(), PipelineState::OptionsBuilt);
        assert!(options.src.ends_with("Threema-linux-amd64/"));
        assert_eq!(options.arch, "x64");
        assert_eq!(options.bin, "threema");

        pipeline.execute(&options, &packager, &output).await.unwrap();
        assert_eq!(pipeline.state(), PipelineState::Succeeded);
        assert_eq!(packager.calls.lock().unwrap().as_slice(), &[options]);
        assert_eq!(
            output.lines(),
            vec![
                "Creating package for Threema on arch x64 (this may take a while)",
                "Successfully created package at app/build/dist-electron/installers",
            ]
        );
    }

    #[test]
    fn test_unknown_variant_never_invokes_packager() {
        let fixture = Fixture::new();
        let output = OutputManager::buffered();
        let mut pipeline = Pipeline::new();

        let err = pipeline
            .prepare(&fixture.request("arm64"), &output)
            .unwrap_err();
        assert!(matches!(
            err,
            PackagingError::Configuration(ConfigError::UnknownVariant { .. })
        ));
        assert_eq!(pipeline.state(), PipelineState::Failed);
        assert!(output.lines().is_empty());
    }

    #[tokio::test]
    async fn test_packager_failure_has_no_confirmation() {
        let fixture = Fixture::new();
        let output = OutputManager::buffered();
        let packager = RecordingPackager {
            fail: true,
            ..Default::default()
        };
        let mut pipeline = Pipeline::new();

        let options = pipeline.prepare(&fixture.request("x64"), &output).unwrap();
        let err = pipeline
            .execute(&options, &packager, &output)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            PackagingError::Packager(PackagerError::Failed { .. })
        ));
        assert_eq!(pipeline.state(), PipelineState::Failed);
        assert_eq!(packager.calls.lock().unwrap().len(), 1);
        assert!(
            !output
                .lines()
                .iter()
                .any(|l| l.starts_with("Successfully created package"))
        );
    }

    #[test]
    fn test_channel_and_arch_from_driver() {
        let mut fixture = Fixture::new();
        fixture.channel = ChannelContext::new("beta");
        fixture.arch = ArchSelectors {
            outname: Some("arm64".to_string()),
            electron: Some("arm64".to_string()),
        };
        let output = OutputManager::buffered();

        let options = Pipeline::new()
            .prepare(&fixture.request("x64"), &output)
            .unwrap();
        assert!(options.src.ends_with("Threema Beta-linux-arm64/"));
        assert_eq!(options.arch, "arm64");
        assert_eq!(options.bin, "threema-beta");
        assert!(output.lines().is_empty());
    }

    #[test]
    fn test_partial_arch_from_driver_is_defaulted() {
        let mut fixture = Fixture::new();
        fixture.arch = ArchSelectors {
            outname: Some("arm64".to_string()),
            electron: None,
        };
        let output = OutputManager::buffered();

        let options = Pipeline::new()
            .prepare(&fixture.request("x64"), &output)
            .unwrap();
        assert!(options.src.ends_with("-linux-amd64/"));
        assert_eq!(options.arch, "x64");
    }

    #[test]
    fn test_mismatched_arch_warns() {
        let mut fixture = Fixture::new();
        fixture.arch = ArchSelectors {
            outname: Some("x64".to_string()),
            electron: Some("arm64".to_string()),
        };
        let output = OutputManager::buffered();

        let options = Pipeline::new()
            .prepare(&fixture.request("x64"), &output)
            .unwrap();
        assert_eq!(options.arch, "x64");
        assert!(options.src.ends_with("-linux-arm64/"));
        assert_eq!(output.lines().len(), 1);
        assert!(output.lines()[0].starts_with("Warning:"));
    }

    #[tokio::test]
    async fn test_repeated_execute_runs_packager_once() {
        let fixture = Fixture::new();
        let output = OutputManager::buffered();
        let packager = RecordingPackager::default();
        let mut pipeline = Pipeline::new();

        let options = pipeline.prepare(&fixture.request("x64"), &output).unwrap();
        pipeline.execute(&options, &packager, &output).await.unwrap();

        let err = pipeline
            .execute(&options, &packager, &output)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            PackagingError::Pipeline(PipelineError::InvalidTransition {
                step: "execute",
                state: PipelineState::Succeeded,
            })
        ));
        assert_eq!(pipeline.state(), PipelineState::Succeeded);
        assert_eq!(packager.calls.lock().unwrap().len(), 1);
        assert_eq!(output.lines().len(), 2);
    }

    #[tokio::test]
    async fn test_execute_requires_prepared_options() {
        let fixture = Fixture::new();
        let output = OutputManager::buffered();
        let packager = RecordingPackager::default();

        let options = Pipeline::new()
            .prepare(&fixture.request("x64"), &output)
            .unwrap();

        let mut pipeline = Pipeline::new();
        let err = pipeline
            .execute(&options, &packager, &output)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            PackagingError::Pipeline(PipelineError::InvalidTransition {
                state: PipelineState::Start,
                ..
            })
        ));
        assert_eq!(pipeline.state(), PipelineState::Start);
        assert!(packager.calls.lock().unwrap().is_empty());
        assert!(output.lines().is_empty());
    }

    #[test]
    fn test_prepare_after_failure_is_rejected() {
        let fixture = Fixture::new();
        let output = OutputManager::buffered();
        let mut pipeline = Pipeline::new();

        assert!(pipeline.prepare(&fixture.request("arm64"), &output).is_err());
        let err = pipeline
            .prepare(&fixture.request("x64"), &output)
            .unwrap_err();
        assert!(matches!(
            err,
            PackagingError::Pipeline(PipelineError::InvalidTransition {
                step: "prepare",
                state: PipelineState::Failed,
            })
        ));
        assert_eq!(pipeline.state(), PipelineState::Failed);
    }

    #[test]
    fn test_prepare_runs_once() {
        let fixture = Fixture::new();
        let output = OutputManager::buffered();
        let mut pipeline = Pipeline::new();

        pipeline.prepare(&fixture.request("x64"), &output).unwrap();
        assert!(pipeline.prepare(&fixture.request("x64"), &output).is_err());
        assert_eq!(pipeline.state(), PipelineState::OptionsBuilt);
    }
}
