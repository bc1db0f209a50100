//! Command line interface for the Debian packager.
//!
//! Parses arguments, reads the driver environment, derives the package
//! options and runs the packager.

mod args;

pub use args::{Args, DriverEnv, ENV_ARCH_ELECTRON, ENV_ARCH_OUTNAME, ENV_BUILD_CHANNEL};

use crate::error::{CliError, Result};
use crate::metadata::PackageManifest;
use crate::packaging::{
    InstallerDebian, OutputManager, PackageLayout, PackageRequest, Pipeline, StaticMetadata,
};
use anyhow::Context;

/// Main CLI entry point
///
/// Usage errors exit with status 1 like every other failure.
pub async fn run() -> Result<i32> {
    let args = match Args::parse_args() {
        Ok(args) => args,
        Err(e) => {
            e.print()?;
            return Ok(if e.use_stderr() { 1 } else { 0 });
        }
    };
    let driver = DriverEnv::from_env();
    execute(&args, &driver).await
}

/// Run a packaging pass for parsed arguments and driver selectors
pub async fn execute(args: &Args, driver: &DriverEnv) -> Result<i32> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;

    let output = OutputManager::new(args.quiet);
    let manifest = PackageManifest::load(&args.manifest_path())?;
    let metadata = StaticMetadata::default();
    let layout = PackageLayout::default();

    let request = PackageRequest {
        manifest: &manifest,
        variant: &args.variant,
        channel: &driver.channel,
        arch: &driver.arch,
        metadata: &metadata,
        layout: &layout,
    };

    let mut pipeline = Pipeline::new();
    let options = pipeline.prepare(&request, &output)?;

    if args.dry_run {
        let json = options
            .to_json()
            .context("serializing package options")?;
        output.println(&json)?;
        return Ok(0);
    }

    let packager = InstallerDebian::locate(&args.installer, &args.project_root)?;
    log::debug!("Packager: {}", packager.program().display());

    pipeline.execute(&options, &packager, &output).await?;

    Ok(0)
}
