//! Debian packaging for the desktop client.
//!
//! Derives the packager options for a build variant and drives the external
//! packager:
//!
//! 1. Look up the variant in the package.json build configs
//! 2. Qualify names with the active channel
//! 3. Default the architecture pair
//! 4. Assemble [`PackageOptions`]
//! 5. Invoke the [`Packager`] and report the outcome

pub mod builder;
mod output;
pub mod platform;
pub mod settings;

pub use builder::{
    ArchSelectors, INSTALLER_DEBIAN, PackageRequest, Packager, Pipeline, PipelineState,
    find_packager,
};
pub use output::OutputManager;
pub use platform::InstallerDebian;
pub use settings::{
    Arch, ArchitecturePair, ChannelContext, PackageLayout, PackageOptions, ResolvedNames,
    StaticMetadata, build_options, resolve_architecture, resolve_names,
};
