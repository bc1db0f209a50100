//! Configuration derivation for Debian packaging.
//!
//! Resolves channel-qualified names, defaults the architecture pair and
//! assembles the [`PackageOptions`] record consumed by the packager.

mod arch;
mod builder;
mod channel;
mod options;
mod package;

pub use arch::{Arch, ArchitecturePair, DEFAULT_ELECTRON, DEFAULT_OUTNAME, resolve_architecture};
pub use builder::build_options;
pub use channel::{ChannelContext, ResolvedNames, resolve_names};
pub use options::PackageOptions;
pub use package::{PackageLayout, StaticMetadata};
