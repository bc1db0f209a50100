//! Platform-specific packager backends.

pub mod linux;

pub use linux::debian::InstallerDebian;
