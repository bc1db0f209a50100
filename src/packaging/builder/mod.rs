//! Packaging orchestration.
//!
//! - [`orchestrator`] - [`Pipeline`] state machine and the [`Packager`] seam
//! - [`tool_detection`] - locating the packager executable

mod orchestrator;
mod tool_detection;

pub use orchestrator::{ArchSelectors, PackageRequest, Packager, Pipeline, PipelineState};
pub use tool_detection::{INSTALLER_DEBIAN, find_packager};
