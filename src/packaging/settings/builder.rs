//! Assembling [`PackageOptions`] from resolved inputs.

use super::{ArchitecturePair, PackageLayout, PackageOptions, ResolvedNames, StaticMetadata};
use crate::metadata::BuildConfigEntry;

/// Builds the packager options for one variant.
///
/// Pure assembly: the same inputs always produce the same record.
///
/// - `src` is `<packaged_dir>/<app_dir_name>-linux-<arch.electron>/`
/// - `name` and `productName` are the channel-qualified display name
/// - `bin` and `startupWmClass` are the channel-qualified executable name
/// - `arch` is the outname architecture (e.g. "x64")
///
/// # Examples
///
/// ```
/// use threema_desktop_packaging::metadata::{BuildConfigEntry, IconSpec};
/// use threema_desktop_packaging::packaging::{
///     build_options, resolve_architecture, resolve_names, ChannelContext, PackageLayout,
///     StaticMetadata,
/// };
///
/// let variant = BuildConfigEntry {
///     name: "Threema".into(),
///     executable_name: "threema".into(),
///     icons: IconSpec::Single("app/assets/icons/png".into()),
/// };
/// let names = resolve_names(&variant.name, &variant.executable_name, &ChannelContext::none());
/// let arch = resolve_architecture(None, None);
/// let options = build_options(
///     &variant,
///     &names,
///     &arch,
///     &StaticMetadata::default(),
///     &PackageLayout::default(),
/// );
///
/// assert!(options.src.ends_with("Threema-linux-amd64/"));
/// assert_eq!(options.arch, "x64");
/// ```
pub fn build_options(
    variant: &BuildConfigEntry,
    names: &ResolvedNames,
    arch: &ArchitecturePair,
    metadata: &StaticMetadata,
    layout: &PackageLayout,
) -> PackageOptions {
    PackageOptions {
        desktop_template: layout.desktop_template.clone(),
        src: layout.source_dir(&names.app_dir_name, &arch.electron),
        dest: layout.dest.clone(),
        name: names.app_dir_name.clone(),
        bin: names.executable_name.clone(),
        product_name: names.app_dir_name.clone(),
        startup_wm_class: names.executable_name.clone(),
        generic_name: metadata.generic_name.clone(),
        maintainer: metadata.maintainer.clone(),
        icon: variant.icons.clone(),
        arch: arch.outname.clone(),
        homepage: metadata.homepage.clone(),
        categories: metadata.categories.clone(),
        description: metadata.description.clone(),
        product_description: metadata.product_description.clone(),
        section: metadata.section.clone(),
    }
}
