//! CPU architecture selectors and defaulting.

/// Architecture used when the driver does not supply a complete pair.
pub const DEFAULT_OUTNAME: &str = "x64";
/// Debian architecture matching [`DEFAULT_OUTNAME`].
pub const DEFAULT_ELECTRON: &str = "amd64";

/// Architectures with a known name in both conventions.
///
/// Used to sanity check a pair supplied by the driver. Unknown pairs are
/// still packaged as given.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Arch {
    /// x86_64 / AMD64 (64-bit)
    X86_64,
    /// x86 / i686 (32-bit)
    X86,
    /// AArch64 / ARM64 (64-bit)
    AArch64,
    /// ARMv7 with hard-float (32-bit)
    Armhf,
}

impl Arch {
    const ALL: [Arch; 4] = [Arch::X86_64, Arch::X86, Arch::AArch64, Arch::Armhf];

    /// Name in output directory/file naming (`ARCH_OUTNAME`).
    pub fn outname(self) -> &'static str {
        match self {
            Arch::X86_64 => "x64",
            Arch::X86 => "ia32",
            Arch::AArch64 => "arm64",
            Arch::Armhf => "armv7l",
        }
    }

    /// Name in the Debian packaging convention (`ARCH_ELECTRON`).
    pub fn debian(self) -> &'static str {
        match self {
            Arch::X86_64 => "amd64",
            Arch::X86 => "i386",
            Arch::AArch64 => "arm64",
            Arch::Armhf => "armhf",
        }
    }

    pub fn from_outname(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.outname() == name)
    }

    pub fn from_debian(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.debian() == name)
    }
}

/// The two names of the target architecture.
///
/// `outname` names output directories and the package architecture field;
/// `electron` names the packaged application directory on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchitecturePair {
    pub outname: String,
    pub electron: String,
}

impl Default for ArchitecturePair {
    fn default() -> Self {
        Self {
            outname: DEFAULT_OUTNAME.to_string(),
            electron: DEFAULT_ELECTRON.to_string(),
        }
    }
}

impl ArchitecturePair {
    /// Whether both halves name the same known architecture.
    ///
    /// Returns `None` when either half is not in the known table.
    pub fn is_consistent(&self) -> Option<bool> {
        let out = Arch::from_outname(&self.outname)?;
        let deb = Arch::from_debian(&self.electron)?;
        Some(out == deb)
    }
}

/// Resolves the driver's architecture selectors.
///
/// The pair is all-or-nothing: if either half is unset or empty both fall
/// back to `("x64", "amd64")`.
pub fn resolve_architecture(outname: Option<&str>, electron: Option<&str>) -> ArchitecturePair {
    match (outname, electron) {
        (Some(outname), Some(electron)) if !outname.is_empty() && !electron.is_empty() => {
            ArchitecturePair {
                outname: outname.to_string(),
                electron: electron.to_string(),
            }
        }
        _ => ArchitecturePair::default(),
    }
}
