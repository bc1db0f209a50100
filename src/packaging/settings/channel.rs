//! Build channel naming.

/// Active build channel, if any.
///
/// A channel (e.g. "beta") qualifies both the display name and the executable
/// name of a package so that several channels can be installed side by side.
///
/// # Examples
///
/// ```
/// use threema_desktop_packaging::packaging::ChannelContext;
///
/// let beta = ChannelContext::new("beta");
/// assert!(beta.has_channel_name());
/// assert_eq!(beta.titlecase_channel_name(), Some("Beta"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChannelContext {
    channel: Option<Channel>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Channel {
    name: String,
    titlecase: String,
}

impl ChannelContext {
    /// No active channel (stable builds).
    pub fn none() -> Self {
        Self::default()
    }

    /// Channel from a raw identifier. Blank identifiers mean no channel.
    pub fn new(raw: &str) -> Self {
        let name = raw.trim().to_lowercase();
        if name.is_empty() {
            return Self::none();
        }

        let mut chars = name.chars();
        let titlecase = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };

        Self {
            channel: Some(Channel { name, titlecase }),
        }
    }

    /// Channel from an optional identifier, as read from the driver environment.
    pub fn from_option(raw: Option<&str>) -> Self {
        raw.map(Self::new).unwrap_or_default()
    }

    pub fn has_channel_name(&self) -> bool {
        self.channel.is_some()
    }

    /// Lowercase channel identifier, used in executable names.
    pub fn channel_name(&self) -> Option<&str> {
        self.channel.as_ref().map(|c| c.name.as_str())
    }

    /// Title-cased channel identifier, used in display names.
    pub fn titlecase_channel_name(&self) -> Option<&str> {
        self.channel.as_ref().map(|c| c.titlecase.as_str())
    }
}

/// Channel-qualified application and executable names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedNames {
    /// Display name; also the name of the packaged application directory.
    pub app_dir_name: String,
    /// Binary name; also the window manager class.
    pub executable_name: String,
}

/// Qualifies the base names with the active channel.
///
/// The display name is space-joined with the title-cased channel
/// ("Threema Beta"); the executable name is hyphen-joined with the lowercase
/// channel ("threema-beta"). Without a channel both names pass through.
pub fn resolve_names(
    base_app_name: &str,
    base_executable_name: &str,
    channel: &ChannelContext,
) -> ResolvedNames {
    match &channel.channel {
        Some(Channel { name, titlecase }) => ResolvedNames {
            app_dir_name: format!("{} {}", base_app_name, titlecase),
            executable_name: format!("{}-{}", base_executable_name, name),
        },
        None => ResolvedNames {
            app_dir_name: base_app_name.to_string(),
            executable_name: base_executable_name.to_string(),
        },
    }
}
