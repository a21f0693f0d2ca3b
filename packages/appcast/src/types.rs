//! Core data types for the appcast reader.

use serde::{Deserialize, Serialize};

/// One candidate release extracted from an appcast `<item>`.
///
/// Attribute-backed fields are `None` when the feed does not carry them;
/// text-backed fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseDescriptor {
    /// Enclosure `url` attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,

    /// `sparkle:version` attribute (machine-readable build version).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// `sparkle:shortVersionString` attribute (human-readable version).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_version_string: Option<String>,

    /// `sparkle:os` attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,

    /// Content of `<title>`.
    #[serde(default)]
    pub title: String,

    /// Content of `<description>`.
    #[serde(default)]
    pub description: String,

    /// Content of `<sparkle:releaseNotesLink>`.
    #[serde(default)]
    pub release_notes_url: String,
}

impl ReleaseDescriptor {
    /// Check whether this release targets the given platform.
    ///
    /// # Examples
    /// ```
    /// use appcast::types::ReleaseDescriptor;
    ///
    /// let release = ReleaseDescriptor {
    ///     os: Some("windows".to_string()),
    ///     ..Default::default()
    /// };
    /// assert!(release.targets("windows"));
    /// assert!(!release.targets("macos"));
    /// ```
    #[must_use]
    pub fn targets(&self, platform: &str) -> bool {
        self.os.as_deref() == Some(platform)
    }

    /// Check whether the release carries a usable download URL.
    #[must_use]
    pub fn has_download(&self) -> bool {
        self.download_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty())
    }

    /// Version to show to users.
    ///
    /// Prefers the short version string and falls back to the build version.
    ///
    /// # Examples
    /// ```
    /// use appcast::types::ReleaseDescriptor;
    ///
    /// let release = ReleaseDescriptor {
    ///     version: Some("1042".to_string()),
    ///     short_version_string: Some("1.4.2".to_string()),
    ///     ..Default::default()
    /// };
    /// assert_eq!(release.display_version(), Some("1.4.2"));
    /// ```
    #[must_use]
    pub fn display_version(&self) -> Option<&str> {
        self.short_version_string
            .as_deref()
            .filter(|v| !v.is_empty())
            .or(self.version.as_deref())
    }
}
