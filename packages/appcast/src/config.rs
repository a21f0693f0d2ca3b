//! Configuration constants and feed settings for the appcast reader.

use crate::error::{AppcastError, Result};

/// XML namespace of the Sparkle update attributes and elements.
pub const SPARKLE_NAMESPACE: &str = "http://www.andymatuschak.org/xml-namespaces/sparkle";

/// Value of `sparkle:os` that marks a release for the running platform.
pub const PLATFORM_MARKER: &str = "windows";

/// HTTP timeout in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Default maximum HTTP response size in bytes (10 MB).
///
/// Appcasts are small; anything larger is almost certainly not a feed.
pub const DEFAULT_MAX_RESPONSE_SIZE: u64 = 10 * 1024 * 1024;

/// Text wrap width for release descriptions in CLI output.
pub const TEXT_WRAP_WIDTH: usize = 80;

/// Settings that control how a feed is interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    /// Namespace URI carrying the update-specific names.
    pub namespace: String,
    /// `os` value identifying releases for the running platform.
    pub platform_marker: String,
}

impl FeedConfig {
    /// Replace the platform marker.
    #[must_use]
    pub fn with_platform_marker(mut self, marker: impl Into<String>) -> Self {
        self.platform_marker = marker.into();
        self
    }

    /// Replace the vendor namespace URI.
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Validate the settings.
    ///
    /// The namespace itself is checked when the XML engine is created.
    ///
    /// # Examples
    /// ```
    /// use appcast::config::FeedConfig;
    ///
    /// assert!(FeedConfig::default().validate().is_ok());
    /// assert!(FeedConfig::default().with_platform_marker("").validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.platform_marker.is_empty() {
            return Err(AppcastError::InvalidConfig(
                "platform marker must not be empty".to_string(),
            ));
        }
        if self.platform_marker.trim() != self.platform_marker {
            return Err(AppcastError::InvalidConfig(format!(
                "platform marker '{}' has surrounding whitespace",
                self.platform_marker
            )));
        }
        Ok(())
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            namespace: SPARKLE_NAMESPACE.to_string(),
            platform_marker: PLATFORM_MARKER.to_string(),
        }
    }
}

/// Check whether a feed source names a remote document.
///
/// # Examples
/// ```
/// use appcast::config::is_remote_source;
///
/// assert!(is_remote_source("https://example.com/appcast.xml"));
/// assert!(!is_remote_source("appcast.xml"));
/// ```
#[must_use]
pub fn is_remote_source(source: &str) -> bool {
    let lower = source.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
