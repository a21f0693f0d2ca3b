//! Error types for the appcast reader.
//!
//! The parsing core raises only `EngineCreation`, `Parse` and `NoItemsFound`.
//! The remaining variants belong to the outer surfaces (configuration,
//! feed download, CLI output).

use std::fmt;

use thiserror::Error;

/// Location of a parse failure inside the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextPosition {
    /// Byte offset from the start of the document.
    pub offset: u64,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub column: usize,
}

impl TextPosition {
    /// Compute line and column for a byte offset into `text`.
    ///
    /// Offsets past the end of the text are clamped to the end.
    ///
    /// # Examples
    /// ```
    /// use appcast::error::TextPosition;
    ///
    /// let pos = TextPosition::locate("<a>\n<b>", 5);
    /// assert_eq!((pos.line, pos.column), (2, 2));
    /// ```
    #[must_use]
    pub fn locate(text: &str, offset: u64) -> Self {
        let end = usize::try_from(offset).unwrap_or(usize::MAX).min(text.len());
        let mut end = end;
        while !text.is_char_boundary(end) {
            end -= 1;
        }

        let consumed = &text[..end];
        let line = consumed.matches('\n').count() + 1;
        let line_start = consumed.rfind('\n').map_or(0, |i| i + 1);
        let column = consumed[line_start..].chars().count() + 1;

        Self {
            offset,
            line,
            column,
        }
    }
}

impl fmt::Display for TextPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Main error type for the appcast library.
#[derive(Debug, Error)]
pub enum AppcastError {
    /// The XML engine could not be set up.
    #[error("Failed to create XML parser: {0}")]
    EngineCreation(String),

    /// The document is not well-formed, or the engine reported an error.
    #[error("XML parser error: {message} at {position}")]
    Parse {
        message: String,
        position: TextPosition,
    },

    /// The feed contains no `<item>` inside its `<channel>`.
    #[error("No items found in appcast feed")]
    NoItemsFound,

    /// Invalid feed configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to download the feed document.
    #[error("Failed to download appcast from {url}: {source}")]
    FeedDownload {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// All retry attempts for a download failed.
    #[error("Request failed after {attempts} attempts: {message}")]
    RetriesExhausted { attempts: u32, message: String },

    /// The response body exceeded the configured limit.
    #[error("Response too large: {size} bytes exceeds limit of {limit} bytes")]
    ResponseTooLarge { size: u64, limit: u64 },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),
}

impl AppcastError {
    /// Build a parse error, locating `offset` inside `text`.
    pub(crate) fn parse(message: impl Into<String>, text: &str, offset: u64) -> Self {
        Self::Parse {
            message: message.into(),
            position: TextPosition::locate(text, offset),
        }
    }
}

/// Result type alias for appcast operations.
pub type Result<T> = std::result::Result<T, AppcastError>;
