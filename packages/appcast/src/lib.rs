//! Appcast reader - parse Sparkle update feeds.
//!
//! An appcast is an RSS feed whose `<item>`s describe software releases,
//! with update details carried in attributes of the Sparkle namespace. This
//! crate reads such a feed in a single streaming pass and picks the release
//! offered to the running platform.
//!
//! # Example
//!
//! ```
//! let xml = r#"<rss xmlns:sparkle="http://www.andymatuschak.org/xml-namespaces/sparkle">
//!   <channel>
//!     <item>
//!       <title>Version 2.0 for Mac</title>
//!       <enclosure url="https://example.com/app-2.0.dmg" sparkle:os="mac"/>
//!     </item>
//!     <item>
//!       <title>Version 2.0</title>
//!       <enclosure url="https://example.com/app-2.0.exe"
//!                  sparkle:version="2.0.1234" sparkle:os="windows"/>
//!     </item>
//!   </channel>
//! </rss>"#;
//!
//! let release = appcast::load(xml).unwrap();
//! assert_eq!(release.title, "Version 2.0");
//! assert_eq!(release.version.as_deref(), Some("2.0.1234"));
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants and feed settings
//! - [`types`]: The release descriptor
//! - [`error`]: Error types and Result alias
//! - [`registry`]: Lookup table from qualified names to semantic tags
//! - [`parser`]: XML engine, feed state machine and selection policy
//! - [`loader`]: Entry points tying the parser together
//! - [`http`]: HTTP client for downloading feeds
//! - [`download`]: Feed document downloading
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod http;
pub mod loader;
pub mod parser;
pub mod registry;
pub mod types;

// Re-export main functions
pub use loader::{fetch_appcast, load, load_with_config, parse_releases, read_appcast};

// Re-export commonly used items
pub use config::FeedConfig;
pub use error::{AppcastError, Result};
pub use types::ReleaseDescriptor;
