//! Appcast loading service that ties the parser components together.

use std::fs;
use std::path::Path;

use crate::config::{FeedConfig, DEFAULT_MAX_RESPONSE_SIZE};
use crate::download::download_appcast_xml;
use crate::error::Result;
use crate::http::create_client;
use crate::parser::{select_release, FeedHandler, XmlEngine};
use crate::types::ReleaseDescriptor;

/// Parse an appcast with the default Sparkle settings and pick the release
/// for this platform.
///
/// # Arguments
/// * `xml` - The complete feed document
///
/// # Returns
/// The first item marked for this platform, or the first item of the feed
///
/// # Examples
/// ```
/// let xml = r#"<rss><channel><item>
///   <title>1.0</title>
///   <enclosure url="http://x/1.0.zip"/>
/// </item></channel></rss>"#;
///
/// let release = appcast::load(xml).unwrap();
/// assert_eq!(release.title, "1.0");
/// assert_eq!(release.download_url.as_deref(), Some("http://x/1.0.zip"));
/// ```
pub fn load(xml: &str) -> Result<ReleaseDescriptor> {
    load_with_config(xml, &FeedConfig::default())
}

/// Parse an appcast and pick the release for `config.platform_marker`.
///
/// # Errors
/// * `InvalidConfig` if the configuration is rejected
/// * `EngineCreation` if the XML engine cannot be set up
/// * `Parse` if the document is not well-formed
/// * `NoItemsFound` if the first channel has no items
pub fn load_with_config(xml: &str, config: &FeedConfig) -> Result<ReleaseDescriptor> {
    let releases = parse_releases(xml, config)?;
    select_release(releases, &config.platform_marker)
}

/// Parse an appcast into its releases in document order.
///
/// Parsing ends at the first item marked for this platform or at the end of
/// the first channel, so later items are not included.
pub fn parse_releases(xml: &str, config: &FeedConfig) -> Result<Vec<ReleaseDescriptor>> {
    config.validate()?;

    let mut handler = FeedHandler::new(config.platform_marker.as_str());
    let status = {
        let mut engine = XmlEngine::create(xml, &config.namespace)?;
        engine.run(&mut handler)?
    };

    let releases = handler.into_releases();
    tracing::debug!(?status, items = releases.len(), "Parsed appcast");
    Ok(releases)
}

/// Read an appcast from a file and pick the release for this platform.
pub fn read_appcast(path: &Path, config: &FeedConfig) -> Result<ReleaseDescriptor> {
    let xml = fs::read_to_string(path)?;
    load_with_config(&xml, config)
}

/// Download an appcast and pick the release for this platform.
pub fn fetch_appcast(url: &str, config: &FeedConfig) -> Result<ReleaseDescriptor> {
    let client = create_client()?;
    let xml = download_appcast_xml(&client, url, DEFAULT_MAX_RESPONSE_SIZE)?;
    load_with_config(&xml, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppcastError;
    use pretty_assertions::assert_eq;

    const HEADER: &str =
        r#"<rss version="2.0" xmlns:sparkle="http://www.andymatuschak.org/xml-namespaces/sparkle">"#;

    fn feed(items: &str) -> String {
        format!("{HEADER}<channel><title>App</title>{items}</channel></rss>")
    }

    #[test]
    fn test_single_item_without_os() {
        let xml = feed(
            r#"<item><title>1.0</title><enclosure url="http://x/1.0.zip"/></item>"#,
        );
        let release = load(&xml).unwrap();

        assert_eq!(
            release,
            ReleaseDescriptor {
                title: "1.0".to_string(),
                download_url: Some("http://x/1.0.zip".to_string()),
                ..Default::default()
            }
        );
        assert_eq!(release.os, None);
    }

    #[test]
    fn test_platform_item_is_selected() {
        let xml = feed(
            r#"<item><title>A</title><enclosure sparkle:os="mac"/></item>
<item><title>B</title><enclosure sparkle:os="windows"/></item>"#,
        );
        let release = load(&xml).unwrap();
        assert_eq!(release.title, "B");
        assert_eq!(release.os.as_deref(), Some("windows"));
    }

    #[test]
    fn test_only_foreign_platform_falls_back() {
        let xml = feed(r#"<item><title>A</title><enclosure sparkle:os="mac"/></item>"#);
        let release = load(&xml).unwrap();
        assert_eq!(release.title, "A");
        assert_eq!(release.os.as_deref(), Some("mac"));
    }

    #[test]
    fn test_channel_without_items() {
        let xml = feed("");
        assert!(matches!(load(&xml), Err(AppcastError::NoItemsFound)));
    }

    #[test]
    fn test_truncated_document() {
        match load("<channel><item>") {
            Err(AppcastError::Parse { message, .. }) => assert!(!message.is_empty()),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_items_after_platform_match_are_not_read() {
        let xml = feed(
            r#"<item><title>win</title><enclosure sparkle:os="windows"/></item>
<item><title>later</title><enclosure sparkle:os="windows" url="http://x/sentinel"/></item>"#,
        );
        let releases = parse_releases(&xml, &FeedConfig::default()).unwrap();

        assert_eq!(releases.len(), 1);
        assert_eq!(releases[0].download_url, None);
    }

    #[test]
    fn test_only_first_channel_is_read() {
        let xml = format!(
            "{HEADER}<channel><item><title>first</title></item></channel>\
             <channel><item><title>second</title></item></channel></rss>"
        );
        let releases = parse_releases(&xml, &FeedConfig::default()).unwrap();
        assert_eq!(releases.len(), 1);
        assert_eq!(releases[0].title, "first");
    }

    #[test]
    fn test_custom_platform_marker() {
        let xml = feed(
            r#"<item><title>A</title><enclosure sparkle:os="windows"/></item>
<item><title>B</title><enclosure sparkle:os="macos"/></item>"#,
        );
        let config = FeedConfig::default().with_platform_marker("macos");
        assert_eq!(load_with_config(&xml, &config).unwrap().title, "B");
    }

    #[test]
    fn test_custom_namespace() {
        let xml = r#"<rss xmlns:up="urn:example:updates"><channel>
<item><title>A</title><enclosure up:os="mac"/></item>
<item><title>B</title><enclosure up:os="windows" up:version="2"/></item>
</channel></rss>"#;
        let config = FeedConfig::default().with_namespace("urn:example:updates");
        let release = load_with_config(xml, &config).unwrap();

        assert_eq!(release.title, "B");
        assert_eq!(release.version.as_deref(), Some("2"));

        // With the default namespace the `up:` attributes are unknown
        assert_eq!(load(xml).unwrap().title, "A");
        assert_eq!(load(xml).unwrap().os, None);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = FeedConfig::default().with_platform_marker("");
        assert!(matches!(
            load_with_config("<rss/>", &config),
            Err(AppcastError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_engine_creation_failure() {
        let config = FeedConfig::default().with_namespace("");
        assert!(matches!(
            load_with_config("<rss/>", &config),
            Err(AppcastError::EngineCreation(_))
        ));
    }

    #[test]
    fn test_read_appcast_missing_file() {
        let result = read_appcast(Path::new("/nonexistent/appcast.xml"), &FeedConfig::default());
        assert!(matches!(result, Err(AppcastError::Io(_))));
    }
}
