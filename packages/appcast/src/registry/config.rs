//! Registry configuration for Sparkle appcasts.

use super::table::NameRegistry;
use super::types::{AttributeKind, ElementKind};

/// Create a name registry for an appcast using `namespace` as the vendor
/// namespace.
///
/// Base RSS names (`channel`, `item`, `title`, `description`, `enclosure`,
/// `url`) are not in any namespace.
#[must_use]
pub fn create_appcast_registry(namespace: &str) -> NameRegistry {
    let mut registry = NameRegistry::new();

    // RSS elements
    registry.register_element(None, "channel", ElementKind::Channel);
    registry.register_element(None, "item", ElementKind::Item);
    registry.register_element(None, "title", ElementKind::Title);
    registry.register_element(None, "description", ElementKind::Description);
    registry.register_element(None, "enclosure", ElementKind::Enclosure);

    // Vendor elements
    registry.register_element(
        Some(namespace),
        "releaseNotesLink",
        ElementKind::ReleaseNotesLink,
    );

    // Enclosure attributes
    registry.register_attribute(None, "url", AttributeKind::Url);
    registry.register_attribute(Some(namespace), "version", AttributeKind::Version);
    registry.register_attribute(
        Some(namespace),
        "shortVersionString",
        AttributeKind::ShortVersionString,
    );
    registry.register_attribute(Some(namespace), "os", AttributeKind::Os);

    registry
}
