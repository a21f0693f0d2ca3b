//! Semantic tags for appcast names.

/// Elements the feed state machine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// `<channel>`.
    Channel,
    /// `<item>`, one release.
    Item,
    /// `<title>`.
    Title,
    /// `<description>`.
    Description,
    /// `<sparkle:releaseNotesLink>`.
    ReleaseNotesLink,
    /// `<enclosure>`, carrier of the release attributes.
    Enclosure,
    /// Anything else; ignored by the state machine.
    Other,
}

impl ElementKind {
    /// Element name as written in a feed.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Channel => "channel",
            Self::Item => "item",
            Self::Title => "title",
            Self::Description => "description",
            Self::ReleaseNotesLink => "releaseNotesLink",
            Self::Enclosure => "enclosure",
            Self::Other => "other",
        }
    }
}

/// Enclosure attributes copied into a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    /// `url`.
    Url,
    /// `sparkle:version`.
    Version,
    /// `sparkle:shortVersionString`.
    ShortVersionString,
    /// `sparkle:os`.
    Os,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_kind_as_str() {
        assert_eq!(ElementKind::Channel.as_str(), "channel");
        assert_eq!(ElementKind::ReleaseNotesLink.as_str(), "releaseNotesLink");
    }
}
