//! Feed state machine turning parser events into release descriptors.

use super::handler::{ElementStart, EventHandler, Flow};
use crate::registry::{AttributeKind, ElementKind};
use crate::types::ReleaseDescriptor;

/// State machine that collects the `<item>`s of the first `<channel>`.
#[derive(Debug)]
pub struct FeedHandler {
    platform_marker: String,
    channel_depth: usize,
    item_depth: usize,
    release_notes_depth: usize,
    title_depth: usize,
    description_depth: usize,
    /// The release open for mutation, if any.
    open: Option<ReleaseDescriptor>,
    /// Finalized releases in document order.
    releases: Vec<ReleaseDescriptor>,
}

impl FeedHandler {
    /// Create a handler that stops early on items for `platform_marker`.
    #[must_use]
    pub fn new(platform_marker: impl Into<String>) -> Self {
        Self {
            platform_marker: platform_marker.into(),
            channel_depth: 0,
            item_depth: 0,
            release_notes_depth: 0,
            title_depth: 0,
            description_depth: 0,
            open: None,
            releases: Vec::new(),
        }
    }

    /// Releases finalized so far.
    #[must_use]
    pub fn releases(&self) -> &[ReleaseDescriptor] {
        &self.releases
    }

    /// The release currently open for mutation.
    #[must_use]
    pub fn open_release(&self) -> Option<&ReleaseDescriptor> {
        self.open.as_ref()
    }

    /// Take all collected releases in document order.
    ///
    /// A release still open when parsing stopped is included last.
    #[must_use]
    pub fn into_releases(self) -> Vec<ReleaseDescriptor> {
        let mut releases = self.releases;
        releases.extend(self.open);
        releases
    }

    fn open_item(&mut self) {
        // An item nested in an open item finalizes the outer one
        if let Some(outer) = self.open.take() {
            self.releases.push(outer);
        }
        self.open = Some(ReleaseDescriptor::default());
        self.item_depth += 1;
    }

    fn close_item(&mut self) -> Flow {
        self.item_depth = self.item_depth.saturating_sub(1);

        let Some(release) = self.open.take() else {
            return Flow::Continue;
        };
        let for_platform = release.targets(&self.platform_marker);
        self.releases.push(release);

        if for_platform {
            tracing::debug!(
                marker = %self.platform_marker,
                items = self.releases.len(),
                "Found item for this platform, stopping"
            );
            return Flow::Stop;
        }
        Flow::Continue
    }

    fn apply_enclosure(&mut self, attributes: &[(AttributeKind, String)]) {
        let Some(release) = self.open.as_mut() else {
            return;
        };

        for (kind, value) in attributes {
            let field = match kind {
                AttributeKind::Url => &mut release.download_url,
                AttributeKind::Version => &mut release.version,
                AttributeKind::ShortVersionString => &mut release.short_version_string,
                AttributeKind::Os => &mut release.os,
            };
            *field = Some(value.clone());
        }
    }
}

impl EventHandler for FeedHandler {
    fn on_element_start(&mut self, element: &ElementStart) -> Flow {
        match element.kind {
            ElementKind::Channel => self.channel_depth += 1,
            ElementKind::Item if self.channel_depth > 0 => self.open_item(),
            _ if self.item_depth == 0 => {}
            ElementKind::ReleaseNotesLink => self.release_notes_depth += 1,
            ElementKind::Title => self.title_depth += 1,
            ElementKind::Description => self.description_depth += 1,
            ElementKind::Enclosure => self.apply_enclosure(&element.attributes),
            ElementKind::Item | ElementKind::Other => {}
        }
        Flow::Continue
    }

    fn on_element_end(&mut self, kind: ElementKind) -> Flow {
        match kind {
            ElementKind::ReleaseNotesLink if self.item_depth > 0 => {
                self.release_notes_depth = self.release_notes_depth.saturating_sub(1);
            }
            ElementKind::Title if self.item_depth > 0 => {
                self.title_depth = self.title_depth.saturating_sub(1);
            }
            ElementKind::Description if self.item_depth > 0 => {
                self.description_depth = self.description_depth.saturating_sub(1);
            }
            ElementKind::Item if self.channel_depth > 0 => return self.close_item(),
            ElementKind::Channel => {
                self.channel_depth = self.channel_depth.saturating_sub(1);
                // Only the first channel is relevant
                return Flow::Stop;
            }
            _ => {}
        }
        Flow::Continue
    }

    fn on_text(&mut self, text: &str) -> Flow {
        let Some(release) = self.open.as_mut() else {
            return Flow::Continue;
        };

        if self.release_notes_depth > 0 {
            release.release_notes_url.push_str(text);
        }
        if self.title_depth > 0 {
            release.title.push_str(text);
        }
        if self.description_depth > 0 {
            release.description.push_str(text);
        }
        Flow::Continue
    }
}
