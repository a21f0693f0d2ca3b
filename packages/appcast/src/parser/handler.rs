//! Event handler trait definition.

use crate::registry::{AttributeKind, ElementKind};

/// Whether the engine should keep reading after a callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep delivering events.
    Continue,
    /// Stop parsing; the rest of the document is not examined.
    Stop,
}

/// An element-start event with its recognized attributes.
///
/// Attributes appear in document order. Names the registry does not know
/// are dropped by the engine before the handler sees them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementStart {
    /// Semantic tag of the element.
    pub kind: ElementKind,
    /// Recognized attributes with their unescaped values.
    pub attributes: Vec<(AttributeKind, String)>,
}

impl ElementStart {
    /// Create an element-start event without attributes.
    #[must_use]
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            attributes: Vec::new(),
        }
    }

    /// Add an attribute.
    #[must_use]
    pub fn with_attribute(mut self, kind: AttributeKind, value: impl Into<String>) -> Self {
        self.attributes.push((kind, value.into()));
        self
    }
}

/// Receiver of the events produced by the XML engine.
///
/// A single text run may be delivered as several `on_text` calls.
pub trait EventHandler {
    /// An element was opened.
    fn on_element_start(&mut self, element: &ElementStart) -> Flow;

    /// An element was closed.
    fn on_element_end(&mut self, kind: ElementKind) -> Flow;

    /// Character data was read.
    fn on_text(&mut self, text: &str) -> Flow;
}
