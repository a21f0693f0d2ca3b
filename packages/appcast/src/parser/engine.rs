//! Namespace-aware XML engine that feeds events to an [`EventHandler`].

use std::str;

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, QName, ResolveResult};
use quick_xml::reader::NsReader;

use super::handler::{ElementStart, EventHandler, Flow};
use crate::error::{AppcastError, Result};
use crate::registry::{create_appcast_registry, AttributeKind, ElementKind, NameRegistry};

/// Namespace bound to the `xml` prefix.
const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// Namespace bound to the `xmlns` prefix.
const XMLNS_NAMESPACE: &str = "http://www.w3.org/2000/xmlns/";

/// How a successful parse ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStatus {
    /// The whole document was read.
    Finished,
    /// The handler asked to stop before the end of the document.
    Stopped,
}

/// One-shot XML engine over an in-memory document.
///
/// The engine owns its reader and is dropped by whoever created it, so it
/// is released on every exit path.
pub struct XmlEngine<'a> {
    reader: NsReader<&'a [u8]>,
    text: &'a str,
    registry: NameRegistry,
    /// Number of currently open elements.
    depth: usize,
    /// Whether the document element has been opened.
    seen_root: bool,
}

impl<'a> XmlEngine<'a> {
    /// Create an engine for `text` that treats `namespace` as the vendor
    /// namespace.
    ///
    /// # Errors
    /// Returns `EngineCreation` if the namespace is empty or reserved.
    pub fn create(text: &'a str, namespace: &str) -> Result<Self> {
        check_namespace(namespace)?;

        let mut reader = NsReader::from_str(text);
        let config = reader.config_mut();
        config.expand_empty_elements = true;
        config.check_end_names = true;
        config.trim_text(false);

        Ok(Self {
            reader,
            text,
            registry: create_appcast_registry(namespace),
            depth: 0,
            seen_root: false,
        })
    }

    /// Read the whole document, delivering events to `handler`.
    ///
    /// # Errors
    /// Returns `Parse` if the document is not well-formed up to the point
    /// where parsing finished or was stopped.
    pub fn run<H: EventHandler>(&mut self, handler: &mut H) -> Result<ParseStatus> {
        loop {
            let event = self
                .reader
                .read_event()
                .map_err(|e| self.error_at(e.to_string(), self.reader.error_position()))?;

            let flow = match event {
                Event::Start(start) => self.start_element(handler, &start)?,
                Event::End(end) => {
                    let kind = self.classify_element(end.name())?;
                    self.depth = self.depth.saturating_sub(1);
                    handler.on_element_end(kind)
                }
                Event::Text(text) => {
                    let unescaped = text
                        .unescape()
                        .map_err(|e| self.error_here(e.to_string()))?;
                    self.deliver_text(handler, &unescaped)?
                }
                Event::CData(cdata) => {
                    let content = str::from_utf8(&cdata)
                        .map_err(|e| self.error_here(format!("invalid UTF-8 in CDATA: {e}")))?;
                    self.deliver_text(handler, content)?
                }
                Event::Eof => return self.finish(),
                // Declarations, comments, processing instructions and the
                // doctype carry nothing for the handler.
                _ => Flow::Continue,
            };

            if flow == Flow::Stop {
                return Ok(ParseStatus::Stopped);
            }
        }
    }

    fn start_element<H: EventHandler>(
        &mut self,
        handler: &mut H,
        start: &BytesStart<'_>,
    ) -> Result<Flow> {
        if self.depth == 0 && self.seen_root {
            return Err(self.error_here("junk after document element"));
        }
        self.seen_root = true;
        self.depth += 1;

        let kind = self.classify_element(start.name())?;
        let element = ElementStart {
            kind,
            attributes: self.collect_attributes(start)?,
        };
        Ok(handler.on_element_start(&element))
    }

    fn classify_element(&self, name: QName<'_>) -> Result<ElementKind> {
        let (resolved, local) = self.reader.resolve_element(name);
        let namespace = self.namespace_of(resolved)?;
        let local = self.decode_name(local.as_ref())?;
        Ok(self.registry.element(namespace, local))
    }

    fn collect_attributes(&self, start: &BytesStart<'_>) -> Result<Vec<(AttributeKind, String)>> {
        let mut attributes = Vec::new();

        // Duplicates are tolerated; the feed handler keeps the last value.
        for attr in start.attributes().with_checks(false) {
            let attr = attr.map_err(|e| self.error_here(e.to_string()))?;
            let (resolved, local) = self.reader.resolve_attribute(attr.key);
            let namespace = self.namespace_of(resolved)?;
            let local = self.decode_name(local.as_ref())?;

            let Some(kind) = self.registry.attribute(namespace, local) else {
                continue;
            };
            let value = attr
                .unescape_value()
                .map_err(|e| self.error_here(e.to_string()))?;
            attributes.push((kind, value.into_owned()));
        }

        Ok(attributes)
    }

    fn deliver_text<H: EventHandler>(&self, handler: &mut H, text: &str) -> Result<Flow> {
        if self.depth == 0 {
            if !text.trim().is_empty() {
                let message = if self.seen_root {
                    "junk after document element"
                } else {
                    "text before document element"
                };
                return Err(self.error_here(message));
            }
            return Ok(Flow::Continue);
        }
        Ok(handler.on_text(text))
    }

    fn finish(&self) -> Result<ParseStatus> {
        if !self.seen_root {
            return Err(self.error_here("no element found"));
        }
        if self.depth > 0 {
            return Err(self.error_here(format!(
                "unclosed element ({} still open at end of document)",
                self.depth
            )));
        }
        Ok(ParseStatus::Finished)
    }

    fn namespace_of<'n>(&self, resolved: ResolveResult<'n>) -> Result<Option<&'n str>> {
        match resolved {
            ResolveResult::Bound(Namespace(ns)) => Ok(Some(self.decode_name(ns)?)),
            ResolveResult::Unbound => Ok(None),
            ResolveResult::Unknown(prefix) => Err(self.error_here(format!(
                "unbound prefix '{}'",
                String::from_utf8_lossy(&prefix)
            ))),
        }
    }

    fn decode_name<'n>(&self, bytes: &'n [u8]) -> Result<&'n str> {
        str::from_utf8(bytes).map_err(|e| self.error_here(format!("invalid UTF-8 in name: {e}")))
    }

    fn error_here(&self, message: impl Into<String>) -> AppcastError {
        self.error_at(message, self.reader.buffer_position())
    }

    fn error_at(&self, message: impl Into<String>, offset: u64) -> AppcastError {
        AppcastError::parse(message, self.text, offset)
    }
}

fn check_namespace(namespace: &str) -> Result<()> {
    if namespace.is_empty() {
        return Err(AppcastError::EngineCreation(
            "vendor namespace must not be empty".to_string(),
        ));
    }
    if namespace == XML_NAMESPACE || namespace == XMLNS_NAMESPACE {
        return Err(AppcastError::EngineCreation(format!(
            "vendor namespace '{namespace}' is reserved"
        )));
    }
    Ok(())
}
