//! Streaming appcast parser.
//!
//! The [`XmlEngine`] tokenizes the document and classifies names through the
//! registry, the [`FeedHandler`] turns the resulting events into releases,
//! and [`select_release`] picks the one to offer.

mod engine;
mod feed;
mod handler;
mod selection;

pub use engine::{ParseStatus, XmlEngine};
pub use feed::FeedHandler;
pub use handler::{ElementStart, EventHandler, Flow};
pub use selection::select_release;
