//! Name registry for appcast parsing.
//!
//! Maps namespace-qualified element and attribute names onto the semantic
//! tags consumed by the feed state machine. Names are configuration data,
//! so a registry is built once per parse and only read afterwards.

mod config;
mod table;
mod types;

pub use config::create_appcast_registry;
pub use table::NameRegistry;
pub use types::{AttributeKind, ElementKind};
