//! log-markers: named category tags for log call sites.
//!
//! Markers are closed enumerations with stable display strings. A call site
//! attaches one to a record and a logging collaborator (any `tracing`
//! subscriber) reads it back from the record's `marker` field.

pub mod call_site;
pub mod config;
pub mod error;
pub mod markers;
pub mod telemetry;

pub use config::MarkerConfig;
pub use error::{MarkerError, MarkerResult};
pub use markers::{CommonsMarker, Marker, MarkerFamily};
pub use telemetry::emit_marked;
