//! Marked entry/exit records for common call-site events.
//!
//! Method boundaries are tagged `METHOD` at `TRACE`; resource boundaries are
//! tagged `RESOURCE` at `INFO`.

use tracing::Level;

use crate::markers::CommonsMarker;
use crate::telemetry::emit_marked;

const METHOD_LEVEL: Level = Level::TRACE;
const RESOURCE_LEVEL: Level = Level::INFO;

/// Records entry into `method`, tagged `METHOD`.
pub fn log_method_entry(method: &str) {
    emit_marked(
        &CommonsMarker::Method,
        METHOD_LEVEL,
        format_args!("entering {method}"),
    );
}

/// Records exit from `method`, tagged `METHOD`.
pub fn log_method_exit(method: &str) {
    emit_marked(
        &CommonsMarker::Method,
        METHOD_LEVEL,
        format_args!("exiting {method}"),
    );
}

/// Records the start of work on `resource`, tagged `RESOURCE`.
pub fn log_resource_start(resource: &str) {
    emit_marked(
        &CommonsMarker::Resource,
        RESOURCE_LEVEL,
        format_args!("resource start {resource}"),
    );
}

/// Records the end of work on `resource`, tagged `RESOURCE`.
pub fn log_resource_end(resource: &str) {
    emit_marked(
        &CommonsMarker::Resource,
        RESOURCE_LEVEL,
        format_args!("resource end {resource}"),
    );
}
