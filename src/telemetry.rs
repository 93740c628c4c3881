//! Telemetry helpers for applications tagging records with markers.
//!
//! Marked records go through the `tracing` facade. Consumers can either call
//! `init_default_tracing` or wire their own `tracing` subscriber and filters;
//! the marker travels as structured fields either way.

use std::fmt;

use tracing::Level;

use crate::markers::Marker;

/// Field carrying `Marker::display_string` on marked records.
pub const MARKER_FIELD: &str = "marker";
/// Field carrying `Marker::family` on marked records.
pub const MARKER_FAMILY_FIELD: &str = "marker_family";

/// Emits one event at `level` tagged with `marker`.
///
/// `message` is only formatted when a subscriber records the event.
pub fn emit_marked(marker: &dyn Marker, level: Level, message: fmt::Arguments<'_>) {
    let label = marker.display_string();
    let family = marker.family();
    if level == Level::ERROR {
        tracing::error!(marker = label, marker_family = family, "{message}");
    } else if level == Level::WARN {
        tracing::warn!(marker = label, marker_family = family, "{message}");
    } else if level == Level::INFO {
        tracing::info!(marker = label, marker_family = family, "{message}");
    } else if level == Level::DEBUG {
        tracing::debug!(marker = label, marker_family = family, "{message}");
    } else {
        tracing::trace!(marker = label, marker_family = family, "{message}");
    }
}

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or if a
/// global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
