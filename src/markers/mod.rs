//! Marker capabilities and the built-in marker families.
//!
//! A marker is a named tag a call site attaches to a log record so that a
//! logging collaborator can categorize, route or filter it. Families are closed
//! enumerations; extending one is a source change.

use std::any::TypeId;
use std::fmt;

pub mod commons;

pub use commons::CommonsMarker;

/// A value that can identify itself with a stable display string.
///
/// Implementations must be pure: the same value always yields the same
/// non-empty string.
pub trait Marker: fmt::Debug + Send + Sync + 'static {
    /// Label attached to records tagged with this marker.
    fn display_string(&self) -> &'static str;

    /// Family label carried on emitted records. Not used for identity.
    fn family(&self) -> &'static str;

    /// Identity of the concrete marker type.
    fn marker_type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }
}

/// A closed marker enumeration.
pub trait MarkerFamily: Marker + Copy + Eq + 'static {
    const FAMILY: &'static str;

    /// Every variant of the family, in declaration order.
    fn variants() -> &'static [Self];
}

/// Markers of different types never compare equal, even when their family
/// labels and display strings match.
impl PartialEq for dyn Marker {
    fn eq(&self, other: &Self) -> bool {
        self.marker_type_id() == other.marker_type_id()
            && self.display_string() == other.display_string()
    }
}

impl Eq for dyn Marker {}

impl fmt::Display for dyn Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_string())
    }
}

/// Returns `true` when no two variants of `F` share a display string.
#[must_use]
pub fn has_distinct_labels<F: MarkerFamily>() -> bool {
    let variants = F::variants();
    variants.iter().enumerate().all(|(i, a)| {
        !a.display_string().is_empty()
            && variants[i + 1..]
                .iter()
                .all(|b| a.display_string() != b.display_string())
    })
}
