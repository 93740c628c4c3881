use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MarkerError, MarkerResult};

use super::{Marker, MarkerFamily};

/// General-purpose markers shared by every component.
///
/// `Method` tags method entry/exit records, `Resource` tags the start and end
/// of work on an external resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum CommonsMarker {
    #[serde(rename = "METHOD")]
    Method,
    #[serde(rename = "RESOURCE")]
    Resource,
}

const COMMONS_MARKERS: [CommonsMarker; 2] = [CommonsMarker::Method, CommonsMarker::Resource];

impl CommonsMarker {
    pub const ALL: [Self; 2] = COMMONS_MARKERS;

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Method => "METHOD",
            Self::Resource => "RESOURCE",
        }
    }

    /// Parses a display string, ignoring surrounding whitespace and ASCII case.
    pub fn parse(input: &str) -> MarkerResult<Self> {
        let trimmed = input.trim();
        COMMONS_MARKERS
            .into_iter()
            .find(|marker| marker.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| MarkerError::UnknownMarker(input.to_owned()))
    }
}

impl Marker for CommonsMarker {
    fn display_string(&self) -> &'static str {
        self.as_str()
    }

    fn family(&self) -> &'static str {
        Self::FAMILY
    }
}

impl MarkerFamily for CommonsMarker {
    const FAMILY: &'static str = "commons";

    fn variants() -> &'static [Self] {
        &COMMONS_MARKERS
    }
}

impl fmt::Display for CommonsMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for CommonsMarker {
    type Error = MarkerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl FromStr for CommonsMarker {
    type Err = MarkerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
