use serde::{Deserialize, Serialize};

use crate::error::{MarkerError, MarkerResult};
use crate::markers::CommonsMarker;

/// Selection of commons markers a host enables for its logging collaborator.
///
/// This type is serializable so hosts can keep the selection next to the rest of
/// their logging setup. The crate never drops records on its own; `allows` is
/// the rule a collaborator matches against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerConfig {
    #[serde(default = "default_enabled")]
    pub enabled: Vec<CommonsMarker>,
}

fn default_enabled() -> Vec<CommonsMarker> {
    CommonsMarker::ALL.to_vec()
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
        }
    }
}

impl MarkerConfig {
    /// Builds a selection from already-parsed markers. Call `validate` to reject duplicates.
    #[must_use]
    pub fn new(enabled: Vec<CommonsMarker>) -> Self {
        Self { enabled }
    }

    /// Builds a selection from display strings such as `"METHOD"`.
    pub fn from_names<I, S>(names: I) -> MarkerResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let enabled = names
            .into_iter()
            .map(|name| CommonsMarker::parse(name.as_ref()))
            .collect::<MarkerResult<Vec<_>>>()?;
        Self::new(enabled).validate()
    }

    /// Adds `marker` unless it is already enabled.
    #[must_use]
    pub fn with_enabled(mut self, marker: CommonsMarker) -> Self {
        if !self.enabled.contains(&marker) {
            self.enabled.push(marker);
        }
        self
    }

    /// Removes `marker` from the selection.
    #[must_use]
    pub fn without(mut self, marker: CommonsMarker) -> Self {
        self.enabled.retain(|enabled| *enabled != marker);
        self
    }

    /// Returns `true` when records tagged with `marker` are selected.
    #[must_use]
    pub fn allows(&self, marker: CommonsMarker) -> bool {
        self.enabled.contains(&marker)
    }

    /// Rejects selections that list a marker more than once.
    pub fn validate(self) -> MarkerResult<Self> {
        for (i, marker) in self.enabled.iter().enumerate() {
            if self.enabled[..i].contains(marker) {
                return Err(MarkerError::InvalidConfig(format!(
                    "marker `{marker}` is listed more than once"
                )));
            }
        }
        Ok(self)
    }

    /// Loads and validates a selection; a missing `enabled` field selects every marker.
    pub fn from_json_str(input: &str) -> MarkerResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            MarkerError::InvalidConfig(format!("failed to parse marker config json: {e}"))
        })?;
        config.validate()
    }

    /// Serializes the selection using marker display strings.
    pub fn to_json_pretty(&self) -> MarkerResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            MarkerError::InvalidConfig(format!("failed to serialize marker config json: {e}"))
        })
    }
}
