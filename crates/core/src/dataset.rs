//! The loaded tactics dataset.
//!
//! The document is fetched once and held read-only for the page's lifetime.
//! Leaves are kept as raw JSON so a single malformed tactic entry never fails
//! the whole load; entries are classified lazily at render time.

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Tactic-type name to raw tactic entry, in authored order.
pub type TacticTable = Map<String, Value>;

#[derive(Debug, Error)]
pub enum LoadError {
    /// The server answered with a non-success status.
    #[error("Failed to fetch: {status} {reason}")]
    Transport { status: u16, reason: String },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    #[error("failed to read response body: {0}")]
    Body(String),

    #[error("malformed tactics data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Fails with [`LoadError::Transport`] unless `status` is in the 2xx range.
pub fn ensure_success(status: u16, reason: &str) -> Result<(), LoadError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(LoadError::Transport {
            status,
            reason: reason.to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dataset {
    /// map -> side -> tactic type -> entry
    #[serde(default)]
    maps: Map<String, Value>,

    /// operator -> tactic type -> entry
    #[serde(default)]
    operators: Map<String, Value>,
}

impl Dataset {
    pub fn from_json_str(raw: &str) -> Result<Self, LoadError> {
        let dataset: Dataset = serde_json::from_str(raw)?;
        dataset.log_loaded();
        Ok(dataset)
    }

    pub fn from_value(value: Value) -> Result<Self, LoadError> {
        let dataset: Dataset = serde_json::from_value(value)?;
        dataset.log_loaded();
        Ok(dataset)
    }

    fn log_loaded(&self) {
        tracing::info!(
            maps = self.maps.len(),
            operators = self.operators.len(),
            "tactics dataset loaded"
        );
    }

    pub fn map_names(&self) -> impl Iterator<Item = &str> {
        self.maps.keys().map(String::as_str)
    }

    pub fn operator_names(&self) -> impl Iterator<Item = &str> {
        self.operators.keys().map(String::as_str)
    }

    /// Tactics for `map` played on `side`.
    ///
    /// A missing map, a missing side, or a falsy/empty/non-object value are all
    /// reported as `None`; incomplete coverage is expected, not an error.
    /// Lookup is case-sensitive.
    pub fn map_tactics(&self, map: &str, side: &str) -> Option<&TacticTable> {
        let sides = self.maps.get(map)?.as_object()?;
        non_empty_table(sides.get(side)?)
    }

    /// Tactics for `operator`, with the same absence rules as [`Self::map_tactics`].
    pub fn operator_tactics(&self, operator: &str) -> Option<&TacticTable> {
        non_empty_table(self.operators.get(operator)?)
    }
}

fn non_empty_table(value: &Value) -> Option<&TacticTable> {
    value.as_object().filter(|table| !table.is_empty())
}
