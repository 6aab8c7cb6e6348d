//! Option axes.

use serde::{Deserialize, Serialize};

use merchkit_core::ValueObject;

/// A named dimension with an ordered, deduplicated list of values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawOptionAxis")]
pub struct OptionAxis {
    pub name: String,
    values: Vec<String>,
}

impl ValueObject for OptionAxis {}

#[derive(Debug, Clone, Deserialize)]
struct RawOptionAxis {
    name: String,
    #[serde(default)]
    values: Vec<String>,
}

impl From<RawOptionAxis> for OptionAxis {
    fn from(raw: RawOptionAxis) -> Self {
        OptionAxis::new(raw.name, raw.values)
    }
}

impl OptionAxis {
    /// Build an axis. Values are trimmed; blank values and repeats are dropped
    /// (first occurrence wins).
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut axis = Self {
            name: name.into(),
            values: Vec::new(),
        };
        for value in values {
            axis.push(value.into());
        }
        axis
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// A copy of this axis with `value` appended (no-op if already present).
    pub fn with_value(&self, value: impl Into<String>) -> Self {
        let mut axis = self.clone();
        axis.push(value.into());
        axis
    }

    /// A copy of this axis without `value` (trimmed, as values are stored).
    pub fn without_value(&self, value: &str) -> Self {
        let value = value.trim();
        Self {
            name: self.name.clone(),
            values: self
                .values
                .iter()
                .filter(|v| v.as_str() != value)
                .cloned()
                .collect(),
        }
    }

    fn push(&mut self, value: String) {
        let value = value.trim();
        if value.is_empty() || self.values.iter().any(|v| v == value) {
            return;
        }
        self.values.push(value.to_string());
    }
}
