//! Caller-side ceilings on the variant space.
//!
//! `expand` is correct for any number of axes; these limits keep a rule editor
//! from asking for an explosion of combinations.

use tracing::warn;

use merchkit_core::{DomainError, DomainResult};

use crate::axis::OptionAxis;

pub const MAX_AXES_ENV: &str = "MERCHKIT_MAX_OPTION_AXES";
pub const MAX_VALUES_ENV: &str = "MERCHKIT_MAX_OPTION_VALUES";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantLimits {
    pub max_axes: usize,
    pub max_values_per_axis: usize,
}

impl Default for VariantLimits {
    fn default() -> Self {
        Self {
            max_axes: 3,
            max_values_per_axis: 100,
        }
    }
}

impl VariantLimits {
    /// Load limits from `MERCHKIT_MAX_OPTION_AXES` / `MERCHKIT_MAX_OPTION_VALUES`.
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            max_axes: read_limit(&lookup, MAX_AXES_ENV, defaults.max_axes),
            max_values_per_axis: read_limit(&lookup, MAX_VALUES_ENV, defaults.max_values_per_axis),
        }
    }

    /// Reject axis lists beyond the configured ceilings.
    pub fn check(&self, axes: &[OptionAxis]) -> DomainResult<()> {
        if axes.len() > self.max_axes {
            return Err(DomainError::limit_exceeded(
                "option axes",
                self.max_axes,
                axes.len(),
            ));
        }

        if let Some(axis) = axes
            .iter()
            .find(|axis| axis.values().len() > self.max_values_per_axis)
        {
            return Err(DomainError::limit_exceeded(
                "option values per axis",
                self.max_values_per_axis,
                axis.values().len(),
            ));
        }

        let mut names: Vec<&str> = axes.iter().map(|axis| axis.name.as_str()).collect();
        names.sort_unstable();
        if let Some(pair) = names.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(DomainError::validation(format!(
                "duplicate option axis name: {}",
                pair[0]
            )));
        }

        Ok(())
    }
}

fn read_limit(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: usize) -> usize {
    let Some(raw) = lookup(key) else {
        return default;
    };

    match raw.trim().parse::<usize>() {
        Ok(value) if value > 0 => value,
        _ => {
            warn!(key, value = %raw, default, "invalid variant limit; using default");
            default
        }
    }
}
