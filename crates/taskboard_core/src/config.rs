//! Board runtime settings.
//!
//! # Responsibility
//! - Hold caller-tunable engine behavior with safe defaults.
//! - Read overrides from process environment for shell/FFI hosts.
//!
//! # Invariants
//! - Invalid override values fall back to defaults and never fail startup.

use crate::drag::session::FilteredDragPolicy;
use log::warn;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Environment variable overriding `BoardSettings::filtered_drag`.
pub const FILTERED_DRAG_ENV: &str = "TASKBOARD_FILTERED_DRAG";

/// Engine settings shared by every board service instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    /// Drag behavior while filter criteria are active.
    pub filtered_drag: FilteredDragPolicy,
}

impl BoardSettings {
    /// Loads settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads settings through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();
        if let Some(raw) = lookup(FILTERED_DRAG_ENV) {
            match raw.parse::<FilteredDragPolicy>() {
                Ok(policy) => settings.filtered_drag = policy,
                Err(err) => warn!(
                    "event=config_load module=config status=fallback key={} error={}",
                    FILTERED_DRAG_ENV, err
                ),
            }
        }
        settings
    }
}

impl FromStr for FilteredDragPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "translate" | "translate_by_identity" => Ok(Self::TranslateByIdentity),
            "disallow" | "disallow_while_filtered" => Ok(Self::DisallowWhileFiltered),
            other => Err(format!(
                "unsupported filtered drag policy `{other}`; expected translate|disallow"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardSettings, FILTERED_DRAG_ENV};
    use crate::drag::session::FilteredDragPolicy;

    #[test]
    fn defaults_translate_by_identity() {
        let settings = BoardSettings::from_lookup(|_| None);
        assert_eq!(settings.filtered_drag, FilteredDragPolicy::TranslateByIdentity);
    }

    #[test]
    fn lookup_overrides_policy() {
        let settings = BoardSettings::from_lookup(|key| {
            (key == FILTERED_DRAG_ENV).then(|| " Disallow ".to_string())
        });
        assert_eq!(
            settings.filtered_drag,
            FilteredDragPolicy::DisallowWhileFiltered
        );
    }

    #[test]
    fn unsupported_value_falls_back_to_default() {
        let settings = BoardSettings::from_lookup(|_| Some("sometimes".to_string()));
        assert_eq!(settings, BoardSettings::default());
    }
}
