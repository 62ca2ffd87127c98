use serde::{Deserialize, Serialize};

use super::config::EngineConfig;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub search: SearchSettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchSettings {
    #[serde(default)]
    pub case_sensitive: bool,
    #[serde(default)]
    pub use_regex: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex_size_limit: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dfa_size_limit: Option<usize>,
}

impl Settings {
    pub fn engine_config(&self) -> EngineConfig {
        let defaults = EngineConfig::default();
        EngineConfig {
            default_case_sensitive: self.search.case_sensitive,
            default_use_regex: self.search.use_regex,
            regex_size_limit: self
                .search
                .regex_size_limit
                .unwrap_or(defaults.regex_size_limit),
            dfa_size_limit: self
                .search
                .dfa_size_limit
                .unwrap_or(defaults.dfa_size_limit),
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
