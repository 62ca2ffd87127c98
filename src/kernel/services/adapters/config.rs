//! 配置服务：管理查找引擎配置
//!
//! 提供统一的配置管理，支持运行时修改

use crate::kernel::services::adapters::search::MatchEngine;
use crate::kernel::services::ports::config::EngineConfig;
use crate::kernel::services::ports::settings::Settings;

pub struct ConfigService {
    engine: EngineConfig,
}

impl ConfigService {
    pub fn new() -> Self {
        Self {
            engine: EngineConfig::default(),
        }
    }

    pub fn with_engine_config(engine: EngineConfig) -> Self {
        Self { engine }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_engine_config(settings.engine_config())
    }

    pub fn engine(&self) -> &EngineConfig {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut EngineConfig {
        &mut self.engine
    }

    pub fn set_default_case_sensitive(&mut self, case_sensitive: bool) {
        self.engine.default_case_sensitive = case_sensitive;
    }

    pub fn set_default_use_regex(&mut self, use_regex: bool) {
        self.engine.default_use_regex = use_regex;
    }

    pub fn set_regex_size_limit(&mut self, limit: usize) {
        self.engine.regex_size_limit = limit;
    }

    /// 按当前配置构造引擎
    pub fn match_engine(&self) -> MatchEngine {
        MatchEngine::new(self.engine.clone())
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/config.rs"]
mod tests;
