//! 查找/替换面板状态
//!
//! 面板持有输入框内容与选项，负责在调用引擎前做校验：
//! 空 pattern 视为“没有搜索”，正则模式先试编译一次。

use super::services::ports::config::EngineConfig;
use super::services::ports::search::{FindSpec, ReplaceSpec};
use super::store::TextStore;

pub const INVALID_REGEX_MESSAGE: &str = "Invalid regular expression pattern";
pub const SEARCH_FAILED_MESSAGE: &str = "Error performing search";
pub const REPLACE_FAILED_MESSAGE: &str = "Error performing replace";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindPanelState {
    pub find_text: String,
    pub replace_text: String,
    pub case_sensitive: bool,
    pub use_regex: bool,
    pub match_count: Option<usize>,
    pub error_message: Option<String>,
}

impl FindPanelState {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            case_sensitive: config.default_case_sensitive,
            use_regex: config.default_use_regex,
            ..Self::default()
        }
    }

    pub fn find_spec(&self) -> FindSpec {
        FindSpec::new(self.find_text.clone(), self.case_sensitive, self.use_regex)
    }

    pub fn replace_spec(&self) -> ReplaceSpec {
        self.find_spec().with_replacement(self.replace_text.clone())
    }

    pub fn is_valid_input(&mut self, store: &TextStore) -> bool {
        if self.find_text.is_empty() {
            return false;
        }
        if self.use_regex {
            if let Err(err) = store.engine().try_compile(&self.find_spec()) {
                tracing::debug!(pattern = %self.find_text, error = %err, "find panel rejected pattern");
                self.error_message = Some(INVALID_REGEX_MESSAGE.to_string());
                return false;
            }
        }
        true
    }

    pub fn set_find_text(&mut self, text: impl Into<String>, store: &TextStore) -> bool {
        self.find_text = text.into();
        self.error_message = None;
        self.match_count = None;
        if !self.find_text.is_empty() {
            self.find(store);
        }
        true
    }

    pub fn set_replace_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if self.replace_text == text {
            return false;
        }
        self.replace_text = text;
        true
    }

    pub fn toggle_case_sensitive(&mut self, store: &TextStore) -> bool {
        self.case_sensitive = !self.case_sensitive;
        self.refresh(store);
        true
    }

    pub fn toggle_regex(&mut self, store: &TextStore) -> bool {
        self.use_regex = !self.use_regex;
        self.refresh(store);
        true
    }

    fn refresh(&mut self, store: &TextStore) {
        if !self.find_text.is_empty() {
            self.find(store);
        }
    }

    pub fn find(&mut self, store: &TextStore) -> bool {
        if !self.is_valid_input(store) {
            return false;
        }
        match store.count_matches(&self.find_spec()) {
            Ok(count) => {
                self.match_count = Some(count);
                self.error_message = None;
            }
            Err(err) => {
                tracing::debug!(pattern = %self.find_text, error = %err, "find panel search failed");
                self.match_count = None;
                self.error_message = Some(SEARCH_FAILED_MESSAGE.to_string());
            }
        }
        true
    }

    pub fn replace_all(&mut self, store: &mut TextStore) -> bool {
        if !self.is_valid_input(store) {
            return false;
        }
        match store.apply_replace(&self.replace_spec()) {
            Ok(count) => {
                self.match_count = Some(count);
                self.error_message = None;
            }
            Err(err) => {
                tracing::debug!(pattern = %self.find_text, error = %err, "find panel replace failed");
                self.match_count = None;
                self.error_message = Some(REPLACE_FAILED_MESSAGE.to_string());
            }
        }
        true
    }

    pub fn clear(&mut self) -> bool {
        let changed = !self.find_text.is_empty()
            || !self.replace_text.is_empty()
            || self.match_count.is_some()
            || self.error_message.is_some();
        self.find_text.clear();
        self.replace_text.clear();
        self.match_count = None;
        self.error_message = None;
        changed
    }

    pub fn match_count_label(&self) -> Option<String> {
        self.match_count.map(|count| {
            let noun = if count == 1 { "match" } else { "matches" };
            format!("{} {} found", count, noun)
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/find_panel.rs"]
mod tests;
