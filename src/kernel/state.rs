use std::time::SystemTime;

use memchr::memchr_iter;
use serde::Serialize;

use super::services::ports::ReplaceSpec;

/// 最近一次成功替换的记录，下一次替换整体覆盖它
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationRecord {
    pub pattern: String,
    pub replacement: String,
    pub timestamp: SystemTime,
    pub match_count: usize,
    pub case_sensitive: bool,
    pub use_regex: bool,
}

impl OperationRecord {
    pub fn new(spec: &ReplaceSpec, match_count: usize, timestamp: SystemTime) -> Self {
        Self {
            pattern: spec.find.pattern.clone(),
            replacement: spec.replacement.clone(),
            timestamp,
            match_count,
            case_sensitive: spec.find.case_sensitive,
            use_regex: spec.find.use_regex,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub words: usize,
    pub lines: usize,
    pub chars: usize,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        Self {
            words: text.split_whitespace().count(),
            // 空文本也算一行
            lines: memchr_iter(b'\n', text.as_bytes()).count() + 1,
            chars: text.chars().count(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
