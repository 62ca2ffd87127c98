//! 查找/替换引擎
//!
//! - Regex 模式：pattern 原样编译，大小写只由 regex flag 控制
//! - Literal 模式：先转义元字符再编译
//! - Literal + 大小写敏感的替换不经过正则，直接按 memmem 切分再拼接

use std::borrow::Cow;

use memchr::memmem::Finder;
use regex::{NoExpand, Regex, RegexBuilder};

use crate::kernel::services::ports::search::{
    FindSpec, MatchMode, ReplaceOutcome, ReplaceSpec, Result, SearchError,
};
use crate::kernel::services::ports::EngineConfig;

/// Literal 模式下需要转义的字符
const METACHARS: &[char] = &[
    '.', '*', '+', '?', '^', '$', '{', '}', '(', ')', '|', '[', ']', '\\',
];

/// 转义 pattern 中的正则元字符，使其按字面匹配
pub fn escape_pattern(pattern: &str) -> String {
    let mut escaped = String::with_capacity(pattern.len() * 2);
    for ch in pattern.chars() {
        if METACHARS.contains(&ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// 编译好的匹配器，可重复使用
#[derive(Debug, Clone)]
pub struct Matcher {
    mode: MatchMode,
    pattern: String,
    regex: Regex,
}

impl Matcher {
    pub fn compile(spec: &FindSpec, config: &EngineConfig) -> Result<Self> {
        if spec.pattern.is_empty() {
            return Err(SearchError::EmptyPattern);
        }

        let mode = spec.mode();
        let source = if mode.is_regex() {
            Cow::Borrowed(spec.pattern.as_str())
        } else {
            Cow::Owned(escape_pattern(&spec.pattern))
        };

        let regex = RegexBuilder::new(&source)
            .case_insensitive(!mode.is_case_sensitive())
            .size_limit(config.regex_size_limit)
            .dfa_size_limit(config.dfa_size_limit)
            .build()?;

        Ok(Self {
            mode,
            pattern: spec.pattern.clone(),
            regex,
        })
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// 全局扫描，统计不重叠的匹配数
    pub fn count(&self, text: &str) -> usize {
        match self.mode {
            // 正则已按大小写敏感编译，这里再按原文逐个比对一次
            MatchMode::LiteralCaseSensitive => self
                .regex
                .find_iter(text)
                .filter(|m| m.as_str() == self.pattern)
                .count(),
            MatchMode::LiteralCaseInsensitive
            | MatchMode::RegexCaseInsensitive
            | MatchMode::RegexCaseSensitive => self.regex.find_iter(text).count(),
        }
    }

    pub fn replace_all(&self, text: &str, replacement: &str) -> ReplaceOutcome {
        match self.mode {
            MatchMode::RegexCaseInsensitive | MatchMode::RegexCaseSensitive => {
                let replaced = self.regex.replace_all(text, replacement).into_owned();
                let count = self.regex.find_iter(text).count();
                ReplaceOutcome {
                    text: replaced,
                    count,
                }
            }
            MatchMode::LiteralCaseInsensitive => {
                let replaced = self
                    .regex
                    .replace_all(text, NoExpand(replacement))
                    .into_owned();
                let count = self.regex.find_iter(text).count();
                ReplaceOutcome {
                    text: replaced,
                    count,
                }
            }
            MatchMode::LiteralCaseSensitive => split_join(text, &self.pattern, replacement),
        }
    }
}

/// 按 pattern 精确切分 text，再用 replacement 拼接
///
/// 计数为片段数减一。pattern 与 text 都是合法 UTF-8，匹配起点必然落在字符边界上。
fn split_join(text: &str, pattern: &str, replacement: &str) -> ReplaceOutcome {
    let finder = Finder::new(pattern.as_bytes());
    let mut out = String::with_capacity(text.len());
    let mut last_end = 0usize;
    let mut fragments = 1usize;

    for start in finder.find_iter(text.as_bytes()) {
        out.push_str(&text[last_end..start]);
        out.push_str(replacement);
        last_end = start + pattern.len();
        fragments += 1;
    }
    out.push_str(&text[last_end..]);

    ReplaceOutcome {
        text: out,
        count: fragments - 1,
    }
}

/// 带配置的引擎入口，不持有任何文本
#[derive(Debug, Clone, Default)]
pub struct MatchEngine {
    config: EngineConfig,
}

impl MatchEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn try_compile(&self, spec: &FindSpec) -> Result<Matcher> {
        Matcher::compile(spec, &self.config)
    }

    pub fn count_matches(&self, text: &str, spec: &FindSpec) -> Result<usize> {
        let matcher = self.try_compile(spec)?;
        let count = matcher.count(text);
        tracing::debug!(mode = matcher.mode().as_str(), count, "count matches");
        Ok(count)
    }

    /// 失败时不产生任何部分替换结果，原文由调用方保留
    pub fn replace_all(&self, text: &str, spec: &ReplaceSpec) -> Result<ReplaceOutcome> {
        let matcher = self.try_compile(&spec.find)?;
        let outcome = matcher.replace_all(text, &spec.replacement);
        tracing::debug!(
            mode = matcher.mode().as_str(),
            count = outcome.count,
            "replace all"
        );
        Ok(outcome)
    }
}

pub fn try_compile(spec: &FindSpec) -> Result<Matcher> {
    MatchEngine::default().try_compile(spec)
}

pub fn count_matches(text: &str, spec: &FindSpec) -> Result<usize> {
    MatchEngine::default().count_matches(text, spec)
}

pub fn replace_all(text: &str, spec: &ReplaceSpec) -> Result<ReplaceOutcome> {
    MatchEngine::default().replace_all(text, spec)
}

#[cfg(test)]
#[path = "../../../../../tests/unit/kernel/services/adapters/search/matcher.rs"]
mod tests;
