//! 查找/替换契约
//!
//! FindSpec / ReplaceSpec 描述一次查找或替换，MatchMode 决定走哪条匹配路径。

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Debug)]
pub enum SearchError {
    /// 查找内容为空（调用方应在进入引擎前拦截）
    EmptyPattern,
    InvalidRegex(regex::Error),
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchError::EmptyPattern => write!(f, "Empty search pattern"),
            SearchError::InvalidRegex(e) => write!(f, "Invalid regex: {}", e),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::EmptyPattern => None,
            SearchError::InvalidRegex(e) => Some(e),
        }
    }
}

impl From<regex::Error> for SearchError {
    fn from(e: regex::Error) -> Self {
        SearchError::InvalidRegex(e)
    }
}

/// 匹配路径：正则/字面量 × 大小写敏感
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    RegexCaseInsensitive,
    RegexCaseSensitive,
    LiteralCaseInsensitive,
    LiteralCaseSensitive,
}

impl MatchMode {
    pub fn new(case_sensitive: bool, use_regex: bool) -> Self {
        match (use_regex, case_sensitive) {
            (true, false) => Self::RegexCaseInsensitive,
            (true, true) => Self::RegexCaseSensitive,
            (false, false) => Self::LiteralCaseInsensitive,
            (false, true) => Self::LiteralCaseSensitive,
        }
    }

    pub fn is_regex(self) -> bool {
        matches!(self, Self::RegexCaseInsensitive | Self::RegexCaseSensitive)
    }

    pub fn is_case_sensitive(self) -> bool {
        matches!(self, Self::RegexCaseSensitive | Self::LiteralCaseSensitive)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::RegexCaseInsensitive => "regex",
            Self::RegexCaseSensitive => "regex-case",
            Self::LiteralCaseInsensitive => "literal",
            Self::LiteralCaseSensitive => "literal-case",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindSpec {
    pub pattern: String,
    pub case_sensitive: bool,
    pub use_regex: bool,
}

impl FindSpec {
    pub fn new(pattern: impl Into<String>, case_sensitive: bool, use_regex: bool) -> Self {
        Self {
            pattern: pattern.into(),
            case_sensitive,
            use_regex,
        }
    }

    pub fn literal(pattern: impl Into<String>, case_sensitive: bool) -> Self {
        Self::new(pattern, case_sensitive, false)
    }

    pub fn regex(pattern: impl Into<String>, case_sensitive: bool) -> Self {
        Self::new(pattern, case_sensitive, true)
    }

    pub fn mode(&self) -> MatchMode {
        MatchMode::new(self.case_sensitive, self.use_regex)
    }

    pub fn with_replacement(self, replacement: impl Into<String>) -> ReplaceSpec {
        ReplaceSpec {
            find: self,
            replacement: replacement.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceSpec {
    pub find: FindSpec,
    /// 可以为空；正则模式下按 regex crate 的 `$` 引用规则展开
    pub replacement: String,
}

impl ReplaceSpec {
    pub fn new(
        pattern: impl Into<String>,
        replacement: impl Into<String>,
        case_sensitive: bool,
        use_regex: bool,
    ) -> Self {
        FindSpec::new(pattern, case_sensitive, use_regex).with_replacement(replacement)
    }

    pub fn pattern(&self) -> &str {
        &self.find.pattern
    }

    pub fn mode(&self) -> MatchMode {
        self.find.mode()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceOutcome {
    pub text: String,
    pub count: usize,
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/search.rs"]
mod tests;
