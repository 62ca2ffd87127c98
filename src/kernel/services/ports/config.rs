/// regex crate 的默认编译上限
pub const DEFAULT_REGEX_SIZE_LIMIT: usize = 10 * (1 << 20);
pub const DEFAULT_DFA_SIZE_LIMIT: usize = 2 * (1 << 20);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    pub default_case_sensitive: bool,
    pub default_use_regex: bool,
    /// 编译后正则的大小上限，超过即视为无效模式
    pub regex_size_limit: usize,
    pub dfa_size_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_case_sensitive: false,
            default_use_regex: false,
            regex_size_limit: DEFAULT_REGEX_SIZE_LIMIT,
            dfa_size_limit: DEFAULT_DFA_SIZE_LIMIT,
        }
    }
}
