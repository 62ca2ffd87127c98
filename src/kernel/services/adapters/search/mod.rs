//! 查找/替换服务模块
//!
//! - Matcher: 编译好的匹配器（Regex / Literal）
//! - MatchEngine: 带配置的计数与替换入口

mod matcher;

pub use matcher::{
    count_matches, escape_pattern, replace_all, try_compile, MatchEngine, Matcher,
};
