//! zreplace - 单缓冲区查找/替换库
//!
//! 模块结构：
//! - kernel::services::ports: 数据契约（FindSpec, ReplaceSpec, EngineConfig, Settings）
//! - kernel::services::adapters: 匹配引擎与配置文件读写
//! - kernel::store: 文本存储（TextStore）与最近一次操作记录
//! - kernel::find_panel: 查找面板状态与输入校验

pub mod kernel;

pub use kernel::services::adapters::search::{count_matches, replace_all, try_compile};
pub use kernel::{
    EngineConfig, FindPanelState, FindSpec, MatchEngine, MatchMode, Matcher, OperationRecord,
    ReplaceOutcome, ReplaceSpec, SearchError, TextStats, TextStore,
};
