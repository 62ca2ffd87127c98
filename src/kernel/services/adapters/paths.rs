//! 应用目录
//!
//! | OS | data (日志) | cache (settings) |
//! |---|---|---|
//! | Linux | `$XDG_DATA_HOME` 或 `~/.local/share` | `$XDG_CACHE_HOME` 或 `~/.cache` |
//! | macOS | `~/Library/Application Support` | `~/Library/Caches` |
//! | Windows | `%APPDATA%` | `%LOCALAPPDATA%` |

use std::ffi::OsString;
use std::path::PathBuf;

const APP_NAME: &str = "zreplace";
const LOG_DIR: &str = "logs";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BaseDir {
    Data,
    Cache,
}

/// 环境变量优先，否则退回到 `$HOME/<home_suffix>`；空值视为未设置。
/// `home_suffix` 为 `None` 时不退回。
fn resolve_dir(
    env_value: Option<OsString>,
    home: Option<OsString>,
    home_suffix: Option<&str>,
) -> Option<PathBuf> {
    let non_empty = |v: OsString| (!v.is_empty()).then(|| PathBuf::from(v));
    if let Some(dir) = env_value.and_then(non_empty) {
        return Some(dir);
    }
    let suffix = home_suffix?;
    home.and_then(non_empty).map(|h| h.join(suffix))
}

fn base_dir(kind: BaseDir) -> Option<PathBuf> {
    let env = |key: &str| std::env::var_os(key);

    if cfg!(target_os = "windows") {
        let key = match kind {
            BaseDir::Data => "APPDATA",
            BaseDir::Cache => "LOCALAPPDATA",
        };
        return resolve_dir(env(key), None, None);
    }

    if cfg!(target_os = "macos") {
        let suffix = match kind {
            BaseDir::Data => "Library/Application Support",
            BaseDir::Cache => "Library/Caches",
        };
        return resolve_dir(None, env("HOME"), Some(suffix));
    }

    let (key, suffix) = match kind {
        BaseDir::Data => ("XDG_DATA_HOME", ".local/share"),
        BaseDir::Cache => ("XDG_CACHE_HOME", ".cache"),
    };
    resolve_dir(env(key), env("HOME"), Some(suffix))
}

/// 获取缓存目录（settings 文件所在的上级目录）
pub fn get_cache_dir() -> Option<PathBuf> {
    base_dir(BaseDir::Cache)
}

/// 获取日志目录路径：`<data dir>/zreplace/logs`
pub fn get_log_dir() -> Option<PathBuf> {
    base_dir(BaseDir::Data).map(|p| p.join(APP_NAME).join(LOG_DIR))
}

/// 确保日志目录存在
pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let dir = get_log_dir().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "Cannot determine log directory")
    })?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/paths.rs"]
mod tests;
