//! Service adapters: engine implementation and OS specific IO.

pub mod config;
pub mod paths;
pub mod search;
pub mod settings;

pub use config::ConfigService;
pub use paths::{ensure_log_dir, get_cache_dir, get_log_dir};
pub use search::{
    count_matches, escape_pattern, replace_all, try_compile, MatchEngine, Matcher,
};
pub use settings::{
    ensure_settings_file, get_settings_path, load_settings, load_settings_from,
    write_default_settings, SettingsError,
};
