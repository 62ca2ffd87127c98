//! Service ports: data contracts shared by the kernel and the adapters.

pub mod config;
pub mod search;
pub mod settings;

pub use config::EngineConfig;
pub use search::{FindSpec, MatchMode, ReplaceOutcome, ReplaceSpec, SearchError};
pub use settings::{SearchSettings, Settings};
