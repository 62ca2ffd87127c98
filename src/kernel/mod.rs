//! Headless find/replace core (engine, store, panel state).

pub mod find_panel;
pub mod services;
pub mod state;
pub mod store;

pub use find_panel::FindPanelState;
pub use services::adapters::{ConfigService, MatchEngine, Matcher};
pub use services::ports::{
    EngineConfig, FindSpec, MatchMode, ReplaceOutcome, ReplaceSpec, SearchError, Settings,
};
pub use state::{OperationRecord, TextStats};
pub use store::{ObserverId, TextObserver, TextStore};
