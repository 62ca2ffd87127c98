//! 文本存储
//!
//! 持有唯一的当前文本和最近一次操作记录，所有写入都经过 `set_text`。
//! 写入成功后按注册顺序同步通知观察者。

use std::time::SystemTime;

use super::services::adapters::search::MatchEngine;
use super::services::ports::search::{FindSpec, ReplaceSpec, Result};
use super::state::{OperationRecord, TextStats};

pub trait TextObserver {
    fn on_text_changed(&mut self, text: &str);

    fn on_operation(&mut self, _record: &OperationRecord) {}
}

impl<F> TextObserver for F
where
    F: FnMut(&str),
{
    fn on_text_changed(&mut self, text: &str) {
        self(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

pub struct TextStore {
    text: String,
    last_operation: Option<OperationRecord>,
    engine: MatchEngine,
    observers: Vec<(ObserverId, Box<dyn TextObserver>)>,
    next_observer_id: u64,
}

impl TextStore {
    pub fn new() -> Self {
        Self::with_engine(MatchEngine::default())
    }

    pub fn with_engine(engine: MatchEngine) -> Self {
        Self {
            text: String::new(),
            last_operation: None,
            engine,
            observers: Vec::new(),
            next_observer_id: 0,
        }
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        let mut store = Self::new();
        store.text = text.into();
        store
    }

    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn snapshot(&self) -> String {
        self.text.clone()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        for (_, observer) in self.observers.iter_mut() {
            observer.on_text_changed(&self.text);
        }
    }

    pub fn last_operation(&self) -> Option<&OperationRecord> {
        self.last_operation.as_ref()
    }

    pub fn stats(&self) -> TextStats {
        TextStats::of(&self.text)
    }

    pub fn count_matches(&self, spec: &FindSpec) -> Result<usize> {
        self.engine.count_matches(&self.text, spec).map_err(|e| {
            tracing::warn!(pattern = %spec.pattern, error = %e, "find failed");
            e
        })
    }

    /// 替换成功才提交文本并覆盖操作记录；失败时文本与记录都不变
    pub fn apply_replace(&mut self, spec: &ReplaceSpec) -> Result<usize> {
        let outcome = match self.engine.replace_all(&self.text, spec) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(pattern = %spec.pattern(), error = %e, "replace failed");
                return Err(e);
            }
        };

        let count = outcome.count;
        self.set_text(outcome.text);

        let record = OperationRecord::new(spec, count, SystemTime::now());
        for (_, observer) in self.observers.iter_mut() {
            observer.on_operation(&record);
        }
        self.last_operation = Some(record);

        tracing::info!(
            pattern = %spec.pattern(),
            mode = spec.mode().as_str(),
            count,
            "replace committed"
        );
        Ok(count)
    }

    pub fn subscribe<O>(&mut self, observer: O) -> ObserverId
    where
        O: TextObserver + 'static,
    {
        let id = ObserverId(self.next_observer_id);
        self.next_observer_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }
}

impl Default for TextStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
