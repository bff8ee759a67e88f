//! Short-term in-process memory shared across pipeline stages.
//!
//! The store is intentionally simple: a key/value map that lives for the
//! duration of a single pipeline run. It gives the coordinator a structured
//! way to hand intermediate results between stages without coupling the
//! agents to each other. Nothing here outlives the process; the coordinator
//! clears the store at the start of every run.

use serde_json::Value;
use std::collections::HashMap;

/// Ephemeral key/value store for inter-stage data sharing.
///
/// Single-writer discipline: only the coordinator stores and clears; any
/// holder of a reference may retrieve or snapshot for inspection.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: HashMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Persist `value` under `key`, overwriting any existing entry.
    pub fn store(&mut self, key: impl Into<String>, value: Value) {
        self.data.insert(key.into(), value);
    }

    /// The value stored under `key`, if any.
    pub fn retrieve(&self, key: &str) -> Option<Value> {
        self.data.get(key).cloned()
    }

    /// The value stored under `key`, or `default` if absent. Never fails.
    pub fn retrieve_or(&self, key: &str, default: Value) -> Value {
        self.data.get(key).cloned().unwrap_or(default)
    }

    /// Remove all entries (called at the start of each run).
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// An independent copy of the current contents; mutating it never
    /// affects the store.
    pub fn snapshot(&self) -> HashMap<String, Value> {
        self.data.clone()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
