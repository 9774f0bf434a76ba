//! Key-value persistence port with tolerant JSON codecs
//!
//! The browser's LocalStorage (or anything else string-keyed and
//! JSON-valued) is injected behind `KeyValueStore`. Loads never fail:
//! an absent key or malformed JSON comes back as the type's default, and a
//! save that can't serialize is a logged no-op. Nothing in the pricing or
//! game core may break because storage is broken.

use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// String-keyed, JSON-valued storage capability
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

/// In-memory store for tests and native harnesses
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    map: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.map.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.map.remove(key);
    }
}

/// Load `key`, treating absence and corruption alike as "no history"
pub fn load_or_default<T>(store: &dyn KeyValueStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let Some(json) = store.get(key) else {
        return T::default();
    };
    match serde_json::from_str(&json) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("discarding malformed data under {key}: {err}");
            T::default()
        }
    }
}

/// Persist `value` under `key`; serialization failure is a logged no-op
pub fn save<T: Serialize>(store: &mut dyn KeyValueStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => store.set(key, json),
        Err(err) => log::error!("could not serialize {key}: {err}"),
    }
}
