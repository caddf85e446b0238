//! Conversational state carried between turns.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Context key written after every successful turn that recognized an
/// intent. The NLP service reads it to resolve follow-up utterances
/// ("and next week?") against the previous intent.
pub const LAST_INTENT_KEY: &str = "last_intent";

/// Key/value state sent with every classify request (dates the user
/// mentioned, the last recognized intent, anything the service asks us
/// to remember). Owned by the session; cleared on reset.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationContext(Map<String, Value>);

impl ConversationContext {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Shallow merge: every key in `delta` overwrites the existing
    /// entry, keys absent from `delta` are kept as-is.
    pub fn merge(&mut self, delta: &Map<String, Value>) {
        for (key, value) in delta {
            self.0.insert(key.clone(), value.clone());
        }
    }

    pub fn set(&mut self, key: &str, value: Value) {
        self.0.insert(key.to_string(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn clear(&mut self) {
        self.0.clear()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}
