//! Wire types for the classify endpoint.
use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{Map, Value};

/// A successful classify payload.
///
/// `response` is the only required field; a body without it fails to
/// decode and the client reports the reply as malformed. Everything
/// else depends on what the NLP service recognized.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NlpReply {
    /// Assistant text to show the user
    pub response: String,
    /// Recognized intent label, e.g. `leave_balance`
    #[serde(default)]
    pub intent: Option<String>,
    /// Classifier confidence in the intent, 0.0 to 1.0
    #[serde(default)]
    pub confidence: Option<f64>,
    /// Context delta to merge into the session context
    #[serde(default)]
    pub context: Option<Map<String, Value>>,
    /// Entities extracted from the utterance, grouped by entity type
    #[serde(default)]
    pub entities: Option<HashMap<String, Vec<String>>>,
}
