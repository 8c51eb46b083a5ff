//! Response Extractor: turns a free-text model reply into an `AnalysisResult`.
//!
//! Takes the span from the FIRST `{` to the LAST `}` and parses it as JSON.
//! The span is greedy, not depth-balanced: a reply holding two separate
//! objects, or prose with a stray brace after the object, yields an invalid
//! span and lands in the fallback even though a valid object was present.

use serde::Serialize;
use serde_json::{Map, Value};

/// Outcome of a task. Never an error: unparseable replies become `Fallback`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnalysisResult {
    /// The JSON object found in the reply, keys in the order the model wrote them.
    /// Keys are whatever the model produced, not necessarily the requested ones.
    Structured { document: Map<String, Value> },
    /// Raw reply text labelled with the task's fallback key.
    Fallback { label: String, raw_text: String },
}

impl AnalysisResult {
    pub fn is_fallback(&self) -> bool {
        matches!(self, AnalysisResult::Fallback { .. })
    }

    /// Flattens to a single mapping for display: a `Fallback` becomes `{label: raw_text}`.
    pub fn into_document(self) -> Map<String, Value> {
        match self {
            AnalysisResult::Structured { document } => document,
            AnalysisResult::Fallback { label, raw_text } => {
                let mut map = Map::new();
                map.insert(label, Value::String(raw_text));
                map
            }
        }
    }
}

/// Extracts the widest brace-delimited span and parses it as a JSON object.
pub fn extract_json_object(text: &str) -> Option<Map<String, Value>> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }

    match serde_json::from_str::<Value>(&text[start..=end]) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

pub fn extract(text: &str, fallback_key: &str) -> AnalysisResult {
    match extract_json_object(text) {
        Some(document) => AnalysisResult::Structured { document },
        None => AnalysisResult::Fallback {
            label: fallback_key.to_string(),
            raw_text: text.to_string(),
        },
    }
}
