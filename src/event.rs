//! Deserialize types for incoming structured log events.
//!
//! Every field is optional: producers differ, and the filter degrades the
//! derived output fields instead of rejecting a record. Unknown keys are
//! ignored. Pass-through values are kept as raw [`serde_json::Value`] so
//! arbitrary shapes survive projection unchanged.

use serde::Deserialize;
use serde_json::Value;

/// A decoded log event, one per input line.
#[derive(Debug, Default, PartialEq, Deserialize)]
pub struct InputEvent {
    pub time: Option<Value>,
    pub level: Option<Value>,
    pub file: Option<Value>,
    pub line: Option<Value>,
    pub module_path: Option<Value>,
    /// Nested payload emitted by tracing-style producers; absent → empty.
    #[serde(default)]
    pub fields: EventFields,
}

/// The nested `fields` object of an event.
#[derive(Debug, Default, PartialEq, Deserialize)]
pub struct EventFields {
    pub request_id: Option<Value>,
    pub tag: Option<Value>,
    pub dir: Option<Value>,
    pub msg_type: Option<Value>,
    pub uri: Option<Value>,
    pub entry_address: Option<Value>,
    pub from_agent_id: Option<Value>,
    pub to_agent_id: Option<Value>,
    pub data: Option<Value>,
    pub message: Option<Value>,
    pub time_since_last: Option<Value>,
}

impl EventFields {
    /// The request identifier usable as an origin-table key.
    ///
    /// Only non-empty strings qualify; numbers, empty strings, and absent
    /// values all count as "no request id".
    pub fn request_key(&self) -> Option<&str> {
        self.request_id
            .as_ref()
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
    }
}
