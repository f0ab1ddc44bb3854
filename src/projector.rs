//! Event projection: timing arithmetic and the flattened output record.
//!
//! The projector carries the only run-scoped state in the program: the
//! first-timestamp anchor and the request-origin table. Both live in a
//! [`Projector`] value owned by the caller, so independent runs never share
//! accumulators.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::event::InputEvent;
use crate::timestamp;

/// Literal line printed before every output record. Downstream consumers
/// key on it to locate record boundaries, so it is part of the contract.
pub const RECORD_MARKER: &str = "fu";

/// The flattened projection of one event.
///
/// Field declaration order is the serialized key order. Absent pass-through
/// fields are omitted from the object; `time_diff` is always present and
/// `since_req_origin` is always present (a formatted duration or null).
#[derive(Debug, Serialize)]
pub struct OutputEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<Value>,
    /// Seconds since the first event of the run, to 3 decimal places.
    pub time_diff: String,
    /// Seconds since this `request_id` was first seen, or null without one.
    pub since_req_origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_since_last: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg_type: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_address: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_agent_id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_agent_id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_path: Option<Value>,
}

/// Run-scoped projection state.
///
/// The origin table uses first-seen semantics: an inserted `request_id`
/// keeps its original timestamp for the whole run, and entries are never
/// removed.
#[derive(Debug, Default)]
pub struct Projector {
    anchor: Option<f64>,
    origins: HashMap<String, f64>,
}

impl Projector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Project one event, updating the anchor and the origin table.
    ///
    /// A timestamp that fails to parse degrades the derived fields to the
    /// literal `"NaN"` rather than aborting; the anchor waits for the first
    /// event whose timestamp parses.
    pub fn project(&mut self, event: InputEvent) -> OutputEvent {
        let ts = timestamp::epoch_millis(event.time.as_ref());

        let time_diff = match self.anchor {
            None => {
                if ts.is_finite() {
                    self.anchor = Some(ts);
                }
                format_seconds(0.0)
            }
            Some(anchor) => format_seconds((ts - anchor) / 1000.0),
        };

        let since_req_origin = event.fields.request_key().map(|id| {
            if let Some(&origin) = self.origins.get(id) {
                format_seconds((ts - origin) / 1000.0)
            } else {
                self.origins.insert(id.to_string(), ts);
                format_seconds(0.0)
            }
        });

        let InputEvent {
            time,
            level,
            file,
            line,
            module_path,
            fields,
        } = event;

        OutputEvent {
            time,
            time_diff,
            since_req_origin,
            time_since_last: fields.time_since_last,
            level,
            tag: fields.tag,
            dir: fields.dir,
            msg_type: fields.msg_type,
            uri: fields.uri,
            request_id: fields.request_id,
            entry_address: fields.entry_address,
            from_agent_id: fields.from_agent_id,
            to_agent_id: fields.to_agent_id,
            data: fields.data.or(fields.message),
            file,
            line,
            module_path,
        }
    }
}

/// Fixed-point seconds with exactly 3 fractional digits; NaN stays `"NaN"`.
fn format_seconds(secs: f64) -> String {
    format!("{secs:.3}")
}
