//! Per-session interaction state.

use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::Value;

/// The element the user last tapped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Selection {
    Node { id: String },
    Edge { source: String, target: String },
}

impl Selection {
    pub fn node(id: impl Into<String>) -> Self {
        Selection::Node { id: id.into() }
    }

    pub fn edge(source: impl Into<String>, target: impl Into<String>) -> Self {
        Selection::Edge {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// A tap as delivered by the renderer: the selection plus the raw element data, which is
/// what repeat detection compares.
#[derive(Debug, Clone, PartialEq)]
pub struct TapEvent {
    pub selection: Selection,
    pub payload: Value,
}

fn id_field(payload: &Value, field: &str) -> Result<String> {
    match payload.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::Bool(b)) => Ok(b.to_string()),
        _ => Err(Error::InvalidTapPayload {
            message: format!("missing `{field}` in {payload}"),
        }),
    }
}

impl TapEvent {
    pub fn node(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            payload: serde_json::json!({ "id": id }),
            selection: Selection::Node { id },
        }
    }

    pub fn edge(source: impl Into<String>, target: impl Into<String>) -> Self {
        let (source, target) = (source.into(), target.into());
        Self {
            payload: serde_json::json!({ "source": source, "target": target }),
            selection: Selection::Edge { source, target },
        }
    }

    /// Decodes a tapped node's data object (`{"id": ..., ...}`).
    pub fn from_node_payload(payload: Value) -> Result<Self> {
        let id = id_field(&payload, "id")?;
        Ok(Self {
            selection: Selection::Node { id },
            payload,
        })
    }

    /// Decodes a tapped edge's data object (`{"source": ..., "target": ..., ...}`).
    pub fn from_edge_payload(payload: Value) -> Result<Self> {
        let source = id_field(&payload, "source")?;
        let target = id_field(&payload, "target")?;
        Ok(Self {
            selection: Selection::Edge { source, target },
            payload,
        })
    }
}

/// State carried between pipeline runs of one user session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    last_tap: Option<TapEvent>,
    report: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.last_tap.as_ref().map(|t| &t.selection)
    }

    pub fn last_tap(&self) -> Option<&TapEvent> {
        self.last_tap.as_ref()
    }

    /// The most recent inspector report, if one was produced.
    pub fn report(&self) -> Option<&str> {
        self.report.as_deref()
    }

    /// Whether `tap` repeats the previous one exactly (same element data).
    pub fn is_repeat(&self, tap: &TapEvent) -> bool {
        self.last_tap.as_ref().is_some_and(|prev| prev.payload == tap.payload)
    }

    pub(crate) fn record(&mut self, tap: TapEvent, report: String) {
        self.last_tap = Some(tap);
        self.report = Some(report);
    }

    pub(crate) fn set_report(&mut self, report: String) {
        self.report = Some(report);
    }
}
