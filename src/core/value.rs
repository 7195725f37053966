use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

/// A field value as supplied by a caller.
///
/// `ServerTimestamp` is a sentinel: the store replaces it with the
/// commit-time instant, the caller never supplies the time itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    ServerTimestamp,
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Resolve into the stored JSON representation at commit time.
    pub fn resolve(&self, now: DateTime<Utc>) -> Value {
        match self {
            Self::Text(text) => Value::String(text.clone()),
            Self::ServerTimestamp => {
                Value::String(now.to_rfc3339_opts(SecondsFormat::Micros, true))
            }
        }
    }
}

/// Ordered field mapping of a single write.
pub type FieldMap = Vec<(String, FieldValue)>;
