use serde::Serialize;
use serde_json::{Map, Value};

use crate::constants;

/// One item to classify.
///
/// `id` is opaque: any JSON value, or absent. Every other field is kept in
/// `extra` untouched so new request fields pass through without a schema change.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Query {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Query {
    pub fn new(id: impl Into<Value>) -> Self {
        Self {
            id: Some(id.into()),
            extra: Map::new(),
        }
    }

    /// A query with no `id` field.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Split a decoded JSON object into its `id` and the remaining fields.
    pub fn from_object(mut object: Map<String, Value>) -> Self {
        let id = object.remove(constants::ID_KEY);
        Self { id, extra: object }
    }

    /// The id to echo back: the query's own id, or JSON null when absent.
    pub fn id_or_null(&self) -> Value {
        self.id.clone().unwrap_or(Value::Null)
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}
