//! Schemas for plain JSON records, loaded from a declarative definition.
//!
//! ```json
//! {"fields": [
//!   {"name": "Name", "log": "need", "trans": "姓名"},
//!   {"name": "Sex", "log": "need", "labels": {"1": "男", "2": "女"}},
//!   {"name": "Class", "log": "special"},
//!   {"name": "Weight"}
//! ]}
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::errors::{LogError, Result};
use crate::schema::{FieldMode, Schema};
use crate::transforms::{Registry, Transform};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaDefinition {
    pub fields: Vec<FieldDefinition>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    /// Inclusion marker: `need`, `special` or absent.
    #[serde(default)]
    pub log: Option<String>,
    #[serde(default)]
    pub trans: Option<String>,
    /// Raw value (as text) to display label. Unmapped values render empty.
    #[serde(default)]
    pub labels: Option<BTreeMap<String, Value>>,
    /// Name of a registered [`Transform`], applied after `labels`.
    #[serde(default)]
    pub transform: Option<String>,
}

impl SchemaDefinition {
    pub fn from_json(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| LogError::InvalidArgument(format!("schema definition: {e}")))
    }

    pub fn build(&self, registry: &Registry) -> Result<Schema<Value>> {
        let mut builder = Schema::<Value>::builder();
        for def in &self.fields {
            let mode = FieldMode::from_tag(def.log.as_deref())?;
            let transform = def
                .transform
                .as_deref()
                .map(|name| {
                    registry
                        .get(name)
                        .ok_or_else(|| LogError::InvalidArgument(format!("unknown transform `{name}` on field `{}`", def.name)))
                })
                .transpose()?;

            let key = def.name.clone();
            builder = builder
                .field(def.name.clone(), move |record: &Value| lookup(record, &key))
                .mode(mode)
                .trans(def.trans.clone().unwrap_or_default());

            if def.labels.is_some() || transform.is_some() {
                let key = def.name.clone();
                let labels = def.labels.clone();
                builder = builder.try_change(move |record: &Value| {
                    relabel(&lookup(record, &key), labels.as_ref(), transform.as_ref())
                });
            }
        }
        let schema = builder.build();
        if schema.is_empty() {
            tracing::warn!("schema definition declares no fields");
        }
        Ok(schema)
    }
}

fn lookup(record: &Value, key: &str) -> Value {
    record.get(key).cloned().unwrap_or(Value::Null)
}

fn relabel(
    raw: &Value,
    labels: Option<&BTreeMap<String, Value>>,
    transform: Option<&Arc<dyn Transform>>,
) -> Result<Value> {
    let shown = match labels {
        Some(labels) => {
            let key = match raw {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            labels.get(&key).cloned().unwrap_or(Value::Null)
        }
        None => raw.clone(),
    };
    match transform {
        Some(t) => t.apply(&shown),
        None => Ok(shown),
    }
}
