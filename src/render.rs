use std::borrow::Cow;

use serde_json::Value;

use crate::context::Phrasebook;
use crate::errors::Result;
use crate::schema::Getter;

/// Display form of a single value.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    /// The value was zero/empty; shown as the phrasebook's empty sentinel.
    Empty,
    Value(Value),
}

impl Rendered {
    pub fn text<'a>(&'a self, phrases: &Phrasebook) -> Cow<'a, str> {
        match self {
            Rendered::Empty => Cow::Borrowed(phrases.empty),
            Rendered::Value(Value::String(s)) => Cow::Borrowed(s.as_str()),
            Rendered::Value(v) => Cow::Owned(v.to_string()),
        }
    }

    fn from_value(v: Value) -> Self {
        if is_zero(&v) {
            Rendered::Empty
        } else {
            Rendered::Value(v)
        }
    }
}

/// Zero value for the value's own kind: null, 0, "", false, or a container
/// whose members are all zero (a default struct, `[0, 0]`, `[]`, `{}`).
pub fn is_zero(v: &Value) -> bool {
    match v {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.iter().all(is_zero),
        Value::Object(o) => o.values().all(is_zero),
    }
}

/// Render a value that has no owning instance (extras).
pub fn render(raw: &Value) -> Rendered {
    Rendered::from_value(raw.clone())
}

/// Render a field value, giving the owner's transformer a chance to relabel it.
///
/// Zero raw values never reach the transformer. A transformer that yields a
/// zero value is rendered as empty too.
pub(crate) fn render_owned<T>(raw: &Value, owner: &T, change: Option<&Getter<T>>) -> Result<Rendered> {
    if is_zero(raw) {
        return Ok(Rendered::Empty);
    }
    match change {
        Some(change) => {
            let shown = change(owner)?;
            tracing::trace!(raw = %raw, shown = %shown, "transformed field value");
            Ok(Rendered::from_value(shown))
        }
        None => Ok(Rendered::Value(raw.clone())),
    }
}
