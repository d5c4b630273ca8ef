use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use crate::errors::Result;

/// Trait for named value transforms that JSON schema definitions can refer to.
pub trait Transform: Send + Sync {
    fn name(&self) -> &'static str;
    fn apply(&self, value: &Value) -> Result<Value>;
}

/// Thread-safe transform registry.
#[derive(Clone, Default)]
pub struct Registry {
    inner: Arc<HashMap<&'static str, Arc<dyn Transform>>>,
}

impl Registry {
    pub fn new() -> Self { Self::default() }

    pub fn with_builtins() -> Self {
        let mut map: HashMap<&'static str, Arc<dyn Transform>> = HashMap::new();
        map.insert("lower", Arc::new(builtins::Lower));
        map.insert("upper", Arc::new(builtins::Upper));
        map.insert("trim", Arc::new(builtins::Trim));
        Self { inner: Arc::new(map) }
    }

    pub fn register<F: Transform + 'static>(&mut self, f: F) {
        let mut_map = Arc::make_mut(&mut self.inner);
        mut_map.insert(f.name(), Arc::new(f));
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Transform>> {
        self.inner.get(name).cloned()
    }
}

pub mod builtins {
    use super::*;

    fn map_str(value: &Value, f: impl Fn(&str) -> String) -> Value {
        match value {
            Value::String(t) => Value::String(f(t)),
            other => other.clone(),
        }
    }

    pub struct Lower;
    impl Transform for Lower {
        fn name(&self) -> &'static str { "lower" }
        fn apply(&self, value: &Value) -> Result<Value> {
            Ok(map_str(value, str::to_lowercase))
        }
    }

    pub struct Upper;
    impl Transform for Upper {
        fn name(&self) -> &'static str { "upper" }
        fn apply(&self, value: &Value) -> Result<Value> {
            Ok(map_str(value, str::to_uppercase))
        }
    }

    // Whitespace-only text becomes empty, so it renders as the empty sentinel.
    pub struct Trim;
    impl Transform for Trim {
        fn name(&self) -> &'static str { "trim" }
        fn apply(&self, value: &Value) -> Result<Value> {
            Ok(map_str(value, |s| s.trim().to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    struct Redact;
    impl Transform for Redact {
        fn name(&self) -> &'static str { "redact" }
        fn apply(&self, _: &Value) -> Result<Value> { Ok(json!("***")) }
    }

    #[test]
    fn builtins_leave_non_text_alone() {
        let reg = Registry::with_builtins();
        assert_eq!(reg.get("upper").unwrap().apply(&json!("ab")).unwrap(), json!("AB"));
        assert_eq!(reg.get("lower").unwrap().apply(&json!(3)).unwrap(), json!(3));
        assert_eq!(reg.get("trim").unwrap().apply(&json!("  ")).unwrap(), json!(""));
    }

    #[test]
    fn register_custom() {
        let mut reg = Registry::new();
        assert!(reg.get("redact").is_none());
        reg.register(Redact);
        assert_eq!(reg.get("redact").unwrap().apply(&json!("pw")).unwrap(), json!("***"));
    }
}
