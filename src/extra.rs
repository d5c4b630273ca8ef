use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::compare::pair_message;
use crate::context::Phrasebook;
use crate::render::render;

/// An ad-hoc named value pair described alongside a record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Extra {
    pub name: String,
    #[serde(default, alias = "old_data")]
    pub old: Option<Value>,
    #[serde(default, alias = "new_data")]
    pub new: Option<Value>,
}

impl Extra {
    pub fn new(name: impl Into<String>, old: Option<Value>, new: Option<Value>) -> Self {
        Self { name: name.into(), old, new }
    }

    pub fn changed(name: impl Into<String>, old: impl Into<Value>, new: impl Into<Value>) -> Self {
        Self::new(name, Some(old.into()), Some(new.into()))
    }

    /// Only the new side exists.
    pub fn added(name: impl Into<String>, new: impl Into<Value>) -> Self {
        Self::new(name, None, Some(new.into()))
    }

    /// Only the old side exists.
    pub fn removed(name: impl Into<String>, old: impl Into<Value>) -> Self {
        Self::new(name, Some(old.into()), None)
    }
}

pub fn describe_extras(extras: &[Extra], phrases: &Phrasebook) -> Vec<String> {
    extras
        .iter()
        .filter_map(|extra| match (&extra.old, &extra.new) {
            (Some(old), Some(new)) if old == new => None,
            (Some(old), Some(new)) => pair_message(&extra.name, &render(old), &render(new), phrases),
            (Some(one), None) | (None, Some(one)) => Some(phrases.value(&extra.name, &render(one).text(phrases))),
            (None, None) => None,
        })
        .collect()
}
