//! Per-shape field metadata.
//!
//! A [`Schema`] is the explicit table a caller builds once for each record
//! type: which fields take part in descriptions, under which display name,
//! and how an owning instance may transform a raw value before display.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::errors::{LogError, Result};

/// How a field takes part in a description.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FieldMode {
    /// No inclusion marker: never compared, never rendered.
    #[default]
    Skip,
    /// `need`: compared and revealed.
    Compare,
    /// `special`: only the fact that it changed is reported.
    Special,
}

impl FieldMode {
    /// Parse the declarative inclusion marker.
    pub fn from_tag(tag: Option<&str>) -> Result<Self> {
        match tag.map(str::trim) {
            None | Some("") => Ok(FieldMode::Skip),
            Some("need") => Ok(FieldMode::Compare),
            Some("special") => Ok(FieldMode::Special),
            Some(other) => Err(LogError::InvalidArgument(format!(
                "unknown log tag `{other}`, expected `need` or `special`"
            ))),
        }
    }

    pub fn is_eligible(self) -> bool {
        self != FieldMode::Skip
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub display_name: String,
    pub mode: FieldMode,
}

pub(crate) type Getter<T> = Arc<dyn Fn(&T) -> Result<Value> + Send + Sync>;

fn getter<T, V, F>(f: F) -> Getter<T>
where
    V: Serialize,
    F: Fn(&T) -> V + Send + Sync + 'static,
{
    Arc::new(move |owner: &T| -> Result<Value> { to_display_value(&f(owner)) })
}

/// Serialize through text so floats keep the shortest form of their own
/// width (`0.1f32` stays `0.1` instead of widening to `0.10000000149011612`).
pub(crate) fn to_display_value<V: Serialize>(v: &V) -> Result<Value> {
    let text = serde_json::to_string(v)?;
    Ok(serde_json::from_str(&text)?)
}

pub struct Field<T> {
    descriptor: FieldDescriptor,
    get: Getter<T>,
    change: Option<Getter<T>>,
}

impl<T> Field<T> {
    pub fn descriptor(&self) -> &FieldDescriptor {
        &self.descriptor
    }

    pub(crate) fn read(&self, owner: &T) -> Result<Value> {
        (self.get)(owner)
    }

    /// The owner's transformer for this field, if one was registered.
    pub(crate) fn transformer(&self) -> Option<&Getter<T>> {
        self.change.as_ref()
    }
}

impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        Self {
            descriptor: self.descriptor.clone(),
            get: Arc::clone(&self.get),
            change: self.change.clone(),
        }
    }
}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("descriptor", &self.descriptor)
            .field("transformer", &self.change.is_some())
            .finish()
    }
}

/// Ordered field table for one record type. Order is declaration order.
pub struct Schema<T> {
    fields: Vec<Field<T>>,
}

impl<T> Schema<T> {
    pub fn builder() -> SchemaBuilder<T> {
        SchemaBuilder::default()
    }

    /// Every declared field, in declaration order, including skipped ones.
    pub fn describe(&self) -> impl Iterator<Item = &FieldDescriptor> + '_ {
        self.fields.iter().map(Field::descriptor)
    }

    /// Fields that take part in descriptions.
    pub(crate) fn eligible(&self) -> impl Iterator<Item = &Field<T>> + '_ {
        self.fields.iter().filter(|f| f.descriptor.mode.is_eligible())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<T> Clone for Schema<T> {
    fn clone(&self) -> Self {
        Self { fields: self.fields.clone() }
    }
}

impl<T> fmt::Debug for Schema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.fields).finish()
    }
}

/// Builds a [`Schema`] one field at a time. Modifiers (`need`, `special`,
/// `trans`, `change`) apply to the most recently added field.
pub struct SchemaBuilder<T> {
    fields: Vec<Field<T>>,
}

impl<T> Default for SchemaBuilder<T> {
    fn default() -> Self {
        Self { fields: Vec::new() }
    }
}

impl<T> SchemaBuilder<T> {
    /// Declare a field. It starts out untagged (skipped).
    pub fn field<V, F>(mut self, name: impl Into<String>, get: F) -> Self
    where
        V: Serialize,
        F: Fn(&T) -> V + Send + Sync + 'static,
    {
        let name = name.into();
        self.fields.push(Field {
            descriptor: FieldDescriptor {
                display_name: name.clone(),
                name,
                mode: FieldMode::Skip,
            },
            get: getter(get),
            change: None,
        });
        self
    }

    pub fn mode(mut self, mode: FieldMode) -> Self {
        if let Some(last) = self.last() {
            last.descriptor.mode = mode;
        }
        self
    }

    pub fn need(self) -> Self {
        self.mode(FieldMode::Compare)
    }

    pub fn special(self) -> Self {
        self.mode(FieldMode::Special)
    }

    /// Display name used in generated text instead of the field name.
    pub fn trans(mut self, display_name: impl Into<String>) -> Self {
        let display_name = display_name.into();
        if let Some(last) = self.last() {
            if !display_name.is_empty() {
                last.descriptor.display_name = display_name;
            }
        }
        self
    }

    /// Transformer producing the display value from the owning instance.
    pub fn change<V, F>(self, f: F) -> Self
    where
        V: Serialize,
        F: Fn(&T) -> V + Send + Sync + 'static,
    {
        self.set_change(getter(f))
    }

    /// Like [`change`](Self::change) for transformers that can fail.
    pub fn try_change<F>(self, f: F) -> Self
    where
        F: Fn(&T) -> Result<Value> + Send + Sync + 'static,
    {
        self.set_change(Arc::new(f))
    }

    pub fn build(self) -> Schema<T> {
        Schema { fields: self.fields }
    }

    fn set_change(mut self, change: Getter<T>) -> Self {
        if let Some(last) = self.last() {
            last.change = Some(change);
        }
        self
    }

    fn last(&mut self) -> Option<&mut Field<T>> {
        debug_assert!(!self.fields.is_empty(), "field modifier used before any field");
        self.fields.last_mut()
    }
}

/// A structured, field-addressable value that a [`Schema`] can describe.
pub trait Record {
    fn is_record(&self) -> bool {
        true
    }
}

impl Record for Value {
    fn is_record(&self) -> bool {
        self.is_object()
    }
}
