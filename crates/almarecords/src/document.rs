//! # Document Tree
//!
//! [`Document`] is the schema-less tree every record is backed by. It wraps a
//! `serde_json::Value` and exposes path-based access, where a path is a dotted
//! list of field names (`contact_info.address`). The empty path is the root.
//!
//! The tree performs no validation and no coercion. It only guarantees that
//! whatever it was given survives unchanged: field order is kept (the
//! `preserve_order` feature of `serde_json`), and fields no accessor knows
//! about are carried through every read-modify-write cycle.
//!
//! ## Absence
//!
//! [`Document::get`] fails with [`RecordError::NotFound`] when a path is
//! absent, but most callers want the "absent means empty" reading, which is
//! what [`Document::lookup`], [`Document::child`] and [`Document::sequence`]
//! provide.

use crate::error::{RecordError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Borrowed view of a single position in the tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node<'a> {
    /// String, number, bool or null.
    Scalar(&'a Value),
    /// A nested object with named fields.
    Object(&'a Map<String, Value>),
    /// A repeated group.
    Sequence(&'a [Value]),
}

impl<'a> Node<'a> {
    fn of(value: &'a Value) -> Self {
        match value {
            Value::Object(map) => Node::Object(map),
            Value::Array(items) => Node::Sequence(items),
            other => Node::Scalar(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    root: Value,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Value> for Document {
    fn from(root: Value) -> Self {
        Self { root }
    }
}

fn split(path: &str) -> impl Iterator<Item = &str> {
    path.split('.').filter(|segment| !segment.is_empty())
}

impl Document {
    /// An empty object.
    pub fn new() -> Self {
        Self {
            root: Value::Object(Map::new()),
        }
    }

    pub fn from_wire(wire: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(wire)?;
        Ok(Self { root })
    }

    pub fn to_wire(&self) -> String {
        self.root.to_string()
    }

    pub fn to_wire_pretty(&self) -> String {
        format!("{:#}", self.root)
    }

    pub fn value(&self) -> &Value {
        &self.root
    }

    pub fn into_value(self) -> Value {
        self.root
    }

    pub fn is_empty(&self) -> bool {
        match &self.root {
            Value::Object(map) => map.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::Null => true,
            _ => false,
        }
    }

    /// Top-level field names, in wire order.
    pub fn field_names(&self) -> Vec<&str> {
        match &self.root {
            Value::Object(map) => map.keys().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Top-level fields with their values, in wire order. Keys are returned
    /// as stored, including keys that contain dots or are empty.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.root
            .as_object()
            .into_iter()
            .flat_map(|map| map.iter().map(|(key, value)| (key.as_str(), value)))
    }

    /// Write a top-level field. `key` is taken literally and never split
    /// into a path.
    pub fn set_field(&mut self, key: &str, value: impl Into<Value>) {
        if let Some(map) = ensure_object(&mut self.root, key) {
            map.insert(key.to_string(), value.into());
        }
    }

    /// Resolve a path, treating absence as `None`.
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        split(path).try_fold(&self.root, |current, key| current.as_object()?.get(key))
    }

    /// Resolve a path, failing when it is absent.
    pub fn get(&self, path: &str) -> Result<&Value> {
        self.lookup(path)
            .ok_or_else(|| RecordError::NotFound(path.to_string()))
    }

    pub fn node(&self, path: &str) -> Result<Node<'_>> {
        self.get(path).map(Node::of)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.lookup(path).is_some()
    }

    /// Write `value` at `path`, creating intermediate objects as needed.
    ///
    /// An intermediate position holding a scalar or array is replaced by an
    /// object. Writing to an existing key keeps its position in field order.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) {
        let keys: Vec<&str> = split(path).collect();
        let Some((last, parents)) = keys.split_last() else {
            self.root = value.into();
            return;
        };

        let mut current = &mut self.root;
        for key in parents {
            let Some(map) = ensure_object(current, path) else {
                return;
            };
            current = map
                .entry(key.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
        }
        if let Some(map) = ensure_object(current, path) {
            map.insert(last.to_string(), value.into());
        }
    }

    /// Remove the value at `path`, keeping the order of its siblings.
    pub fn remove(&mut self, path: &str) -> Option<Value> {
        let keys: Vec<&str> = split(path).collect();
        let (last, parents) = keys.split_last()?;

        let mut current = &mut self.root;
        for key in parents {
            current = current.as_object_mut()?.get_mut(*key)?;
        }
        current.as_object_mut()?.shift_remove(*last)
    }

    /// Copy of the nested object at `path`; absent yields an empty document.
    pub fn child(&self, path: &str) -> Document {
        match self.lookup(path) {
            Some(value) if value.is_object() => Document::from(value.clone()),
            _ => Document::new(),
        }
    }

    /// Replace the nested object at `path` with a deep copy of `child`.
    pub fn set_child(&mut self, path: &str, child: &Document) {
        self.set(path, child.root.clone());
    }

    /// Copies of the entries of the repeated group at `path`.
    ///
    /// Absent or null reads as empty; a lone object reads as a one-element
    /// sequence.
    pub fn sequence(&self, path: &str) -> Vec<Document> {
        match self.lookup(path) {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items.iter().cloned().map(Document::from).collect(),
            Some(single) => vec![Document::from(single.clone())],
        }
    }

    /// Replace the repeated group at `path` wholesale.
    pub fn set_sequence(&mut self, path: &str, entries: Vec<Document>) {
        let items = entries.into_iter().map(Document::into_value).collect();
        self.set(path, Value::Array(items));
    }
}

/// The object at `value`, replacing a scalar or array with an empty object.
fn ensure_object<'a>(value: &'a mut Value, path: &str) -> Option<&'a mut Map<String, Value>> {
    if !value.is_object() {
        debug!("replacing non-object value with an object while writing '{path}'");
        *value = Value::Object(Map::new());
    }
    value.as_object_mut()
}
