//! Rendering contract and document generation
//!
//! The derivation engine's sole external contract is the [`RenderContext`]:
//! an ordered, flat mapping from placeholder name to value, where a value is
//! text, a number, or a table (an ordered sequence of ordered records). The
//! context serializes to JSON for hand-off to an external document renderer,
//! and feeds the built-in text-template renderer in [`template`].

pub mod document;
pub mod template;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::error::SowResult;

pub use document::{generate, output_file_name, render_to_string, stash_template};
pub use template::Template;

/// A single context value
#[derive(Debug, Clone, PartialEq)]
pub enum ContextValue {
    /// Plain text
    Text(String),
    /// A raw number
    Number(f64),
    /// An ordered sequence of records, iterated by template sections
    Table(Vec<ContextRow>),
}

/// One record of a table value, with field order preserved
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContextRow {
    fields: Vec<(String, ContextValue)>,
}

impl ContextRow {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field
    pub fn push(&mut self, key: impl Into<String>, value: ContextValue) {
        self.fields.push((key.into(), value));
    }

    /// Append a text field
    pub fn text(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.push(key, ContextValue::Text(value.into()));
    }

    /// Append a numeric field
    pub fn number(&mut self, key: impl Into<String>, value: f64) {
        self.push(key, ContextValue::Number(value));
    }

    /// Look up a field by name
    pub fn get(&self, key: &str) -> Option<&ContextValue> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Iterate fields in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ContextValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// The named-value mapping handed to the document renderer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderContext {
    entries: Vec<(String, ContextValue)>,
}

impl RenderContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value
    pub fn insert(&mut self, key: impl Into<String>, value: ContextValue) {
        self.entries.push((key.into(), value));
    }

    /// Insert a text value
    pub fn text(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.insert(key, ContextValue::Text(value.into()));
    }

    /// Insert a numeric value
    pub fn number(&mut self, key: impl Into<String>, value: f64) {
        self.insert(key, ContextValue::Number(value));
    }

    /// Insert a table value
    pub fn table(&mut self, key: impl Into<String>, rows: Vec<ContextRow>) {
        self.insert(key, ContextValue::Table(rows));
    }

    /// Look up a value by name
    pub fn get(&self, key: &str) -> Option<&ContextValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ContextValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the context is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_pretty(&self) -> SowResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serialize to compact JSON
    pub fn to_json(&self) -> SowResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Serialize for ContextValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(s) => serializer.serialize_str(s),
            Self::Number(n) => serializer.serialize_f64(*n),
            Self::Table(rows) => serializer.collect_seq(rows),
        }
    }
}

impl Serialize for ContextRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for RenderContext {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
