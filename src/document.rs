//! Résumé documents in the public JSON Resume schema.
//!
//! A [`Document`] is an untyped JSON object. Schema validity is the renderer theme's concern;
//! the only structural rule enforced here is that the top level is a mapping.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::foundation::error::{VitaeError, VitaeResult};

/// A résumé record: a JSON object with keys kept in the order they were read.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(Map<String, Value>);

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a JSON value, rejecting anything that is not an object.
    pub fn from_value(value: Value) -> VitaeResult<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(VitaeError::validation(format!(
                "résumé document must be a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn from_reader(reader: impl Read) -> VitaeResult<Self> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_value(value)
    }

    /// Read and parse a document from a JSON file.
    pub fn from_path(path: &Path) -> VitaeResult<Self> {
        let f = File::open(path)
            .with_context(|| format!("open résumé document '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize as two-space indented JSON.
    pub fn write_pretty(&self, writer: impl Write) -> VitaeResult<()> {
        serde_json::to_writer_pretty(writer, &self.0)?;
        Ok(())
    }

    pub fn write_to_path(&self, path: &Path) -> VitaeResult<()> {
        let f = File::create(path)
            .with_context(|| format!("create document file '{}'", path.display()))?;
        let mut w = BufWriter::new(f);
        self.write_pretty(&mut w)?;
        w.flush()
            .with_context(|| format!("flush document file '{}'", path.display()))?;
        Ok(())
    }

    pub fn to_pretty_string(&self) -> VitaeResult<String> {
        Ok(serde_json::to_string_pretty(&self.0)?)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Insert a top-level section, returning the previous value if there was one.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for Document {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Document {
    type Error = VitaeError;

    fn try_from(value: Value) -> VitaeResult<Self> {
        Self::from_value(value)
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
