//! JSON document format and file persistence.
//!
//! A presentation is stored as a single JSON object:
//!
//! ```text
//! {
//!   "slides": [
//!     {"type": "text",  "title": "...", "content": "..."},
//!     {"type": "image", "title": "...", "url": "...", "alt": "..."},
//!     {"type": "quiz",  "title": "...", "question": "...", "options": ["..."]}
//!   ]
//! }
//! ```
//!
//! Files are always read and written whole.

use crate::error::Result;
use crate::types::Presentation;
use serde::de::Error as _;
use serde::Deserialize;
use serde_json::Value;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

impl Presentation {
    /// Convert to a `{"slides": [...]}` JSON value.
    pub fn to_document(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Read a presentation from a JSON value.
    ///
    /// A document without a `slides` key is an empty presentation. Missing
    /// slide fields default to empty values. The root must be an object and
    /// `slides`, when present, must be an array of tagged slides.
    pub fn from_document(value: &Value) -> Result<Self> {
        // Derived struct impls also accept a JSON array; only objects are documents.
        if !value.is_object() {
            return Err(serde_json::Error::custom(format!(
                "expected an object at the document root, found {}",
                json_type_name(value)
            ))
            .into());
        }

        Ok(Presentation::deserialize(value)?)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Parse a presentation from JSON text.
pub fn from_str(json: &str) -> Result<Presentation> {
    let value: Value = serde_json::from_str(json)?;
    Presentation::from_document(&value)
}

/// Serialize a presentation as indented JSON text.
pub fn to_string_pretty(presentation: &Presentation) -> Result<String> {
    Ok(serde_json::to_string_pretty(presentation)?)
}

/// Load a presentation from a JSON file.
pub fn load(path: impl AsRef<Path>) -> Result<Presentation> {
    let path = path.as_ref();
    log::debug!("Loading presentation from {}", path.display());

    let text = fs::read_to_string(path)?;
    let presentation = from_str(&text)?;

    log::debug!("Loaded {} slides", presentation.len());
    Ok(presentation)
}

/// Write a presentation to a JSON file, replacing any existing content.
pub fn save(path: impl AsRef<Path>, presentation: &Presentation) -> Result<()> {
    let path = path.as_ref();
    log::debug!(
        "Saving {} slides to {}",
        presentation.len(),
        path.display()
    );

    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, presentation)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    Ok(())
}
