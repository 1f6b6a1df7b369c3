//! Output formatting for CLI commands.

use std::io::{self, Write};

use clap::ValueEnum;
use colored::Colorize;
use propstore_store::{TypeTag, Value};
use serde::Serialize;

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one value per line.
    #[default]
    Text,
    /// JSON object.
    Json,
}

/// JSON view of a property.
#[derive(Debug, Serialize)]
pub struct PropertyView<'a> {
    pub key: &'a str,
    #[serde(rename = "type")]
    pub type_tag: TypeTag,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

/// Convert a value into its natural JSON form.
///
/// Blobs become base64 strings; non-finite doubles become `null`.
pub fn value_json(value: &Value) -> serde_json::Value {
    match value {
        Value::String(s) => serde_json::Value::from(s.as_str()),
        Value::Int32(v) => serde_json::Value::from(*v),
        Value::Int64(v) => serde_json::Value::from(*v),
        Value::Double(v) => serde_json::Value::from(*v),
        Value::Bool(v) => serde_json::Value::from(*v),
        Value::Blob(_) => serde_json::Value::from(value.to_string()),
    }
}

/// Write a single property view in the requested format.
pub fn write_property(
    out: &mut impl Write,
    view: &PropertyView<'_>,
    format: OutputFormat,
    text: &str,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", text),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(view).map_err(io::Error::other)?;
            writeln!(out, "{}", json)
        }
    }
}

/// Write a success message.
pub fn write_success(out: &mut impl Write, format: OutputFormat, message: &str) -> io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{} {}", "✓".green(), message),
        OutputFormat::Json => writeln!(out, "{}", serde_json::json!({ "ok": true })),
    }
}
