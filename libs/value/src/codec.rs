//! Text codec for stored property values.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::{CodecError, TypeTag, Value};

const TRUE_TEXT: &str = "true";
const FALSE_TEXT: &str = "false";

/// Encodes a value into its storage text.
pub fn encode(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Int32(v) => v.to_string(),
        Value::Int64(v) => v.to_string(),
        // `Display` for f64 emits the shortest text that parses back to the
        // same bits, so no precision is lost.
        Value::Double(v) => v.to_string(),
        Value::Bool(true) => TRUE_TEXT.to_string(),
        Value::Bool(false) => FALSE_TEXT.to_string(),
        Value::Blob(bytes) => STANDARD.encode(bytes),
    }
}

/// Decodes storage text under the given type.
pub fn decode(text: &str, tag: TypeTag) -> Result<Value, CodecError> {
    match tag {
        TypeTag::String => Ok(Value::String(text.to_string())),
        TypeTag::Int32 => text
            .parse::<i32>()
            .map(Value::Int32)
            .map_err(|e| CodecError::parse(tag, e)),
        TypeTag::Int64 => text
            .parse::<i64>()
            .map(Value::Int64)
            .map_err(|e| CodecError::parse(tag, e)),
        TypeTag::Double => text
            .parse::<f64>()
            .map(Value::Double)
            .map_err(|e| CodecError::parse(tag, e)),
        TypeTag::Bool => match text {
            TRUE_TEXT => Ok(Value::Bool(true)),
            FALSE_TEXT => Ok(Value::Bool(false)),
            other => Err(CodecError::parse(
                tag,
                format!("expected 'true' or 'false', got '{}'", other),
            )),
        },
        TypeTag::Blob => STANDARD
            .decode(text)
            .map(Value::Blob)
            .map_err(|e| CodecError::parse(tag, e)),
    }
}
