use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

use super::FormatError;

/// Parses `input` as a JSON document and re-serializes it with `indent`
/// spaces per nesting level. Key insertion order and all value types are
/// preserved exactly, so any valid document round-trips.
pub fn format_json(input: &str, indent: usize) -> Result<String, FormatError> {
    let value: serde_json::Value =
        serde_json::from_str(input).map_err(|err| FormatError::Parse(err.to_string()))?;

    let unit = " ".repeat(indent);
    let mut buf = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(unit.as_bytes()));
    value
        .serialize(&mut serializer)
        .map_err(|err| FormatError::External(err.to_string()))?;

    Ok(String::from_utf8(buf).expect("serde_json emits utf-8"))
}
