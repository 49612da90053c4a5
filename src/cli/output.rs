//! Output formatting for dissection results.
//!
//! Three renderings of the same layer list: an indented tree for reading,
//! one `path = value` line per field for grepping, and JSON Lines (one
//! object per PDU) for tooling.

use std::io::Write;

use clap::ValueEnum;
use serde_json::{json, Map, Value};

use celldissect_core::engine::Diagnostic;
use celldissect_core::protocol::{Element, ElementStatus, FieldEntry, FieldValue, ParseResult};

use super::Pdu;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Indented element tree (default)
    Tree,
    /// One `layer.element.field = value` line per field
    Flat,
    /// JSON Lines (one JSON object per PDU)
    Json,
}

/// Layers produced by one dissection.
pub type Layers<'a> = [(&'static str, ParseResult<'a>)];

/// Formats dissection results for output.
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    /// Create a new formatter with the specified format.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Format the layers of one PDU and write to the given writer.
    pub fn write<W: Write>(
        &self,
        pdu: &Pdu,
        layers: &Layers<'_>,
        writer: &mut W,
    ) -> std::io::Result<()> {
        match self.format {
            OutputFormat::Tree => self.write_tree(pdu, layers, writer),
            OutputFormat::Flat => self.write_flat(pdu, layers, writer),
            OutputFormat::Json => self.write_json(pdu, layers, writer),
        }
    }

    fn write_tree<W: Write>(
        &self,
        pdu: &Pdu,
        layers: &Layers<'_>,
        writer: &mut W,
    ) -> std::io::Result<()> {
        writeln!(writer, "{} ({} bytes)", pdu.source, pdu.bytes.len())?;
        if layers.is_empty() {
            writeln!(writer, "  (no parser matched)")?;
        }

        for (name, result) in layers {
            writeln!(writer, "  {} @ {}", name, result.offset)?;
            for (field, value) in &result.fields {
                writeln!(writer, "    {field} = {value}")?;
            }
            for element in &result.elements {
                write_element(element, 2, writer)?;
            }
            for diagnostic in &result.diagnostics {
                writeln!(writer, "    ! {diagnostic}")?;
            }
        }
        writeln!(writer)
    }

    fn write_flat<W: Write>(
        &self,
        pdu: &Pdu,
        layers: &Layers<'_>,
        writer: &mut W,
    ) -> std::io::Result<()> {
        for (name, result) in layers {
            for (field, value) in &result.fields {
                writeln!(writer, "{}\t{name}.{field} = {value}", pdu.source)?;
            }
            for element in &result.elements {
                write_flat_element(&pdu.source, name, element, writer)?;
            }
            for diagnostic in &result.diagnostics {
                writeln!(writer, "{}\t{name}! {diagnostic}", pdu.source)?;
            }
        }
        Ok(())
    }

    fn write_json<W: Write>(
        &self,
        pdu: &Pdu,
        layers: &Layers<'_>,
        writer: &mut W,
    ) -> std::io::Result<()> {
        let value = pdu_json(pdu, layers);
        serde_json::to_writer(&mut *writer, &value)?;
        writeln!(writer)
    }
}

fn status_suffix(status: &ElementStatus) -> String {
    match status {
        ElementStatus::Decoded => String::new(),
        ElementStatus::NotDecoded => " [not decoded]".to_string(),
        ElementStatus::Malformed(error) => format!(" [malformed: {error}]"),
        ElementStatus::Truncated => " [truncated]".to_string(),
        ElementStatus::Extraneous => " [extraneous]".to_string(),
    }
}

fn status_name(status: &ElementStatus) -> &'static str {
    match status {
        ElementStatus::Decoded => "decoded",
        ElementStatus::NotDecoded => "not_decoded",
        ElementStatus::Malformed(_) => "malformed",
        ElementStatus::Truncated => "truncated",
        ElementStatus::Extraneous => "extraneous",
    }
}

fn write_element<W: Write>(
    element: &Element<'_>,
    level: usize,
    writer: &mut W,
) -> std::io::Result<()> {
    let indent = "  ".repeat(level);
    let tag = element.tag.map(|t| format!(" (0x{t:02x})")).unwrap_or_default();
    writeln!(
        writer,
        "{indent}{}{tag} @ {}, {} bytes{}",
        element.name,
        element.offset,
        element.length,
        status_suffix(&element.status)
    )?;

    if element.fields.is_empty() && element.children.is_empty() && !element.value.is_empty() {
        writeln!(writer, "{indent}  value = {}", hex::encode(element.value))?;
    }
    for (field, value) in &element.fields {
        writeln!(writer, "{indent}  {field} = {value}")?;
    }
    for child in &element.children {
        write_element(child, level + 1, writer)?;
    }
    Ok(())
}

fn write_flat_element<W: Write>(
    source: &str,
    path: &str,
    element: &Element<'_>,
    writer: &mut W,
) -> std::io::Result<()> {
    let path = format!("{path}.{}", element.name);
    if element.fields.is_empty() && element.children.is_empty() {
        writeln!(writer, "{source}\t{path} = {}", hex::encode(element.value))?;
    }
    for (field, value) in &element.fields {
        writeln!(writer, "{source}\t{path}.{field} = {value}")?;
    }
    for child in &element.children {
        write_flat_element(source, &path, child, writer)?;
    }
    Ok(())
}

/// JSON rendering of a field value. Labeled values keep both the code and
/// its meaning; byte strings become hex.
pub fn value_json(value: &FieldValue<'_>) -> Value {
    match value {
        FieldValue::UInt8(v) => json!(v),
        FieldValue::UInt16(v) => json!(v),
        FieldValue::UInt32(v) => json!(v),
        FieldValue::Int64(v) => json!(v),
        FieldValue::Bool(v) => json!(v),
        FieldValue::Labeled(v, label) => json!({ "value": v, "name": label }),
        FieldValue::Str(s) => json!(s),
        FieldValue::OwnedString(s) => json!(s.as_str()),
        FieldValue::Bytes(b) => json!(hex::encode(b)),
        FieldValue::List(items) => Value::Array(items.iter().map(value_json).collect()),
    }
}

fn fields_json(fields: &[FieldEntry<'_>]) -> Value {
    let mut map = Map::new();
    for (name, value) in fields {
        map.insert((*name).to_string(), value_json(value));
    }
    Value::Object(map)
}

fn element_json(element: &Element<'_>) -> Value {
    let mut object = json!({
        "name": element.name,
        "offset": element.offset,
        "length": element.length,
        "status": status_name(&element.status),
        "value": hex::encode(element.value),
        "fields": fields_json(&element.fields),
    });
    if let Some(tag) = element.tag {
        object["tag"] = json!(tag);
    }
    if let ElementStatus::Malformed(error) = &element.status {
        object["error"] = json!(error.to_string());
    }
    if !element.children.is_empty() {
        object["children"] = Value::Array(element.children.iter().map(element_json).collect());
    }
    object
}

fn diagnostic_json(diagnostic: &Diagnostic) -> Value {
    json!({
        "offset": diagnostic.offset,
        "severity": diagnostic.severity.as_str(),
        "message": diagnostic.error.to_string(),
    })
}

/// JSON rendering of one dissected PDU.
pub fn pdu_json(pdu: &Pdu, layers: &Layers<'_>) -> Value {
    let layers: Vec<Value> = layers
        .iter()
        .map(|(name, result)| {
            json!({
                "protocol": name,
                "offset": result.offset,
                "fields": fields_json(&result.fields),
                "elements": result.elements.iter().map(element_json).collect::<Vec<_>>(),
                "diagnostics": result.diagnostics.iter().map(diagnostic_json).collect::<Vec<_>>(),
                "error": result.error.as_ref().map(|e| e.to_string()),
            })
        })
        .collect();

    json!({
        "source": pdu.source,
        "length": pdu.bytes.len(),
        "layers": layers,
    })
}
