//! Field value types for element decoding.
//!
//! FieldValue references PDU bytes directly where it can (Str, Bytes) and
//! owns data only when a value has to be constructed (digit strings,
//! joined lists).

use compact_str::CompactString;

/// Possible field value types.
///
/// The lifetime parameter `'data` ties the value to the PDU buffer.
#[derive(Debug, Clone)]
pub enum FieldValue<'data> {
    // === Primitives ===
    /// Unsigned 8-bit integer
    UInt8(u8),
    /// Unsigned 16-bit integer
    UInt16(u16),
    /// Unsigned 32-bit integer
    UInt32(u32),
    /// Signed 64-bit integer
    Int64(i64),
    /// Boolean value (single-bit flags)
    Bool(bool),

    /// Coded value together with its meaning (cause values, algorithm ids).
    Labeled(u64, &'static str),

    // === Zero-copy references into the PDU ===
    /// Zero-copy string reference.
    Str(&'data str),
    /// Zero-copy byte slice reference (opaque values, embedded PDUs).
    Bytes(&'data [u8]),

    // === Constructed/owned values ===
    /// Owned string for constructed values (IMSI digits, PLMN ids).
    /// Uses CompactString for small-string optimization (inline up to 24 bytes).
    OwnedString(CompactString),

    /// List of values (repeated cell identifiers, permitted algorithms).
    /// Note: Uses Vec because FieldValue is recursive.
    List(Vec<FieldValue<'data>>),
}

impl<'data> FieldValue<'data> {
    /// Try to get as u64.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            FieldValue::UInt8(v) => Some(*v as u64),
            FieldValue::UInt16(v) => Some(*v as u64),
            FieldValue::UInt32(v) => Some(*v as u64),
            FieldValue::Labeled(v, _) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as str reference (labels included).
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(s) => Some(s),
            FieldValue::OwnedString(s) => Some(s.as_str()),
            FieldValue::Labeled(_, label) => Some(label),
            _ => None,
        }
    }

    /// Get the number of elements if this is a list, or None otherwise.
    pub fn list_len(&self) -> Option<usize> {
        match self {
            FieldValue::List(items) => Some(items.len()),
            _ => None,
        }
    }
}

impl<'data> std::fmt::Display for FieldValue<'data> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::UInt8(v) => write!(f, "{v}"),
            FieldValue::UInt16(v) => write!(f, "{v}"),
            FieldValue::UInt32(v) => write!(f, "{v}"),
            FieldValue::Int64(v) => write!(f, "{v}"),
            FieldValue::Bool(v) => write!(f, "{v}"),
            FieldValue::Labeled(v, label) => write!(f, "{label} ({v})"),
            FieldValue::Str(s) => write!(f, "{s}"),
            FieldValue::OwnedString(s) => write!(f, "{s}"),
            FieldValue::Bytes(b) => f.write_str(&hex::encode(b)),
            FieldValue::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

// Implement PartialEq manually to handle borrowed vs owned comparison
impl<'a, 'b> PartialEq<FieldValue<'b>> for FieldValue<'a> {
    fn eq(&self, other: &FieldValue<'b>) -> bool {
        match (self, other) {
            (FieldValue::UInt8(a), FieldValue::UInt8(b)) => a == b,
            (FieldValue::UInt16(a), FieldValue::UInt16(b)) => a == b,
            (FieldValue::UInt32(a), FieldValue::UInt32(b)) => a == b,
            (FieldValue::Int64(a), FieldValue::Int64(b)) => a == b,
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a == b,
            (FieldValue::Labeled(a, la), FieldValue::Labeled(b, lb)) => a == b && la == lb,
            // String comparisons: allow cross-comparison between Str and OwnedString
            (FieldValue::Str(a), FieldValue::Str(b)) => a == b,
            (FieldValue::Str(a), FieldValue::OwnedString(b)) => *a == b.as_str(),
            (FieldValue::OwnedString(a), FieldValue::Str(b)) => a.as_str() == *b,
            (FieldValue::OwnedString(a), FieldValue::OwnedString(b)) => a == b,
            (FieldValue::Bytes(a), FieldValue::Bytes(b)) => a == b,
            (FieldValue::List(a), FieldValue::List(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x == y)
            }
            _ => false,
        }
    }
}
