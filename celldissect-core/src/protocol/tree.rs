//! Decoded element tree.

use smallvec::SmallVec;

use super::FieldValue;
use crate::error::DecodeError;

/// Field entry: (field_name, value).
/// Field names are always static strings (protocol-defined).
pub type FieldEntry<'data> = (&'static str, FieldValue<'data>);

/// Outcome of decoding one element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ElementStatus {
    /// Value decoded (possibly with extraneous trailing bytes)
    #[default]
    Decoded,
    /// Tag unknown to the protocol; value kept opaque
    NotDecoded,
    /// Decoder rejected the value
    Malformed(DecodeError),
    /// Declared length ran past the end of the buffer
    Truncated,
    /// Bytes nobody claimed (after a decoder, or after a message)
    Extraneous,
}

/// One decoded element: header, raw value, fields, and nested elements.
#[derive(Debug, Clone)]
pub struct Element<'data> {
    /// Tag byte, None for fixed-position fields
    pub tag: Option<u8>,

    /// Display name
    pub name: &'static str,

    /// Offset of the first header byte, relative to the start of the message
    pub offset: usize,

    /// Header plus value size in bytes (after truncation)
    pub length: usize,

    /// Value bytes (zero-copy)
    pub value: &'data [u8],

    /// Decoded fields. Most elements have only a handful.
    pub fields: SmallVec<[FieldEntry<'data>; 8]>,

    /// Nested elements (field elements, records, extraneous data)
    pub children: Vec<Element<'data>>,

    pub status: ElementStatus,
}

impl<'data> Element<'data> {
    /// Create an element with no fields yet.
    pub fn new(
        tag: Option<u8>,
        name: &'static str,
        offset: usize,
        length: usize,
        value: &'data [u8],
    ) -> Self {
        Self {
            tag,
            name,
            offset,
            length,
            value,
            fields: SmallVec::new(),
            children: Vec::new(),
            status: ElementStatus::Decoded,
        }
    }

    /// Offset of the first value byte, relative to the start of the message.
    pub fn value_offset(&self) -> usize {
        self.offset + self.length - self.value.len()
    }

    /// Append a field.
    #[inline]
    pub fn push(&mut self, name: &'static str, value: FieldValue<'data>) {
        self.fields.push((name, value));
    }

    /// Get a field value by name (linear search, but N is small).
    pub fn get(&self, name: &str) -> Option<&FieldValue<'data>> {
        self.fields.iter().find(|(k, _)| *k == name).map(|(_, v)| v)
    }

    /// First direct child with the given name.
    pub fn child(&self, name: &str) -> Option<&Element<'data>> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Depth-first search for an element with the given name.
    pub fn find(&self, name: &str) -> Option<&Element<'data>> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(name))
    }

    /// Whether this element and all of its children decoded cleanly.
    pub fn is_clean(&self) -> bool {
        self.status == ElementStatus::Decoded && self.children.iter().all(|c| c.is_clean())
    }
}

/// Depth-first search over a list of elements.
pub fn find_element<'a, 'data>(
    elements: &'a [Element<'data>],
    name: &str,
) -> Option<&'a Element<'data>> {
    elements.iter().find_map(|e| e.find(name))
}
