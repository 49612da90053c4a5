//! Element catalog entries and per-message field descriptors.

use super::ElementFormat;
use crate::engine::DecodeContext;
use crate::error::DecodeError;
use crate::protocol::Element;

/// Decoder for the value part of an element.
///
/// The decoder only ever sees the element's own value slice. It appends
/// fields and children to `out` and returns how many bytes of the value it
/// understood; the engine reports anything beyond that as extraneous data.
pub type ElementDecoder =
    for<'data> fn(
        &'data [u8],
        &mut DecodeContext,
        &mut Element<'data>,
    ) -> Result<usize, DecodeError>;

/// Decoder that records nothing and accepts the whole value.
pub fn opaque<'data>(
    value: &'data [u8],
    _ctx: &mut DecodeContext,
    _out: &mut Element<'data>,
) -> Result<usize, DecodeError> {
    Ok(value.len())
}

/// Whether a field must be present in its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Presence {
    Mandatory,
    Optional,
}

/// A protocol's definition of one information element.
///
/// The tag is ignored for untagged formats.
#[derive(Clone, Copy)]
pub struct ElementSpec {
    pub tag: u8,
    pub name: &'static str,
    pub format: ElementFormat,
    pub decoder: ElementDecoder,
}

impl ElementSpec {
    /// Create a catalog entry.
    pub const fn new(
        tag: u8,
        name: &'static str,
        format: ElementFormat,
        decoder: ElementDecoder,
    ) -> Self {
        Self {
            tag,
            name,
            format,
            decoder,
        }
    }

    /// Untagged entry (fixed-position field).
    pub const fn untagged(
        name: &'static str,
        format: ElementFormat,
        decoder: ElementDecoder,
    ) -> Self {
        Self::new(0, name, format, decoder)
    }
}

impl std::fmt::Debug for ElementSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementSpec")
            .field("tag", &self.tag)
            .field("name", &self.name)
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

/// One entry in a message's ordered field list.
#[derive(Clone, Copy)]
pub struct FieldDescriptor {
    /// Tag for tagged formats, None for fixed-position fields
    pub tag: Option<u8>,

    /// Display name (may differ from the catalog name, e.g. "Cell Identifier (Target)")
    pub name: &'static str,

    /// Wire framing
    pub format: ElementFormat,

    /// Value decoder
    pub decoder: ElementDecoder,

    /// Mandatory or optional
    pub presence: Presence,
}

impl FieldDescriptor {
    /// Mandatory field built from a catalog entry.
    pub const fn mandatory(spec: ElementSpec) -> Self {
        Self::from_spec(spec, Presence::Mandatory)
    }

    /// Optional field built from a catalog entry.
    pub const fn optional(spec: ElementSpec) -> Self {
        Self::from_spec(spec, Presence::Optional)
    }

    const fn from_spec(spec: ElementSpec, presence: Presence) -> Self {
        Self {
            tag: if spec.format.is_tagged() {
                Some(spec.tag)
            } else {
                None
            },
            name: spec.name,
            format: spec.format,
            decoder: spec.decoder,
            presence,
        }
    }

    /// Builder: override the display name.
    pub const fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Check if the field is mandatory.
    pub const fn is_mandatory(&self) -> bool {
        matches!(self.presence, Presence::Mandatory)
    }
}

impl std::fmt::Debug for FieldDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("tag", &self.tag)
            .field("name", &self.name)
            .field("format", &self.format)
            .field("presence", &self.presence)
            .finish_non_exhaustive()
    }
}
