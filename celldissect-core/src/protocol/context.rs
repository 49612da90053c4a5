//! Parse context and result types.

use smallvec::SmallVec;

use super::{Element, FieldEntry, FieldValue};
use crate::engine::{DecoderConfig, Diagnostic, MessageResult, Severity};
use crate::error::DecodeError;

/// Hint entry for child protocol detection: (hint_name, value).
pub type HintEntry = (&'static str, u64);

/// What the first byte of a dissected buffer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Encapsulation {
    /// BSSAP framing (discriminator + length) around BSSMAP or DTAP.
    #[default]
    Bssap = 0,
    /// Bare BSSMAP message, starting with the message type.
    Bssmap = 1,
    /// WiMAX MAC-PHY (PHY SAP) primitive, starting with the message type.
    WimaxMacPhy = 2,
}

impl Encapsulation {
    /// All entry points, in registration order.
    pub const ALL: [Encapsulation; 3] = [
        Encapsulation::Bssap,
        Encapsulation::Bssmap,
        Encapsulation::WimaxMacPhy,
    ];

    /// Name of the protocol parsed first for this entry point.
    pub fn as_str(&self) -> &'static str {
        match self {
            Encapsulation::Bssap => "bssap",
            Encapsulation::Bssmap => "bssmap",
            Encapsulation::WimaxMacPhy => "wimax_macphy",
        }
    }
}

/// Context passed through the parsing chain.
#[derive(Debug, Clone)]
pub struct ParseContext {
    /// Entry point of the dissection.
    pub encapsulation: Encapsulation,

    /// Parent protocol that identified this protocol.
    pub parent_protocol: Option<&'static str>,

    /// Protocol-specific hints (e.g., the BSSAP discriminator).
    /// Uses SmallVec for consistency with ParseResult. Typically 1-2 entries.
    pub hints: SmallVec<[HintEntry; 4]>,

    /// Offset into the original buffer where this protocol's data starts.
    pub offset: usize,

    /// Configuration handed to every message decode.
    pub config: DecoderConfig,
}

impl ParseContext {
    /// Create a new parse context for a buffer with the given entry point.
    pub fn new(encapsulation: Encapsulation) -> Self {
        Self::with_config(encapsulation, DecoderConfig::default())
    }

    /// Create a new parse context with an explicit decoder configuration.
    pub fn with_config(encapsulation: Encapsulation, config: DecoderConfig) -> Self {
        Self {
            encapsulation,
            parent_protocol: None,
            hints: SmallVec::new(),
            offset: 0,
            config,
        }
    }

    /// Get a hint value by key (linear search, but N is small).
    #[inline]
    pub fn hint(&self, key: &str) -> Option<u64> {
        self.hints.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }

    /// Set a hint value (updates existing or appends).
    #[inline]
    pub fn set_hint(&mut self, key: &'static str, value: u64) {
        if let Some(entry) = self.hints.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.hints.push((key, value));
        }
    }

    /// Check if we're at the start of the buffer (no parent protocol).
    pub fn is_root(&self) -> bool {
        self.parent_protocol.is_none()
    }

    /// Check if this is the first layer of the given entry point.
    pub fn is_entry(&self, encapsulation: Encapsulation) -> bool {
        self.is_root() && self.encapsulation == encapsulation
    }
}

/// Result of parsing a protocol layer.
///
/// Header fields are kept inline in a SmallVec; the message body, if the
/// layer carries one, is the element tree produced by the engine.
///
/// The lifetime parameter `'data` ties the result to the input buffer,
/// allowing zero-copy parsing where values reference the PDU directly.
#[derive(Debug, Clone)]
pub struct ParseResult<'data> {
    /// Layer header fields (discriminator, message type, lengths).
    pub fields: SmallVec<[FieldEntry<'data>; 16]>,

    /// Decoded elements of the message body.
    pub elements: Vec<Element<'data>>,

    /// Everything the decode pass reported, in walk order.
    pub diagnostics: Vec<Diagnostic>,

    /// Remaining unparsed bytes (payload for next layer).
    pub remaining: &'data [u8],

    /// Hints for child protocol identification.
    pub child_hints: SmallVec<[HintEntry; 4]>,

    /// Set when the layer could not be parsed completely.
    pub error: Option<DecodeError>,

    /// Offset of this layer within the dissected buffer.
    /// Populated by the dissection loop.
    pub offset: usize,
}

impl<'data> ParseResult<'data> {
    /// Create a successful parse result.
    pub fn success(
        fields: SmallVec<[FieldEntry<'data>; 16]>,
        remaining: &'data [u8],
        child_hints: SmallVec<[HintEntry; 4]>,
    ) -> Self {
        Self {
            fields,
            elements: Vec::new(),
            diagnostics: Vec::new(),
            remaining,
            child_hints,
            error: None,
            offset: 0,
        }
    }

    /// Create an error parse result.
    pub fn error(error: DecodeError, remaining: &'data [u8]) -> Self {
        Self::partial(SmallVec::new(), remaining, error)
    }

    /// Create a result with partial fields and an error.
    pub fn partial(
        fields: SmallVec<[FieldEntry<'data>; 16]>,
        remaining: &'data [u8],
        error: DecodeError,
    ) -> Self {
        Self {
            fields,
            elements: Vec::new(),
            diagnostics: vec![Diagnostic {
                offset: 0,
                severity: Severity::Error,
                error: error.clone(),
            }],
            remaining,
            child_hints: SmallVec::new(),
            error: Some(error),
            offset: 0,
        }
    }

    /// Wrap a decoded message.
    ///
    /// An aborted message sets `error` to the first error it reported, so
    /// the dissection loop stops after this layer.
    pub fn from_message(
        fields: SmallVec<[FieldEntry<'data>; 16]>,
        message: MessageResult<'data>,
        remaining: &'data [u8],
    ) -> Self {
        let error = if message.aborted {
            message
                .diagnostics
                .iter()
                .find(|d| d.severity == Severity::Error)
                .map(|d| d.error.clone())
        } else {
            None
        };

        Self {
            fields,
            elements: message.elements,
            diagnostics: message.diagnostics,
            remaining,
            child_hints: SmallVec::new(),
            error,
            offset: 0,
        }
    }

    /// Get a field value by name (linear search, but N is small).
    pub fn get(&self, name: &str) -> Option<&FieldValue<'data>> {
        self.fields.iter().find(|(k, _)| *k == name).map(|(_, v)| v)
    }

    /// Depth-first search of the element tree.
    pub fn find(&self, name: &str) -> Option<&Element<'data>> {
        super::find_element(&self.elements, name)
    }

    /// Get a child hint value by name.
    pub fn hint(&self, name: &str) -> Option<u64> {
        self.child_hints
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| *v)
    }

    /// Check if parsing was successful.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Check if any error-level diagnostic was recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity == Severity::Error)
    }
}
