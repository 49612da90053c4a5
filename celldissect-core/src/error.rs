//! Error types for celldissect-core.
//!
//! [`DecodeError`] covers everything that can go wrong while walking or
//! building a PDU.
//!
//! Decode errors are never propagated out of a decode pass. The engine
//! records them as [`Diagnostic`](crate::engine::Diagnostic)s on the result
//! and keeps walking where the wire format allows it.

use thiserror::Error;

/// Errors raised by the dispatch engine and by element decoders.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Value too short for the element's fixed layout
    #[error("{element}: too short (need {needed} bytes, have {have})")]
    TooShort {
        element: &'static str,
        needed: usize,
        have: usize,
    },

    /// A mandatory element is absent
    #[error("invalid mandatory information: {element}{} missing", tag_suffix(.tag))]
    MissingMandatory {
        element: &'static str,
        tag: Option<u8>,
    },

    /// Declared length runs past the end of the buffer
    #[error("{element}: declared length {declared} overruns buffer ({available} bytes available)")]
    LengthOverrun {
        element: &'static str,
        declared: usize,
        available: usize,
    },

    /// Message type has no descriptor
    #[error("{protocol}: unknown message type {message_type:#04x}")]
    UnknownMessageType {
        protocol: &'static str,
        message_type: u8,
    },

    /// Tag has no catalog entry; value rendered opaque
    #[error("unknown tag {tag:#04x}: {len} bytes not decoded")]
    UnknownTag { tag: u8, len: usize },

    /// Known tag found where the message does not expect it
    #[error("{element} (tag {tag:#04x}) not expected at this position")]
    UnexpectedElement { element: &'static str, tag: u8 },

    /// Invalid field value
    #[error("{element}: invalid {field}: {reason}")]
    InvalidField {
        element: &'static str,
        field: &'static str,
        reason: String,
    },

    /// Recursive field elements nested too deep
    #[error("{element}: nesting depth limit {limit} exceeded")]
    DepthExceeded { element: &'static str, limit: usize },

    /// Bytes left over after a decoder or a message
    #[error("{element}: {len} bytes of extraneous data")]
    ExtraneousData { element: &'static str, len: usize },

    /// Decoder claimed more bytes than its value holds
    #[error("{element}: decoder reported {reported} bytes for a {available}-byte value")]
    OverConsumed {
        element: &'static str,
        reported: usize,
        available: usize,
    },

    /// Encoder given a value its length coding cannot express
    #[error("{len}-byte value exceeds the {max}-byte limit of the length coding")]
    ValueTooLong { len: usize, max: usize },
}

fn tag_suffix(tag: &Option<u8>) -> String {
    match tag {
        Some(tag) => format!(" (tag {tag:#04x})"),
        None => String::new(),
    }
}

impl DecodeError {
    /// Shorthand for the common "value too short" check in element decoders.
    pub fn too_short(element: &'static str, needed: usize, have: usize) -> Self {
        DecodeError::TooShort {
            element,
            needed,
            have,
        }
    }

    /// Shorthand for an invalid field value.
    pub fn invalid(element: &'static str, field: &'static str, reason: impl Into<String>) -> Self {
        DecodeError::InvalidField {
            element,
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_mandatory_message() {
        let err = DecodeError::MissingMandatory {
            element: "Cause",
            tag: Some(0x04),
        };
        assert_eq!(
            err.to_string(),
            "invalid mandatory information: Cause (tag 0x04) missing"
        );

        let err = DecodeError::MissingMandatory {
            element: "Frame Number",
            tag: None,
        };
        assert_eq!(
            err.to_string(),
            "invalid mandatory information: Frame Number missing"
        );
    }
}
