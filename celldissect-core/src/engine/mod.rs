//! Table-driven decoding engine.
//!
//! The engine knows nothing about any particular protocol. It walks a PDU
//! using the descriptors of a [`MessageTable`](crate::schema::MessageTable),
//! frames each element according to its [`ElementFormat`](crate::schema::ElementFormat)
//! and hands the value slice to the element's decoder. Container decoders
//! recurse through [`decode_elements`].

mod context;
mod dispatch;
mod element;

pub use context::{
    DecodeContext, DecoderConfig, Diagnostic, ScratchEntry, Severity, DEFAULT_MAX_DEPTH,
};
pub use dispatch::{decode_message, MessageResult};
pub use element::{
    decode_element, decode_elements, decode_unlisted, Framed, Framing, EXTRANEOUS_DATA,
    UNKNOWN_ELEMENT,
};
