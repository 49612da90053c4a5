//! Engine-agnostic element and message definitions.
//!
//! Protocols describe themselves with these types:
//! - [`ElementSpec`]: one information element in a protocol's catalog
//! - [`FieldDescriptor`]: one slot in a message's ordered field list
//! - [`MessageDescriptor`]: the field list of one message type
//! - [`MessageTable`] / [`ElementTable`]: byte-indexed lookup tables

mod field;
mod kind;
mod message;

pub use field::{opaque, ElementDecoder, ElementSpec, FieldDescriptor, Presence};
pub use kind::ElementFormat;
pub use message::{ElementTable, MessageDescriptor, MessageTable};
