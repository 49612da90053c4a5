//! # celldissect-core
//!
//! Table-driven TLV/IE decoding engine for cellular signalling protocols.
//!
//! This crate provides the core decoding functionality for celldissect,
//! without any I/O or presentation concerns. A protocol is described by
//! static tables: an element catalog (tag, name, wire format, decoder) and a
//! message table (message type to an ordered list of mandatory/optional
//! fields). The engine walks a PDU against those tables and produces an
//! [`Element`](protocol::Element) tree plus a list of
//! [`Diagnostic`](engine::Diagnostic)s.
//!
//! ## Features
//!
//! - **Dispatch engine**: message-type lookup, ordered field walk, skipping of
//!   unknown and out-of-place elements by their declared length
//! - **Nested field elements**: recursive container walk with a depth limit
//! - **Cross-element state**: per-message scratch values in [`DecodeContext`]
//! - **Layered dissection**: BSSAP framing hands its payload to BSSMAP
//! - **PDU builder**: [`ElementWriter`](codec::ElementWriter) for tests and
//!   synthetic input
//!
//! ## Quick Start
//!
//! ```rust
//! use celldissect_core::prelude::*;
//!
//! let registry = default_registry();
//!
//! // BSSMAP Clear Request, cause "radio interface message failure"
//! let pdu: &[u8] = &[0x22, 0x04, 0x01, 0x00];
//! let layers = dissect(&registry, Encapsulation::Bssmap, pdu, DecoderConfig::default());
//!
//! for (protocol_name, result) in &layers {
//!     println!("{}: {} elements", protocol_name, result.elements.len());
//! }
//! assert!(layers[0].1.is_ok());
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +---------------------------------------------------------------------+
//! |                        celldissect-core                             |
//! +---------------------------------------------------------------------+
//! |  schema/     - ElementFormat, ElementSpec, message/element tables   |
//! |  codec/      - Length codings, ElementWriter                        |
//! |  engine/     - DecodeContext, message dispatch, element walker      |
//! |  protocol/   - Protocol trait, BSSAP/BSSMAP/WiMAX, Element tree     |
//! |  format/     - TBCD digit and PLMN formatting                       |
//! |  error/      - Error types                                          |
//! +---------------------------------------------------------------------+
//! ```
//!
//! ## Supported Protocols
//!
//! | Protocol | Reference |
//! |----------|-----------|
//! | BSSAP | 3GPP TS 48.006 |
//! | BSSMAP | 3GPP TS 48.008 |
//! | WiMAX MAC-PHY | IEEE 802.16 PHY SAP primitives |

pub mod codec;
pub mod engine;
pub mod error;
pub mod format;
pub mod prelude;
pub mod protocol;
pub mod schema;


// Re-export commonly used types at crate root for convenience
pub use codec::{ElementWriter, LengthCoding};
pub use engine::{decode_message, DecodeContext, DecoderConfig, Diagnostic, MessageResult, Severity};
pub use error::DecodeError;
pub use format::{format_plmn, tbcd_digits};
pub use protocol::{
    default_registry, dissect, BuiltinProtocol, Element, ElementStatus, Encapsulation, FieldValue,
    ParseContext, ParseResult, Protocol, ProtocolRegistry,
};
pub use schema::{
    ElementFormat, ElementSpec, ElementTable, FieldDescriptor, MessageDescriptor, MessageTable,
};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
