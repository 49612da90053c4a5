//! Protocol parsing framework.
//!
//! This module provides:
//! - [`Protocol`] trait for implementing parsers
//! - [`ProtocolRegistry`] for managing registered parsers
//! - Built-in parsers for the supported signalling protocols
//! - [`Element`] trees produced by the table-driven decoders
//!
//! ## Supported Protocols
//!
//! | Entry point | Layers |
//! |-------------|--------|
//! | BSSAP | BSSAP framing, then BSSMAP (DTAP is not decoded) |
//! | BSSMAP | BSSMAP messages (3GPP TS 48.008) |
//! | WiMAX MAC-PHY | PHY SAP primitives |
//!
//! ## Example
//!
//! ```rust
//! use celldissect_core::engine::DecoderConfig;
//! use celldissect_core::protocol::{default_registry, dissect, Encapsulation};
//!
//! let registry = default_registry();
//! // BSSAP frame carrying a BSSMAP Clear Request (cause 0x20)
//! let pdu: &[u8] = &[0x00, 0x04, 0x22, 0x04, 0x01, 0x20];
//!
//! let layers = dissect(&registry, Encapsulation::Bssap, pdu, DecoderConfig::default());
//! for (name, result) in &layers {
//!     println!("{}: {} elements", name, result.elements.len());
//! }
//! assert_eq!(layers.len(), 2);
//! ```

mod context;
mod field;
mod registry;
mod tree;

// Protocol implementations
pub mod bssap;
pub mod bssmap;
pub mod wimax;

// Test utilities (only compiled for tests)
#[cfg(test)]
pub mod test_utils;

pub use context::{Encapsulation, HintEntry, ParseContext, ParseResult};
pub use field::FieldValue;
pub use registry::{BuiltinProtocol, Protocol, ProtocolRegistry};
pub use tree::{find_element, Element, ElementStatus, FieldEntry};

// Re-export protocol implementations
pub use bssap::BssapProtocol;
pub use bssmap::BssmapProtocol;
pub use wimax::WimaxMacPhyProtocol;

// Re-export protocol constants for use by the CLI and other crates
pub use bssap::discriminator as bssap_discriminator;
pub use bssmap::{ie as bssmap_ie, message_type as bssmap_message_type};
pub use wimax::{measurement as wimax_measurement, primitive as wimax_primitive};

use crate::engine::DecoderConfig;

/// Create a registry with all built-in protocol parsers.
pub fn default_registry() -> ProtocolRegistry {
    let mut registry = ProtocolRegistry::new();

    // A-interface
    registry.register(BssapProtocol);
    registry.register(BssmapProtocol);

    // 802.16 PHY SAP
    registry.register(WimaxMacPhyProtocol);

    registry
}

/// Dissect a PDU through all protocol layers.
///
/// Starts with the parser for `encapsulation` and keeps handing the
/// remaining bytes to the best matching parser until no parser matches,
/// the data is exhausted, or a layer fails.
pub fn dissect<'a>(
    registry: &ProtocolRegistry,
    encapsulation: Encapsulation,
    data: &'a [u8],
    config: DecoderConfig,
) -> Vec<(&'static str, ParseResult<'a>)> {
    // BSSAP + BSSMAP is as deep as it gets
    let mut results = Vec::with_capacity(2);
    let mut context = ParseContext::with_config(encapsulation, config);
    let mut remaining = data;

    while !remaining.is_empty() {
        let Some(parser) = registry.find_parser(&context) else {
            break;
        };

        let mut result = parser.parse(remaining, &context);
        result.offset = context.offset;

        tracing::trace!(
            protocol = parser.name(),
            offset = context.offset,
            diagnostics = result.diagnostics.len(),
            "layer parsed"
        );

        // Update context for next layer
        context.parent_protocol = Some(parser.name());
        context.hints = result.child_hints.clone();
        context.offset += skipped(remaining, result.remaining);

        let should_stop = result.error.is_some();
        remaining = result.remaining;

        results.push((parser.name(), result));

        if should_stop {
            break;
        }
    }

    results
}

/// Bytes of `data` that lie before `rest`.
///
/// A layer's remaining bytes are usually a suffix of its input, but a
/// length-delimited layer hands on a slice from the middle.
fn skipped(data: &[u8], rest: &[u8]) -> usize {
    let start = data.as_ptr() as usize;
    match (rest.as_ptr() as usize).checked_sub(start) {
        Some(distance) if distance + rest.len() <= data.len() => distance,
        _ => data.len().saturating_sub(rest.len()),
    }
}
