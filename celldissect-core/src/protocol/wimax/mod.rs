//! WiMAX MAC-PHY parser.
//!
//! Debug transport of the IEEE 802.16 PHY SAP: the MAC and the PHY exchange
//! TXSTART/TXSDU/TXEND and RXSTART/RXSDU/RXEND primitives, each a message
//! type octet followed by fixed-position fields, counted arrays of zone
//! descriptors, the SDU, and optionally a list of measurement TLVs with
//! two-octet lengths.

mod measurements;
mod primitives;

use smallvec::SmallVec;

use super::{Encapsulation, FieldValue, ParseContext, ParseResult, Protocol};
use crate::engine::{decode_message, DecodeContext};
use crate::schema::MessageTable;

pub use measurements::MEASUREMENTS;
pub use primitives::{WIMAX_PRIMITIVES, ZONE_RECORD_SIZE};

/// PHY SAP primitive codes.
pub mod primitive {
    pub const TXSTART_REQUEST: u8 = 0x01;
    pub const TXSTART_CONFIRMATION: u8 = 0x02;
    pub const TXSTART_INDICATION: u8 = 0x03;
    pub const TXSDU_REQUEST: u8 = 0x04;
    pub const TXSDU_CONFIRMATION: u8 = 0x05;
    pub const TXEND_INDICATION: u8 = 0x06;
    pub const RXSTART_REQUEST: u8 = 0x07;
    pub const RXSTART_CONFIRMATION: u8 = 0x08;
    pub const RXSTART_INDICATION: u8 = 0x09;
    pub const RXSDU_INDICATION: u8 = 0x0a;
    pub const RXEND_INDICATION: u8 = 0x0b;
}

/// Measurement TLV types.
pub mod measurement {
    pub const RSSI: u8 = 0x01;
    pub const CINR: u8 = 0x02;
    pub const TIMING_OFFSET: u8 = 0x03;
    pub const FREQUENCY_OFFSET: u8 = 0x04;
    pub const VENDOR_SPECIFIC: u8 = 0x05;
}

/// WiMAX MAC-PHY protocol parser.
#[derive(Debug, Clone, Copy)]
pub struct WimaxMacPhyProtocol;

impl Protocol for WimaxMacPhyProtocol {
    fn name(&self) -> &'static str {
        "wimax_macphy"
    }

    fn display_name(&self) -> &'static str {
        "WiMAX MAC-PHY"
    }

    fn can_parse(&self, context: &ParseContext) -> Option<u32> {
        if context.is_entry(Encapsulation::WimaxMacPhy) {
            Some(100)
        } else {
            None
        }
    }

    fn parse<'a>(&self, data: &'a [u8], context: &ParseContext) -> ParseResult<'a> {
        let mut ctx = DecodeContext::new(context.config);
        let message = decode_message(&WIMAX_PRIMITIVES, data, &mut ctx);

        let mut fields = SmallVec::new();
        if let Some(code) = message.message_type {
            let name = message.name.unwrap_or("Unknown");
            fields.push(("primitive", FieldValue::Labeled(code as u64, name)));
        }

        let remaining = &data[message.consumed.min(data.len())..];
        ParseResult::from_message(fields, message, remaining)
    }

    fn message_catalog(&self) -> Option<&'static MessageTable> {
        Some(&WIMAX_PRIMITIVES)
    }
}
