//! BSSMAP (BSS Management Application Part) parser.
//!
//! BSSMAP carries the A-interface procedures between an MSC and a BSS:
//! assignment, handover, clearing, paging, ciphering and resource
//! indication. Every message is a message type octet followed by
//! information elements in the order fixed by the message definition.
//!
//! 3GPP TS 48.008: Mobile Switching Centre - Base Station System (MSC-BSS)
//! interface; Layer 3 specification

mod elements;
mod field_elements;
mod messages;

use smallvec::SmallVec;

use super::{Encapsulation, FieldValue, ParseContext, ParseResult, Protocol};
use crate::engine::{decode_message, DecodeContext};
use crate::schema::MessageTable;

pub use elements::{cause_name, cell_id_len, BSSMAP_ELEMENTS};
pub use field_elements::OLD_BSS_FIELD_ELEMENTS;
pub use messages::BSSMAP_MESSAGES;

/// Scratch key of the cell identification discriminator last seen in a
/// Cell Identifier or Cell Identifier List element.
pub const CELL_DISCRIMINATOR: &str = "cell_discriminator";

/// BSSMAP message types.
pub mod message_type {
    pub const ASSIGNMENT_REQUEST: u8 = 0x01;
    pub const ASSIGNMENT_COMPLETE: u8 = 0x02;
    pub const ASSIGNMENT_FAILURE: u8 = 0x03;
    pub const HANDOVER_REQUEST: u8 = 0x10;
    pub const HANDOVER_REQUIRED: u8 = 0x11;
    pub const HANDOVER_REQUEST_ACKNOWLEDGE: u8 = 0x12;
    pub const HANDOVER_COMMAND: u8 = 0x13;
    pub const HANDOVER_COMPLETE: u8 = 0x14;
    pub const HANDOVER_FAILURE: u8 = 0x16;
    pub const CLEAR_COMMAND: u8 = 0x20;
    pub const CLEAR_COMPLETE: u8 = 0x21;
    pub const CLEAR_REQUEST: u8 = 0x22;
    pub const RESET: u8 = 0x30;
    pub const RESET_ACKNOWLEDGE: u8 = 0x31;
    pub const RESOURCE_INDICATION: u8 = 0x51;
    pub const PAGING: u8 = 0x52;
    pub const CIPHER_MODE_COMMAND: u8 = 0x53;
    pub const CLASSMARK_UPDATE: u8 = 0x54;
    pub const CIPHER_MODE_COMPLETE: u8 = 0x55;
    pub const COMPLETE_LAYER3_INFORMATION: u8 = 0x57;
    pub const CLASSMARK_REQUEST: u8 = 0x58;
    pub const CIPHER_MODE_REJECT: u8 = 0x59;
}

/// BSSMAP information element identifiers.
pub mod ie {
    pub const CIRCUIT_IDENTITY_CODE: u8 = 0x01;
    pub const RESOURCE_AVAILABLE: u8 = 0x03;
    pub const CAUSE: u8 = 0x04;
    pub const CELL_IDENTIFIER: u8 = 0x05;
    pub const PRIORITY: u8 = 0x06;
    pub const LAYER3_HEADER_INFORMATION: u8 = 0x07;
    pub const IMSI: u8 = 0x08;
    pub const TMSI: u8 = 0x09;
    pub const ENCRYPTION_INFORMATION: u8 = 0x0a;
    pub const CHANNEL_TYPE: u8 = 0x0b;
    pub const PERIODICITY: u8 = 0x0c;
    pub const NUMBER_OF_MSS: u8 = 0x0e;
    pub const CLASSMARK_INFORMATION_TYPE2: u8 = 0x12;
    pub const CLASSMARK_INFORMATION_TYPE3: u8 = 0x13;
    pub const RR_CAUSE: u8 = 0x15;
    pub const LAYER3_INFORMATION: u8 = 0x17;
    pub const DLCI: u8 = 0x18;
    pub const DOWNLINK_DTX_FLAG: u8 = 0x19;
    pub const CELL_IDENTIFIER_LIST: u8 = 0x1a;
    pub const RESPONSE_REQUEST: u8 = 0x1b;
    pub const RESOURCE_INDICATION_METHOD: u8 = 0x1c;
    pub const CLASSMARK_INFORMATION_TYPE1: u8 = 0x1d;
    pub const CIRCUIT_IDENTITY_CODE_LIST: u8 = 0x1e;
    pub const DIAGNOSTIC: u8 = 0x1f;
    pub const LAYER3_MESSAGE_CONTENTS: u8 = 0x20;
    pub const CHOSEN_CHANNEL: u8 = 0x21;
    pub const TOTAL_RESOURCE_ACCESSIBLE: u8 = 0x22;
    pub const CIPHER_RESPONSE_MODE: u8 = 0x23;
    pub const CHANNEL_NEEDED: u8 = 0x24;
    pub const CHOSEN_ENCRYPTION_ALGORITHM: u8 = 0x2c;
    pub const OLD_BSS_TO_NEW_BSS_INFORMATION: u8 = 0x3a;
    pub const SPEECH_VERSION: u8 = 0x40;
}

/// Field element identifiers inside Old BSS to New BSS Information.
pub mod field_element {
    pub const EXTRA_INFORMATION: u8 = 0x01;
    pub const CURRENT_CHANNEL_TYPE1: u8 = 0x02;
    pub const TARGET_CELL_RADIO_INFORMATION: u8 = 0x03;
    pub const GPRS_SUSPEND_INFORMATION: u8 = 0x04;
    pub const MULTIRATE_CONFIGURATION: u8 = 0x05;
    pub const DUAL_TRANSFER_MODE_INFORMATION: u8 = 0x06;
    pub const INTER_RAT_HANDOVER_INFO: u8 = 0x07;
    pub const CDMA2000_CAPABILITY_INFORMATION: u8 = 0x08;
    pub const DOWNLINK_CELL_LOAD_INFORMATION: u8 = 0x09;
    pub const UPLINK_CELL_LOAD_INFORMATION: u8 = 0x0a;
    pub const CELL_LOAD_INFORMATION_GROUP: u8 = 0x0b;
}

/// BSSMAP protocol parser.
#[derive(Debug, Clone, Copy)]
pub struct BssmapProtocol;

impl Protocol for BssmapProtocol {
    fn name(&self) -> &'static str {
        "bssmap"
    }

    fn display_name(&self) -> &'static str {
        "BSSMAP"
    }

    fn can_parse(&self, context: &ParseContext) -> Option<u32> {
        if context.is_entry(Encapsulation::Bssmap) {
            return Some(100);
        }
        // BSSAP discriminator 0 carries BSSMAP
        match context.hint("bssap_discriminator") {
            Some(0) => Some(100),
            _ => None,
        }
    }

    fn parse<'a>(&self, data: &'a [u8], context: &ParseContext) -> ParseResult<'a> {
        let mut ctx = DecodeContext::new(context.config);
        let message = decode_message(&BSSMAP_MESSAGES, data, &mut ctx);

        let mut fields = SmallVec::new();
        if let Some(message_type) = message.message_type {
            fields.push((
                "message_type",
                FieldValue::Labeled(message_type as u64, message.name.unwrap_or("Unknown")),
            ));
        }

        let remaining = &data[message.consumed.min(data.len())..];
        ParseResult::from_message(fields, message, remaining)
    }

    fn message_catalog(&self) -> Option<&'static MessageTable> {
        Some(&BSSMAP_MESSAGES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{ElementWriter, LengthCoding};
    use crate::engine::{DecoderConfig, Severity};
    use crate::error::DecodeError;
    use crate::protocol::test_utils::BssmapBuilder;
    use crate::protocol::ElementStatus;

    fn parse(data: &[u8]) -> ParseResult<'_> {
        BssmapProtocol.parse(data, &ParseContext::new(Encapsulation::Bssmap))
    }

    #[test]
    fn test_can_parse_bssmap() {
        let parser = BssmapProtocol;

        let ctx1 = ParseContext::new(Encapsulation::Bssmap);
        assert!(parser.can_parse(&ctx1).is_some());

        let ctx2 = ParseContext::new(Encapsulation::WimaxMacPhy);
        assert!(parser.can_parse(&ctx2).is_none());

        let mut ctx3 = ParseContext::new(Encapsulation::Bssap);
        ctx3.parent_protocol = Some("bssap");
        ctx3.set_hint("bssap_discriminator", 0);
        assert!(parser.can_parse(&ctx3).is_some());
    }

    #[test]
    fn test_parse_clear_command() {
        let pdu = BssmapBuilder::new(message_type::CLEAR_COMMAND)
            .cause(0x09)
            .build();
        let result = parse(&pdu);

        assert!(result.is_ok());
        assert!(result.diagnostics.is_empty());
        assert!(result.remaining.is_empty());
        assert_eq!(
            result.get("message_type"),
            Some(&FieldValue::Labeled(0x20, "Clear Command"))
        );
        assert_eq!(
            result.find("Cause").and_then(|e| e.get("cause")),
            Some(&FieldValue::Labeled(0x09, "call control"))
        );
    }

    #[test]
    fn test_parse_assignment_request() {
        let pdu = BssmapBuilder::new(message_type::ASSIGNMENT_REQUEST)
            .tlv(ie::CHANNEL_TYPE, &[0x01, 0x08, 0x01])
            .tlv(ie::PRIORITY, &[0x45])
            .tv(ie::CIRCUIT_IDENTITY_CODE, &[0x00, 0x25])
            .build();
        let result = parse(&pdu);

        assert!(result.is_ok(), "{:?}", result.diagnostics);
        assert!(result.diagnostics.is_empty());

        let cic = result.find("Circuit Identity Code").unwrap();
        assert_eq!(cic.get("pcm_multiplexer"), Some(&FieldValue::UInt16(1)));
        assert_eq!(cic.get("timeslot"), Some(&FieldValue::UInt8(5)));

        let priority = result.find("Priority").unwrap();
        assert_eq!(priority.get("priority_level"), Some(&FieldValue::UInt8(1)));
        assert_eq!(priority.get("pci"), Some(&FieldValue::Bool(true)));
        assert_eq!(priority.get("pvi"), Some(&FieldValue::Bool(true)));
    }

    #[test]
    fn test_missing_mandatory_channel_type() {
        let pdu = BssmapBuilder::new(message_type::ASSIGNMENT_REQUEST)
            .tlv(ie::PRIORITY, &[0x45])
            .build();
        let result = parse(&pdu);

        assert!(!result.is_ok());
        assert_eq!(
            result.error,
            Some(DecodeError::MissingMandatory {
                element: "Channel Type",
                tag: Some(ie::CHANNEL_TYPE)
            })
        );
        // Nothing after the gap is decoded
        assert!(result.elements.is_empty());
        assert_eq!(result.remaining.len(), 3);
    }

    #[test]
    fn test_unknown_ie_is_skipped() {
        let pdu = BssmapBuilder::new(message_type::CLEAR_REQUEST)
            .tlv(0x7e, &[0x01, 0x02, 0x03])
            .cause(0x20)
            .build();
        let result = parse(&pdu);

        assert!(result.is_ok());
        assert_eq!(result.elements.len(), 2);
        assert_eq!(result.elements[0].status, ElementStatus::NotDecoded);
        assert_eq!(result.elements[0].length, 5);
        assert_eq!(result.diagnostics[0].severity, Severity::Note);
        assert!(result.find("Cause").is_some());
    }

    #[test]
    fn test_extended_cause() {
        let pdu = BssmapBuilder::new(message_type::RESET)
            .tlv(ie::CAUSE, &[0x81, 0x23])
            .build();
        let result = parse(&pdu);
        let cause = result.find("Cause").unwrap();

        assert_eq!(cause.get("extended"), Some(&FieldValue::Bool(true)));
        assert_eq!(cause.get("cause"), Some(&FieldValue::UInt16(0x0123)));
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_handover_required_with_cell_load_group() {
        let result_pdu = BssmapBuilder::handover_required_with_load_info();
        let result = parse(&result_pdu);

        assert!(result.is_ok(), "{:?}", result.diagnostics);
        assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);
        assert!(result.remaining.is_empty());

        let list = result.find("Cell Identifier List (Preferred)").unwrap();
        assert_eq!(list.children.len(), 2);
        assert_eq!(list.children[1].get("ci"), Some(&FieldValue::UInt16(0x0102)));

        // The group's cell identifier is coded with the list's discriminator (LAC+CI)
        let group = result.find("Cell Load Information Group").unwrap();
        assert_eq!(group.get("lac"), Some(&FieldValue::UInt16(0x0001)));
        assert_eq!(group.get("ci"), Some(&FieldValue::UInt16(0x0203)));
        let downlink = group.child("Downlink Cell Load Information").unwrap();
        assert_eq!(downlink.get("load_value"), Some(&FieldValue::UInt8(70)));
    }

    #[test]
    fn test_cell_load_group_without_discriminator() {
        // Old BSS to New BSS Information trailing a Clear Request, no cell id before it
        let inner = ElementWriter::new(LengthCoding::Single)
            .tlv(field_element::CELL_LOAD_INFORMATION_GROUP, &[0x00, 0x01])
            .unwrap()
            .finish();
        let pdu = BssmapBuilder::new(message_type::CLEAR_REQUEST)
            .cause(0x0c)
            .tlv(ie::OLD_BSS_TO_NEW_BSS_INFORMATION, &inner)
            .build();
        let result = parse(&pdu);

        assert!(result.remaining.is_empty());
        assert!(result
            .diagnostics
            .iter()
            .any(|d| matches!(d.error, DecodeError::UnexpectedElement { .. })));

        let group = result.find("Cell Load Information Group").unwrap();
        assert!(matches!(
            group.status,
            ElementStatus::Malformed(DecodeError::InvalidField { .. })
        ));
        assert!(result.has_errors());
    }

    #[test]
    fn test_depth_limit_applies_to_field_elements() {
        let pdu = BssmapBuilder::handover_required_with_load_info();
        let ctx = ParseContext::with_config(
            Encapsulation::Bssmap,
            DecoderConfig {
                max_depth: 1,
                ..DecoderConfig::default()
            },
        );
        let result = BssmapProtocol.parse(&pdu, &ctx);

        let group = result.find("Cell Load Information Group").unwrap();
        assert!(matches!(
            group.status,
            ElementStatus::Malformed(DecodeError::DepthExceeded { limit: 1, .. })
        ));
    }

    #[test]
    fn test_all_prefixes_decode_without_panic() {
        let pdu = BssmapBuilder::handover_required_with_load_info();
        for end in 0..=pdu.len() {
            let result = parse(&pdu[..end]);
            assert!(result.remaining.len() <= end);
        }
    }

    #[test]
    fn test_unknown_message_type() {
        let result = parse(&[0x7f, 0x04, 0x01, 0x20]);
        assert!(result.has_errors());
        assert_eq!(
            result.get("message_type"),
            Some(&FieldValue::Labeled(0x7f, "Unknown"))
        );
    }
}
