//! PHY SAP primitive definitions.

use super::measurements::{
    CINR, FREQUENCY_OFFSET, MEASUREMENTS, RSSI, TIMING_OFFSET, VENDOR_SPECIFIC,
};
use super::primitive;
use crate::engine::DecodeContext;
use crate::error::DecodeError;
use crate::protocol::{Element, FieldValue};
use crate::schema::ElementFormat::{Counted, Lv, Rest, V};
use crate::schema::{ElementSpec, FieldDescriptor, MessageDescriptor, MessageTable};

type DecodeResult = Result<usize, DecodeError>;

/// Size of one zone descriptor record.
pub const ZONE_RECORD_SIZE: usize = 8;

const SUBFRAME_TYPES: [&str; 2] = ["DL", "UL"];

const STATUS_NAMES: [&str; 5] = [
    "success",
    "invalid frame number",
    "timeout",
    "invalid parameters",
    "hardware failure",
];

const ZONE_TYPES: [&str; 6] = ["PUSC", "FUSC", "optional FUSC", "AMC", "TUSC1", "TUSC2"];

const MODULATIONS: [&str; 8] = [
    "QPSK 1/2",
    "QPSK 3/4",
    "16-QAM 1/2",
    "16-QAM 3/4",
    "64-QAM 1/2",
    "64-QAM 2/3",
    "64-QAM 3/4",
    "64-QAM 5/6",
];

fn label(names: &[&'static str], code: u8) -> FieldValue<'static> {
    let name = names.get(code as usize).copied().unwrap_or("reserved");
    FieldValue::Labeled(code as u64, name)
}

fn frame_number<'data>(
    value: &'data [u8],
    _ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    let bytes: [u8; 4] = value
        .try_into()
        .map_err(|_| DecodeError::too_short(out.name, 4, value.len()))?;
    out.push("frame_number", FieldValue::UInt32(u32::from_be_bytes(bytes)));
    Ok(4)
}

fn subframe_type<'data>(
    value: &'data [u8],
    _ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    let &code = value.first().ok_or(DecodeError::too_short(out.name, 1, 0))?;
    out.push("subframe_type", label(&SUBFRAME_TYPES, code));
    Ok(1)
}

fn status<'data>(
    value: &'data [u8],
    _ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    let &code = value.first().ok_or(DecodeError::too_short(out.name, 1, 0))?;
    out.push("status", label(&STATUS_NAMES, code));
    Ok(1)
}

/// Zone descriptor array. Each record:
/// zone type, zone number, first symbol, symbol count, permutation base,
/// use-all-subchannels flag, then two octets of subchannel bitmap.
fn zone_descriptors<'data>(
    value: &'data [u8],
    _ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    let base = out.value_offset();
    let records = value.chunks_exact(ZONE_RECORD_SIZE);
    out.push("zones", FieldValue::UInt8(records.len() as u8));

    for (i, record) in records.enumerate() {
        let offset = base + i * ZONE_RECORD_SIZE;
        let mut zone = Element::new(None, "Zone", offset, ZONE_RECORD_SIZE, record);
        zone.push("zone_type", label(&ZONE_TYPES, record[0]));
        zone.push("zone_number", FieldValue::UInt8(record[1]));
        zone.push("first_symbol", FieldValue::UInt8(record[2]));
        zone.push("symbols", FieldValue::UInt8(record[3]));
        zone.push("permutation_base", FieldValue::UInt8(record[4]));
        zone.push("use_all_subchannels", FieldValue::Bool(record[5] & 0x01 != 0));
        zone.push(
            "subchannel_bitmap",
            FieldValue::UInt16(u16::from_be_bytes([record[6], record[7]])),
        );
        out.children.push(zone);
    }
    Ok(value.len())
}

fn burst_descriptor<'data>(
    value: &'data [u8],
    _ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    if value.len() < 6 {
        return Err(DecodeError::too_short(out.name, 6, value.len()));
    }
    out.push("burst_id", FieldValue::UInt16(u16::from_be_bytes([value[0], value[1]])));
    out.push("modulation", label(&MODULATIONS, value[2]));
    out.push("repetition", FieldValue::UInt8(value[3]));
    out.push("subchannels", FieldValue::UInt8(value[4]));
    out.push("symbols", FieldValue::UInt8(value[5]));
    Ok(6)
}

fn sdu<'data>(
    value: &'data [u8],
    _ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    let length = u32::try_from(value.len()).map_err(|_| {
        DecodeError::invalid(out.name, "sdu_length", format!("{} bytes", value.len()))
    })?;
    out.push("sdu_length", FieldValue::UInt32(length));
    out.push("sdu", FieldValue::Bytes(value));
    Ok(value.len())
}

const FRAME_NUMBER: ElementSpec = ElementSpec::untagged("Frame Number", V(4), frame_number);
const SUBFRAME_TYPE: ElementSpec = ElementSpec::untagged("Subframe Type", V(1), subframe_type);
const STATUS: ElementSpec = ElementSpec::untagged("Status", V(1), status);
const ZONE_DESCRIPTORS: ElementSpec =
    ElementSpec::untagged("Zone Descriptors", Counted(ZONE_RECORD_SIZE), zone_descriptors);
const BURST_DESCRIPTOR: ElementSpec =
    ElementSpec::untagged("Burst Descriptor", V(6), burst_descriptor);
const SDU_PAYLOAD: ElementSpec = ElementSpec::untagged("SDU Payload", Lv, sdu);
const SDU_REST: ElementSpec = ElementSpec::untagged("SDU Payload", Rest, sdu);

const fn m(spec: ElementSpec) -> FieldDescriptor {
    FieldDescriptor::mandatory(spec)
}

const fn o(spec: ElementSpec) -> FieldDescriptor {
    FieldDescriptor::optional(spec)
}

const START_REQUEST: &[FieldDescriptor] = &[m(FRAME_NUMBER), m(SUBFRAME_TYPE), m(ZONE_DESCRIPTORS)];
const START_INDICATION: &[FieldDescriptor] = &[m(FRAME_NUMBER), m(SUBFRAME_TYPE)];
const FRAME_STATUS: &[FieldDescriptor] = &[m(FRAME_NUMBER), m(STATUS)];

// The SDU runs to the end of the primitive
const TXSDU_REQUEST: &[FieldDescriptor] = &[m(FRAME_NUMBER), m(BURST_DESCRIPTOR), m(SDU_REST)];

const RXSDU_INDICATION: &[FieldDescriptor] = &[
    m(FRAME_NUMBER),
    m(BURST_DESCRIPTOR),
    m(SDU_PAYLOAD),
    o(RSSI),
    o(CINR),
    o(TIMING_OFFSET),
    o(FREQUENCY_OFFSET),
    o(VENDOR_SPECIFIC),
];

const RXEND_INDICATION: &[FieldDescriptor] =
    &[m(FRAME_NUMBER), m(STATUS), o(RSSI), o(CINR), o(VENDOR_SPECIFIC)];

const fn message(
    message_type: u8,
    name: &'static str,
    fields: &'static [FieldDescriptor],
) -> MessageDescriptor {
    MessageDescriptor {
        message_type,
        name,
        fields,
    }
}

const PRIMITIVE_LIST: &[MessageDescriptor] = &[
    message(primitive::TXSTART_REQUEST, "TXSTART.request", START_REQUEST),
    message(primitive::TXSTART_CONFIRMATION, "TXSTART.confirmation", FRAME_STATUS),
    message(primitive::TXSTART_INDICATION, "TXSTART.indication", START_INDICATION),
    message(primitive::TXSDU_REQUEST, "TXSDU.request", TXSDU_REQUEST),
    message(primitive::TXSDU_CONFIRMATION, "TXSDU.confirmation", FRAME_STATUS),
    message(primitive::TXEND_INDICATION, "TXEND.indication", FRAME_STATUS),
    message(primitive::RXSTART_REQUEST, "RXSTART.request", START_REQUEST),
    message(primitive::RXSTART_CONFIRMATION, "RXSTART.confirmation", FRAME_STATUS),
    message(primitive::RXSTART_INDICATION, "RXSTART.indication", START_INDICATION),
    message(primitive::RXSDU_INDICATION, "RXSDU.indication", RXSDU_INDICATION),
    message(primitive::RXEND_INDICATION, "RXEND.indication", RXEND_INDICATION),
];

/// PHY SAP primitive dispatch table.
pub static WIMAX_PRIMITIVES: MessageTable =
    MessageTable::new("WiMAX MAC-PHY", &MEASUREMENTS, PRIMITIVE_LIST);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::decode_message;
    use crate::protocol::ElementStatus;
    use crate::protocol::test_utils::WimaxBuilder;

    #[test]
    fn test_primitive_count() {
        assert_eq!(WIMAX_PRIMITIVES.len(), 11);
        for code in 0x01..=0x0b {
            assert!(WIMAX_PRIMITIVES.get(code).is_some(), "primitive {code:#04x}");
        }
        assert!(WIMAX_PRIMITIVES.get(0x0c).is_none());
    }

    #[test]
    fn test_txstart_request_zones() {
        let pdu = WimaxBuilder::new(primitive::TXSTART_REQUEST)
            .frame_number(0x0102_0304)
            .byte(1)
            .zones(&[[0, 1, 0, 12, 5, 1, 0xff, 0x00], [3, 2, 12, 6, 0, 0, 0x00, 0x3f]])
            .build();

        let mut ctx = DecodeContext::default();
        let result = decode_message(&WIMAX_PRIMITIVES, &pdu, &mut ctx);

        assert!(result.is_clean(), "{:?}", result.diagnostics);
        assert_eq!(result.consumed, pdu.len());
        assert_eq!(
            result.find("Frame Number").unwrap().get("frame_number"),
            Some(&FieldValue::UInt32(0x0102_0304))
        );
        assert_eq!(
            result.find("Subframe Type").unwrap().get("subframe_type"),
            Some(&FieldValue::Labeled(1, "UL"))
        );

        let zones = result.find("Zone Descriptors").unwrap();
        assert_eq!(zones.get("zones"), Some(&FieldValue::UInt8(2)));
        assert_eq!(zones.children.len(), 2);
        // type(1) + frame(4) + subframe(1) + count(1)
        assert_eq!(zones.children[0].offset, 7);
        assert_eq!(zones.children[1].offset, 15);
        assert_eq!(zones.children[1].get("zone_type"), Some(&FieldValue::Labeled(3, "AMC")));
        assert_eq!(
            zones.children[1].get("subchannel_bitmap"),
            Some(&FieldValue::UInt16(0x003f))
        );
    }

    #[test]
    fn test_empty_zone_array() {
        let pdu = WimaxBuilder::new(primitive::RXSTART_REQUEST)
            .frame_number(7)
            .byte(0)
            .zones(&[])
            .build();
        let mut ctx = DecodeContext::default();
        let result = decode_message(&WIMAX_PRIMITIVES, &pdu, &mut ctx);

        assert!(result.is_clean());
        assert!(result.find("Zone Descriptors").unwrap().children.is_empty());
    }

    #[test]
    fn test_zone_count_past_end_is_truncated() {
        // Count says 3 records, only one present
        let pdu = WimaxBuilder::new(primitive::TXSTART_REQUEST)
            .frame_number(1)
            .byte(0)
            .raw(&[3, 0, 1, 0, 12, 5, 1, 0xff, 0x00])
            .build();
        let mut ctx = DecodeContext::default();
        let result = decode_message(&WIMAX_PRIMITIVES, &pdu, &mut ctx);

        let zones = result.find("Zone Descriptors").unwrap();
        assert_eq!(zones.status, ElementStatus::Truncated);
        assert!(result.has_errors());
    }

    #[test]
    fn test_txsdu_request_payload_runs_to_end() {
        let pdu = WimaxBuilder::new(primitive::TXSDU_REQUEST)
            .frame_number(9)
            .burst(0x0010, 2, 1, 4, 3)
            .raw(&[0xde, 0xad, 0xbe, 0xef, 0x01])
            .build();
        let mut ctx = DecodeContext::default();
        let result = decode_message(&WIMAX_PRIMITIVES, &pdu, &mut ctx);

        assert!(result.is_clean());
        let burst = result.find("Burst Descriptor").unwrap();
        assert_eq!(burst.get("modulation"), Some(&FieldValue::Labeled(2, "16-QAM 1/2")));
        let sdu = result.find("SDU Payload").unwrap();
        assert_eq!(sdu.get("sdu"), Some(&FieldValue::Bytes(&[0xde, 0xad, 0xbe, 0xef, 0x01])));
        assert_eq!(result.consumed, pdu.len());
    }

    #[test]
    fn test_txsdu_request_large_payload_length() {
        let payload = vec![0x5a; 70_000];
        let pdu = WimaxBuilder::new(primitive::TXSDU_REQUEST)
            .frame_number(9)
            .burst(1, 6, 0, 30, 12)
            .raw(&payload)
            .build();
        let mut ctx = DecodeContext::default();
        let result = decode_message(&WIMAX_PRIMITIVES, &pdu, &mut ctx);

        assert!(result.is_clean(), "{:?}", result.diagnostics);
        let sdu = result.find("SDU Payload").unwrap();
        assert_eq!(sdu.get("sdu_length"), Some(&FieldValue::UInt32(70_000)));
        assert_eq!(sdu.value.len(), 70_000);
        assert_eq!(result.consumed, pdu.len());
    }

    #[test]
    fn test_rxsdu_indication_with_measurements() {
        let pdu = WimaxBuilder::new(primitive::RXSDU_INDICATION)
            .frame_number(42)
            .burst(1, 0, 0, 2, 2)
            .sdu(&[0x11, 0x22, 0x33])
            .measurement(super::super::measurement::RSSI, &(-300i16).to_be_bytes())
            .measurement(super::super::measurement::TIMING_OFFSET, &(-8i32).to_be_bytes())
            .build();
        let mut ctx = DecodeContext::default();
        let result = decode_message(&WIMAX_PRIMITIVES, &pdu, &mut ctx);

        assert!(result.is_clean(), "{:?}", result.diagnostics);
        assert_eq!(result.consumed, pdu.len());
        assert_eq!(
            result.find("SDU Payload").unwrap().get("sdu_length"),
            Some(&FieldValue::UInt32(3))
        );
        assert_eq!(
            result.find("RSSI").unwrap().get("rssi_quarter_dbm"),
            Some(&FieldValue::Int64(-300))
        );
        assert!(result.find("CINR").is_none());
        assert_eq!(
            result.find("Timing Offset").unwrap().get("timing_offset"),
            Some(&FieldValue::Int64(-8))
        );
    }

    #[test]
    fn test_missing_status_aborts() {
        let pdu = WimaxBuilder::new(primitive::TXEND_INDICATION).frame_number(5).build();
        let mut ctx = DecodeContext::default();
        let result = decode_message(&WIMAX_PRIMITIVES, &pdu, &mut ctx);

        assert!(result.aborted);
        assert!(result
            .diagnostics
            .iter()
            .any(|d| matches!(d.error, DecodeError::MissingMandatory { element: "Status", .. })));
    }

    #[test]
    fn test_unknown_status_is_reserved() {
        let pdu = WimaxBuilder::new(primitive::RXEND_INDICATION).frame_number(5).byte(0x40).build();
        let mut ctx = DecodeContext::default();
        let result = decode_message(&WIMAX_PRIMITIVES, &pdu, &mut ctx);

        assert_eq!(
            result.find("Status").unwrap().get("status"),
            Some(&FieldValue::Labeled(0x40, "reserved"))
        );
    }
}
