//! Trailing measurement TLVs of the receive primitives.

use super::measurement;
use crate::codec::LengthCoding;
use crate::engine::{decode_elements, DecodeContext};
use crate::error::DecodeError;
use crate::protocol::{Element, FieldValue};
use crate::schema::ElementFormat::Tlv;
use crate::schema::{ElementSpec, ElementTable};

type DecodeResult = Result<usize, DecodeError>;

fn signed16<'data>(
    value: &'data [u8],
    out: &mut Element<'data>,
    field: &'static str,
) -> DecodeResult {
    let bytes: [u8; 2] = value
        .get(..2)
        .and_then(|b| b.try_into().ok())
        .ok_or(DecodeError::too_short(out.name, 2, value.len()))?;
    out.push(field, FieldValue::Int64(i16::from_be_bytes(bytes) as i64));
    Ok(2)
}

fn signed32<'data>(
    value: &'data [u8],
    out: &mut Element<'data>,
    field: &'static str,
) -> DecodeResult {
    let bytes: [u8; 4] = value
        .get(..4)
        .and_then(|b| b.try_into().ok())
        .ok_or(DecodeError::too_short(out.name, 4, value.len()))?;
    out.push(field, FieldValue::Int64(i32::from_be_bytes(bytes) as i64));
    Ok(4)
}

fn rssi<'data>(
    value: &'data [u8],
    _ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    signed16(value, out, "rssi_quarter_dbm")
}

fn cinr<'data>(
    value: &'data [u8],
    _ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    signed16(value, out, "cinr_quarter_db")
}

fn timing_offset<'data>(
    value: &'data [u8],
    _ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    signed32(value, out, "timing_offset")
}

fn frequency_offset<'data>(
    value: &'data [u8],
    _ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    signed32(value, out, "frequency_offset_hz")
}

/// Vendor-specific container: 3-octet vendor id, then measurement TLVs
/// (which may contain another vendor-specific container).
fn vendor_specific<'data>(
    value: &'data [u8],
    ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    if value.len() < 3 {
        return Err(DecodeError::too_short(out.name, 3, value.len()));
    }
    let vendor_id = u32::from_be_bytes([0, value[0], value[1], value[2]]);
    out.push("vendor_id", FieldValue::UInt32(vendor_id));

    let base = out.value_offset() + 3;
    out.children = decode_elements(&MEASUREMENTS, out.name, &value[3..], base, ctx)?;
    Ok(value.len())
}

pub(super) const RSSI: ElementSpec = ElementSpec::new(measurement::RSSI, "RSSI", Tlv, rssi);
pub(super) const CINR: ElementSpec = ElementSpec::new(measurement::CINR, "CINR", Tlv, cinr);
pub(super) const TIMING_OFFSET: ElementSpec =
    ElementSpec::new(measurement::TIMING_OFFSET, "Timing Offset", Tlv, timing_offset);
pub(super) const FREQUENCY_OFFSET: ElementSpec =
    ElementSpec::new(measurement::FREQUENCY_OFFSET, "Frequency Offset", Tlv, frequency_offset);
pub(super) const VENDOR_SPECIFIC: ElementSpec =
    ElementSpec::new(measurement::VENDOR_SPECIFIC, "Vendor Specific", Tlv, vendor_specific);

const MEASUREMENT_LIST: &[ElementSpec] =
    &[RSSI, CINR, TIMING_OFFSET, FREQUENCY_OFFSET, VENDOR_SPECIFIC];

/// Measurement TLV catalog (two-octet lengths).
pub static MEASUREMENTS: ElementTable =
    ElementTable::new("WiMAX MAC-PHY", LengthCoding::Double, MEASUREMENT_LIST);
