//! Field elements carried inside Old BSS to New BSS Information.
//!
//! Field elements are TLVs with a one-octet length. The Cell Load
//! Information Group nests further field elements after a cell
//! identification whose coding is not in the element itself: it reuses the
//! discriminator of the last Cell Identifier (List) seen in the message.

use super::elements::{decode_cell_id, need};
use super::{field_element, CELL_DISCRIMINATOR};
use crate::codec::LengthCoding;
use crate::engine::{decode_elements, DecodeContext};
use crate::error::DecodeError;
use crate::format::format_plmn;
use crate::protocol::{Element, FieldValue};
use crate::schema::ElementFormat::Tlv;
use crate::schema::{ElementSpec, ElementTable};

type DecodeResult = Result<usize, DecodeError>;

fn extra_information<'data>(
    value: &'data [u8],
    _ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    need(value, 1, out.name)?;
    out.push("prec", FieldValue::Bool(value[0] & 0x01 != 0));
    out.push("lcs", FieldValue::Bool(value[0] & 0x02 != 0));
    out.push("ue_prob", FieldValue::Bool(value[0] & 0x04 != 0));
    Ok(1)
}

fn current_channel_type1<'data>(
    value: &'data [u8],
    _ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    need(value, 2, out.name)?;
    out.push("channel_mode", FieldValue::UInt8(value[0] & 0x0f));
    out.push("channel", FieldValue::UInt8(value[1] & 0x0f));
    Ok(2)
}

fn target_cell_radio_information<'data>(
    value: &'data [u8],
    _ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    need(value, 1, out.name)?;
    out.push("rxlev_ncell", FieldValue::UInt8(value[0] & 0x3f));
    Ok(1)
}

fn gprs_suspend_information<'data>(
    value: &'data [u8],
    _ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    need(value, 10, out.name)?;
    out.push(
        "tlli",
        FieldValue::UInt32(u32::from_be_bytes([value[0], value[1], value[2], value[3]])),
    );
    if let Some(plmn) = format_plmn(&value[4..7]) {
        out.push("plmn", FieldValue::OwnedString(plmn));
    }
    out.push("lac", FieldValue::UInt16(u16::from_be_bytes([value[7], value[8]])));
    out.push("rac", FieldValue::UInt8(value[9]));
    match value.get(10) {
        Some(&cause) => {
            out.push("suspension_cause", FieldValue::UInt8(cause));
            Ok(11)
        }
        None => Ok(10),
    }
}

fn multirate_configuration<'data>(
    value: &'data [u8],
    _ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    need(value, 2, out.name)?;
    out.push("version", FieldValue::UInt8(value[0] >> 5));
    out.push("icmi", FieldValue::Bool(value[0] & 0x08 != 0));
    out.push("start_mode", FieldValue::UInt8(value[0] & 0x03));
    out.push("active_codec_set", FieldValue::UInt8(value[1]));
    if value.len() > 2 {
        out.push("thresholds", FieldValue::Bytes(&value[2..]));
    }
    Ok(value.len())
}

fn dual_transfer_mode_information<'data>(
    value: &'data [u8],
    _ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    need(value, 1, out.name)?;
    out.push("dtm_ind", FieldValue::Bool(value[0] & 0x01 != 0));
    out.push("sto_ind", FieldValue::Bool(value[0] & 0x02 != 0));
    out.push("egprs_ind", FieldValue::Bool(value[0] & 0x04 != 0));
    Ok(1)
}

fn container<'data>(
    value: &'data [u8],
    _ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    out.push("contents", FieldValue::Bytes(value));
    Ok(value.len())
}

fn cell_load_information<'data>(
    value: &'data [u8],
    _ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    need(value, 4, out.name)?;
    out.push("load_value", FieldValue::UInt8(value[0]));
    out.push("rt_load_value", FieldValue::UInt8(value[1]));
    out.push("nrt_load_information", FieldValue::UInt8(value[2] & 0x03));
    out.push("cell_capacity_class", FieldValue::UInt8(value[3]));
    Ok(4)
}

fn cell_load_information_group<'data>(
    value: &'data [u8],
    ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    let discriminator = ctx.scratch(CELL_DISCRIMINATOR).ok_or_else(|| {
        DecodeError::invalid(
            out.name,
            "cell identification",
            "no Cell Identifier precedes this element",
        )
    })?;
    let used = decode_cell_id(discriminator as u8, value, out)?;

    let base = out.value_offset() + used;
    out.children = decode_elements(&OLD_BSS_FIELD_ELEMENTS, out.name, &value[used..], base, ctx)?;
    Ok(value.len())
}

const FIELD_ELEMENT_LIST: &[ElementSpec] = &[
    ElementSpec::new(field_element::EXTRA_INFORMATION, "Extra Information", Tlv, extra_information),
    ElementSpec::new(
        field_element::CURRENT_CHANNEL_TYPE1,
        "Current Channel Type 1",
        Tlv,
        current_channel_type1,
    ),
    ElementSpec::new(
        field_element::TARGET_CELL_RADIO_INFORMATION,
        "Target Cell Radio Information",
        Tlv,
        target_cell_radio_information,
    ),
    ElementSpec::new(
        field_element::GPRS_SUSPEND_INFORMATION,
        "GPRS Suspend Information",
        Tlv,
        gprs_suspend_information,
    ),
    ElementSpec::new(
        field_element::MULTIRATE_CONFIGURATION,
        "MultiRate Configuration Information",
        Tlv,
        multirate_configuration,
    ),
    ElementSpec::new(
        field_element::DUAL_TRANSFER_MODE_INFORMATION,
        "Dual Transfer Mode Information",
        Tlv,
        dual_transfer_mode_information,
    ),
    ElementSpec::new(
        field_element::INTER_RAT_HANDOVER_INFO,
        "Inter RAT Handover Info",
        Tlv,
        container,
    ),
    ElementSpec::new(
        field_element::CDMA2000_CAPABILITY_INFORMATION,
        "cdma2000 Capability Information",
        Tlv,
        container,
    ),
    ElementSpec::new(
        field_element::DOWNLINK_CELL_LOAD_INFORMATION,
        "Downlink Cell Load Information",
        Tlv,
        cell_load_information,
    ),
    ElementSpec::new(
        field_element::UPLINK_CELL_LOAD_INFORMATION,
        "Uplink Cell Load Information",
        Tlv,
        cell_load_information,
    ),
    ElementSpec::new(
        field_element::CELL_LOAD_INFORMATION_GROUP,
        "Cell Load Information Group",
        Tlv,
        cell_load_information_group,
    ),
];

/// Field elements of Old BSS to New BSS Information (one-octet lengths).
pub static OLD_BSS_FIELD_ELEMENTS: ElementTable =
    ElementTable::new("Old BSS to New BSS Information", LengthCoding::Single, FIELD_ELEMENT_LIST);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::ElementWriter;
    use crate::protocol::ElementStatus;

    fn walk<'a>(data: &'a [u8], ctx: &mut DecodeContext) -> Vec<Element<'a>> {
        decode_elements(&OLD_BSS_FIELD_ELEMENTS, "Old BSS to New BSS Information", data, 0, ctx)
            .unwrap()
    }

    #[test]
    fn test_simple_field_elements() {
        let data = ElementWriter::new(LengthCoding::Single)
            .tlv(field_element::EXTRA_INFORMATION, &[0x05])
            .unwrap()
            .tlv(field_element::TARGET_CELL_RADIO_INFORMATION, &[0x7f])
            .unwrap()
            .finish();
        let mut ctx = DecodeContext::default();
        let elements = walk(&data, &mut ctx);

        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].get("prec"), Some(&FieldValue::Bool(true)));
        assert_eq!(elements[0].get("lcs"), Some(&FieldValue::Bool(false)));
        assert_eq!(elements[0].get("ue_prob"), Some(&FieldValue::Bool(true)));
        assert_eq!(elements[1].get("rxlev_ncell"), Some(&FieldValue::UInt8(0x3f)));
        assert!(ctx.diagnostics().is_empty());
    }

    #[test]
    fn test_gprs_suspend_information() {
        let value = [0xc0, 0x00, 0x00, 0x01, 0x00, 0xf1, 0x10, 0x00, 0x2a, 0x07, 0x01];
        let data = ElementWriter::new(LengthCoding::Single)
            .tlv(field_element::GPRS_SUSPEND_INFORMATION, &value)
            .unwrap()
            .finish();
        let mut ctx = DecodeContext::default();
        let elements = walk(&data, &mut ctx);

        let gprs = &elements[0];
        assert_eq!(gprs.get("tlli"), Some(&FieldValue::UInt32(0xc000_0001)));
        assert_eq!(gprs.get("plmn").and_then(|v| v.as_str()), Some("001-01"));
        assert_eq!(gprs.get("lac"), Some(&FieldValue::UInt16(0x2a)));
        assert_eq!(gprs.get("suspension_cause"), Some(&FieldValue::UInt8(1)));
    }

    #[test]
    fn test_group_uses_discriminator_from_context() {
        // CI only (discriminator 2): two bytes of cell id, then a nested element
        let nested = ElementWriter::new(LengthCoding::Single)
            .tlv(field_element::UPLINK_CELL_LOAD_INFORMATION, &[10, 20, 1, 3])
            .unwrap()
            .finish();
        let mut group = vec![0x00, 0x42];
        group.extend_from_slice(&nested);
        let data = ElementWriter::new(LengthCoding::Single)
            .tlv(field_element::CELL_LOAD_INFORMATION_GROUP, &group)
            .unwrap()
            .finish();

        let mut ctx = DecodeContext::default();
        ctx.set_scratch(CELL_DISCRIMINATOR, 2);
        let elements = walk(&data, &mut ctx);

        let group = &elements[0];
        assert!(group.is_clean());
        assert_eq!(group.get("ci"), Some(&FieldValue::UInt16(0x42)));
        assert!(group.get("lac").is_none());
        let uplink = group.child("Uplink Cell Load Information").unwrap();
        assert_eq!(uplink.offset, 4);
        assert_eq!(uplink.get("rt_load_value"), Some(&FieldValue::UInt8(20)));
    }

    #[test]
    fn test_group_without_discriminator_is_malformed() {
        let data = [field_element::CELL_LOAD_INFORMATION_GROUP, 0x02, 0x00, 0x42];
        let mut ctx = DecodeContext::default();
        let elements = walk(&data, &mut ctx);

        assert!(matches!(elements[0].status, ElementStatus::Malformed(_)));
        assert!(ctx.has_errors());
    }

    #[test]
    fn test_empty_group_has_no_children() {
        // "No cell" coding: zero-length cell id and nothing nested
        let data = [field_element::CELL_LOAD_INFORMATION_GROUP, 0x00];
        let mut ctx = DecodeContext::default();
        ctx.set_scratch(CELL_DISCRIMINATOR, 3);
        let elements = walk(&data, &mut ctx);

        assert!(elements[0].children.is_empty());
        assert!(elements[0].is_clean());
    }
}
