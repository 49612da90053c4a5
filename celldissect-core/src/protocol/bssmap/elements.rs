//! BSSMAP information element catalog and value decoders.

use super::field_elements::OLD_BSS_FIELD_ELEMENTS;
use super::{ie, CELL_DISCRIMINATOR};
use crate::codec::LengthCoding;
use crate::engine::{decode_elements, DecodeContext};
use crate::error::DecodeError;
use crate::format::{format_plmn, tbcd_digits};
use crate::protocol::{Element, FieldValue};
use crate::schema::ElementFormat::{Tlv, Tv, T};
use crate::schema::{opaque, ElementSpec, ElementTable};

type DecodeResult = Result<usize, DecodeError>;

/// Fail unless `value` holds at least `needed` bytes.
pub(super) fn need(value: &[u8], needed: usize, element: &'static str) -> Result<(), DecodeError> {
    if value.len() < needed {
        return Err(DecodeError::too_short(element, needed, value.len()));
    }
    Ok(())
}

fn be16(value: &[u8], at: usize) -> u16 {
    u16::from_be_bytes([value[at], value[at + 1]])
}

/// Get the meaning of a (one-octet) cause value.
pub fn cause_name(cause: u8) -> &'static str {
    match cause {
        0x00 => "radio interface message failure",
        0x01 => "radio interface failure",
        0x02 => "uplink quality",
        0x03 => "uplink strength",
        0x04 => "downlink quality",
        0x05 => "downlink strength",
        0x06 => "distance",
        0x07 => "O and M intervention",
        0x08 => "response to MSC invocation",
        0x09 => "call control",
        0x0a => "radio interface failure, reversion to old channel",
        0x0b => "handover successful",
        0x0c => "better cell",
        0x0d => "directed retry",
        0x0e => "joined group call channel",
        0x0f => "traffic",
        0x20 => "equipment failure",
        0x21 => "no radio resource available",
        0x22 => "requested terrestrial resource unavailable",
        0x23 => "CCCH overload",
        0x24 => "processor overload",
        0x25 => "BSS not equipped",
        0x26 => "MS not equipped",
        0x27 => "invalid cell",
        0x28 => "traffic load",
        0x29 => "preemption",
        0x40 => "requested transcoding/rate adaption unavailable",
        0x41 => "circuit pool mismatch",
        0x42 => "switch circuit pool",
        0x43 => "requested speech version unavailable",
        0x50 => "ciphering algorithm not supported",
        0x51 => "terrestrial circuit already allocated",
        0x52 => "invalid message contents",
        0x53 => "information element or field missing",
        0x54 => "incorrect value",
        0x55 => "unknown message type",
        0x56 => "unknown information element",
        0x60 => "protocol error between BSS and MSC",
        _ => "unspecified",
    }
}

fn cell_discriminator_name(discriminator: u8) -> &'static str {
    match discriminator {
        0 => "CGI",
        1 => "LAC and CI",
        2 => "CI",
        3 => "no cell",
        4 => "LAI",
        5 => "LAC",
        6 => "all cells on the BSS",
        _ => "reserved",
    }
}

/// Size of one cell identification for a discriminator, None if reserved.
pub fn cell_id_len(discriminator: u8) -> Option<usize> {
    match discriminator {
        0 => Some(7),
        1 => Some(4),
        2 | 5 => Some(2),
        3 | 6 => Some(0),
        4 => Some(5),
        _ => None,
    }
}

/// Decode one cell identification coded per `discriminator` into `out`.
/// Returns the bytes used.
pub(super) fn decode_cell_id<'data>(
    discriminator: u8,
    value: &'data [u8],
    out: &mut Element<'data>,
) -> DecodeResult {
    let element = out.name;
    let len = cell_id_len(discriminator).ok_or_else(|| {
        DecodeError::invalid(
            element,
            "cell identification discriminator",
            format!("reserved value {discriminator}"),
        )
    })?;
    need(value, len, element)?;

    let mut at = 0;
    if matches!(discriminator, 0 | 4) {
        if let Some(plmn) = format_plmn(&value[..3]) {
            out.push("plmn", FieldValue::OwnedString(plmn));
        }
        at = 3;
    }
    if matches!(discriminator, 0 | 1 | 4 | 5) {
        out.push("lac", FieldValue::UInt16(be16(value, at)));
        at += 2;
    }
    if matches!(discriminator, 0 | 1 | 2) {
        out.push("ci", FieldValue::UInt16(be16(value, at)));
        at += 2;
    }
    Ok(at)
}

fn circuit_identity_code<'data>(
    value: &'data [u8],
    _ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    need(value, 2, out.name)?;
    let cic = be16(value, 0);
    out.push("cic", FieldValue::UInt16(cic));
    out.push("pcm_multiplexer", FieldValue::UInt16(cic >> 5));
    out.push("timeslot", FieldValue::UInt8((cic & 0x1f) as u8));
    Ok(2)
}

const RESOURCE_BANDS: [(&str, &str); 5] = [
    ("band1_full_rate", "band1_half_rate"),
    ("band2_full_rate", "band2_half_rate"),
    ("band3_full_rate", "band3_half_rate"),
    ("band4_full_rate", "band4_half_rate"),
    ("band5_full_rate", "band5_half_rate"),
];

fn resource_available<'data>(
    value: &'data [u8],
    _ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    need(value, 20, out.name)?;
    for (i, (full, half)) in RESOURCE_BANDS.iter().enumerate() {
        out.push(*full, FieldValue::UInt16(be16(value, i * 4)));
        out.push(*half, FieldValue::UInt16(be16(value, i * 4 + 2)));
    }
    Ok(20)
}

fn cause<'data>(
    value: &'data [u8],
    _ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    need(value, 1, out.name)?;
    if value[0] & 0x80 != 0 {
        // Two-octet cause
        need(value, 2, out.name)?;
        out.push("extended", FieldValue::Bool(true));
        out.push("cause", FieldValue::UInt16(u16::from_be_bytes([value[0] & 0x7f, value[1]])));
        return Ok(2);
    }
    let cause = value[0];
    out.push("cause", FieldValue::Labeled(cause as u64, cause_name(cause)));
    Ok(1)
}

fn cell_identifier<'data>(
    value: &'data [u8],
    ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    need(value, 1, out.name)?;
    let discriminator = value[0] & 0x0f;
    out.push(
        "discriminator",
        FieldValue::Labeled(discriminator as u64, cell_discriminator_name(discriminator)),
    );
    let used = decode_cell_id(discriminator, &value[1..], out)?;
    ctx.set_scratch(CELL_DISCRIMINATOR, discriminator as u64);
    Ok(1 + used)
}

fn cell_identifier_list<'data>(
    value: &'data [u8],
    ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    need(value, 1, out.name)?;
    let discriminator = value[0] & 0x0f;
    out.push(
        "discriminator",
        FieldValue::Labeled(discriminator as u64, cell_discriminator_name(discriminator)),
    );

    let len = cell_id_len(discriminator).ok_or_else(|| {
        DecodeError::invalid(
            out.name,
            "cell identification discriminator",
            format!("reserved value {discriminator}"),
        )
    })?;
    ctx.set_scratch(CELL_DISCRIMINATOR, discriminator as u64);
    if len == 0 {
        return Ok(1);
    }

    let base = out.value_offset();
    let mut at = 1;
    while value.len() - at >= len {
        let mut cell = Element::new(None, "Cell", base + at, len, &value[at..at + len]);
        decode_cell_id(discriminator, &value[at..at + len], &mut cell)?;
        out.children.push(cell);
        at += len;
    }
    out.push("cells", FieldValue::UInt16(out.children.len() as u16));
    Ok(at)
}

fn priority<'data>(
    value: &'data [u8],
    _ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    need(value, 1, out.name)?;
    let b = value[0];
    out.push("pci", FieldValue::Bool(b & 0x40 != 0));
    out.push("priority_level", FieldValue::UInt8((b & 0x3c) >> 2));
    out.push("qa", FieldValue::Bool(b & 0x02 != 0));
    out.push("pvi", FieldValue::Bool(b & 0x01 != 0));
    Ok(1)
}

fn layer3_header_information<'data>(
    value: &'data [u8],
    _ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    need(value, 2, out.name)?;
    out.push("protocol_discriminator", FieldValue::UInt8(value[0] & 0x0f));
    out.push("transaction_id", FieldValue::UInt8(value[1]));
    Ok(2)
}

fn imsi<'data>(
    value: &'data [u8],
    _ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    need(value, 1, out.name)?;
    let identity_type = value[0] & 0x07;
    if identity_type != 1 {
        return Err(DecodeError::invalid(
            out.name,
            "type of identity",
            format!("expected IMSI (1), got {identity_type}"),
        ));
    }
    out.push("odd", FieldValue::Bool(value[0] & 0x08 != 0));
    out.push("imsi", FieldValue::OwnedString(tbcd_digits(value, true)));
    Ok(value.len())
}

fn tmsi<'data>(
    value: &'data [u8],
    _ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    need(value, 4, out.name)?;
    let tmsi = u32::from_be_bytes([value[0], value[1], value[2], value[3]]);
    out.push("tmsi", FieldValue::UInt32(tmsi));
    Ok(4)
}

const ALGORITHMS: [&str; 8] = [
    "no encryption",
    "A5/1",
    "A5/2",
    "A5/3",
    "A5/4",
    "A5/5",
    "A5/6",
    "A5/7",
];

fn encryption_information<'data>(
    value: &'data [u8],
    _ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    need(value, 1, out.name)?;
    let permitted = ALGORITHMS
        .iter()
        .enumerate()
        .filter(|(bit, _)| value[0] & (1 << bit) != 0)
        .map(|(_, name)| FieldValue::Str(*name))
        .collect();
    out.push("permitted_algorithms", FieldValue::List(permitted));
    if value.len() > 1 {
        out.push("key", FieldValue::Bytes(&value[1..]));
    }
    Ok(value.len())
}

fn channel_type<'data>(
    value: &'data [u8],
    _ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    need(value, 3, out.name)?;
    let indicator = value[0] & 0x0f;
    let label = match indicator {
        1 => "speech",
        2 => "data",
        3 => "signalling",
        _ => "reserved",
    };
    out.push("speech_data_indicator", FieldValue::Labeled(indicator as u64, label));
    out.push("channel_rate_and_type", FieldValue::UInt8(value[1]));
    out.push("permitted_indicators", FieldValue::Bytes(&value[2..]));
    Ok(value.len())
}

fn octet<'data>(
    value: &'data [u8],
    _ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    need(value, 1, out.name)?;
    out.push("value", FieldValue::UInt8(value[0]));
    Ok(1)
}

fn classmark<'data>(
    value: &'data [u8],
    _ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    need(value, 1, out.name)?;
    let b = value[0];
    out.push("revision_level", FieldValue::UInt8((b >> 5) & 0x03));
    out.push("es_ind", FieldValue::Bool(b & 0x10 != 0));
    out.push("a5_1_unavailable", FieldValue::Bool(b & 0x08 != 0));
    out.push("rf_power_capability", FieldValue::UInt8(b & 0x07));
    if value.len() > 1 {
        out.push("capabilities", FieldValue::Bytes(&value[1..]));
    }
    Ok(value.len())
}

fn bytes<'data>(
    value: &'data [u8],
    _ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    out.push("contents", FieldValue::Bytes(value));
    Ok(value.len())
}

fn dlci<'data>(
    value: &'data [u8],
    _ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    need(value, 1, out.name)?;
    out.push("control_channel", FieldValue::UInt8(value[0] >> 6));
    out.push("sapi", FieldValue::UInt8(value[0] & 0x07));
    Ok(1)
}

fn downlink_dtx_flag<'data>(
    value: &'data [u8],
    _ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    need(value, 1, out.name)?;
    out.push("dtx_disabled", FieldValue::Bool(value[0] & 0x01 != 0));
    Ok(1)
}

fn resource_indication_method<'data>(
    value: &'data [u8],
    _ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    need(value, 1, out.name)?;
    let method = value[0] & 0x0f;
    let label = match method {
        0 => "spontaneous",
        1 => "periodic",
        2 => "no cyclic",
        3 => "periodic, threshold triggered",
        _ => "reserved",
    };
    out.push("method", FieldValue::Labeled(method as u64, label));
    Ok(1)
}

fn circuit_identity_code_list<'data>(
    value: &'data [u8],
    _ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    need(value, 1, out.name)?;
    out.push("range", FieldValue::UInt8(value[0]));
    out.push("status", FieldValue::Bytes(&value[1..]));
    Ok(value.len())
}

fn diagnostic<'data>(
    value: &'data [u8],
    _ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    need(value, 2, out.name)?;
    out.push("error_pointer", FieldValue::UInt8(value[0]));
    out.push("bit_pointer", FieldValue::UInt8(value[1] & 0x0f));
    out.push("message_received", FieldValue::Bytes(&value[2..]));
    Ok(value.len())
}

fn chosen_channel<'data>(
    value: &'data [u8],
    _ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    need(value, 1, out.name)?;
    out.push("channel_mode", FieldValue::UInt8(value[0] >> 4));
    out.push("channel", FieldValue::UInt8(value[0] & 0x0f));
    Ok(1)
}

fn total_resource_accessible<'data>(
    value: &'data [u8],
    _ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    need(value, 4, out.name)?;
    out.push("full_rate_channels", FieldValue::UInt16(be16(value, 0)));
    out.push("half_rate_channels", FieldValue::UInt16(be16(value, 2)));
    Ok(4)
}

fn cipher_response_mode<'data>(
    value: &'data [u8],
    _ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    need(value, 1, out.name)?;
    out.push("imeisv_included", FieldValue::Bool(value[0] & 0x01 != 0));
    Ok(1)
}

fn channel_needed<'data>(
    value: &'data [u8],
    _ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    need(value, 1, out.name)?;
    let channel = value[0] & 0x03;
    let label = match channel {
        0 => "any channel",
        1 => "SDCCH",
        2 => "TCH/F",
        _ => "TCH/H or TCH/F",
    };
    out.push("channel", FieldValue::Labeled(channel as u64, label));
    Ok(1)
}

fn chosen_encryption_algorithm<'data>(
    value: &'data [u8],
    _ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    need(value, 1, out.name)?;
    let algorithm = value[0];
    let label = match algorithm {
        1..=8 => ALGORITHMS[algorithm as usize - 1],
        _ => "reserved",
    };
    out.push("algorithm", FieldValue::Labeled(algorithm as u64, label));
    Ok(1)
}

fn old_bss_to_new_bss_information<'data>(
    value: &'data [u8],
    ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    let base = out.value_offset();
    out.children = decode_elements(&OLD_BSS_FIELD_ELEMENTS, out.name, value, base, ctx)?;
    Ok(value.len())
}

fn speech_version<'data>(
    value: &'data [u8],
    _ctx: &mut DecodeContext,
    out: &mut Element<'data>,
) -> DecodeResult {
    need(value, 1, out.name)?;
    let version = value[0] & 0x7f;
    let label = match version {
        0x01 => "GSM FR (FR1)",
        0x11 => "GSM EFR (FR2)",
        0x21 => "FR AMR (FR3)",
        0x05 => "GSM HR (HR1)",
        0x25 => "HR AMR (HR3)",
        0x41 => "FR AMR-WB (FR5)",
        _ => "reserved",
    };
    out.push("speech_version", FieldValue::Labeled(version as u64, label));
    Ok(1)
}

pub(super) const CIRCUIT_IDENTITY_CODE: ElementSpec = ElementSpec::new(
    ie::CIRCUIT_IDENTITY_CODE,
    "Circuit Identity Code",
    Tv(2),
    circuit_identity_code,
);
pub(super) const RESOURCE_AVAILABLE: ElementSpec =
    ElementSpec::new(ie::RESOURCE_AVAILABLE, "Resource Available", Tv(20), resource_available);
pub(super) const CAUSE: ElementSpec = ElementSpec::new(ie::CAUSE, "Cause", Tlv, cause);
pub(super) const CELL_IDENTIFIER: ElementSpec =
    ElementSpec::new(ie::CELL_IDENTIFIER, "Cell Identifier", Tlv, cell_identifier);
pub(super) const PRIORITY: ElementSpec = ElementSpec::new(ie::PRIORITY, "Priority", Tlv, priority);
pub(super) const LAYER3_HEADER_INFORMATION: ElementSpec = ElementSpec::new(
    ie::LAYER3_HEADER_INFORMATION,
    "Layer 3 Header Information",
    Tlv,
    layer3_header_information,
);
pub(super) const IMSI: ElementSpec = ElementSpec::new(ie::IMSI, "IMSI", Tlv, imsi);
pub(super) const TMSI: ElementSpec = ElementSpec::new(ie::TMSI, "TMSI", Tlv, tmsi);
pub(super) const ENCRYPTION_INFORMATION: ElementSpec = ElementSpec::new(
    ie::ENCRYPTION_INFORMATION,
    "Encryption Information",
    Tlv,
    encryption_information,
);
pub(super) const CHANNEL_TYPE: ElementSpec =
    ElementSpec::new(ie::CHANNEL_TYPE, "Channel Type", Tlv, channel_type);
pub(super) const PERIODICITY: ElementSpec =
    ElementSpec::new(ie::PERIODICITY, "Periodicity", Tv(1), octet);
pub(super) const NUMBER_OF_MSS: ElementSpec =
    ElementSpec::new(ie::NUMBER_OF_MSS, "Number Of MSs", Tv(1), octet);
pub(super) const CLASSMARK_INFORMATION_TYPE2: ElementSpec = ElementSpec::new(
    ie::CLASSMARK_INFORMATION_TYPE2,
    "Classmark Information Type 2",
    Tlv,
    classmark,
);
pub(super) const CLASSMARK_INFORMATION_TYPE3: ElementSpec = ElementSpec::new(
    ie::CLASSMARK_INFORMATION_TYPE3,
    "Classmark Information Type 3",
    Tlv,
    bytes,
);
pub(super) const RR_CAUSE: ElementSpec = ElementSpec::new(ie::RR_CAUSE, "RR Cause", Tv(1), octet);
pub(super) const LAYER3_INFORMATION: ElementSpec =
    ElementSpec::new(ie::LAYER3_INFORMATION, "Layer 3 Information", Tlv, bytes);
pub(super) const DLCI: ElementSpec = ElementSpec::new(ie::DLCI, "DLCI", Tv(1), dlci);
pub(super) const DOWNLINK_DTX_FLAG: ElementSpec =
    ElementSpec::new(ie::DOWNLINK_DTX_FLAG, "Downlink DTX Flag", Tv(1), downlink_dtx_flag);
pub(super) const CELL_IDENTIFIER_LIST: ElementSpec =
    ElementSpec::new(ie::CELL_IDENTIFIER_LIST, "Cell Identifier List", Tlv, cell_identifier_list);
pub(super) const RESPONSE_REQUEST: ElementSpec =
    ElementSpec::new(ie::RESPONSE_REQUEST, "Response Request", T, opaque);
pub(super) const RESOURCE_INDICATION_METHOD: ElementSpec = ElementSpec::new(
    ie::RESOURCE_INDICATION_METHOD,
    "Resource Indication Method",
    Tv(1),
    resource_indication_method,
);
pub(super) const CLASSMARK_INFORMATION_TYPE1: ElementSpec = ElementSpec::new(
    ie::CLASSMARK_INFORMATION_TYPE1,
    "Classmark Information Type 1",
    Tv(1),
    classmark,
);
pub(super) const CIRCUIT_IDENTITY_CODE_LIST: ElementSpec = ElementSpec::new(
    ie::CIRCUIT_IDENTITY_CODE_LIST,
    "Circuit Identity Code List",
    Tlv,
    circuit_identity_code_list,
);
pub(super) const DIAGNOSTIC: ElementSpec =
    ElementSpec::new(ie::DIAGNOSTIC, "Diagnostic", Tlv, diagnostic);
pub(super) const LAYER3_MESSAGE_CONTENTS: ElementSpec =
    ElementSpec::new(ie::LAYER3_MESSAGE_CONTENTS, "Layer 3 Message Contents", Tlv, bytes);
pub(super) const CHOSEN_CHANNEL: ElementSpec =
    ElementSpec::new(ie::CHOSEN_CHANNEL, "Chosen Channel", Tv(1), chosen_channel);
pub(super) const TOTAL_RESOURCE_ACCESSIBLE: ElementSpec = ElementSpec::new(
    ie::TOTAL_RESOURCE_ACCESSIBLE,
    "Total Resource Accessible",
    Tv(4),
    total_resource_accessible,
);
pub(super) const CIPHER_RESPONSE_MODE: ElementSpec =
    ElementSpec::new(ie::CIPHER_RESPONSE_MODE, "Cipher Response Mode", Tv(1), cipher_response_mode);
pub(super) const CHANNEL_NEEDED: ElementSpec =
    ElementSpec::new(ie::CHANNEL_NEEDED, "Channel Needed", Tv(1), channel_needed);
pub(super) const CHOSEN_ENCRYPTION_ALGORITHM: ElementSpec = ElementSpec::new(
    ie::CHOSEN_ENCRYPTION_ALGORITHM,
    "Chosen Encryption Algorithm",
    Tv(1),
    chosen_encryption_algorithm,
);
pub(super) const OLD_BSS_TO_NEW_BSS_INFORMATION: ElementSpec = ElementSpec::new(
    ie::OLD_BSS_TO_NEW_BSS_INFORMATION,
    "Old BSS to New BSS Information",
    Tlv,
    old_bss_to_new_bss_information,
);
pub(super) const SPEECH_VERSION: ElementSpec =
    ElementSpec::new(ie::SPEECH_VERSION, "Speech Version", Tv(1), speech_version);

const ELEMENT_LIST: &[ElementSpec] = &[
    CIRCUIT_IDENTITY_CODE,
    RESOURCE_AVAILABLE,
    CAUSE,
    CELL_IDENTIFIER,
    PRIORITY,
    LAYER3_HEADER_INFORMATION,
    IMSI,
    TMSI,
    ENCRYPTION_INFORMATION,
    CHANNEL_TYPE,
    PERIODICITY,
    NUMBER_OF_MSS,
    CLASSMARK_INFORMATION_TYPE2,
    CLASSMARK_INFORMATION_TYPE3,
    RR_CAUSE,
    LAYER3_INFORMATION,
    DLCI,
    DOWNLINK_DTX_FLAG,
    CELL_IDENTIFIER_LIST,
    RESPONSE_REQUEST,
    RESOURCE_INDICATION_METHOD,
    CLASSMARK_INFORMATION_TYPE1,
    CIRCUIT_IDENTITY_CODE_LIST,
    DIAGNOSTIC,
    LAYER3_MESSAGE_CONTENTS,
    CHOSEN_CHANNEL,
    TOTAL_RESOURCE_ACCESSIBLE,
    CIPHER_RESPONSE_MODE,
    CHANNEL_NEEDED,
    CHOSEN_ENCRYPTION_ALGORITHM,
    OLD_BSS_TO_NEW_BSS_INFORMATION,
    SPEECH_VERSION,
];

/// BSSMAP information element catalog. Element lengths use the extensible
/// one/two-octet coding.
pub static BSSMAP_ELEMENTS: ElementTable =
    ElementTable::new("BSSMAP", LengthCoding::Extensible, ELEMENT_LIST);
