//! Single-element framing and the recursive field element walker.

use super::{DecodeContext, Severity};
use crate::codec::{read_length, LengthCoding};
use crate::error::DecodeError;
use crate::protocol::{Element, ElementStatus};
use crate::schema::{
    opaque, ElementDecoder, ElementFormat, ElementSpec, ElementTable, FieldDescriptor,
};

/// Name given to elements whose tag no table knows.
pub const UNKNOWN_ELEMENT: &str = "Unknown Element";

/// Name given to bytes a decoder or a message left unclaimed.
pub const EXTRANEOUS_DATA: &str = "Extraneous Data";

/// Everything the engine needs to frame and decode one element.
#[derive(Clone, Copy)]
pub struct Framing {
    pub name: &'static str,
    pub format: ElementFormat,
    pub decoder: ElementDecoder,
    pub coding: LengthCoding,
}

impl Framing {
    /// Framing of a message field.
    pub fn of_field(field: &FieldDescriptor, coding: LengthCoding) -> Self {
        Self {
            name: field.name,
            format: field.format,
            decoder: field.decoder,
            coding,
        }
    }

    /// Framing of a catalog entry.
    pub fn of_spec(spec: &ElementSpec, coding: LengthCoding) -> Self {
        Self {
            name: spec.name,
            format: spec.format,
            decoder: spec.decoder,
            coding,
        }
    }

    /// Opaque TLV framing for a tag nobody knows.
    pub fn unknown(coding: LengthCoding) -> Self {
        Self {
            name: UNKNOWN_ELEMENT,
            format: ElementFormat::Tlv,
            decoder: opaque,
            coding,
        }
    }
}

/// Result of framing one element.
#[derive(Debug)]
pub struct Framed<'data> {
    pub element: Element<'data>,
    /// Bytes to skip to reach the next element (header + declared length,
    /// clamped to the buffer)
    pub advance: usize,
    /// Element ran off the end of the buffer; nothing after it can be framed
    pub truncated: bool,
}

/// Frame and decode the element at the start of `data`.
///
/// `offset` is the position of `data[0]` relative to the start of the
/// message and is only used for reporting. The caller guarantees `data` is
/// non-empty for tagged formats.
///
/// The declared length decides how far the walk advances. The decoder sees
/// exactly the declared value slice; what it does not claim is attached as
/// an extraneous-data child and reported.
pub fn decode_element<'data>(
    framing: Framing,
    data: &'data [u8],
    offset: usize,
    ctx: &mut DecodeContext,
) -> Framed<'data> {
    let name = framing.name;
    let mut header = 0;
    let mut tag = None;

    if framing.format.is_tagged() {
        tag = data.first().copied();
        header = 1;
    }

    let declared = match framing.format {
        ElementFormat::T => Ok(0),
        ElementFormat::Tv(n) | ElementFormat::V(n) => Ok(n),
        ElementFormat::Tlv | ElementFormat::Lv => {
            let rest = data.get(header..).unwrap_or(&[]);
            read_length(rest, framing.coding, name).map(|(len, octets)| {
                header += octets;
                len
            })
        }
        ElementFormat::Counted(record) => match data.get(header) {
            Some(&count) => {
                header += 1;
                Ok(count as usize * record)
            }
            None => Err(DecodeError::too_short(name, header + 1, data.len())),
        },
        ElementFormat::Rest => Ok(data.len().saturating_sub(header)),
    };

    let declared = match declared {
        Ok(len) => len,
        Err(error) => {
            // Length indicator itself is cut off
            ctx.report(offset, Severity::Error, error);
            let mut element = Element::new(tag, name, offset, data.len(), &[]);
            element.status = ElementStatus::Truncated;
            return Framed {
                element,
                advance: data.len(),
                truncated: true,
            };
        }
    };

    let available = data.len().saturating_sub(header);
    if declared > available {
        ctx.report(
            offset,
            Severity::Error,
            DecodeError::LengthOverrun {
                element: name,
                declared,
                available,
            },
        );
        let value = &data[header.min(data.len())..];
        let mut element = Element::new(tag, name, offset, data.len(), value);
        element.status = ElementStatus::Truncated;
        return Framed {
            element,
            advance: data.len(),
            truncated: true,
        };
    }

    let value = &data[header..header + declared];
    let mut element = Element::new(tag, name, offset, header + declared, value);

    match (framing.decoder)(value, ctx, &mut element) {
        Ok(consumed) if consumed < declared => {
            let leftover = &value[consumed..];
            let leftover_offset = element.value_offset() + consumed;
            let mut extra =
                Element::new(None, EXTRANEOUS_DATA, leftover_offset, leftover.len(), leftover);
            extra.status = ElementStatus::Extraneous;
            element.children.push(extra);
            let severity = ctx.extraneous_severity();
            ctx.report(
                leftover_offset,
                severity,
                DecodeError::ExtraneousData {
                    element: name,
                    len: leftover.len(),
                },
            );
        }
        Ok(consumed) if consumed > declared => {
            ctx.report(
                offset,
                Severity::Error,
                DecodeError::OverConsumed {
                    element: name,
                    reported: consumed,
                    available: declared,
                },
            );
        }
        Ok(_) => {}
        Err(error) => {
            ctx.report(offset, Severity::Error, error.clone());
            element.status = ElementStatus::Malformed(error);
        }
    }

    Framed {
        element,
        advance: header + declared,
        truncated: false,
    }
}

/// Frame a tagged element that is not where a message descriptor expects it.
///
/// Tags known to `catalog` are decoded with their catalog framing and
/// reported as unexpected; unknown tags are framed as TLV and kept opaque.
pub fn decode_unlisted<'data>(
    catalog: &ElementTable,
    data: &'data [u8],
    offset: usize,
    ctx: &mut DecodeContext,
) -> Framed<'data> {
    let tag = data[0];
    match catalog.get(tag) {
        Some(spec) if spec.format.is_tagged() => {
            ctx.report(
                offset,
                Severity::Warning,
                DecodeError::UnexpectedElement {
                    element: spec.name,
                    tag,
                },
            );
            decode_element(Framing::of_spec(spec, catalog.length_coding()), data, offset, ctx)
        }
        _ => decode_unknown(catalog.length_coding(), data, offset, ctx),
    }
}

fn decode_unknown<'data>(
    coding: LengthCoding,
    data: &'data [u8],
    offset: usize,
    ctx: &mut DecodeContext,
) -> Framed<'data> {
    let mut framed = decode_element(Framing::unknown(coding), data, offset, ctx);
    if !framed.truncated {
        framed.element.status = ElementStatus::NotDecoded;
        ctx.report(
            offset,
            Severity::Note,
            DecodeError::UnknownTag {
                tag: data[0],
                len: framed.element.value.len(),
            },
        );
    }
    framed
}

/// Walk a buffer of nested field elements.
///
/// Every element is `tag, length, value` unless the table's entry for the
/// tag says otherwise. Unknown tags are kept opaque and skipped by their
/// declared length. `base_offset` is the position of `data[0]` relative to
/// the start of the message.
///
/// Container decoders call this on their own value; the depth counter in
/// `ctx` bounds the recursion.
pub fn decode_elements<'data>(
    table: &ElementTable,
    element: &'static str,
    data: &'data [u8],
    base_offset: usize,
    ctx: &mut DecodeContext,
) -> Result<Vec<Element<'data>>, DecodeError> {
    if data.is_empty() {
        return Ok(Vec::new());
    }

    ctx.descend(element)?;

    let coding = table.length_coding();
    let mut elements = Vec::new();
    let mut offset = 0;

    while offset < data.len() {
        let rest = &data[offset..];
        let framed = match table.get(rest[0]) {
            Some(spec) if spec.format.is_tagged() => {
                decode_element(Framing::of_spec(spec, coding), rest, base_offset + offset, ctx)
            }
            _ => decode_unknown(coding, rest, base_offset + offset, ctx),
        };

        elements.push(framed.element);
        if framed.truncated || framed.advance == 0 {
            break;
        }
        offset += framed.advance;
    }

    ctx.ascend();
    Ok(elements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::ElementWriter;
    use crate::protocol::FieldValue;

    fn first_byte<'data>(
        value: &'data [u8],
        _ctx: &mut DecodeContext,
        out: &mut Element<'data>,
    ) -> Result<usize, DecodeError> {
        let b = *value.first().ok_or(DecodeError::too_short("Byte", 1, 0))?;
        out.push("value", FieldValue::UInt8(b));
        Ok(1)
    }

    fn nested<'data>(
        value: &'data [u8],
        ctx: &mut DecodeContext,
        out: &mut Element<'data>,
    ) -> Result<usize, DecodeError> {
        out.children = decode_elements(&NESTED, "Container", value, out.value_offset(), ctx)?;
        Ok(value.len())
    }

    const BYTE: ElementSpec = ElementSpec::new(0x01, "Byte", ElementFormat::Tlv, first_byte);
    const FLAG: ElementSpec = ElementSpec::new(0x02, "Flag", ElementFormat::T, opaque);
    const CONTAINER: ElementSpec = ElementSpec::new(0x0b, "Container", ElementFormat::Tlv, nested);
    const NESTED_SPECS: &[ElementSpec] = &[BYTE, FLAG, CONTAINER];

    static NESTED: ElementTable = ElementTable::new("nested", LengthCoding::Single, NESTED_SPECS);

    fn framing(format: ElementFormat, coding: LengthCoding) -> Framing {
        Framing {
            name: "Test",
            format,
            decoder: first_byte,
            coding,
        }
    }

    #[test]
    fn test_tlv_exact_consume() {
        let data = [0x01, 0x01, 0x42, 0xff];
        let mut ctx = DecodeContext::default();
        let tlv = framing(ElementFormat::Tlv, LengthCoding::Single);
        let framed = decode_element(tlv, &data, 3, &mut ctx);

        assert_eq!(framed.advance, 3);
        assert!(!framed.truncated);
        assert_eq!(framed.element.tag, Some(0x01));
        assert_eq!(framed.element.offset, 3);
        assert_eq!(framed.element.value, &[0x42]);
        assert_eq!(framed.element.get("value"), Some(&FieldValue::UInt8(0x42)));
        assert!(ctx.diagnostics().is_empty());
    }

    #[test]
    fn test_decoder_under_read_reports_extraneous() {
        // Length 3, decoder claims 1
        let data = [0x01, 0x03, 0x42, 0xaa, 0xbb];
        let mut ctx = DecodeContext::default();
        let tlv = framing(ElementFormat::Tlv, LengthCoding::Single);
        let framed = decode_element(tlv, &data, 0, &mut ctx);

        // Advance follows the declared length, not the decoder
        assert_eq!(framed.advance, 5);
        let extra = &framed.element.children[0];
        assert_eq!(extra.name, EXTRANEOUS_DATA);
        assert_eq!(extra.offset, 3);
        assert_eq!(extra.value, &[0xaa, 0xbb]);
        assert_eq!(ctx.diagnostics()[0].severity, Severity::Warning);
        assert_eq!(
            ctx.diagnostics()[0].error,
            DecodeError::ExtraneousData {
                element: "Test",
                len: 2
            }
        );
    }

    #[test]
    fn test_length_overrun_truncates() {
        let data = [0x01, 0x09, 0x42];
        let mut ctx = DecodeContext::default();
        let tlv = framing(ElementFormat::Tlv, LengthCoding::Single);
        let framed = decode_element(tlv, &data, 0, &mut ctx);

        assert!(framed.truncated);
        assert_eq!(framed.advance, 3);
        assert_eq!(framed.element.status, ElementStatus::Truncated);
        assert_eq!(framed.element.value, &[0x42]);
        assert!(ctx.has_errors());
        assert!(matches!(
            ctx.diagnostics()[0].error,
            DecodeError::LengthOverrun {
                declared: 9,
                available: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_missing_length_octet() {
        let data = [0x01];
        let mut ctx = DecodeContext::default();
        let tlv = framing(ElementFormat::Tlv, LengthCoding::Double);
        let framed = decode_element(tlv, &data, 0, &mut ctx);
        assert!(framed.truncated);
        assert_eq!(framed.advance, 1);
        assert!(ctx.has_errors());
    }

    #[test]
    fn test_decoder_error_marks_malformed() {
        // Zero-length value: first_byte rejects it
        let data = [0x01, 0x00, 0x02];
        let mut ctx = DecodeContext::default();
        let tlv = framing(ElementFormat::Tlv, LengthCoding::Single);
        let framed = decode_element(tlv, &data, 0, &mut ctx);

        assert_eq!(framed.advance, 2);
        assert!(matches!(framed.element.status, ElementStatus::Malformed(_)));
        assert!(ctx.has_errors());
    }

    #[test]
    fn test_counted_records() {
        let data = [0x02, 0x10, 0x11, 0x20, 0x21, 0x99];
        let mut ctx = DecodeContext::default();
        let mut f = framing(ElementFormat::Counted(2), LengthCoding::Single);
        f.decoder = opaque;
        let framed = decode_element(f, &data, 0, &mut ctx);

        assert_eq!(framed.advance, 5);
        assert_eq!(framed.element.value, &[0x10, 0x11, 0x20, 0x21]);
        assert_eq!(framed.element.value_offset(), 1);
    }

    #[test]
    fn test_extensible_length_element() {
        let value = vec![0x55; 130];
        let data = ElementWriter::new(LengthCoding::Extensible)
            .tlv(0x01, &value)
            .unwrap()
            .finish();
        let mut ctx = DecodeContext::default();
        let mut f = framing(ElementFormat::Tlv, LengthCoding::Extensible);
        f.decoder = opaque;
        let framed = decode_element(f, &data, 0, &mut ctx);

        assert_eq!(framed.advance, 133);
        assert_eq!(framed.element.value.len(), 130);
        assert_eq!(framed.element.value_offset(), 3);
    }

    #[test]
    fn test_walk_nested_elements() {
        let inner = ElementWriter::new(LengthCoding::Single)
            .tlv(0x01, &[0x07])
            .unwrap()
            .finish();
        let data = ElementWriter::new(LengthCoding::Single)
            .t(0x02)
            .tlv(0x0b, &inner)
            .unwrap()
            .tlv(0x01, &[0x09])
            .unwrap()
            .finish();

        let mut ctx = DecodeContext::default();
        let elements = decode_elements(&NESTED, "Root", &data, 10, &mut ctx).unwrap();

        assert_eq!(elements.len(), 3);
        assert_eq!(elements[0].name, "Flag");
        assert_eq!(elements[1].name, "Container");
        assert_eq!(elements[1].children.len(), 1);
        // Nested offsets stay relative to the message
        assert_eq!(elements[1].children[0].offset, 13);
        assert_eq!(elements[1].children[0].get("value"), Some(&FieldValue::UInt8(7)));
        assert_eq!(elements[2].get("value"), Some(&FieldValue::UInt8(9)));
        assert_eq!(ctx.depth(), 0);
        assert!(ctx.diagnostics().is_empty());
    }

    #[test]
    fn test_zero_length_container() {
        let data = [0x0b, 0x00];
        let mut ctx = DecodeContext::default();
        let elements = decode_elements(&NESTED, "Root", &data, 0, &mut ctx).unwrap();

        assert_eq!(elements.len(), 1);
        assert!(elements[0].children.is_empty());
        assert!(elements[0].is_clean());
        assert_eq!(ctx.depth(), 0);
    }

    #[test]
    fn test_unknown_tag_skipped_by_declared_length() {
        let data = [0x77, 0x02, 0xde, 0xad, 0x01, 0x01, 0x05];
        let mut ctx = DecodeContext::default();
        let elements = decode_elements(&NESTED, "Root", &data, 0, &mut ctx).unwrap();

        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].name, UNKNOWN_ELEMENT);
        assert_eq!(elements[0].status, ElementStatus::NotDecoded);
        assert_eq!(elements[0].length, 4);
        assert_eq!(elements[1].offset, 4);
        assert_eq!(elements[1].get("value"), Some(&FieldValue::UInt8(5)));
        assert_eq!(ctx.diagnostics()[0].severity, Severity::Note);
    }

    #[test]
    fn test_depth_limit_stops_recursion() {
        // Three containers deep, limit 2
        let level3 = ElementWriter::new(LengthCoding::Single).tlv(0x0b, &[]).unwrap().finish();
        let level2 = ElementWriter::new(LengthCoding::Single).tlv(0x0b, &level3).unwrap().finish();
        let level1 = ElementWriter::new(LengthCoding::Single).tlv(0x0b, &level2).unwrap().finish();

        let mut ctx = DecodeContext::new(crate::engine::DecoderConfig {
            max_depth: 2,
            ..Default::default()
        });
        let elements = decode_elements(&NESTED, "Root", &level1, 0, &mut ctx).unwrap();

        let second = &elements[0].children[0];
        assert!(matches!(
            second.status,
            ElementStatus::Malformed(DecodeError::DepthExceeded { limit: 2, .. })
        ));
        assert_eq!(ctx.depth(), 0);
    }
}
