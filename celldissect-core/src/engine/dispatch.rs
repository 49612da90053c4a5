//! Message-type dispatch and the descriptor-driven element walk.

use super::element::{decode_element, decode_unlisted, Framing};
use super::{DecodeContext, Diagnostic, Severity};
use crate::error::DecodeError;
use crate::protocol::{find_element, Element, ElementStatus};
use crate::schema::{MessageDescriptor, MessageTable};

/// Outcome of decoding one message.
#[derive(Debug, Clone)]
pub struct MessageResult<'data> {
    /// Message type octet, None for an empty PDU
    pub message_type: Option<u8>,
    /// Message name, None when the type is unknown
    pub name: Option<&'static str>,
    pub elements: Vec<Element<'data>>,
    /// Bytes accounted for, message type octet included
    pub consumed: usize,
    pub diagnostics: Vec<Diagnostic>,
    /// Walk stopped before the end of the PDU
    pub aborted: bool,
}

impl<'data> MessageResult<'data> {
    fn empty() -> Self {
        Self {
            message_type: None,
            name: None,
            elements: Vec::new(),
            consumed: 0,
            diagnostics: Vec::new(),
            aborted: false,
        }
    }

    /// Depth-first search for an element by name.
    pub fn find(&self, name: &str) -> Option<&Element<'data>> {
        find_element(&self.elements, name)
    }

    /// Check if any error-level diagnostic was recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity == Severity::Error)
    }

    /// Message decoded without any diagnostic above note level.
    pub fn is_clean(&self) -> bool {
        !self.aborted && self.diagnostics.iter().all(|d| d.severity == Severity::Note)
    }
}

/// Decode one message of the protocol described by `table`.
///
/// The first octet selects the message descriptor. The remaining octets are
/// matched against the descriptor's fields in order:
///
/// - A tagged field whose tag is present is decoded.
/// - A tag belonging to a later field means the current field is absent;
///   that aborts the message if the field is mandatory.
/// - A tag matching no remaining field is decoded on its own (catalog
///   framing if the protocol knows the tag, opaque TLV otherwise) and the
///   same field is tried again.
/// - Untagged fields are decoded in place.
///
/// Bytes left after the last field are walked the same way. The walk never
/// panics and never reads past `data`; problems end up in the diagnostics.
pub fn decode_message<'data>(
    table: &MessageTable,
    data: &'data [u8],
    ctx: &mut DecodeContext,
) -> MessageResult<'data> {
    let mut result = MessageResult::empty();

    let Some(&message_type) = data.first() else {
        ctx.report(0, Severity::Error, DecodeError::too_short(table.protocol(), 1, 0));
        result.aborted = true;
        result.diagnostics = ctx.take_diagnostics();
        return result;
    };

    ctx.message_type = Some(message_type);
    result.message_type = Some(message_type);

    let _span =
        tracing::trace_span!("decode_message", protocol = table.protocol(), message_type).entered();

    let mut offset = 1;
    match table.get(message_type) {
        Some(descriptor) => {
            result.name = Some(descriptor.name);
            offset = walk_fields(table, descriptor, data, offset, ctx, &mut result);
        }
        None => {
            ctx.report(
                0,
                Severity::Error,
                DecodeError::UnknownMessageType {
                    protocol: table.protocol(),
                    message_type,
                },
            );
            if ctx.config.stop_on_unknown_message {
                if data.len() > offset {
                    let body_len = data.len() - offset;
                    let mut body =
                        Element::new(None, "Message Body", offset, body_len, &data[offset..]);
                    body.status = ElementStatus::NotDecoded;
                    result.elements.push(body);
                }
                offset = data.len();
            }
        }
    }

    if !result.aborted {
        offset = walk_unlisted(table, data, offset, ctx, &mut result);
    }

    tracing::trace!(
        consumed = offset,
        elements = result.elements.len(),
        aborted = result.aborted,
        "message decoded"
    );

    result.consumed = offset;
    result.diagnostics = ctx.take_diagnostics();
    result
}

/// Walk the descriptor's fields. Returns the offset reached.
fn walk_fields<'data>(
    table: &MessageTable,
    descriptor: &MessageDescriptor,
    data: &'data [u8],
    mut offset: usize,
    ctx: &mut DecodeContext,
    result: &mut MessageResult<'data>,
) -> usize {
    let coding = table.length_coding();
    let mut index = 0;

    while index < descriptor.fields.len() {
        let field = &descriptor.fields[index];

        if offset >= data.len() {
            if field.is_mandatory() {
                missing_mandatory(field.name, field.tag, offset, ctx, result);
                break;
            }
            index += 1;
            continue;
        }

        let framed = match field.tag {
            None => {
                index += 1;
                decode_element(Framing::of_field(field, coding), &data[offset..], offset, ctx)
            }
            Some(expected) if data[offset] == expected => {
                index += 1;
                decode_element(Framing::of_field(field, coding), &data[offset..], offset, ctx)
            }
            Some(_) if descriptor.position_of(data[offset], index + 1).is_some() => {
                // Current field absent, a later one is next
                if field.is_mandatory() {
                    missing_mandatory(field.name, field.tag, offset, ctx, result);
                    break;
                }
                index += 1;
                continue;
            }
            Some(_) => decode_unlisted(table.catalog(), &data[offset..], offset, ctx),
        };

        result.elements.push(framed.element);
        offset += framed.advance;
        if framed.truncated {
            result.aborted = true;
            break;
        }
    }

    offset
}

/// Walk whatever follows the last field. Returns the offset reached.
fn walk_unlisted<'data>(
    table: &MessageTable,
    data: &'data [u8],
    mut offset: usize,
    ctx: &mut DecodeContext,
    result: &mut MessageResult<'data>,
) -> usize {
    while offset < data.len() {
        let framed = decode_unlisted(table.catalog(), &data[offset..], offset, ctx);
        result.elements.push(framed.element);
        offset += framed.advance;
        if framed.truncated {
            result.aborted = true;
            break;
        }
    }
    offset
}

fn missing_mandatory(
    element: &'static str,
    tag: Option<u8>,
    offset: usize,
    ctx: &mut DecodeContext,
    result: &mut MessageResult<'_>,
) {
    ctx.report(offset, Severity::Error, DecodeError::MissingMandatory { element, tag });
    result.aborted = true;
}
