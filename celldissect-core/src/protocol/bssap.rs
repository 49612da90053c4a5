//! BSSAP (BSS Application Part) framing parser.
//!
//! BSSAP splits A-interface traffic into BSSMAP (management) and DTAP
//! (direct transfer to the mobile) with a one-octet discriminator in front
//! of each message.
//!
//! 3GPP TS 48.006: Signalling transport mechanism specification for the
//! Base Station System - Mobile-services Switching Centre (BSS - MSC) interface

use smallvec::SmallVec;

use super::{Encapsulation, FieldValue, ParseContext, ParseResult, Protocol};
use crate::engine::{Diagnostic, Severity};
use crate::error::DecodeError;

/// BSSAP discriminator values.
pub mod discriminator {
    pub const BSSMAP: u8 = 0x00;
    pub const DTAP: u8 = 0x01;
}

/// Hint carrying the discriminator to the child parser.
pub const DISCRIMINATOR_HINT: &str = "bssap_discriminator";

/// BSSAP protocol parser.
#[derive(Debug, Clone, Copy)]
pub struct BssapProtocol;

impl Protocol for BssapProtocol {
    fn name(&self) -> &'static str {
        "bssap"
    }

    fn display_name(&self) -> &'static str {
        "BSSAP"
    }

    fn can_parse(&self, context: &ParseContext) -> Option<u32> {
        if context.is_entry(Encapsulation::Bssap) {
            Some(100)
        } else {
            None
        }
    }

    fn parse<'a>(&self, data: &'a [u8], _context: &ParseContext) -> ParseResult<'a> {
        let Some(&disc) = data.first() else {
            return ParseResult::error(DecodeError::too_short("BSSAP", 2, 0), data);
        };

        let mut fields = SmallVec::new();
        // Header: discriminator [DLCI] length
        let header_len = match disc {
            discriminator::BSSMAP => {
                fields.push(("discriminator", FieldValue::Labeled(disc as u64, "BSSMAP")));
                2
            }
            discriminator::DTAP => {
                fields.push(("discriminator", FieldValue::Labeled(disc as u64, "DTAP")));
                3
            }
            _ => {
                return ParseResult::error(
                    DecodeError::invalid(
                        "BSSAP",
                        "discriminator",
                        format!("unknown value {disc:#04x}"),
                    ),
                    data,
                );
            }
        };

        if data.len() < header_len {
            return ParseResult::partial(
                fields,
                data,
                DecodeError::too_short("BSSAP", header_len, data.len()),
            );
        }

        if disc == discriminator::DTAP {
            let dlci = data[1];
            fields.push(("dlci_control_channel", FieldValue::UInt8(dlci >> 6)));
            fields.push(("dlci_sapi", FieldValue::UInt8(dlci & 0x07)));
        }

        let length = data[header_len - 1] as usize;
        fields.push(("length", FieldValue::UInt8(length as u8)));

        let available = data.len() - header_len;
        if length > available {
            fields.push(("payload", FieldValue::Bytes(&data[header_len..])));
            return ParseResult::partial(
                fields,
                &[],
                DecodeError::LengthOverrun {
                    element: "BSSAP",
                    declared: length,
                    available,
                },
            );
        }

        let payload = &data[header_len..header_len + length];
        let trailing = available - length;

        let mut result = if disc == discriminator::DTAP {
            // Not decoded further
            fields.push(("dtap_pdu", FieldValue::Bytes(payload)));
            let mut hints = SmallVec::new();
            hints.push((DISCRIMINATOR_HINT, disc as u64));
            ParseResult::success(fields, &[], hints)
        } else {
            let mut hints = SmallVec::new();
            hints.push((DISCRIMINATOR_HINT, disc as u64));
            ParseResult::success(fields, payload, hints)
        };

        if trailing > 0 {
            tracing::debug!(trailing, "BSSAP: bytes after the declared length");
            result.diagnostics.push(Diagnostic {
                offset: header_len + length,
                severity: Severity::Warning,
                error: DecodeError::ExtraneousData {
                    element: "BSSAP",
                    len: trailing,
                },
            });
        }

        result
    }

    fn child_protocols(&self) -> &[&'static str] {
        &["bssmap"]
    }
}
