//! Test utilities for protocol parsing.
//!
//! Provides builders for constructing test PDUs and helper functions
//! for validating parse results.

use super::bssap::discriminator;
use super::bssmap::{field_element, ie, message_type};
use super::wimax::ZONE_RECORD_SIZE;
use super::{FieldValue, ParseResult};
use crate::codec::{ElementWriter, LengthCoding};

/// Builder for constructing BSSMAP messages.
#[derive(Debug, Clone)]
pub struct BssmapBuilder {
    writer: ElementWriter,
}

impl BssmapBuilder {
    pub fn new(message_type: u8) -> Self {
        Self {
            writer: ElementWriter::new(LengthCoding::Extensible).message_type(message_type),
        }
    }

    pub fn tlv(mut self, tag: u8, value: &[u8]) -> Self {
        self.writer = self.writer.tlv(tag, value).expect("value fits the length coding");
        self
    }

    pub fn tv(mut self, tag: u8, value: &[u8]) -> Self {
        self.writer = self.writer.tv(tag, value);
        self
    }

    pub fn t(mut self, tag: u8) -> Self {
        self.writer = self.writer.t(tag);
        self
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.writer = self.writer.raw(bytes);
        self
    }

    /// Single-octet Cause element.
    pub fn cause(self, cause: u8) -> Self {
        self.tlv(ie::CAUSE, &[cause])
    }

    pub fn build(self) -> Vec<u8> {
        self.writer.finish()
    }

    /// Handover Required whose Old BSS to New BSS Information carries a
    /// Cell Load Information Group.
    ///
    /// The preferred cell list uses discriminator 1 (LAC + CI), so the group's
    /// cell identification is four octets: LAC 0x0001, CI 0x0203.
    pub fn handover_required_with_load_info() -> Vec<u8> {
        let downlink = [70, 10, 0x01, 0x02];
        let mut group = vec![0x00, 0x01, 0x02, 0x03];
        group.push(field_element::DOWNLINK_CELL_LOAD_INFORMATION);
        group.push(downlink.len() as u8);
        group.extend_from_slice(&downlink);

        let old_bss = ElementWriter::new(LengthCoding::Single)
            .tlv(field_element::CELL_LOAD_INFORMATION_GROUP, &group)
            .expect("group fits a one-octet length")
            .finish();

        Self::new(message_type::HANDOVER_REQUIRED)
            .cause(0x0c)
            .tlv(
                ie::CELL_IDENTIFIER_LIST,
                &[0x01, 0x00, 0x01, 0x01, 0x01, 0x00, 0x02, 0x01, 0x02],
            )
            .tlv(ie::OLD_BSS_TO_NEW_BSS_INFORMATION, &old_bss)
            .build()
    }
}

/// Builder for constructing BSSAP frames around a payload.
#[derive(Debug, Clone)]
pub struct BssapBuilder {
    discriminator: u8,
    dlci: Option<u8>,
    payload: Vec<u8>,
    length: Option<u8>,
}

impl BssapBuilder {
    pub fn bssmap(payload: Vec<u8>) -> Self {
        Self {
            discriminator: discriminator::BSSMAP,
            dlci: None,
            payload,
            length: None,
        }
    }

    pub fn dtap(dlci: u8, payload: Vec<u8>) -> Self {
        Self {
            discriminator: discriminator::DTAP,
            dlci: Some(dlci),
            payload,
            length: None,
        }
    }

    /// Override the length octet (for overrun tests).
    pub fn length(mut self, length: u8) -> Self {
        self.length = Some(length);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut frame = Vec::with_capacity(3 + self.payload.len());
        frame.push(self.discriminator);
        if let Some(dlci) = self.dlci {
            frame.push(dlci);
        }
        frame.push(self.length.unwrap_or(self.payload.len() as u8));
        frame.extend_from_slice(&self.payload);
        frame
    }
}

/// Builder for constructing WiMAX MAC-PHY primitives.
#[derive(Debug, Clone)]
pub struct WimaxBuilder {
    writer: ElementWriter,
}

impl WimaxBuilder {
    pub fn new(primitive: u8) -> Self {
        Self {
            writer: ElementWriter::new(LengthCoding::Double).message_type(primitive),
        }
    }

    pub fn frame_number(mut self, frame: u32) -> Self {
        self.writer = self.writer.v(&frame.to_be_bytes());
        self
    }

    /// One-octet field (subframe type, status).
    pub fn byte(mut self, value: u8) -> Self {
        self.writer = self.writer.v(&[value]);
        self
    }

    pub fn zones(mut self, zones: &[[u8; ZONE_RECORD_SIZE]]) -> Self {
        let records: Vec<&[u8]> = zones.iter().map(|z| z.as_slice()).collect();
        self.writer = self.writer.counted(&records).expect("at most 255 zones");
        self
    }

    pub fn burst(
        mut self,
        burst_id: u16,
        modulation: u8,
        repetition: u8,
        subchannels: u8,
        symbols: u8,
    ) -> Self {
        self.writer = self
            .writer
            .v(&burst_id.to_be_bytes())
            .v(&[modulation, repetition, subchannels, symbols]);
        self
    }

    /// Length-prefixed SDU.
    pub fn sdu(mut self, payload: &[u8]) -> Self {
        self.writer = self.writer.lv(payload).expect("SDU fits a two-octet length");
        self
    }

    pub fn measurement(mut self, tag: u8, value: &[u8]) -> Self {
        self.writer = self.writer.tlv(tag, value).expect("value fits a two-octet length");
        self
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.writer = self.writer.raw(bytes);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.writer.finish()
    }
}

/// Helper to assert a field value in a parse result.
pub fn assert_field_eq(result: &ParseResult, field: &str, expected: FieldValue) {
    let actual = result
        .get(field)
        .unwrap_or_else(|| panic!("Field '{}' not found in result", field));
    assert_eq!(
        actual, &expected,
        "Field '{}' mismatch: expected {:?}, got {:?}",
        field, expected, actual
    );
}

/// Helper to assert parsing succeeded.
pub fn assert_parse_ok(result: &ParseResult) {
    assert!(
        result.is_ok(),
        "Parse failed: {:?} {:?}",
        result.error,
        result.diagnostics
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bssmap_builder() {
        let pdu = BssmapBuilder::new(message_type::CLEAR_REQUEST).cause(0x20).build();
        assert_eq!(pdu, vec![0x22, 0x04, 0x01, 0x20]);
    }

    #[test]
    fn test_bssap_builder() {
        let frame = BssapBuilder::dtap(0x80, vec![0x05, 0x08]).build();
        assert_eq!(frame, vec![0x01, 0x80, 0x02, 0x05, 0x08]);

        let frame = BssapBuilder::bssmap(vec![0x21]).length(9).build();
        assert_eq!(frame, vec![0x00, 0x09, 0x21]);
    }

    #[test]
    fn test_wimax_builder() {
        let pdu = WimaxBuilder::new(0x0a)
            .frame_number(1)
            .burst(0x0102, 3, 0, 4, 2)
            .sdu(&[0xaa])
            .build();
        assert_eq!(
            pdu,
            vec![0x0a, 0, 0, 0, 1, 0x01, 0x02, 3, 0, 4, 2, 0x00, 0x01, 0xaa]
        );
    }

    #[test]
    fn test_handover_required_layout() {
        let pdu = BssmapBuilder::handover_required_with_load_info();
        assert_eq!(pdu[0], message_type::HANDOVER_REQUIRED);
        assert_eq!(&pdu[1..4], &[ie::CAUSE, 0x01, 0x0c]);
        assert_eq!(pdu[4], ie::CELL_IDENTIFIER_LIST);
        assert_eq!(pdu[15], ie::OLD_BSS_TO_NEW_BSS_INFORMATION);
        assert_eq!(pdu.len(), 17 + pdu[16] as usize);
    }
}
