//! PDU builder.
//!
//! The dissectors never encode anything themselves. Unit and integration
//! tests build their PDUs with this writer, and it is the oracle for decode
//! round trips.

use super::{write_length, LengthCoding};
use crate::error::DecodeError;

/// Builds a PDU element by element.
#[derive(Debug, Clone, Default)]
pub struct ElementWriter {
    buf: Vec<u8>,
    coding: LengthCoding,
}

impl ElementWriter {
    /// Create a writer using `coding` for TLV/LV length indicators.
    pub fn new(coding: LengthCoding) -> Self {
        Self {
            buf: Vec::new(),
            coding,
        }
    }

    /// Message type octet.
    pub fn message_type(mut self, message_type: u8) -> Self {
        self.buf.push(message_type);
        self
    }

    /// Tag-only element.
    pub fn t(mut self, tag: u8) -> Self {
        self.buf.push(tag);
        self
    }

    /// Tag + fixed value.
    pub fn tv(mut self, tag: u8, value: &[u8]) -> Self {
        self.buf.push(tag);
        self.buf.extend_from_slice(value);
        self
    }

    /// Tag + length + value.
    pub fn tlv(mut self, tag: u8, value: &[u8]) -> Result<Self, DecodeError> {
        self.buf.push(tag);
        write_length(&mut self.buf, value.len(), self.coding)?;
        self.buf.extend_from_slice(value);
        Ok(self)
    }

    /// Fixed-position value.
    pub fn v(mut self, value: &[u8]) -> Self {
        self.buf.extend_from_slice(value);
        self
    }

    /// Length + value.
    pub fn lv(mut self, value: &[u8]) -> Result<Self, DecodeError> {
        write_length(&mut self.buf, value.len(), self.coding)?;
        self.buf.extend_from_slice(value);
        Ok(self)
    }

    /// One-byte count followed by the records.
    pub fn counted(mut self, records: &[&[u8]]) -> Result<Self, DecodeError> {
        if records.len() > u8::MAX as usize {
            return Err(DecodeError::ValueTooLong {
                len: records.len(),
                max: u8::MAX as usize,
            });
        }
        self.buf.push(records.len() as u8);
        for record in records {
            self.buf.extend_from_slice(record);
        }
        Ok(self)
    }

    /// Raw bytes, no framing (for malformed test input).
    pub fn raw(self, bytes: &[u8]) -> Self {
        self.v(bytes)
    }

    /// Bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Check if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Finish and return the PDU.
    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}
