//! Length indicator coding.
//!
//! ```text
//! Single:      +--------+
//!              | length |                     0..=255
//!              +--------+
//! Double:      +--------+--------+
//!              |   length (BE)   |            0..=65535
//!              +--------+--------+
//! Extensible:  +-+-------+
//!              |0| len7  |                    0..=127
//!              +-+-------+--------+
//!              |1| high7 |  low8  |           0..=32767
//!              +-+-------+--------+
//! ```

use crate::error::DecodeError;

/// Largest length an extensible indicator can carry in one octet.
pub const EXTENSIBLE_SHORT_MAX: usize = 0x7f;

/// Largest length an extensible indicator can carry at all.
pub const EXTENSIBLE_LONG_MAX: usize = 0x7fff;

/// How a length indicator is coded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthCoding {
    /// One octet
    #[default]
    Single,
    /// Two octets, big-endian
    Double,
    /// One octet; high bit set means a 15-bit length over two octets
    Extensible,
}

impl LengthCoding {
    /// Largest length this coding can express.
    pub const fn max_length(&self) -> usize {
        match self {
            LengthCoding::Single => u8::MAX as usize,
            LengthCoding::Double => u16::MAX as usize,
            LengthCoding::Extensible => EXTENSIBLE_LONG_MAX,
        }
    }

    /// Number of octets needed to encode `len`.
    pub const fn encoded_size(&self, len: usize) -> usize {
        match self {
            LengthCoding::Single => 1,
            LengthCoding::Double => 2,
            LengthCoding::Extensible => {
                if len > EXTENSIBLE_SHORT_MAX {
                    2
                } else {
                    1
                }
            }
        }
    }
}

/// Read a length indicator at the start of `data`.
///
/// Returns `(length, octets_used)`.
pub fn read_length(
    data: &[u8],
    coding: LengthCoding,
    element: &'static str,
) -> Result<(usize, usize), DecodeError> {
    match coding {
        LengthCoding::Single => match data.first() {
            Some(&b) => Ok((b as usize, 1)),
            None => Err(DecodeError::too_short(element, 1, 0)),
        },
        LengthCoding::Double => {
            if data.len() < 2 {
                return Err(DecodeError::too_short(element, 2, data.len()));
            }
            Ok((u16::from_be_bytes([data[0], data[1]]) as usize, 2))
        }
        LengthCoding::Extensible => {
            let first = *data
                .first()
                .ok_or_else(|| DecodeError::too_short(element, 1, 0))?;
            if first & 0x80 == 0 {
                return Ok((first as usize, 1));
            }
            let second = *data
                .get(1)
                .ok_or_else(|| DecodeError::too_short(element, 2, 1))?;
            Ok(((((first & 0x7f) as usize) << 8) | second as usize, 2))
        }
    }
}

/// Append a length indicator for `len` to `out`.
pub fn write_length(
    out: &mut Vec<u8>,
    len: usize,
    coding: LengthCoding,
) -> Result<(), DecodeError> {
    let max = coding.max_length();
    if len > max {
        return Err(DecodeError::ValueTooLong { len, max });
    }
    match coding {
        LengthCoding::Single => out.push(len as u8),
        LengthCoding::Double => out.extend_from_slice(&(len as u16).to_be_bytes()),
        LengthCoding::Extensible => {
            if len > EXTENSIBLE_SHORT_MAX {
                out.push(0x80 | (len >> 8) as u8);
                out.push((len & 0xff) as u8);
            } else {
                out.push(len as u8);
            }
        }
    }
    Ok(())
}
