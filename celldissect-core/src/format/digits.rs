//! Digit string formatting for mobile identities and network codes.
//!
//! Provides functions to:
//! - Decode TBCD (telephony BCD) digit strings, low nibble first
//! - Format a 3-octet PLMN identity as `MCC-MNC`

use compact_str::CompactString;

/// TBCD filler nibble.
const FILLER: u8 = 0x0f;

fn push_digit(out: &mut CompactString, nibble: u8) -> bool {
    match nibble {
        0..=9 => {
            out.push((b'0' + nibble) as char);
            true
        }
        FILLER => false,
        // '*', '#', 'a', 'b', 'c'
        0x0a => {
            out.push('*');
            true
        }
        0x0b => {
            out.push('#');
            true
        }
        _ => {
            out.push((b'a' + nibble - 0x0c) as char);
            true
        }
    }
}

/// Decode a TBCD digit string.
///
/// Each octet carries two digits, low nibble first. A filler nibble (`0xf`)
/// ends the string. With `skip_first` set the very first nibble is not a
/// digit (used by mobile identities, where it carries the identity type).
///
/// # Example
///
/// ```
/// use celldissect_core::format::tbcd_digits;
///
/// assert_eq!(tbcd_digits(&[0x21, 0x43, 0xf5], false), "12345");
/// ```
pub fn tbcd_digits(bytes: &[u8], skip_first: bool) -> CompactString {
    let mut out = CompactString::default();
    for (i, b) in bytes.iter().enumerate() {
        if !(i == 0 && skip_first) && !push_digit(&mut out, b & 0x0f) {
            break;
        }
        if !push_digit(&mut out, b >> 4) {
            break;
        }
    }
    out
}

/// Format a 3-octet PLMN identity as `MCC-MNC`.
///
/// Returns `None` if the slice is not exactly 3 bytes.
///
/// # Example
///
/// ```
/// use celldissect_core::format::format_plmn;
///
/// // MCC 001, MNC 01
/// assert_eq!(format_plmn(&[0x00, 0xf1, 0x10]).as_deref(), Some("001-01"));
/// // MCC 310, MNC 410
/// assert_eq!(format_plmn(&[0x13, 0x00, 0x14]).as_deref(), Some("310-410"));
/// ```
pub fn format_plmn(bytes: &[u8]) -> Option<CompactString> {
    let [b0, b1, b2] = <[u8; 3]>::try_from(bytes).ok()?;

    let mut out = CompactString::default();
    push_digit(&mut out, b0 & 0x0f);
    push_digit(&mut out, b0 >> 4);
    push_digit(&mut out, b1 & 0x0f);
    out.push('-');
    push_digit(&mut out, b2 & 0x0f);
    push_digit(&mut out, b2 >> 4);
    // Third MNC digit is a filler for two-digit MNCs
    push_digit(&mut out, b1 >> 4);
    Some(out)
}
