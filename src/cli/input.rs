//! Hex PDU input.
//!
//! PDUs come from the command line or from a file with one PDU per line.
//! Bytes may be separated by whitespace or ':' and the whole line may carry
//! a `0x` prefix; everything after `#` is a comment.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

/// One PDU to decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pdu {
    /// Where the PDU came from ("arg 1", "capture.hex:12")
    pub source: String,
    pub bytes: Vec<u8>,
}

/// Decode one line of hex. Returns None for blank and comment-only lines.
pub fn parse_hex_line(line: &str) -> Result<Option<Vec<u8>>> {
    let line = line.split('#').next().unwrap_or_default();
    let digits: String = line
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .unwrap_or(&digits);

    if digits.is_empty() {
        return Ok(None);
    }
    let bytes = hex::decode(digits).with_context(|| format!("invalid hex: {digits}"))?;
    Ok(Some(bytes))
}

/// Read PDUs from a reader, one per line.
pub fn read_pdus<R: BufRead>(reader: R, name: &str) -> Result<Vec<Pdu>> {
    let mut pdus = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read {name}"))?;
        let source = format!("{name}:{}", index + 1);
        if let Some(bytes) = parse_hex_line(&line).with_context(|| source.clone())? {
            pdus.push(Pdu { source, bytes });
        }
    }
    Ok(pdus)
}

/// Read PDUs from a file, or from stdin for `-`.
pub fn read_file(path: &Path) -> Result<Vec<Pdu>> {
    if path == Path::new("-") {
        return read_pdus(io::stdin().lock(), "stdin");
    }
    let file = File::open(path)
        .with_context(|| format!("Failed to open PDU file: {}", path.display()))?;
    read_pdus(BufReader::new(file), &path.display().to_string())
}

/// PDUs given as positional arguments.
pub fn from_args(args: &[String]) -> Result<Vec<Pdu>> {
    let mut pdus = Vec::with_capacity(args.len());
    for (index, arg) in args.iter().enumerate() {
        let source = format!("arg {}", index + 1);
        if let Some(bytes) = parse_hex_line(arg).with_context(|| source.clone())? {
            pdus.push(Pdu { source, bytes });
        }
    }
    Ok(pdus)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_line_separators() {
        assert_eq!(parse_hex_line("00 04 22:04").unwrap(), Some(vec![0x00, 0x04, 0x22, 0x04]));
        assert_eq!(parse_hex_line("0x2204 0120").unwrap(), Some(vec![0x22, 0x04, 0x01, 0x20]));
    }

    #[test]
    fn test_parse_hex_line_comments_and_blanks() {
        assert_eq!(parse_hex_line("").unwrap(), None);
        assert_eq!(parse_hex_line("   # clear request").unwrap(), None);
        assert_eq!(parse_hex_line("2204 # trailing").unwrap(), Some(vec![0x22, 0x04]));
    }

    #[test]
    fn test_parse_hex_line_rejects_bad_input() {
        assert!(parse_hex_line("22g4").is_err());
        assert!(parse_hex_line("220").is_err());
    }

    #[test]
    fn test_read_pdus_numbers_lines() {
        let text = "# BSSMAP\n220401 20\n\n21\n";
        let pdus = read_pdus(text.as_bytes(), "test.hex").unwrap();

        assert_eq!(pdus.len(), 2);
        assert_eq!(pdus[0].source, "test.hex:2");
        assert_eq!(pdus[0].bytes, vec![0x22, 0x04, 0x01, 0x20]);
        assert_eq!(pdus[1].source, "test.hex:4");
    }

    #[test]
    fn test_read_pdus_reports_line() {
        let err = read_pdus("22\nzz\n".as_bytes(), "bad.hex").unwrap_err();
        assert!(format!("{err:#}").contains("bad.hex:2"));
    }

    #[test]
    fn test_from_args() {
        let pdus = from_args(&["2101".to_string(), " ".to_string()]).unwrap();
        assert_eq!(pdus.len(), 1);
        assert_eq!(pdus[0].source, "arg 1");
    }
}
