//! celldissect - Decode cellular signalling PDUs from the command line.
//!
//! This crate is the front end of [`celldissect_core`]: it reads hex-encoded
//! PDUs, runs them through the layered dissector and prints the element
//! tree.
//!
//! # Example
//!
//! ```
//! use celldissect::cli::{parse_hex_line, OutputFormat, OutputFormatter, Pdu};
//! use celldissect_core::prelude::*;
//!
//! let bytes = parse_hex_line("00 04 22 04 01 20").unwrap().unwrap();
//! let pdu = Pdu { source: "example".to_string(), bytes };
//!
//! let registry = default_registry();
//! let layers = dissect(&registry, Encapsulation::Bssap, &pdu.bytes, DecoderConfig::default());
//!
//! let mut out = Vec::new();
//! OutputFormatter::new(OutputFormat::Tree).write(&pdu, &layers, &mut out).unwrap();
//! ```

pub mod cli;
