//! Command-line interface module.
//!
//! This module handles:
//! - Argument parsing via clap
//! - Reading hex PDUs from arguments, files or stdin
//! - Output formatting (tree, flat, JSON)

mod args;
mod input;
mod output;

pub use args::{Args, ProtocolArg};
pub use input::{from_args, parse_hex_line, read_file, read_pdus, Pdu};
pub use output::{pdu_json, value_json, OutputFormat, OutputFormatter};
