//! Command-line argument definitions.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use celldissect_core::engine::{DecoderConfig, DEFAULT_MAX_DEPTH};
use celldissect_core::protocol::Encapsulation;

use super::OutputFormat;

/// Entry protocol of the input PDUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProtocolArg {
    /// BSSAP frames (discriminator + length, BSSMAP inside)
    Bssap,
    /// Bare BSSMAP messages
    Bssmap,
    /// WiMAX MAC-PHY PHY SAP primitives
    WimaxMacphy,
}

impl ProtocolArg {
    pub fn encapsulation(self) -> Encapsulation {
        match self {
            ProtocolArg::Bssap => Encapsulation::Bssap,
            ProtocolArg::Bssmap => Encapsulation::Bssmap,
            ProtocolArg::WimaxMacphy => Encapsulation::WimaxMacPhy,
        }
    }
}

/// Decode cellular signalling PDUs given as hex strings.
#[derive(Parser, Debug)]
#[command(name = "celldissect")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// PDUs as hex strings (whitespace and ':' separators allowed)
    #[arg(value_name = "HEX")]
    pub pdus: Vec<String>,

    /// Read PDUs from a file, one per line ('-' for stdin, '#' starts a comment)
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Protocol of the outermost layer
    #[arg(short = 'p', long = "protocol", value_enum, default_value = "bssap")]
    pub protocol: ProtocolArg,

    /// Output format for stdout
    #[arg(long = "format", value_enum, default_value = "tree")]
    pub format: OutputFormat,

    /// Nesting limit for container elements
    #[arg(long = "max-depth", default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Report extraneous data as an error instead of a warning
    #[arg(long = "strict")]
    pub strict: bool,

    /// Walk the elements of unknown message types instead of dumping the body
    #[arg(long = "walk-unknown")]
    pub walk_unknown: bool,

    /// List registered protocol parsers
    #[arg(long = "list-protocols")]
    pub list_protocols: bool,

    /// List the messages known to the selected protocol
    #[arg(long = "list-messages")]
    pub list_messages: bool,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Check if this is an info-only command (no PDU needed).
    pub fn is_info_only(&self) -> bool {
        self.list_protocols || self.list_messages
    }

    /// Decoder settings from the command line.
    pub fn decoder_config(&self) -> DecoderConfig {
        DecoderConfig {
            max_depth: self.max_depth,
            strict: self.strict,
            stop_on_unknown_message: !self.walk_unknown,
        }
    }

    /// Default log filter for the `-v` count.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["celldissect", "0004220401ff"]);
        assert_eq!(args.pdus, vec!["0004220401ff"]);
        assert_eq!(args.protocol, ProtocolArg::Bssap);
        assert_eq!(args.format, OutputFormat::Tree);
        assert_eq!(args.decoder_config(), DecoderConfig::default());
        assert_eq!(args.log_level(), "warn");
        assert!(!args.is_info_only());
    }

    #[test]
    fn test_protocol_and_config_flags() {
        let args = Args::parse_from([
            "celldissect",
            "-p",
            "wimax-macphy",
            "--max-depth",
            "3",
            "--strict",
            "--walk-unknown",
            "-vv",
            "--format",
            "json",
        ]);
        assert_eq!(args.protocol.encapsulation(), Encapsulation::WimaxMacPhy);
        assert_eq!(args.format, OutputFormat::Json);
        let config = args.decoder_config();
        assert_eq!(config.max_depth, 3);
        assert!(config.strict);
        assert!(!config.stop_on_unknown_message);
        assert_eq!(args.log_level(), "debug");
    }

    #[test]
    fn test_info_only() {
        let args = Args::parse_from(["celldissect", "--list-messages", "-p", "bssmap"]);
        assert!(args.is_info_only());
        assert_eq!(args.protocol.encapsulation(), Encapsulation::Bssmap);
    }
}
