//! celldissect CLI entry point.

use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use celldissect::cli::{from_args, read_file, Args, OutputFormatter, Pdu};
use celldissect_core::protocol::{default_registry, dissect, Protocol, ProtocolRegistry};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Set up logging
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| args.log_level().into()),
        )
        .init();

    let registry = default_registry();

    // Handle info-only commands
    if args.list_protocols {
        list_protocols(&registry);
    }
    if args.list_messages {
        list_messages(&registry, args.protocol.encapsulation().as_str())?;
    }
    if args.is_info_only() {
        return Ok(());
    }

    let mut pdus: Vec<Pdu> = from_args(&args.pdus)?;
    if let Some(path) = &args.file {
        pdus.extend(read_file(path)?);
    }
    if pdus.is_empty() {
        bail!("No PDUs given. Pass hex strings or use -f FILE (see --help).");
    }

    let config = args.decoder_config();
    let encapsulation = args.protocol.encapsulation();
    let formatter = OutputFormatter::new(args.format);
    let mut stdout = io::stdout().lock();
    let mut failed = 0;

    for pdu in &pdus {
        let layers = dissect(&registry, encapsulation, &pdu.bytes, config);
        if layers.iter().any(|(_, result)| result.has_errors()) {
            failed += 1;
        }
        tracing::debug!(source = %pdu.source, layers = layers.len(), "PDU dissected");
        formatter
            .write(pdu, &layers, &mut stdout)
            .context("Failed to write output")?;
    }
    stdout.flush()?;

    if failed > 0 {
        tracing::info!(failed, total = pdus.len(), "PDUs with decode errors");
    }
    Ok(())
}

fn list_protocols(registry: &ProtocolRegistry) {
    println!("Registered Protocol Parsers:");
    println!("{:-<50}", "");

    for parser in registry.all_parsers() {
        println!("  {} ({})", parser.display_name(), parser.name());

        let children = parser.child_protocols();
        if !children.is_empty() {
            println!("    -> Can identify: {}", children.join(", "));
        }

        if let Some(catalog) = parser.message_catalog() {
            println!(
                "    Messages: {}, elements: {}",
                catalog.len(),
                catalog.catalog().specs().len()
            );
        }
    }
}

fn list_messages(registry: &ProtocolRegistry, name: &str) -> Result<()> {
    let parser = registry
        .get_parser(name)
        .with_context(|| format!("Unknown protocol: {name}"))?;

    // Framing layers list the messages of what they carry
    let mut catalogs: Vec<_> = parser.message_catalog().into_iter().collect();
    if catalogs.is_empty() {
        catalogs.extend(
            parser
                .child_protocols()
                .iter()
                .filter_map(|child| registry.get_parser(child))
                .filter_map(|child| child.message_catalog()),
        );
    }

    for table in catalogs {
        println!("{} messages:", table.protocol());
        println!("{:-<60}", "");
        for message in table.messages() {
            println!(
                "  0x{:02x}  {:<36} {} fields ({} mandatory)",
                message.message_type,
                message.name,
                message.fields.len(),
                message.mandatory_count()
            );
            for field in message.fields {
                let presence = if field.is_mandatory() { 'M' } else { 'O' };
                println!("          {presence} {:<4} {}", field.format, field.name);
            }
        }
        println!();
    }
    Ok(())
}
