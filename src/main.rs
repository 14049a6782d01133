//! TON Address Converter
//!
//! Entry point for the `tonconv` binary.

mod cli;

use anyhow::Context;
use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use tonconv::address::{InputKind, TonAddress, TonCodec};
use tonconv::clipboard::{MemoryClipboard, Session};
use tonconv::config::AppConfig;
use tonconv::converter::{convert, AddressFormats, ConversionState, FieldId};
use tonconv::logging::{init_logging, LogConfig};
use tonconv::rpc::{start_rpc_server, RpcState};

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = AppConfig::load_or_default(cli.config.as_ref())
        .context("failed to load configuration")?;

    let log_config = LogConfig {
        level: config.logging.level.clone(),
        format: config.logging.format,
        with_ansi: std::io::stderr().is_terminal(),
        ..LogConfig::default()
    }
    .with_format(cli.log_format)
    .with_verbosity(cli.verbose);
    init_logging(&log_config).context("failed to initialize logging")?;

    match cli.command {
        Command::Convert { address, json } => Ok(run_convert(&address, json, cli.verbose > 0)?),
        Command::Watch => {
            run_watch(&config).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Serve { listen } => {
            let mut server = config.server.clone();
            if let Some(addr) = listen {
                server.listen_addr = addr;
            }
            run_serve(&server, config.ui.copy_feedback_ms).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_convert(address: &str, json: bool, verbose: bool) -> anyhow::Result<ExitCode> {
    let state = convert(&TonCodec, address);
    match &state {
        ConversionState::Converted(formats) => {
            let kind = if verbose {
                TonAddress::inspect(address).ok().map(|(_, kind)| kind)
            } else {
                None
            };
            if json {
                let value = formats_json(formats, kind)?;
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                if let Some(kind) = kind {
                    println!("{}", kind_line(kind));
                }
                print_formats(formats, None);
            }
            Ok(ExitCode::SUCCESS)
        }
        other => {
            eprintln!("{}", other.message().unwrap_or_default());
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn run_watch(config: &AppConfig) -> anyhow::Result<()> {
    let mut session = Session::new(MemoryClipboard::new()).copy_feedback(config.ui.copy_feedback());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        let Some(command) = line.strip_prefix(':') else {
            let state = session.set_input(line);
            print_state(state, None);
            continue;
        };

        let mut parts = command.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some("quit"), _) => break,
            (Some("paste"), _) => match session.paste().await {
                Some(state) => print_state(state, None),
                None => eprintln!("clipboard is empty"),
            },
            (Some("copy"), Some(field)) => match field.parse::<FieldId>() {
                Ok(field) => {
                    if session.copy(field).await {
                        print_state(session.state(), session.copied());
                    } else {
                        eprintln!("nothing to copy");
                    }
                }
                Err(e) => eprintln!("{e}"),
            },
            _ => eprintln!("commands: :copy <field>, :paste, :quit"),
        }
    }
    Ok(())
}

async fn run_serve(
    server: &tonconv::config::ServerConfig,
    copy_feedback_ms: u64,
) -> anyhow::Result<()> {
    let state = Arc::new(RpcState {
        copy_feedback_ms,
        ..RpcState::default()
    });

    tokio::select! {
        result = start_rpc_server(state, server) => {
            result.with_context(|| format!("server on {} failed", server.listen_addr))?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("shutdown signal received");
        }
    }
    Ok(())
}

fn print_state(state: &ConversionState, copied: Option<FieldId>) {
    match state {
        ConversionState::Converted(formats) => print_formats(formats, copied),
        other => {
            if let Some(message) = other.message() {
                println!("{message}");
            }
        }
    }
}

/// Header printed above the table under `--verbose`
fn kind_line(kind: InputKind) -> String {
    format!("{:<24} {}", "Input:", kind)
}

/// Formats as JSON, with the input kind fields merged in when known
fn formats_json(
    formats: &AddressFormats,
    kind: Option<InputKind>,
) -> serde_json::Result<serde_json::Value> {
    let mut value = serde_json::to_value(formats)?;
    if let (Some(kind), Some(object)) = (kind, value.as_object_mut()) {
        if let serde_json::Value::Object(fields) = serde_json::to_value(kind)? {
            object.extend(fields);
        }
    }
    Ok(value)
}

fn print_formats(formats: &AddressFormats, copied: Option<FieldId>) {
    for (field, value) in formats.fields() {
        let mark = if copied == Some(field) { " (copied)" } else { "" };
        println!("{:<24} {}{}", field.label(), value, mark);
    }
}
