//! Command-line arguments for the converter binary.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use tonconv::logging::LogFormat;

#[derive(Parser)]
#[command(
    name = "tonconv",
    version,
    about = "TON address converter - raw, bounceable and non-bounceable forms"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// TOML configuration file.
    #[arg(long, short = 'c', value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log output format (overrides the config file).
    #[arg(long = "log-format", value_enum, global = true)]
    pub log_format: Option<LogFormat>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print every form of one address.
    Convert {
        /// Address in raw (`0:abcd...`) or friendly form.
        address: String,

        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Read addresses from stdin, one per line, and print each result.
    ///
    /// `:copy <field>` copies an output field, `:paste` converts the copied
    /// text again, `:quit` exits.
    Watch,

    /// Serve the converter page and the JSON-RPC endpoint.
    Serve {
        /// Listen address (overrides the config file).
        #[arg(long, value_name = "ADDR")]
        listen: Option<SocketAddr>,
    },
}
