//! CLI argument definitions using clap
//!
//! Commands:
//! - userdb serve [--config <path>] [--host <host>] [--port <port>] [--log-level <level>]
//! - userdb init [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// userdb - In-memory user store over HTTP
#[derive(Parser, Debug)]
#[command(name = "userdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default configuration file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./userdb.json")]
        config: PathBuf,
    },

    /// Start the HTTP server
    Serve {
        /// Path to configuration file (defaults are used when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind, overrides the config file
        #[arg(long)]
        host: Option<String>,

        /// Port to bind, overrides the config file
        #[arg(short, long)]
        port: Option<u16>,

        /// Log level (trace, debug, info, warn, error), overrides the config file
        #[arg(long)]
        log_level: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
