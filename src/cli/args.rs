//! CLI argument definitions using clap
//!
//! Commands:
//! - docapi serve [--host <host>] [--port <port>]

use clap::{Parser, Subcommand};

/// docapi - document CRUD over HTTP
#[derive(Parser, Debug)]
#[command(name = "docapi")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Host to bind, overrides DOCAPI_HOST
        #[arg(long)]
        host: Option<String>,

        /// Port to bind, overrides DOCAPI_PORT
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
