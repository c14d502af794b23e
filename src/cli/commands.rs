//! CLI command implementations

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{self, AppConfig};
use crate::http_server::HttpServer;
use crate::store::MemoryStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch to the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Serve { host, port } => serve(host, port),
    }
}

/// Boot the server over an in-memory store and block until it exits.
///
/// CLI flags win over environment variables.
pub fn serve(host: Option<String>, port: Option<u16>) -> CliResult<()> {
    init_tracing();

    config::load_dotenv();
    let mut config = AppConfig::from_env()?;
    if let Some(host) = host {
        config.http.host = host;
    }
    if let Some(port) = port {
        config.http.port = port;
    }

    if let Some(project) = &config.project_id {
        info!(project = %project, "using configured project");
    }

    let server = HttpServer::with_config(MemoryStore::new(), config.http);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
