//! Projectboard server - minimal project-tracking REST backend

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tiny_http::Server;
use tracing::info;

use projectboard_core::storage::InMemoryProjectRepository;
use projectboard_server::config::ServerConfig;
use projectboard_server::router::api_router;
use projectboard_server::server::serve;

#[derive(Parser)]
#[command(name = "projectboard")]
#[command(author, version, about = "Minimal project-tracking REST backend", long_about = None)]
struct Cli {
    /// Bind host (overrides config file and environment)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides config file and environment)
    #[arg(short, long)]
    port: Option<u16>,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("projectboard=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let mut config = ServerConfig::load()?;
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    // One store for the whole process; every use case shares it.
    let repository = Arc::new(InMemoryProjectRepository::new());
    let router = api_router(repository);

    // Controllers are async while the accept loop is not, so requests are
    // driven to completion on a single-threaded runtime.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build async runtime")?;

    let addr = config.addr();
    let listener =
        Server::http(&addr).map_err(|err| anyhow::anyhow!("Failed to bind {addr}: {err}"))?;
    info!("Listening on http://{addr}");

    serve(listener, router, runtime);
    Ok(())
}
