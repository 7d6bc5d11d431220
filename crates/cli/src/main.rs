//! # Stub DNS Server
//!
//! Main entry point: parse CLI arguments, load configuration, wire the
//! placeholder resolver into the query handler, and serve UDP.

mod bootstrap;
mod server;

use clap::Parser;
use stubdns_domain::CliOverrides;
use tracing::info;

#[derive(Parser)]
#[command(name = "stubdns")]
#[command(version)]
#[command(about = "A stub DNS responder that answers every query with a fixed address")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        dns_port: cli.port,
        bind_address: cli.bind,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        dns_port = config.server.dns_port,
        bind = %config.server.bind_address,
        answer_address = %config.resolver.answer_address,
        answer_ttl = config.resolver.ttl,
        "Configuration loaded"
    );

    server::start_dns_server(&config).await
}
