use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use stubdns_application::QueryHandler;
use stubdns_domain::Config;
use stubdns_infrastructure::{FixedResolver, UdpServer};
use tracing::info;

pub async fn start_dns_server(config: &Config) -> anyhow::Result<()> {
    let bind_addr = format!("{}:{}", config.server.bind_address, config.server.dns_port);
    let socket_addr = SocketAddr::from_str(&bind_addr)?;

    info!(bind_address = %socket_addr, "Starting DNS server");

    let resolver = Arc::new(FixedResolver::new(config.resolver.answer_address));
    let handler = Arc::new(QueryHandler::new(resolver, config.resolver.ttl));
    let server = UdpServer::bind(socket_addr, handler).await?;

    info!("DNS server ready to accept queries");

    tokio::select! {
        result = server.run() => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    Ok(())
}
