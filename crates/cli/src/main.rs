use clap::Parser;
use prefer_dns_domain::CliOverrides;
use prefer_dns_infrastructure::dns::DnsServerHandler;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "prefer-dns")]
#[command(version = "0.1.0")]
#[command(about = "Prefer DNS - answers only the preferred address family when both exist")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Preferred address family (ipv4 or ipv6)
    #[arg(short = 'p', long)]
    prefer: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind.clone(),
        prefer: cli.prefer.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Prefer DNS v{}", env!("CARGO_PKG_VERSION"));

    let services = di::DnsServices::new(&config)?;
    let handler = DnsServerHandler::new(services.chain.clone(), config.server.server_label());

    if handler.ready() {
        info!(server = handler.server_label(), "Handler chain ready");
    }

    let dns_addr = config.server.listen_addr();

    tokio::select! {
        result = server::start_dns_server(dns_addr, handler) => {
            if let Err(e) = result {
                error!(error = %e, "DNS server error");
                return Err(e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    for (server, count) in services.metrics.snapshot() {
        info!(server = %server, filtered = count, "Filtered requests");
    }

    info!("Server shutdown complete");
    Ok(())
}
