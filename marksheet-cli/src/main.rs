use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;
use marksheet_http::{HttpRuntime, HttpRuntimeConfig};
use tokio::net::TcpListener;

#[derive(Parser, Debug)]
#[command(name = "marksheet", version)]
#[command(about = "Marksheet - student result summary service")]
struct Cli {
    /// Address to bind
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "MARKSHEET_PORT", default_value_t = 8080)]
    port: u16,

    /// Directory the static frontend is served from
    #[arg(long, env = "MARKSHEET_STATIC_DIR")]
    static_dir: Option<PathBuf>,

    /// Disable CORS headers
    #[arg(long)]
    no_cors: bool,

    /// Disable the OpenAPI document endpoint
    #[arg(long)]
    no_openapi: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging once.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env();
    let env_filter = match "info".parse() {
        Ok(directive) => env_filter.add_directive(directive),
        Err(_) => env_filter, // fallback to default if parsing fails
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init();

    let cli = Cli::parse();

    let mut config = HttpRuntimeConfig::from_env()?;
    if let Some(dir) = cli.static_dir {
        config = config.static_dir(dir);
    }
    if cli.no_cors {
        config = config.enable_cors(false);
    }
    if cli.no_openapi {
        config = config.enable_openapi(false);
    }

    let addr = SocketAddr::new(cli.host, cli.port);
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(static_dir = %config.static_dir.display(), "serving frontend at http://{local_addr}/");
    tracing::info!("API endpoint at http://{local_addr}/api/calculate");

    HttpRuntime::with_config(config).serve(listener).await?;

    Ok(())
}
