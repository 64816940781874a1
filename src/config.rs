//! Server configuration and logging setup.
//!
//! Every flag can also be supplied through an environment variable, flags win.

use clap::Parser;
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_BIND: &str = "0.0.0.0:3000";
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=info";

#[derive(Debug, Clone, Parser)]
#[command(
    name = "receipt-server",
    version,
    about = "HTTP service that scores receipts and serves their points."
)]
pub struct ServerConfig {
    /// Address to listen on.
    #[arg(long, env = "RECEIPT_POINTS_BIND", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// Emit logs as JSON lines instead of human-readable text.
    #[arg(long, env = "RECEIPT_POINTS_LOG_JSON", default_value_t = false)]
    pub log_json: bool,
}

/// Install the global tracing subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    // A second init (e.g. from tests) is not an error worth surfacing.
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
