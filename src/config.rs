use std::net::SocketAddr;

use clap::Parser;

/// Command line and environment configuration for the polls server.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about)]
pub struct Config {
    /// Address the HTTP server binds to
    #[arg(long, env = "POLLS_BIND_ADDRESS", default_value = "127.0.0.1:3030")]
    pub bind_address: SocketAddr,

    /// Tracing filter directives
    #[arg(long, env = "RUST_LOG", default_value = "polls=info,warp=error")]
    pub log_level: String,

    /// Create a handful of demo questions on startup
    #[arg(long, env = "POLLS_SEED_DEMO")]
    pub seed_demo: bool,
}

impl Config {
    /// Reads `.env` (if present), then the environment and command line.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Config::parse()
    }
}
