use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_PORT: u16 = 8080;

/// Prints the body of every POST it receives and answers `Received webhook`.
#[derive(Debug, Clone, Parser)]
#[command(name = "webhook-listener", version = env!("GIT_HASH"))]
pub struct Config {
    /// Port to listen on
    #[arg(env = "WEBHOOK_LISTENER_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address to bind, all interfaces by default
    #[arg(long, env = "WEBHOOK_LISTENER_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Also write logs to a daily-rolling file in this directory
    #[arg(long, env = "WEBHOOK_LISTENER_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Config {
    /// Reads `.env` (if any), then the environment and command line.
    pub fn load() -> Self {
        dotenv::dotenv().ok();
        Self::parse()
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
