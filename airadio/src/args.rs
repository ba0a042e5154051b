use std::path::PathBuf;

use clap::Parser;

/// AI Radio Studio backend
#[derive(Debug, Parser)]
#[command(name = "airadio", about = "Backend API for the AI radio studio")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "airadio.toml", env = "AIRADIO_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "AIRADIO_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
