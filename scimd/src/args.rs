use std::path::PathBuf;

use clap::Parser;

/// scimd identity provisioning server
#[derive(Debug, Parser)]
#[command(name = "scimd", about = "SCIM identity provisioning server shell")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "scimd.toml", env = "SCIMD_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "SCIMD_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
