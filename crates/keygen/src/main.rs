use std::net::Ipv4Addr;

use clap::Parser;
use env_logger::Env;

use dsv_identity::{write_report, NodeIdentity, DEFAULT_BOOTSTRAP_PORT};

#[derive(Parser)]
#[command(version)]
struct Cli {
    /// Print a placeholder multiaddress for bootstrap node configuration
    #[arg(long)]
    multiaddr: bool,

    /// Derive the peer ID from an existing 128-character hex private key
    /// instead of generating a new one
    #[arg(long, env = "LOCAL_COLLECTOR_PRIVATE_KEY")]
    from_hex: Option<String>,

    /// Additionally print the key as an environment file line
    #[arg(long)]
    env: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let identity = match &cli.from_hex {
        Some(hex_key) => NodeIdentity::from_hex(hex_key)?,
        None => NodeIdentity::generate()?,
    };
    log::debug!("Local peer ID: {}", identity.peer_id());

    let bootstrap_addr = cli
        .multiaddr
        .then(|| identity.bootstrap_multiaddr(Ipv4Addr::LOCALHOST, DEFAULT_BOOTSTRAP_PORT))
        .transpose()?;

    write_report(std::io::stdout().lock(), &identity, bootstrap_addr.as_ref(), cli.env)?;
    Ok(())
}
