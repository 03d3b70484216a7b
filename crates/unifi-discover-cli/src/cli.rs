//! CLI argument definitions using clap.

use std::net::Ipv4Addr;

use clap::{Args, Parser, Subcommand};

use unifi_discover_core::protocol::DISCOVERY_PORT;

/// UniFi discovery CLI - find devices answering the UDP discovery probe
#[derive(Parser, Debug)]
#[command(name = "unifi-discover")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Print debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Discover devices on the network
    Discover(DiscoverArgs),
}

// ==================== Discover ====================

#[derive(Args, Debug)]
pub struct DiscoverArgs {
    /// Discovery timeout in seconds
    #[arg(short, long, default_value = "3", env = "UNIFI_DISCOVER_TIMEOUT")]
    pub timeout: u64,

    /// Discovery UDP destination port
    #[arg(short, long, default_value_t = DISCOVERY_PORT)]
    pub port: u16,

    /// Probe destination address
    #[arg(long, default_value = "255.255.255.255")]
    pub broadcast: Ipv4Addr,
}
