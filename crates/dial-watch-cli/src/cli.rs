//! CLI argument definitions using clap.

use std::net::Ipv4Addr;

use clap::{Args, Parser, Subcommand};

use dial_watch_core::protocol::SEARCH_TARGET;

/// dial-watch - discover DIAL screen-casting services on the local network
#[derive(Parser, Debug)]
#[command(name = "dial-watch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a single discovery cycle and report the result
    Probe(ProbeArgs),

    /// Continuously monitor service presence
    Watch(WatchArgs),
}

// ==================== Probe ====================

#[derive(Args, Debug)]
pub struct ProbeArgs {
    /// Service URN to search for
    #[arg(long, default_value = SEARCH_TARGET, env = "DIAL_WATCH_TARGET")]
    pub target: String,

    /// Multicast group to probe
    #[arg(long, default_value = "239.255.255.250")]
    pub group: Ipv4Addr,

    /// UDP port to probe
    #[arg(long, default_value = "1900")]
    pub port: u16,

    /// Receive deadline in milliseconds
    #[arg(long, default_value = "4000", env = "DIAL_WATCH_TIMEOUT")]
    pub timeout: u64,
}

// ==================== Watch ====================

#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Service URN to search for
    #[arg(long, default_value = SEARCH_TARGET, env = "DIAL_WATCH_TARGET")]
    pub target: String,

    /// Multicast group to probe
    #[arg(long, default_value = "239.255.255.250")]
    pub group: Ipv4Addr,

    /// UDP port to probe
    #[arg(long, default_value = "1900")]
    pub port: u16,

    /// Receive deadline in milliseconds
    #[arg(long, default_value = "4000", env = "DIAL_WATCH_TIMEOUT")]
    pub timeout: u64,

    /// Delay between cycles in milliseconds
    #[arg(long, default_value = "5000", env = "DIAL_WATCH_INTERVAL")]
    pub interval: u64,
}
