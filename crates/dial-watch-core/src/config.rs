//! Discovery configuration.

use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::protocol::{SEARCH_TARGET, SSDP_MULTICAST_ADDR, SSDP_PORT};

/// Configuration for the discovery prober and scheduler.
///
/// Defaults carry the DIAL convention values. Nothing here is persisted;
/// consumers (CLI flags, host settings) map onto this struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiscoveryConfig {
    /// Service URN responses must match to count as a detection.
    pub search_target: String,
    /// Multicast group the probe is addressed to.
    pub multicast_group: Ipv4Addr,
    /// UDP port the probe is addressed to.
    pub port: u16,
    /// Receive deadline for a single cycle, in milliseconds.
    pub response_timeout_ms: u64,
    /// Delay between the end of one cycle and the start of the next,
    /// in milliseconds.
    pub repeat_delay_ms: u64,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            search_target: SEARCH_TARGET.to_string(),
            multicast_group: SSDP_MULTICAST_ADDR,
            port: SSDP_PORT,
            response_timeout_ms: 4000,
            repeat_delay_ms: 5000,
        }
    }
}

impl DiscoveryConfig {
    /// Destination address for the probe request.
    pub fn destination(&self) -> SocketAddr {
        SocketAddr::from((self.multicast_group, self.port))
    }

    /// Receive deadline as a `Duration`.
    pub fn response_timeout(&self) -> Duration {
        Duration::from_millis(self.response_timeout_ms)
    }

    /// Inter-cycle delay as a `Duration`.
    pub fn repeat_delay(&self) -> Duration {
        Duration::from_millis(self.repeat_delay_ms)
    }
}
