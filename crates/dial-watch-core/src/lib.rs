//! dial-watch core library.
//!
//! Provides SSDP-based discovery of DIAL screen-casting services: a
//! single-cycle prober, response classification, and a repeating scheduler
//! that maintains a shared presence count for host consumers.

pub mod config;
pub mod discovery;
pub mod error;
pub mod protocol;

pub use config::DiscoveryConfig;
pub use discovery::prober::{ProbeRequest, Prober};
pub use discovery::response::{classify_response, Classification};
pub use discovery::scheduler::{DiscoveryScheduler, DiscoveryStatus};
