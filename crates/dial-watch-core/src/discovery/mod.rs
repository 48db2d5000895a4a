//! SSDP service discovery.
//!
//! Provides response classification, a single-cycle prober, and the
//! repeating scheduler that owns the shared presence state.

pub mod prober;
pub mod response;
pub mod scheduler;

pub use prober::{ProbeRequest, Prober};
pub use response::{classify_response, Classification};
pub use scheduler::{DiscoveryScheduler, DiscoveryStatus};

#[cfg(test)]
pub(crate) mod testutil {
    use std::net::SocketAddr;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use crate::config::DiscoveryConfig;

    /// A well-formed DIAL discovery response.
    pub const DIAL_RESPONSE: &str = "HTTP/1.1 200 OK\n\
        LOCATION: http://10.0.0.5:8008/dd.xml\n\
        ST: urn:dial-multiscreen-org:service:dial:1\n\n";

    /// Spawn a mock device on a loopback ephemeral port.
    ///
    /// Counts every request it receives; answers the first `max_replies`
    /// of them with `reply` after `reply_delay_ms`.
    pub async fn spawn_responder(
        reply: Option<String>,
        reply_delay_ms: u64,
        max_replies: u32,
    ) -> (SocketAddr, Arc<AtomicU32>) {
        let socket = tokio::net::UdpSocket::bind("127.0.0.1:0")
            .await
            .expect("bind responder socket");
        let addr = socket.local_addr().expect("responder addr");
        let requests = Arc::new(AtomicU32::new(0));

        let seen = requests.clone();
        tokio::spawn(async move {
            let mut buf = vec![0u8; 2048];
            loop {
                let (_, peer) = match socket.recv_from(&mut buf).await {
                    Ok(received) => received,
                    Err(_) => break,
                };
                let count = seen.fetch_add(1, Ordering::SeqCst) + 1;

                if let Some(reply) = &reply {
                    if count <= max_replies {
                        if reply_delay_ms > 0 {
                            tokio::time::sleep(Duration::from_millis(reply_delay_ms)).await;
                        }
                        let _ = socket.send_to(reply.as_bytes(), peer).await;
                    }
                }
            }
        });

        (addr, requests)
    }

    /// Config pointed at a loopback responder with shortened timings.
    pub fn test_config(addr: SocketAddr, timeout_ms: u64, delay_ms: u64) -> DiscoveryConfig {
        let group = match addr.ip() {
            std::net::IpAddr::V4(ip) => ip,
            std::net::IpAddr::V6(_) => panic!("responder must bind IPv4"),
        };

        DiscoveryConfig {
            multicast_group: group,
            port: addr.port(),
            response_timeout_ms: timeout_ms,
            repeat_delay_ms: delay_ms,
            ..DiscoveryConfig::default()
        }
    }
}
