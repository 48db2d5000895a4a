//! Single-cycle discovery prober.
//!
//! One probe cycle sends the `M-SEARCH` request, waits for at most one
//! response under a fixed deadline, and classifies it. The prober holds no
//! state beyond the immutable request.

use std::net::SocketAddr;
use std::time::Duration;

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::UdpSocket;
use tokio::time::timeout;

use crate::config::DiscoveryConfig;
use crate::error::ProbeError;
use crate::protocol::build_msearch;

use super::response::{classify_response, Classification};

/// Receive buffer size for a discovery response.
const RECV_BUFFER_LEN: usize = 1024;

/// Immutable discovery request: payload bytes plus destination address.
/// Built once at prober construction and reused across cycles.
#[derive(Debug, Clone)]
pub struct ProbeRequest {
    payload: Vec<u8>,
    destination: SocketAddr,
}

impl ProbeRequest {
    /// Build the request from configuration.
    pub fn new(config: &DiscoveryConfig) -> Self {
        Self {
            payload: build_msearch(config.multicast_group, config.port, &config.search_target)
                .into_bytes(),
            destination: config.destination(),
        }
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn destination(&self) -> SocketAddr {
        self.destination
    }
}

/// Create a UDP socket able to send broadcast/multicast probes.
///
/// Bound to an ephemeral port; nonblocking so it can be driven by tokio.
fn create_probe_socket() -> Result<std::net::UdpSocket, std::io::Error> {
    let socket = Socket::new(Domain::IPV4, Type::DGRAM, Some(Protocol::UDP))?;

    socket.set_broadcast(true)?;

    let addr: SocketAddr = "0.0.0.0:0".parse().unwrap();
    socket.bind(&addr.into())?;

    socket.set_nonblocking(true)?;

    Ok(socket.into())
}

/// Executes exactly one discovery cycle per invocation.
pub struct Prober {
    request: ProbeRequest,
    search_target: String,
    response_timeout: Duration,
}

impl Prober {
    /// Create a new prober for the configured service.
    pub fn new(config: &DiscoveryConfig) -> Self {
        Self {
            request: ProbeRequest::new(config),
            search_target: config.search_target.clone(),
            response_timeout: config.response_timeout(),
        }
    }

    /// Run one discovery cycle and classify the outcome.
    ///
    /// Never fails to the caller: timeouts and transport errors are logged
    /// and collapse to a not-detected classification. Only the first
    /// datagram received within the deadline is classified; when several
    /// devices answer, the rest are left unread, since the result is a
    /// presence signal rather than an enumeration.
    pub async fn probe(&self) -> Classification {
        match self.run_cycle().await {
            Ok(classification) => classification,
            Err(ProbeError::Timeout) => {
                tracing::debug!("no discovery response before the deadline");
                Classification::default()
            }
            Err(ProbeError::Io(e)) => {
                tracing::warn!(error = %e, "discovery cycle failed");
                Classification::default()
            }
        }
    }

    /// The send/receive/classify pass, with the socket scoped to this call
    /// so it is released on every exit path.
    async fn run_cycle(&self) -> Result<Classification, ProbeError> {
        let socket = UdpSocket::from_std(create_probe_socket()?)?;

        tracing::debug!(destination = %self.request.destination(), "sending discovery probe");
        socket
            .send_to(self.request.payload(), self.request.destination())
            .await?;

        let mut buf = vec![0u8; RECV_BUFFER_LEN];
        let (len, addr) = timeout(self.response_timeout, socket.recv_from(&mut buf))
            .await
            .map_err(|_| ProbeError::Timeout)??;

        tracing::debug!(from = %addr, len, "received discovery response");
        Ok(classify_response(&buf[..len], &self.search_target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::testutil::{spawn_responder, test_config, DIAL_RESPONSE};

    #[tokio::test]
    async fn test_probe_detects_dial_service() {
        let (addr, requests) = spawn_responder(Some(DIAL_RESPONSE.to_string()), 0, u32::MAX).await;
        let prober = Prober::new(&test_config(addr, 1000, 5000));

        let result = prober.probe().await;

        assert!(result.detected());
        assert_eq!(requests.load(std::sync::atomic::Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_probe_times_out_without_response() {
        let (addr, _requests) = spawn_responder(None, 0, 0).await;
        let prober = Prober::new(&test_config(addr, 100, 5000));

        let result = prober.probe().await;

        assert!(!result.detected());
        assert_eq!(result, Classification::default());
    }

    #[tokio::test]
    async fn test_probe_ignores_non_matching_service() {
        let response = "HTTP/1.1 200 OK\nST: urn:some-other-service:1\n\n";
        let (addr, _requests) = spawn_responder(Some(response.to_string()), 0, u32::MAX).await;
        let prober = Prober::new(&test_config(addr, 1000, 5000));

        let result = prober.probe().await;

        assert!(!result.detected());
        assert!(!result.location_present);
    }

    #[test]
    fn test_probe_request_payload() {
        let config = DiscoveryConfig::default();
        let request = ProbeRequest::new(&config);

        let text = String::from_utf8(request.payload().to_vec()).unwrap();
        assert!(text.starts_with("M-SEARCH * HTTP/1.1\r\n"));
        assert!(text.contains("ST: urn:dial-multiscreen-org:service:dial:1\r\n"));
        assert_eq!(request.destination().to_string(), "239.255.255.250:1900");
    }
}
