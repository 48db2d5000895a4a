//! SSDP protocol constants and request builders.
//!
//! Only the narrow single-service search is supported: an `M-SEARCH`
//! request soliciting unicast replies, and the two response headers needed
//! to classify them.

use std::net::Ipv4Addr;

/// The DIAL service URN that responses are matched against.
pub const SEARCH_TARGET: &str = "urn:dial-multiscreen-org:service:dial:1";

/// Well-known SSDP multicast group.
pub const SSDP_MULTICAST_ADDR: Ipv4Addr = Ipv4Addr::new(239, 255, 255, 250);

/// Well-known SSDP port.
pub const SSDP_PORT: u16 = 1900;

/// The location header sent back in a discovery response.
pub const HEADER_LOCATION: &str = "LOCATION";

/// The service-type header sent back in a discovery response.
pub const HEADER_ST: &str = "ST";

/// Build the `M-SEARCH` request payload for a service URN.
///
/// The `HOST` header names the multicast group the request is addressed to.
pub fn build_msearch(group: Ipv4Addr, port: u16, target: &str) -> String {
    format!(
        "M-SEARCH * HTTP/1.1\r\n\
         HOST: {}:{}\r\n\
         MAN: \"ssdp:discover\"\r\n\
         MX: 10\r\n\
         ST: {}\r\n\r\n",
        group, port, target
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_msearch_default_target() {
        let payload = build_msearch(SSDP_MULTICAST_ADDR, SSDP_PORT, SEARCH_TARGET);
        assert_eq!(
            payload,
            "M-SEARCH * HTTP/1.1\r\n\
             HOST: 239.255.255.250:1900\r\n\
             MAN: \"ssdp:discover\"\r\n\
             MX: 10\r\n\
             ST: urn:dial-multiscreen-org:service:dial:1\r\n\r\n"
        );
    }

    #[test]
    fn test_build_msearch_custom_group() {
        let payload = build_msearch(Ipv4Addr::new(127, 0, 0, 1), 3333, "urn:test:1");
        assert!(payload.starts_with("M-SEARCH * HTTP/1.1\r\n"));
        assert!(payload.contains("HOST: 127.0.0.1:3333\r\n"));
        assert!(payload.contains("ST: urn:test:1\r\n"));
        assert!(payload.ends_with("\r\n\r\n"));
    }
}
