//! Discovery response classification.

use serde::{Deserialize, Serialize};

use crate::protocol::{HEADER_LOCATION, HEADER_ST};

/// Outcome of classifying a single discovery response.
///
/// A probe counts as a positive detection only when both flags are set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    /// A service-type header matched the expected URN exactly.
    pub service_matched: bool,
    /// A location header was present.
    pub location_present: bool,
}

impl Classification {
    /// Whether this response qualifies as a detection of the target service.
    pub fn detected(&self) -> bool {
        self.service_matched && self.location_present
    }
}

/// Classify a raw discovery response against the expected service URN.
///
/// This is a standalone function to allow easy testing without requiring
/// a socket. The datagram is decoded as text and inspected line by line;
/// header names are matched case-sensitively. Anything malformed simply
/// fails to set the flags.
pub fn classify_response(data: &[u8], target: &str) -> Classification {
    let text = String::from_utf8_lossy(data);
    let mut classification = Classification::default();

    for line in text.lines() {
        let line = line.trim();

        if line.starts_with(HEADER_LOCATION) {
            classification.location_present = true;
        } else if line.starts_with(HEADER_ST) {
            let value = line[HEADER_ST.len()..].trim_start_matches(':').trim();
            if value == target {
                classification.service_matched = true;
            }
        }
    }

    classification
}
