//! Output formatting for CLI results.

use colored::*;
use serde::Serialize;

use dial_watch_core::{Classification, DiscoveryStatus};

/// JSON shape for a one-shot probe result.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProbeReport<'a> {
    target: &'a str,
    detected: bool,
    #[serde(flatten)]
    classification: &'a Classification,
}

/// Format a one-shot probe result.
pub fn format_classification(
    classification: &Classification,
    target: &str,
    json: bool,
) -> String {
    if json {
        let report = ProbeReport {
            target,
            detected: classification.detected(),
            classification,
        };
        serde_json::to_string_pretty(&report).unwrap_or_default()
    } else if classification.detected() {
        format!("{} {}", "detected".green().bold(), target)
    } else {
        let detail = match (classification.service_matched, classification.location_present) {
            (true, false) => " (response lacked a location header)",
            (false, true) => " (response named a different service)",
            _ => "",
        };
        format!("{} {}{}", "not detected".yellow(), target, detail)
    }
}

/// Format a presence status line for watch mode.
pub fn format_status(status: &DiscoveryStatus, json: bool) -> String {
    if json {
        serde_json::to_string(status).unwrap_or_default()
    } else if status.presence > 0 {
        format!(
            "{} {} device(s) on the network",
            "present".green().bold(),
            status.presence
        )
    } else {
        let since = status
            .last_seen
            .map(|t| format!(" (last seen {})", t.format("%H:%M:%S")))
            .unwrap_or_default();
        format!("{}{}", "absent".dimmed(), since)
    }
}
