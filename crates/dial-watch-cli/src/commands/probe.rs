//! Probe command implementation.

use dial_watch_core::{DiscoveryConfig, Prober};

use crate::cli::ProbeArgs;
use crate::error::CliError;
use crate::output;

/// Run a single discovery cycle and print the classification.
pub async fn run_probe(args: ProbeArgs, json: bool) -> Result<(), CliError> {
    let config = DiscoveryConfig {
        search_target: args.target,
        multicast_group: args.group,
        port: args.port,
        response_timeout_ms: args.timeout,
        ..DiscoveryConfig::default()
    };

    let prober = Prober::new(&config);
    let classification = prober.probe().await;

    println!(
        "{}",
        output::format_classification(&classification, &config.search_target, json)
    );

    if !classification.detected() {
        return Err(CliError::NotDetected);
    }

    Ok(())
}
