//! Watch command implementation.

use colored::*;

use dial_watch_core::{DiscoveryConfig, DiscoveryScheduler};

use crate::cli::WatchArgs;
use crate::error::CliError;
use crate::output;

/// Continuously monitor service presence until Ctrl+C.
///
/// Stands in for a host collaborator: starts the scheduler, renders every
/// completed cycle, and stops the scheduler on the way out. Connectivity
/// events in a real host would map onto `trigger_now`/`stop` the same way
/// the interrupt maps onto `stop` here.
pub async fn run_watch(args: WatchArgs, json: bool) -> Result<(), CliError> {
    let config = DiscoveryConfig {
        search_target: args.target,
        multicast_group: args.group,
        port: args.port,
        response_timeout_ms: args.timeout,
        repeat_delay_ms: args.interval,
    };

    let scheduler = DiscoveryScheduler::spawn(&config);
    let mut updates = scheduler.subscribe();

    if !json {
        println!(
            "Watching for {} {}",
            config.search_target.bold(),
            "(press Ctrl+C to stop)".dimmed()
        );
    }

    scheduler.start();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let status = updates.borrow_and_update().clone();
                render(&status, json);
            }
        }
    }

    scheduler.stop();
    Ok(())
}

/// Render one status update. Failures here must not take down the watch
/// loop; they are logged and the update is skipped.
fn render(status: &dial_watch_core::DiscoveryStatus, json: bool) {
    let line = output::format_status(status, json);
    if line.is_empty() {
        tracing::error!("failed to render status update");
        return;
    }
    println!("{}", line);
}
