//! Repeating discovery scheduler.
//!
//! Drives the prober on a fixed cadence from a single dedicated task, so
//! probe cycles never overlap, and owns the shared presence state read by
//! host consumers.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, watch};
use tokio::time::{self, Instant};

use crate::config::DiscoveryConfig;

use super::prober::Prober;

/// Control messages for the scheduler task.
#[derive(Debug)]
enum Command {
    Start,
    Stop,
    TriggerNow,
}

/// Snapshot of the scheduler's output state after the most recently
/// completed cycle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryStatus {
    /// Number of qualifying services detected (0 or 1 in this design;
    /// kept as a count for extensibility).
    pub presence: u32,
    /// When a qualifying service last answered a probe.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<DateTime<Utc>>,
}

/// Handle to the background discovery scheduler.
///
/// Cheap to clone; all clones control the same task. The task exits once
/// every handle has been dropped.
#[derive(Clone)]
pub struct DiscoveryScheduler {
    commands: mpsc::UnboundedSender<Command>,
    presence: Arc<AtomicU32>,
    status: watch::Receiver<DiscoveryStatus>,
}

impl DiscoveryScheduler {
    /// Spawn the scheduler task for the configured service.
    ///
    /// The scheduler starts in the stopped state; call [`start`] or
    /// [`trigger_now`] to begin probing. Must be called from within a
    /// tokio runtime.
    ///
    /// [`start`]: DiscoveryScheduler::start
    /// [`trigger_now`]: DiscoveryScheduler::trigger_now
    pub fn spawn(config: &DiscoveryConfig) -> Self {
        let (commands_tx, commands_rx) = mpsc::unbounded_channel();
        let (status_tx, status_rx) = watch::channel(DiscoveryStatus::default());
        let presence = Arc::new(AtomicU32::new(0));

        let worker = SchedulerWorker {
            prober: Prober::new(config),
            repeat_delay: config.repeat_delay(),
            commands: commands_rx,
            presence: presence.clone(),
            status: status_tx,
        };
        tokio::spawn(worker.run());

        Self {
            commands: commands_tx,
            presence,
            status: status_rx,
        }
    }

    /// Begin the unbounded repeating cycle: probe immediately, then after
    /// every completed cycle re-arm a fixed delay. No-op when already
    /// started.
    pub fn start(&self) {
        let _ = self.commands.send(Command::Start);
    }

    /// Cancel any pending scheduled cycle. A cycle already in flight runs
    /// to its natural deadline. No-op when nothing is scheduled.
    pub fn stop(&self) {
        let _ = self.commands.send(Command::Stop);
    }

    /// Cancel the pending delay and run a cycle immediately; from the
    /// stopped state this also re-enters the repeating cycle. Ignored while
    /// a cycle is already in flight.
    pub fn trigger_now(&self) {
        let _ = self.commands.send(Command::TriggerNow);
    }

    /// Last-known presence count, from the most recently completed cycle.
    /// Never blocks.
    pub fn presence(&self) -> u32 {
        self.presence.load(Ordering::SeqCst)
    }

    /// Snapshot of the presence count and last-detection timestamp.
    pub fn status(&self) -> DiscoveryStatus {
        self.status.borrow().clone()
    }

    /// Subscribe to per-cycle status updates.
    pub fn subscribe(&self) -> watch::Receiver<DiscoveryStatus> {
        self.status.clone()
    }
}

/// The scheduler task state. Owns the prober and the writable side of the
/// shared presence state.
struct SchedulerWorker {
    prober: Prober,
    repeat_delay: Duration,
    commands: mpsc::UnboundedReceiver<Command>,
    presence: Arc<AtomicU32>,
    status: watch::Sender<DiscoveryStatus>,
}

impl SchedulerWorker {
    async fn run(mut self) {
        let sleep = time::sleep(self.repeat_delay);
        tokio::pin!(sleep);

        // Whether a next cycle is scheduled. The sleep arm is only polled
        // while armed; its deadline is reset after each completed cycle.
        let mut armed = false;

        loop {
            let run_now = tokio::select! {
                () = sleep.as_mut(), if armed => true,
                cmd = self.commands.recv() => match cmd {
                    Some(Command::Start) => !armed,
                    Some(Command::TriggerNow) => true,
                    Some(Command::Stop) => {
                        armed = false;
                        false
                    }
                    None => break,
                },
            };

            if run_now {
                self.run_cycle().await;
                armed = true;
                self.drain_in_flight(&mut armed);

                if armed {
                    sleep.as_mut().reset(Instant::now() + self.repeat_delay);
                }
            }
        }

        tracing::debug!("discovery scheduler task stopped");
    }

    /// Run one probe cycle and publish its result.
    ///
    /// The effect on the presence state is all-or-nothing: nothing is
    /// published until classification completes, and an error cycle
    /// publishes a zero count exactly like a not-found cycle.
    async fn run_cycle(&mut self) {
        let classification = self.prober.probe().await;
        let count = u32::from(classification.detected());

        self.presence.store(count, Ordering::SeqCst);

        let last_seen = if count > 0 {
            Some(Utc::now())
        } else {
            self.status.borrow().last_seen
        };
        let _ = self.status.send(DiscoveryStatus {
            presence: count,
            last_seen,
        });
    }

    /// Discard commands that arrived while a cycle was in flight so they
    /// cannot start a duplicate immediate cycle. A stop is still honored.
    fn drain_in_flight(&mut self, armed: &mut bool) {
        while let Ok(cmd) = self.commands.try_recv() {
            if matches!(cmd, Command::Stop) {
                *armed = false;
            }
        }
    }
}
