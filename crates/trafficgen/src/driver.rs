use crate::{clock::DynClock, cycle::CycleRunner};
use std::time::Duration;
use tokio::sync::broadcast;
use tracing::{error, info};

/// Repeats the cycle forever: RUNNING_CYCLE then SLEEPING, alternating until
/// a shutdown signal arrives. Cycle failures are caught here and logged; the
/// loop keeps going no matter how many cycles fail.
pub struct TrafficDriver {
    runner: CycleRunner,
    clock: DynClock,
    cycle_interval: Duration,
}

impl TrafficDriver {
    pub fn new(runner: CycleRunner, clock: DynClock, cycle_interval: Duration) -> Self {
        Self {
            runner,
            clock,
            cycle_interval,
        }
    }

    /// Runs until `shutdown_rx` fires. The shutdown signal interrupts both an
    /// in-flight cycle and the between-cycle sleep; a new cycle never starts
    /// before the previous cycle's trailing interval has fully elapsed.
    pub async fn run(&self, mut shutdown_rx: broadcast::Receiver<()>) {
        info!(
            "Traffic generator started. Will run a cycle every {} seconds.",
            self.cycle_interval.as_secs()
        );

        loop {
            tokio::select! {
                result = self.runner.run_cycle() => {
                    if let Err(err) = result {
                        error!("Cycle error: {err:#}");
                    }
                }
                _ = shutdown_rx.recv() => {
                    info!("Shutdown requested, abandoning in-flight cycle.");
                    break;
                }
            }

            tokio::select! {
                _ = self.clock.sleep(self.cycle_interval) => {}
                _ = shutdown_rx.recv() => {
                    info!("Shutdown requested during idle interval.");
                    break;
                }
            }
        }

        info!("Traffic loop stopped.");
    }
}
