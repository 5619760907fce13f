use std::time::Duration;

use debug_print::debug_println;
use tokio::{
    sync::watch,
    time::{interval_at, Instant, MissedTickBehavior},
};

use crate::{
    display::{DisplayDriver, Renderer},
    log,
};

use super::Cycler;

/// Repaints once per `period` until `shutdown` flips to `true` or its sender is
/// dropped. The first tick fires one full period after start so the boot
/// banner stays up. Hands the cycler back when done.
pub(crate) async fn run_thread<R, D>(
    mut cycler: Cycler<R, D>,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> Cycler<R, D>
where
    R: Renderer,
    D: DisplayDriver,
{
    println!("{} Starting cycle thread every {:?}", log::THREAD, period);

    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    while !*shutdown.borrow() {
        tokio::select! {
            _ = interval.tick() => {
                match cycler.tick().await {
                    Ok(frame) => {
                        debug_println!("{} {}", log::CYCLE, frame);
                    }
                    Err(e) => println!("{} Skipped frame: {}", log::ERROR, e),
                }
            }
            changed = shutdown.changed() => {
                if changed.is_err() {
                    break;
                }
            }
        }
    }

    println!("{} Cycle thread stopped", log::THREAD);
    cycler
}
