use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use tokio::runtime::Runtime;
use tokio::time::{self, MissedTickBehavior};

use crate::config::{BACKEND, DF};
use crate::data::aggregator::{ChannelFilter, load_snapshot};
use crate::data::fetcher::FetchError;
use crate::data::provider::MetricsBackend;
use crate::models::DashboardSnapshot;

pub type CycleOutcome = Result<DashboardSnapshot, FetchError>;

/// Periodic polling task. Each cycle runs to completion before the next
/// tick is awaited, so cycles never overlap. The loop stops when the
/// handle is dropped or the receiving side goes away.
pub struct Scheduler {
    stop: Arc<AtomicBool>,
}

impl Scheduler {
    /// Spawn the polling loop on its own runtime thread. The first cycle
    /// fires immediately, then every `BACKEND.refresh_secs` seconds.
    pub fn start(
        backend: Arc<dyn MetricsBackend>,
        channel: ChannelFilter,
    ) -> (Self, Receiver<CycleOutcome>) {
        let (tx, rx) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = stop.clone();

        thread::spawn(move || {
            let rt = match Runtime::new() {
                Ok(rt) => rt,
                Err(e) => {
                    log::error!("failed to create polling runtime: {e}");
                    return;
                }
            };
            rt.block_on(run_loop(backend, channel, tx, stop_flag));
        });

        (Self { stop }, rx)
    }

    pub fn stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn run_loop(
    backend: Arc<dyn MetricsBackend>,
    channel: ChannelFilter,
    tx: Sender<CycleOutcome>,
    stop: Arc<AtomicBool>,
) {
    let mut ticker = time::interval(Duration::from_secs(BACKEND.refresh_secs));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        if stop.load(Ordering::Relaxed) {
            break;
        }

        let outcome = load_snapshot(backend.as_ref(), channel).await;
        if DF.log_cycles {
            match &outcome {
                Ok(snapshot) => log::info!(
                    "polling cycle ok: {} products, window {} to {}",
                    snapshot.products.len(),
                    snapshot.range.date_from(),
                    snapshot.range.date_to()
                ),
                Err(err) => log::warn!("polling cycle failed: {err}"),
            }
        }

        if tx.send(outcome).is_err() {
            // UI side replaced or closed this channel
            break;
        }
    }
}
