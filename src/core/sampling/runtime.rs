//! Tokio runtime driving the sampler on a fixed interval.
//!
//! A single task owns the [`Sampler`], so cycles run strictly one after the
//! other. Each snapshot is published on a watch channel; a failing cycle is
//! published like any other and the next tick tries again.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, watch};
use tokio::time::{interval, MissedTickBehavior};

use super::aggregator::{Sampler, Snapshot};
use crate::error::{EngineStatsError, Result};

/// Wrapper around the Tokio runtime running the sampling task.
pub struct SamplerRuntime {
    /// Latest snapshot, `None` until the first cycle completes
    snapshot_rx: watch::Receiver<Option<Arc<Snapshot>>>,

    /// Shutdown signal sender
    shutdown_tx: broadcast::Sender<()>,

    runtime: tokio::runtime::Runtime,
}

impl SamplerRuntime {
    /// Spawn the sampling task, ticking every `period`.
    pub fn start(sampler: Sampler, period: Duration) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .thread_name("sampler-worker")
            .build()
            .map_err(|e| EngineStatsError::runtime(format!("Failed to build runtime: {}", e)))?;

        let (snapshot_tx, snapshot_rx) = watch::channel(None);
        let (shutdown_tx, _) = broadcast::channel::<()>(1);

        runtime.spawn(sampling_task(
            sampler,
            period,
            snapshot_tx,
            shutdown_tx.subscribe(),
        ));

        log::debug!("Sampler runtime started with {:?} interval", period);

        Ok(Self {
            snapshot_rx,
            shutdown_tx,
            runtime,
        })
    }

    /// A fresh receiver for snapshot updates
    pub fn subscribe(&self) -> watch::Receiver<Option<Arc<Snapshot>>> {
        self.snapshot_rx.clone()
    }

    /// Sender that stops the sampling task when signalled (e.g. from Ctrl-C)
    pub fn shutdown_handle(&self) -> broadcast::Sender<()> {
        self.shutdown_tx.clone()
    }

    /// Block until the next snapshot is published.
    ///
    /// Returns `None` once the sampling task has stopped.
    pub fn recv(&mut self) -> Option<Arc<Snapshot>> {
        let rx = &mut self.snapshot_rx;
        self.runtime.block_on(async {
            rx.changed().await.ok()?;
            let latest = rx.borrow_and_update().clone();
            latest
        })
    }

    /// Shutdown the runtime gracefully.
    pub fn shutdown(self) {
        log::debug!("Shutting down sampler runtime");
        let _ = self.shutdown_tx.send(());
        // Runtime will shutdown when dropped
    }
}

/// Sampling loop: one cycle per tick until shutdown or until nobody listens.
pub async fn sampling_task(
    mut sampler: Sampler,
    period: Duration,
    snapshot_tx: watch::Sender<Option<Arc<Snapshot>>>,
    mut shutdown: broadcast::Receiver<()>,
) {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let snapshot = sampler.sample();
                if snapshot_tx.send(Some(Arc::new(snapshot))).is_err() {
                    break;
                }
            }
            _ = shutdown.recv() => {
                log::debug!("Sampling task shutting down");
                break;
            }
        }
    }
}
