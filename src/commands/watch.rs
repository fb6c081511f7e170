//! Continuous sampling command.

use anyhow::{Context, Result};
use clap::ArgMatches;

use super::once::warm_up;
use super::print_snapshot;
use crate::core::config::{Config, MIN_INTERVAL_MS};
use crate::core::sampling::{Sampler, SamplerRuntime};
use crate::platform::discover_tree;

/// Execute the watch command
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let mut config = Config::load()?;

    if let Some(&interval) = matches.get_one::<u64>("interval") {
        if interval < MIN_INTERVAL_MS {
            log::warn!(
                "Interval {}ms is below the minimum, using {}ms",
                interval,
                MIN_INTERVAL_MS
            );
        }
        config.interval_ms = interval;
    }

    let json = matches.get_flag("json");
    let count = matches.get_one::<usize>("count").copied();

    let mut sampler = Sampler::new(discover_tree(config.collect_gpu));
    warm_up(&mut sampler);

    let mut runtime =
        SamplerRuntime::start(sampler, config.interval()).context("Failed to start sampler")?;

    let shutdown = runtime.shutdown_handle();
    ctrlc::set_handler(move || {
        let _ = shutdown.send(());
    })
    .context("Failed to install Ctrl-C handler")?;

    let mut printed = 0usize;
    while let Some(snapshot) = runtime.recv() {
        print_snapshot(&snapshot, &config.gpu_placeholder, &config.alerts, json)?;

        printed += 1;
        if count.is_some_and(|limit| printed >= limit) {
            break;
        }
    }

    runtime.shutdown();
    Ok(())
}
