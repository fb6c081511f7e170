//! Single-reading command.

use anyhow::Result;
use clap::ArgMatches;

use super::print_snapshot;
use crate::core::config::Config;
use crate::core::sampling::Sampler;
use crate::platform::discover_tree;

/// Execute the once command
///
/// CPU usage is computed from the delta between two refreshes, so the tree is
/// primed first and only the reading taken after the wait is sampled.
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = Config::load()?;
    let json = matches.get_flag("json");

    let mut sampler = Sampler::new(discover_tree(config.collect_gpu));
    warm_up(&mut sampler);
    let snapshot = sampler.sample();

    print_snapshot(&snapshot, &config.gpu_placeholder, &config.alerts, json)
}

/// Take the CPU baseline and wait long enough for the next reading to be meaningful
///
/// A failed baseline is only logged; the sampled cycle reports its own error.
pub(crate) fn warm_up(sampler: &mut Sampler) {
    if let Err(e) = sampler.prime() {
        log::warn!("Initial hardware reading failed: {}", e);
    }
    std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
}
