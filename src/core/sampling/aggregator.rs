use std::fmt;

use serde::{Deserialize, Serialize};

use super::selector::select_all;
use super::smoother::RollingWindow;
use crate::core::hardware::HardwareTree;

/// Marker rendered in place of the GPU percentage when no GPU exists
pub const DEFAULT_GPU_PLACEHOLDER: &str = "N/A";

/// Outcome of one sampling cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "message", rename_all = "lowercase")]
pub enum SampleStatus {
    Ok,
    Error(String),
}

/// Display-ready telemetry for one cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub timestamp: i64, // Unix timestamp
    /// Smoothed over the last few cycles
    pub cpu_percent: f64,
    /// `None` when the machine has no tracked GPU, distinct from an idle GPU
    pub gpu_percent: Option<f64>,
    pub ram_used_gb: f64,
    pub status: SampleStatus,
}

impl Snapshot {
    pub fn new(cpu_percent: f64, gpu_percent: Option<f64>, ram_used_gb: f64) -> Self {
        Self {
            timestamp: chrono::Utc::now().timestamp(),
            cpu_percent,
            gpu_percent,
            ram_used_gb,
            status: SampleStatus::Ok,
        }
    }

    /// Snapshot for a cycle that could not read the hardware
    pub fn failed<S: Into<String>>(message: S) -> Self {
        Self {
            timestamp: chrono::Utc::now().timestamp(),
            cpu_percent: 0.0,
            gpu_percent: None,
            ram_used_gb: 0.0,
            status: SampleStatus::Error(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == SampleStatus::Ok
    }

    /// Presentation line, using `gpu_placeholder` when there is no GPU
    pub fn render(&self, gpu_placeholder: &str) -> String {
        match &self.status {
            SampleStatus::Error(message) => format!("Error: {}", message),
            SampleStatus::Ok => {
                let gpu = match self.gpu_percent {
                    Some(gpu) => format!("{:.1}%", gpu),
                    None => gpu_placeholder.to_string(),
                };
                format!(
                    "CPU: {:.1}% | GPU: {} | RAM: {:.1}GB",
                    self.cpu_percent, gpu, self.ram_used_gb
                )
            }
        }
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_GPU_PLACEHOLDER))
    }
}

/// Round to one decimal place
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Runs sampling cycles against one hardware tree
///
/// Cycles must not overlap; `sample` takes `&mut self` so the borrow checker
/// enforces that for a single instance.
#[derive(Debug)]
pub struct Sampler {
    tree: HardwareTree,
    cpu_window: RollingWindow,
}

impl Sampler {
    pub fn new(tree: HardwareTree) -> Self {
        Self {
            tree,
            cpu_window: RollingWindow::new(),
        }
    }

    pub fn tree(&self) -> &HardwareTree {
        &self.tree
    }

    pub fn cpu_window(&self) -> &RollingWindow {
        &self.cpu_window
    }

    /// Refresh the tree without recording anything.
    ///
    /// Load counters that are computed from the delta between two refreshes
    /// need a baseline; call this once, wait, then start sampling.
    pub fn prime(&mut self) -> crate::error::Result<()> {
        self.tree.refresh()
    }

    /// Run one cycle. Never fails: a refresh error becomes an error snapshot
    /// and leaves the smoothing window untouched.
    pub fn sample(&mut self) -> Snapshot {
        if let Err(e) = self.tree.refresh() {
            log::warn!("Sampling cycle abandoned: {}", e);
            return Snapshot::failed(e.to_string());
        }

        let raw = select_all(self.tree.roots());
        let cpu = self.cpu_window.push(raw.cpu_load);

        log::trace!(
            "raw cpu={:.2} gpu={:?} ram={:.2} smoothed cpu={:.2}",
            raw.cpu_load,
            raw.gpu_load,
            raw.memory_used,
            cpu
        );

        Snapshot::new(round1(cpu), raw.gpu_load.map(round1), round1(raw.memory_used))
    }
}
