//! Sampling and aggregation engine.
//!
//! One cycle refreshes the hardware tree, picks one raw reading per metric,
//! smooths CPU load over a short window and produces a display-ready
//! [`Snapshot`].

pub mod alerts;
mod aggregator;
mod runtime;
mod selector;
mod smoother;

pub use aggregator::{round1, SampleStatus, Sampler, Snapshot, DEFAULT_GPU_PLACEHOLDER};
pub use alerts::{evaluate_alerts, Alert, AlertCategory, AlertConfig, AlertSeverity};
pub use runtime::{sampling_task, SamplerRuntime};
pub use selector::{
    select, select_all, select_cpu_load, select_gpu_load, select_memory_used, MetricCategory,
    RawReadings, CPU_TOTAL_SENSOR, MEMORY_USED_SENSOR, USED_MEMORY_SENSOR,
};
pub use smoother::{RollingWindow, WINDOW_CAPACITY};
