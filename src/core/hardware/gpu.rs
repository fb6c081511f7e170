use super::device::DeviceKind;
use crate::error::Result;

/// One reading taken from a GPU
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpuReading {
    pub load_percent: f64,
    pub memory_used_bytes: u64,
}

/// Trait for GPU metrics providers
///
/// This trait abstracts GPU monitoring across vendors (NVIDIA, AMD).
/// Implementations are provided in the platform layer.
pub trait GpuProvider: Send {
    /// Device kind this provider reports as (one of the GPU kinds)
    fn kind(&self) -> DeviceKind;

    /// Marketing name of the GPU
    fn name(&self) -> String;

    /// Index of the GPU within its vendor library
    fn index(&self) -> u32;

    /// Read current utilization and memory usage
    fn read(&mut self) -> Result<GpuReading>;
}
