//! GPU-specific platform code.
//!
//! Supports NVIDIA (via NVML) and AMD (via ROCm SMI).

mod amd;
mod nvidia;

pub use amd::AmdGpuProvider;
pub use nvidia::NvidiaGpuProvider;

use crate::core::hardware::GpuProvider;

/// Every GPU the enabled vendor libraries can see, NVIDIA first.
///
/// An empty list is a normal outcome on machines without a discrete GPU.
pub fn get_gpu_providers() -> Vec<Box<dyn GpuProvider>> {
    let mut providers: Vec<Box<dyn GpuProvider>> = Vec::new();

    for provider in NvidiaGpuProvider::discover() {
        providers.push(Box::new(provider));
    }

    for provider in AmdGpuProvider::discover() {
        providers.push(Box::new(provider));
    }

    log::info!("Found {} GPU(s)", providers.len());
    providers
}
