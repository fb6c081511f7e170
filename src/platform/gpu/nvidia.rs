#[cfg(feature = "nvml")]
use nvml_wrapper::{Device as NvmlDevice, Nvml};

use crate::core::hardware::{DeviceKind, GpuProvider, GpuReading};
use crate::error::{EngineStatsError, Result};

/// NVIDIA GPU provider using NVML
pub struct NvidiaGpuProvider {
    #[cfg(feature = "nvml")]
    nvml: Nvml,
    device_index: u32,
    name: String,
}

impl NvidiaGpuProvider {
    /// One provider per GPU that NVML reports. Empty when NVML is missing.
    pub fn discover() -> Vec<Self> {
        #[cfg(feature = "nvml")]
        {
            let count = match Nvml::init().and_then(|nvml| nvml.device_count()) {
                Ok(count) => count,
                Err(e) => {
                    log::debug!("NVML not available: {}", e);
                    return Vec::new();
                }
            };

            (0..count)
                .filter_map(|index| match Self::with_device_index(index) {
                    Ok(provider) => Some(provider),
                    Err(e) => {
                        log::warn!("Skipping NVIDIA GPU {}: {}", index, e);
                        None
                    }
                })
                .collect()
        }
        #[cfg(not(feature = "nvml"))]
        {
            Vec::new()
        }
    }

    /// Create provider for a specific GPU index
    pub fn with_device_index(index: u32) -> Result<Self> {
        #[cfg(feature = "nvml")]
        {
            let nvml = Nvml::init().map_err(|e| {
                EngineStatsError::gpu_not_available(format!("Failed to init NVML: {}", e))
            })?;

            let name = nvml
                .device_by_index(index)
                .map_err(|e| {
                    EngineStatsError::gpu_not_available(format!("GPU {} not found: {}", index, e))
                })?
                .name()
                .unwrap_or_else(|_| "Unknown NVIDIA GPU".to_string());

            Ok(Self {
                nvml,
                device_index: index,
                name,
            })
        }
        #[cfg(not(feature = "nvml"))]
        {
            let _ = index;
            Err(EngineStatsError::gpu_not_available(
                "NVIDIA GPU support not enabled",
            ))
        }
    }

    #[cfg(feature = "nvml")]
    fn get_device(&self) -> Result<NvmlDevice<'_>> {
        self.nvml.device_by_index(self.device_index).map_err(|e| {
            EngineStatsError::metric_collection(format!("Failed to get GPU device: {}", e))
        })
    }
}

impl GpuProvider for NvidiaGpuProvider {
    fn kind(&self) -> DeviceKind {
        DeviceKind::GpuNvidia
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn index(&self) -> u32 {
        self.device_index
    }

    fn read(&mut self) -> Result<GpuReading> {
        #[cfg(feature = "nvml")]
        {
            let device = self.get_device()?;

            let utilization = device.utilization_rates().map_err(|e| {
                EngineStatsError::metric_collection(format!("Failed to get utilization: {}", e))
            })?;

            let memory_info = device.memory_info().map_err(|e| {
                EngineStatsError::metric_collection(format!("Failed to get memory info: {}", e))
            })?;

            Ok(GpuReading {
                load_percent: f64::from(utilization.gpu),
                memory_used_bytes: memory_info.used,
            })
        }
        #[cfg(not(feature = "nvml"))]
        {
            Err(EngineStatsError::gpu_not_available(
                "NVIDIA GPU support not enabled",
            ))
        }
    }
}
