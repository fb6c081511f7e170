use crate::core::hardware::{DeviceKind, GpuProvider, GpuReading};
use crate::error::{EngineStatsError, Result};

#[cfg(all(unix, feature = "rocm"))]
use rocm_smi_lib::{DeviceHandle, RocmSmi};

/// AMD GPU provider using ROCm SMI
pub struct AmdGpuProvider {
    #[cfg(all(unix, feature = "rocm"))]
    rocm: RocmSmi,
    device_index: u32,
    name: String,
}

impl AmdGpuProvider {
    /// One provider per GPU that ROCm SMI reports. Empty when ROCm is missing.
    pub fn discover() -> Vec<Self> {
        #[cfg(all(unix, feature = "rocm"))]
        {
            let count = match RocmSmi::init() {
                Ok(rocm) => rocm.get_device_count().map(|c| c as u32).unwrap_or(0),
                Err(e) => {
                    log::debug!("ROCm SMI not available: {:?}", e);
                    return Vec::new();
                }
            };

            (0..count)
                .filter_map(|index| match Self::with_device_index(index) {
                    Ok(provider) => Some(provider),
                    Err(e) => {
                        log::warn!("Skipping AMD GPU {}: {}", index, e);
                        None
                    }
                })
                .collect()
        }
        #[cfg(not(all(unix, feature = "rocm")))]
        {
            Vec::new()
        }
    }

    /// Create provider for a specific GPU index
    pub fn with_device_index(index: u32) -> Result<Self> {
        #[cfg(all(unix, feature = "rocm"))]
        {
            let rocm = RocmSmi::init().map_err(|e| {
                EngineStatsError::gpu_not_available(format!("Failed to init ROCm SMI: {:?}", e))
            })?;

            let device = rocm.get_device_handle(index).map_err(|e| {
                EngineStatsError::gpu_not_available(format!("GPU {} not found: {:?}", index, e))
            })?;

            let name = rocm
                .get_device_name(&device)
                .unwrap_or_else(|_| "Unknown AMD GPU".to_string());

            Ok(Self {
                rocm,
                device_index: index,
                name,
            })
        }
        #[cfg(not(all(unix, feature = "rocm")))]
        {
            let _ = index;
            Err(EngineStatsError::gpu_not_available(
                "AMD GPU support not enabled or not on Unix",
            ))
        }
    }

    #[cfg(all(unix, feature = "rocm"))]
    fn get_device(&self) -> Result<DeviceHandle> {
        self.rocm.get_device_handle(self.device_index).map_err(|e| {
            EngineStatsError::metric_collection(format!("Failed to get GPU device: {:?}", e))
        })
    }
}

impl GpuProvider for AmdGpuProvider {
    fn kind(&self) -> DeviceKind {
        DeviceKind::GpuAmd
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn index(&self) -> u32 {
        self.device_index
    }

    fn read(&mut self) -> Result<GpuReading> {
        #[cfg(all(unix, feature = "rocm"))]
        {
            let device = self.get_device()?;

            let busy = self.rocm.get_busy_percent(&device).map_err(|e| {
                EngineStatsError::metric_collection(format!("Failed to get GPU load: {:?}", e))
            })?;

            let memory_used = self.rocm.get_memory_used(&device).unwrap_or(0);

            Ok(GpuReading {
                load_percent: busy as f64,
                memory_used_bytes: memory_used,
            })
        }
        #[cfg(not(all(unix, feature = "rocm")))]
        {
            Err(EngineStatsError::gpu_not_available(
                "AMD GPU support not enabled or not on Unix",
            ))
        }
    }
}
