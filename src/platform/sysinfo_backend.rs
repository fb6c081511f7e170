//! Sensor backend for the local machine.
//!
//! CPU and memory come from `sysinfo`; GPUs come from the vendor providers in
//! [`crate::platform::gpu`].

use std::collections::HashMap;

use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};

use crate::core::hardware::{
    Device, DeviceKind, GpuProvider, HardwareTree, Sensor, SensorBackend,
};
use crate::core::sampling::{CPU_TOTAL_SENSOR, MEMORY_USED_SENSOR};
use crate::error::{EngineStatsError, Result};
use crate::platform::gpu::get_gpu_providers;

const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

const MEMORY_AVAILABLE_SENSOR: &str = "Memory Available";
const MEMORY_LOAD_SENSOR: &str = "Memory";
const GPU_CORE_SENSOR: &str = "GPU Core";
const GPU_MEMORY_USED_SENSOR: &str = "GPU Memory Used";

fn core_sensor_name(index: usize) -> String {
    format!("CPU Core #{}", index + 1)
}

fn to_gb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_GB
}

pub struct SysinfoBackend {
    system: System,
    /// GPU providers keyed by device identifier
    gpus: HashMap<String, Box<dyn GpuProvider>>,
}

impl SysinfoBackend {
    pub fn new() -> Self {
        let refresh_kind = RefreshKind::nothing()
            .with_cpu(CpuRefreshKind::nothing().with_cpu_usage())
            .with_memory(MemoryRefreshKind::nothing().with_ram());

        Self {
            system: System::new_with_specifics(refresh_kind),
            gpus: HashMap::new(),
        }
    }

    fn cpu_device(&self) -> Device {
        let brand = self
            .system
            .cpus()
            .first()
            .map(|c| c.brand().trim().to_string())
            .filter(|b| !b.is_empty())
            .unwrap_or_else(|| "Generic CPU".to_string());

        let mut device = Device::new(DeviceKind::Cpu, brand);
        for index in 0..self.system.cpus().len() {
            device = device.with_sensor(Sensor::load(core_sensor_name(index)));
        }
        device.with_sensor(Sensor::load(CPU_TOTAL_SENSOR))
    }

    fn memory_device() -> Device {
        Device::new(DeviceKind::Memory, "Generic Memory")
            .with_sensor(Sensor::load(MEMORY_LOAD_SENSOR))
            .with_sensor(Sensor::data(MEMORY_USED_SENSOR))
            .with_sensor(Sensor::data(MEMORY_AVAILABLE_SENSOR))
    }

    /// Take ownership of a GPU provider and describe it as a device
    fn register_gpu(&mut self, provider: Box<dyn GpuProvider>) -> Device {
        let kind = provider.kind();
        let identifier = format!("/{}/{}", kind.slug(), provider.index());
        let device = Device::new(kind, provider.name())
            .with_identifier(identifier.clone())
            .with_sensor(Sensor::load(GPU_CORE_SENSOR))
            .with_sensor(Sensor::data(GPU_MEMORY_USED_SENSOR));

        self.gpus.insert(identifier, provider);
        device
    }

    fn update_cpu(&mut self, device: &mut Device) {
        self.system.refresh_cpu_usage();

        for (index, cpu) in self.system.cpus().iter().enumerate() {
            device.set_value(&core_sensor_name(index), Some(f64::from(cpu.cpu_usage())));
        }
        device.set_value(
            CPU_TOTAL_SENSOR,
            Some(f64::from(self.system.global_cpu_usage())),
        );
    }

    fn update_memory(&mut self, device: &mut Device) {
        self.system.refresh_memory();

        let total = self.system.total_memory();
        let used = self.system.used_memory();
        let load = if total > 0 {
            Some(used as f64 / total as f64 * 100.0)
        } else {
            None
        };

        device.set_value(MEMORY_LOAD_SENSOR, load);
        device.set_value(MEMORY_USED_SENSOR, Some(to_gb(used)));
        device.set_value(
            MEMORY_AVAILABLE_SENSOR,
            Some(to_gb(self.system.available_memory())),
        );
    }

    fn update_gpu(&mut self, device: &mut Device) -> Result<()> {
        let provider = self.gpus.get_mut(&device.identifier).ok_or_else(|| {
            EngineStatsError::gpu_not_available(format!(
                "No provider registered for {}",
                device.identifier
            ))
        })?;

        let reading = provider.read().map_err(|e| {
            log::warn!("GPU read failed on {} ({}): {}", device.name, device.identifier, e);
            EngineStatsError::metric_collection(format!(
                "GPU {} ({}) read failed: {}",
                device.name, device.identifier, e
            ))
        })?;
        device.set_value(GPU_CORE_SENSOR, Some(reading.load_percent));
        device.set_value(GPU_MEMORY_USED_SENSOR, Some(to_gb(reading.memory_used_bytes)));
        Ok(())
    }
}

impl Default for SysinfoBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorBackend for SysinfoBackend {
    fn update(&mut self, device: &mut Device) -> Result<()> {
        match device.kind {
            DeviceKind::Cpu => self.update_cpu(device),
            DeviceKind::Memory => self.update_memory(device),
            DeviceKind::GpuNvidia | DeviceKind::GpuAmd => self.update_gpu(device)?,
            DeviceKind::Other => {}
        }
        Ok(())
    }
}

/// Build the hardware tree for this machine.
///
/// The root is the host; CPU, memory and any GPUs found are its children.
pub fn discover_tree(collect_gpu: bool) -> HardwareTree {
    let mut backend = SysinfoBackend::new();

    let host_name = System::host_name().unwrap_or_else(|| "localhost".to_string());
    let mut host = Device::new(DeviceKind::Other, host_name).with_identifier("/host");

    host.children.push(backend.cpu_device());
    host.children.push(SysinfoBackend::memory_device());

    if collect_gpu {
        for provider in get_gpu_providers() {
            host.children.push(backend.register_gpu(provider));
        }
    } else {
        log::debug!("GPU collection disabled");
    }

    HardwareTree::new(vec![host], Box::new(backend))
}
