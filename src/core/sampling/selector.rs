use crate::core::hardware::{Device, DeviceKind, Devices, Sensor, SensorKind};

/// Substring identifying the aggregate CPU load sensor
pub const CPU_TOTAL_SENSOR: &str = "CPU Total";
/// Memory sensor names differ between backends
pub const USED_MEMORY_SENSOR: &str = "Used Memory";
pub const MEMORY_USED_SENSOR: &str = "Memory Used";

/// Tracked metric categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricCategory {
    CpuLoad,
    GpuLoad,
    MemoryUsed,
}

impl MetricCategory {
    fn accepts_device(self, kind: DeviceKind) -> bool {
        match self {
            MetricCategory::CpuLoad => kind == DeviceKind::Cpu,
            MetricCategory::GpuLoad => kind.is_gpu(),
            MetricCategory::MemoryUsed => kind == DeviceKind::Memory,
        }
    }

    fn accepts_sensor(self, sensor: &Sensor) -> bool {
        match self {
            MetricCategory::CpuLoad => {
                sensor.kind == SensorKind::Load && sensor.name.contains(CPU_TOTAL_SENSOR)
            }
            MetricCategory::GpuLoad => sensor.kind == SensorKind::Load,
            MetricCategory::MemoryUsed => {
                sensor.kind == SensorKind::Data
                    && (sensor.name == USED_MEMORY_SENSOR
                        || sensor.name.contains(MEMORY_USED_SENSOR))
            }
        }
    }
}

/// Value of the last matching sensor in traversal order.
///
/// Every device and sensor is scanned; a later match replaces an earlier one,
/// including a later match that has no value yet. `None` means either no
/// sensor matched or the winning sensor carries no value.
pub fn select(roots: &[Device], category: MetricCategory) -> Option<f64> {
    Devices::new(roots)
        .filter(|device| category.accepts_device(device.kind))
        .flat_map(|device| device.sensors.iter())
        .filter(|sensor| category.accepts_sensor(sensor))
        .last()
        .and_then(|sensor| sensor.value)
}

/// Raw CPU load in percent, `0.0` when nothing matches
pub fn select_cpu_load(roots: &[Device]) -> f64 {
    select(roots, MetricCategory::CpuLoad).unwrap_or(0.0)
}

/// Raw GPU load in percent, `None` when the machine has no tracked GPU.
///
/// Also `None` when the last GPU load sensor in traversal order has no value,
/// even if an earlier GPU reported one: a present GPU without a reading is
/// shown as unavailable.
pub fn select_gpu_load(roots: &[Device]) -> Option<f64> {
    select(roots, MetricCategory::GpuLoad)
}

/// Used memory in GB, `0.0` when nothing matches
pub fn select_memory_used(roots: &[Device]) -> f64 {
    select(roots, MetricCategory::MemoryUsed).unwrap_or(0.0)
}

/// One cycle's unsmoothed readings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawReadings {
    pub cpu_load: f64,
    pub gpu_load: Option<f64>,
    pub memory_used: f64,
}

pub fn select_all(roots: &[Device]) -> RawReadings {
    RawReadings {
        cpu_load: select_cpu_load(roots),
        gpu_load: select_gpu_load(roots),
        memory_used: select_memory_used(roots),
    }
}
