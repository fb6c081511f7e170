use serde::{Deserialize, Serialize};

/// Kind of a node in the hardware tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceKind {
    Cpu,
    GpuNvidia,
    GpuAmd,
    Memory,
    Other,
}

impl DeviceKind {
    pub fn is_gpu(self) -> bool {
        matches!(self, DeviceKind::GpuNvidia | DeviceKind::GpuAmd)
    }

    /// Short lowercase tag used to build default identifiers
    pub fn slug(self) -> &'static str {
        match self {
            DeviceKind::Cpu => "cpu",
            DeviceKind::GpuNvidia => "gpu-nvidia",
            DeviceKind::GpuAmd => "gpu-amd",
            DeviceKind::Memory => "ram",
            DeviceKind::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensorKind {
    /// Utilization in percent
    Load,
    /// A quantity in a device-specific unit (gigabytes for memory)
    Data,
    Other,
}

/// A single measurement attached to a device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    pub kind: SensorKind,
    pub name: String,
    /// `None` until the first update, or forever when the metric does not exist here
    pub value: Option<f64>,
}

impl Sensor {
    pub fn new(kind: SensorKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            value: None,
        }
    }

    pub fn load(name: impl Into<String>) -> Self {
        Self::new(SensorKind::Load, name)
    }

    pub fn data(name: impl Into<String>) -> Self {
        Self::new(SensorKind::Data, name)
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }
}

/// A node in the hardware tree: a CPU package, a GPU, a memory bank, ...
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub kind: DeviceKind,
    /// Stable path-like id (`/gpu-nvidia/0`), used by backends to route updates
    pub identifier: String,
    pub name: String,
    pub sensors: Vec<Sensor>,
    pub children: Vec<Device>,
}

impl Device {
    pub fn new(kind: DeviceKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            identifier: format!("/{}/0", kind.slug()),
            name: name.into(),
            sensors: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }

    pub fn with_sensor(mut self, sensor: Sensor) -> Self {
        self.sensors.push(sensor);
        self
    }

    pub fn with_child(mut self, child: Device) -> Self {
        self.children.push(child);
        self
    }

    pub fn sensor(&self, name: &str) -> Option<&Sensor> {
        self.sensors.iter().find(|s| s.name == name)
    }

    /// Store a fresh value on the named sensor. Returns false if no such sensor exists.
    pub fn set_value(&mut self, name: &str, value: Option<f64>) -> bool {
        match self.sensors.iter_mut().find(|s| s.name == name) {
            Some(sensor) => {
                sensor.value = value;
                true
            }
            None => false,
        }
    }
}
