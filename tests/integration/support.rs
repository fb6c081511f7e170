use std::collections::HashMap;
use std::sync::Arc;

use enginestats::core::hardware::{Device, DeviceKind, HardwareTree, Sensor, SensorBackend};
use enginestats::error::{EngineStatsError, Result};
use parking_lot::Mutex;

#[derive(Default)]
struct State {
    /// (device identifier, sensor name) -> value
    values: HashMap<(String, String), f64>,
    fail_next: bool,
    updates: usize,
}

/// Scriptable in-memory hardware shared between a test and its tree
#[derive(Clone, Default)]
pub struct FakeHardware {
    state: Arc<Mutex<State>>,
}

impl FakeHardware {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, identifier: &str, sensor: &str, value: f64) {
        self.state
            .lock()
            .values
            .insert((identifier.to_string(), sensor.to_string()), value);
    }

    /// Make the next device update fail, aborting that refresh
    pub fn fail_next_refresh(&self) {
        self.state.lock().fail_next = true;
    }

    pub fn update_count(&self) -> usize {
        self.state.lock().updates
    }

    pub fn tree(&self, roots: Vec<Device>) -> HardwareTree {
        HardwareTree::new(roots, Box::new(FakeBackend { hw: self.clone() }))
    }
}

struct FakeBackend {
    hw: FakeHardware,
}

impl SensorBackend for FakeBackend {
    fn update(&mut self, device: &mut Device) -> Result<()> {
        let mut state = self.hw.state.lock();
        if state.fail_next {
            state.fail_next = false;
            return Err(EngineStatsError::metric_collection("permission denied"));
        }

        state.updates += 1;
        for sensor in &mut device.sensors {
            let key = (device.identifier.clone(), sensor.name.clone());
            if let Some(value) = state.values.get(&key) {
                sensor.value = Some(*value);
            }
        }
        Ok(())
    }
}

pub fn cpu(identifier: &str) -> Device {
    Device::new(DeviceKind::Cpu, format!("CPU {}", identifier))
        .with_identifier(identifier)
        .with_sensor(Sensor::load("CPU Core #1"))
        .with_sensor(Sensor::load("CPU Total"))
}

pub fn memory(identifier: &str) -> Device {
    Device::new(DeviceKind::Memory, "Generic Memory")
        .with_identifier(identifier)
        .with_sensor(Sensor::data("Memory Used"))
        .with_sensor(Sensor::data("Memory Available"))
}

pub fn gpu(kind: DeviceKind, identifier: &str) -> Device {
    Device::new(kind, "Test GPU")
        .with_identifier(identifier)
        .with_sensor(Sensor::load("GPU Core"))
        .with_sensor(Sensor::data("GPU Memory Used"))
}

pub fn host(children: Vec<Device>) -> Device {
    let mut host = Device::new(DeviceKind::Other, "test-host").with_identifier("/host");
    host.children = children;
    host
}
