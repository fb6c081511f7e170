use super::device::Device;
use super::refresher::refresh_devices;
use crate::error::Result;

/// Source of fresh sensor values for devices in the tree
///
/// `update` refreshes only the given device's own sensors, never its children.
pub trait SensorBackend: Send {
    fn update(&mut self, device: &mut Device) -> Result<()>;
}

/// Ordered forest of devices plus the backend that refreshes them
pub struct HardwareTree {
    roots: Vec<Device>,
    backend: Box<dyn SensorBackend>,
}

impl HardwareTree {
    pub fn new(roots: Vec<Device>, backend: Box<dyn SensorBackend>) -> Self {
        Self { roots, backend }
    }

    pub fn roots(&self) -> &[Device] {
        &self.roots
    }

    /// All devices in pre-order, following the declared child order
    pub fn devices(&self) -> Devices<'_> {
        Devices::new(&self.roots)
    }

    /// Update every device reachable from the roots
    pub fn refresh(&mut self) -> Result<()> {
        refresh_devices(&mut self.roots, self.backend.as_mut())
    }
}

impl std::fmt::Debug for HardwareTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HardwareTree")
            .field("roots", &self.roots)
            .finish_non_exhaustive()
    }
}

/// Pre-order iterator over a device forest
pub struct Devices<'a> {
    stack: Vec<&'a Device>,
}

impl<'a> Devices<'a> {
    pub fn new(roots: &'a [Device]) -> Self {
        Self {
            stack: roots.iter().rev().collect(),
        }
    }
}

impl<'a> Iterator for Devices<'a> {
    type Item = &'a Device;

    fn next(&mut self) -> Option<Self::Item> {
        let device = self.stack.pop()?;
        self.stack.extend(device.children.iter().rev());
        Some(device)
    }
}
