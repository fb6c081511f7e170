//! Hardware tree model.
//!
//! A machine is described as an ordered tree of devices, each carrying its
//! own sensors. The tree is read by the sampling layer and refreshed through a
//! [`SensorBackend`], which is the only place that talks to real hardware.

mod device;
mod gpu;
mod refresher;
mod tree;

pub use device::{Device, DeviceKind, Sensor, SensorKind};
pub use gpu::{GpuProvider, GpuReading};
pub use refresher::refresh_devices;
pub use tree::{Devices, HardwareTree, SensorBackend};
