// Core business logic module

pub mod config;
pub mod hardware;
pub mod sampling;

// Re-export commonly used items
pub use config::Config;
pub use hardware::{Device, DeviceKind, HardwareTree, Sensor, SensorBackend, SensorKind};
pub use sampling::{SampleStatus, Sampler, SamplerRuntime, Snapshot};
