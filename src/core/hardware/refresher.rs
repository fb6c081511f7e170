use super::device::Device;
use super::tree::SensorBackend;
use crate::error::{EngineStatsError, Result};

/// Refresh a device forest.
///
/// Each device is updated before its children, in declared order. The first
/// failing device aborts the walk; devices after it keep their previous values.
pub fn refresh_devices(devices: &mut [Device], backend: &mut dyn SensorBackend) -> Result<()> {
    for device in devices.iter_mut() {
        if let Err(e) = backend.update(device) {
            log::warn!("Failed to update {} ({}): {}", device.name, device.identifier, e);
            return Err(match e {
                EngineStatsError::Traversal(_) => e,
                other => EngineStatsError::traversal(format!("{}: {}", device.name, other)),
            });
        }

        refresh_devices(&mut device.children, backend)?;
    }

    Ok(())
}
