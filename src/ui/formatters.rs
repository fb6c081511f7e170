use colored::*;

use crate::core::hardware::{Device, Sensor, SensorKind};
use crate::core::sampling::{Alert, AlertSeverity};

/// Format a sensor reading with its unit, or `-` when it has no value
pub fn format_sensor_value(sensor: &Sensor) -> String {
    match (sensor.kind, sensor.value) {
        (_, None) => "-".to_string(),
        (SensorKind::Load, Some(v)) => format!("{:.1}%", v),
        (SensorKind::Data, Some(v)) => format!("{:.1} GB", v),
        (SensorKind::Other, Some(v)) => format!("{:.1}", v),
    }
}

/// Indented text dump of a device forest
pub fn format_tree(roots: &[Device]) -> String {
    let mut out = String::new();
    for device in roots {
        write_device(&mut out, device, 0);
    }
    out
}

fn write_device(out: &mut String, device: &Device, depth: usize) {
    let indent = "  ".repeat(depth);
    out.push_str(&format!(
        "{}{} [{:?}] {}\n",
        indent, device.name, device.kind, device.identifier
    ));

    for sensor in &device.sensors {
        out.push_str(&format!(
            "{}    {:<5} {}: {}\n",
            indent,
            format!("{:?}", sensor.kind),
            sensor.name,
            format_sensor_value(sensor)
        ));
    }

    for child in &device.children {
        write_device(out, child, depth + 1);
    }
}

/// Colored single-line alert
pub fn format_alert(alert: &Alert) -> ColoredString {
    match alert.severity {
        AlertSeverity::Critical => format!("✗ {}", alert.message).red().bold(),
        AlertSeverity::Warning => format!("⚠ {}", alert.message).yellow(),
    }
}
