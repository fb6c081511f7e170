//! Threshold alerts for sampled telemetry.

use super::aggregator::Snapshot;
use serde::{Deserialize, Serialize};

/// Alert configuration with thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    pub cpu_warning: f64,     // %
    pub cpu_critical: f64,    // %
    pub gpu_warning: f64,     // %
    pub gpu_critical: f64,    // %
    pub memory_warning_gb: f64,  // GB, 0 disables
    pub memory_critical_gb: f64, // GB, 0 disables
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            cpu_warning: 75.0,
            cpu_critical: 90.0,
            gpu_warning: 80.0,
            gpu_critical: 95.0,
            memory_warning_gb: 0.0,
            memory_critical_gb: 0.0,
        }
    }
}

/// An individual alert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub severity: AlertSeverity,
    pub category: AlertCategory,
    pub message: String,
    pub value: f64,
    pub threshold: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertSeverity {
    Warning,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertCategory {
    Cpu,
    Gpu,
    Memory,
}

impl AlertCategory {
    fn label(self) -> &'static str {
        match self {
            AlertCategory::Cpu => "CPU usage",
            AlertCategory::Gpu => "GPU usage",
            AlertCategory::Memory => "Memory used",
        }
    }

    fn unit(self) -> &'static str {
        match self {
            AlertCategory::Cpu | AlertCategory::Gpu => "%",
            AlertCategory::Memory => "GB",
        }
    }
}

fn check(
    alerts: &mut Vec<Alert>,
    category: AlertCategory,
    value: f64,
    warning: f64,
    critical: f64,
) {
    let (severity, threshold) = if critical > 0.0 && value >= critical {
        (AlertSeverity::Critical, critical)
    } else if warning > 0.0 && value >= warning {
        (AlertSeverity::Warning, warning)
    } else {
        return;
    };

    let level = match severity {
        AlertSeverity::Critical => "critical",
        AlertSeverity::Warning => "warning",
    };

    alerts.push(Alert {
        severity,
        category,
        message: format!(
            "{} at {:.1}{} ({} threshold: {:.1}{})",
            category.label(),
            value,
            category.unit(),
            level,
            threshold,
            category.unit()
        ),
        value,
        threshold,
    });
}

/// Evaluate a snapshot against thresholds.
///
/// Error snapshots and a missing GPU never raise alerts.
pub fn evaluate_alerts(snapshot: &Snapshot, config: &AlertConfig) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if !snapshot.is_ok() {
        return alerts;
    }

    check(
        &mut alerts,
        AlertCategory::Cpu,
        snapshot.cpu_percent,
        config.cpu_warning,
        config.cpu_critical,
    );

    if let Some(gpu) = snapshot.gpu_percent {
        check(
            &mut alerts,
            AlertCategory::Gpu,
            gpu,
            config.gpu_warning,
            config.gpu_critical,
        );
    }

    check(
        &mut alerts,
        AlertCategory::Memory,
        snapshot.ram_used_gb,
        config.memory_warning_gb,
        config.memory_critical_gb,
    );

    alerts
}
