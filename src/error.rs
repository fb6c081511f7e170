use std::io;
use thiserror::Error;

/// Custom error type for the telemetry engine
#[derive(Error, Debug)]
pub enum EngineStatsError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Hardware traversal failed: {0}")]
    Traversal(String),

    #[error("GPU not available: {0}")]
    GpuNotAvailable(String),

    #[error("Metric collection failed: {0}")]
    MetricCollection(String),

    #[error("Runtime error: {0}")]
    Runtime(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for the telemetry engine
pub type Result<T> = std::result::Result<T, EngineStatsError>;

impl EngineStatsError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        EngineStatsError::Config(msg.into())
    }

    /// Create a traversal error (tree refresh failed mid-cycle)
    pub fn traversal<S: Into<String>>(msg: S) -> Self {
        EngineStatsError::Traversal(msg.into())
    }

    pub fn gpu_not_available<S: Into<String>>(msg: S) -> Self {
        EngineStatsError::GpuNotAvailable(msg.into())
    }

    pub fn metric_collection<S: Into<String>>(msg: S) -> Self {
        EngineStatsError::MetricCollection(msg.into())
    }

    pub fn runtime<S: Into<String>>(msg: S) -> Self {
        EngineStatsError::Runtime(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        EngineStatsError::Other(msg.into())
    }
}
