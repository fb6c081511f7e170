// Platform-specific code module

pub mod gpu;
pub mod sysinfo_backend;

// Re-exports for cleaner imports
pub use gpu::get_gpu_providers;
pub use sysinfo_backend::{discover_tree, SysinfoBackend};
