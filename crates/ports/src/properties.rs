// crates/ports/src/properties.rs
use sandbox_probe_shared_kernel::{PropertySnapshot, Result};

/// Port for capturing the process-visible configuration.
pub trait PropertySource: Send + Sync {
    fn snapshot(&self) -> Result<PropertySnapshot>;
}
