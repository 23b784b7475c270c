// crates/shared-kernel/src/value_objects/mod.rs
pub mod file_path;
pub mod property_snapshot;

pub use file_path::FilePath;
pub use property_snapshot::{PropertySnapshot, escape_line_breaks};
