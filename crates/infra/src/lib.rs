// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod properties;

pub use filesystem::WalkFileEnumerator;
pub use properties::HostPropertySource;
