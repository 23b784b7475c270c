//! # Ports
//!
//! Interface definitions for host dependencies.
//!
//! - [`properties`]: Snapshot of the process configuration
//! - [`filesystem`]: Recursive enumeration of regular files
//!
//! The use cases depend only on these traits, never on the host adapters.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod properties;
