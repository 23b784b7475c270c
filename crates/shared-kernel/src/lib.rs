// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{ApplicationError, ErrorContext, InfrastructureError, ProbeError, Result};

pub mod error;
pub mod value_objects;

pub use value_objects::{FilePath, PropertySnapshot, escape_line_breaks};
