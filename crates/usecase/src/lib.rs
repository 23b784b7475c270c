//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`report`]: Property and file reports, each writing to any `io::Write`
//! - [`orchestrator`]: Runs both reports in their fixed order
//!
//! Use cases depend on ports, never on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod orchestrator;
pub mod report;

pub use orchestrator::{Probe, ProbeSummary};
pub use report::{FILES_BANNER, FilesOutcome, PROPERTIES_BANNER, ReportFiles, ReportProperties, TRAVERSAL_FAILURE};
