// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod config;
pub mod logging;

use std::io::Write;

use anyhow::Result;
use sandbox_probe_infra::{HostPropertySource, WalkFileEnumerator};
use sandbox_probe_usecase::{Probe, ProbeSummary};

use crate::config::Config;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Writes the full report for `config` to `out`.
///
/// # Errors
/// Fails when the property snapshot cannot be captured or `out` rejects a
/// write. A failed file walk is reported in the output and is not an error.
pub fn run(config: &Config, out: &mut dyn Write) -> Result<ProbeSummary> {
    let properties = HostPropertySource::new();
    let files = WalkFileEnumerator::new();
    let summary = Probe::new(&properties, &files).run(&config.root, out)?;

    tracing::debug!(
        properties = summary.properties,
        files = summary.files.listed(),
        traversal_failed = summary.files.is_failed(),
        "probe finished"
    );
    Ok(summary)
}
