// crates/usecase/src/orchestrator.rs
use std::{io::Write, path::Path};

use sandbox_probe_ports::{filesystem::FileEnumerator, properties::PropertySource};
use sandbox_probe_shared_kernel::Result;

use crate::report::{FilesOutcome, ReportFiles, ReportProperties};

#[derive(Debug)]
pub struct ProbeSummary {
    pub properties: usize,
    pub files: FilesOutcome,
}

/// Property report to completion, then the file report. Nothing flows between the two.
pub struct Probe<'a> {
    properties: &'a dyn PropertySource,
    files: &'a dyn FileEnumerator,
}

impl<'a> Probe<'a> {
    pub fn new(properties: &'a dyn PropertySource, files: &'a dyn FileEnumerator) -> Self {
        Self { properties, files }
    }

    pub fn run(&self, root: &Path, out: &mut dyn Write) -> Result<ProbeSummary> {
        let properties = ReportProperties::new(self.properties).run(out)?;
        let files = ReportFiles::new(self.files).run(root, out)?;
        out.flush()?;
        Ok(ProbeSummary { properties, files })
    }
}
