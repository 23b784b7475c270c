// crates/usecase/src/report.rs
use std::{io::Write, path::Path};

use sandbox_probe_ports::{filesystem::FileEnumerator, properties::PropertySource};
use sandbox_probe_shared_kernel::{ApplicationError, ErrorContext, ProbeError, Result, escape_line_breaks};

pub const PROPERTIES_BANNER: &str = "########## Properties ##########";
/// Includes the two leading blank lines.
pub const FILES_BANNER: &str = "\n\n############# Files ############";
pub const TRAVERSAL_FAILURE: &str = "We got ourselves an IOExcetion!";

/// Prints every property of the snapshot as `key: value`.
pub struct ReportProperties<'a> {
    source: &'a dyn PropertySource,
}

impl<'a> ReportProperties<'a> {
    pub fn new(source: &'a dyn PropertySource) -> Self {
        Self { source }
    }

    /// Returns the number of property lines written. Line breaks inside keys
    /// and values are escaped so each property stays on one line.
    ///
    /// # Errors
    /// Fails when the snapshot cannot be captured or `out` rejects a write.
    pub fn run(&self, out: &mut dyn Write) -> Result<usize> {
        writeln!(out, "{PROPERTIES_BANNER}").context("writing properties banner")?;

        let snapshot = self.source.snapshot().map_err(|e| ApplicationError::PropertyReportFailed {
            reason: "configuration snapshot unavailable".to_string(),
            source: Some(Box::new(e)),
        })?;

        for (key, value) in snapshot.iter() {
            writeln!(out, "{}: {}", escape_line_breaks(key), escape_line_breaks(value))
                .with_context(|| format!("writing property '{}'", escape_line_breaks(key)))?;
        }
        tracing::debug!(properties = snapshot.len(), "property report complete");
        Ok(snapshot.len())
    }
}

/// Result of the file report. A traversal failure is an outcome, not an error.
#[derive(Debug)]
pub enum FilesOutcome {
    Listed { files: usize },
    /// The fallback line was printed after `listed` paths.
    Failed { listed: usize, error: ProbeError },
}

impl FilesOutcome {
    pub fn listed(&self) -> usize {
        match self {
            Self::Listed { files } => *files,
            Self::Failed { listed, .. } => *listed,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// Prints every regular file under a root, one path per line, as the walk produces it.
pub struct ReportFiles<'a> {
    enumerator: &'a dyn FileEnumerator,
}

impl<'a> ReportFiles<'a> {
    pub fn new(enumerator: &'a dyn FileEnumerator) -> Self {
        Self { enumerator }
    }

    /// # Errors
    /// Only write failures on `out` are returned; traversal failures are
    /// reported in-band and surface as [`FilesOutcome::Failed`].
    pub fn run(&self, root: &Path, out: &mut dyn Write) -> Result<FilesOutcome> {
        let write_failed = |e: std::io::Error| -> ProbeError {
            ApplicationError::FileReportFailed {
                root: root.to_path_buf(),
                reason: "writing output".to_string(),
                source: Some(Box::new(e.into())),
            }
            .into()
        };

        writeln!(out, "{FILES_BANNER}").map_err(write_failed)?;

        let stream = match self.enumerator.enumerate(root) {
            Ok(stream) => stream,
            Err(error) => {
                tracing::warn!(root = %root.display(), %error, "file traversal could not start");
                writeln!(out, "{TRAVERSAL_FAILURE}").map_err(write_failed)?;
                return Ok(FilesOutcome::Failed { listed: 0, error });
            }
        };

        let mut listed = 0;
        for item in stream {
            match item {
                Ok(path) => {
                    writeln!(out, "{}", path.to_string_lossy()).map_err(write_failed)?;
                    listed += 1;
                }
                Err(error) => {
                    tracing::warn!(root = %root.display(), listed, %error, "file traversal failed");
                    writeln!(out, "{TRAVERSAL_FAILURE}").map_err(write_failed)?;
                    return Ok(FilesOutcome::Failed { listed, error });
                }
            }
        }

        tracing::debug!(files = listed, "file report complete");
        Ok(FilesOutcome::Listed { files: listed })
    }
}
