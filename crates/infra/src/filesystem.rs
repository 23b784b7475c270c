// crates/infra/src/filesystem.rs
use std::{fs, path::Path};

use ignore::{DirEntry, WalkBuilder};
use sandbox_probe_ports::filesystem::{FileEnumerator, FileStream};
use sandbox_probe_shared_kernel::{FilePath, InfrastructureError, ProbeError, Result};

/// Filesystem adapter implementing the `FileEnumerator` port on top of `ignore`'s walker.
///
/// Every standard filter is off: hidden entries and ignore files are listed like
/// any other file. Symlinks are neither followed nor reported.
#[derive(Debug, Default, Clone, Copy)]
pub struct WalkFileEnumerator;

impl WalkFileEnumerator {
    pub fn new() -> Self {
        Self
    }

    pub fn open(root: &Path) -> Result<FileStream<'static>> {
        probe_root(root)?;
        tracing::debug!(root = %root.display(), "starting file walk");

        let walk = WalkBuilder::new(root).standard_filters(false).follow_links(false).build();
        Ok(Box::new(walk.filter_map(|entry| match entry {
            Ok(entry) => is_regular_file(&entry).then(|| Ok(FilePath::new(entry.into_path()))),
            Err(err) => Some(Err(ProbeError::from(err))),
        })))
    }
}

impl FileEnumerator for WalkFileEnumerator {
    fn enumerate(&self, root: &Path) -> Result<FileStream<'_>> {
        Self::open(root)
    }
}

// The walker only reports a bad root once iteration starts; checking up front
// lets the caller tell "cannot start" apart from a mid-walk failure.
fn probe_root(root: &Path) -> Result<()> {
    let metadata = fs::metadata(root).map_err(|source| fs_error("stat", root, source))?;
    if metadata.is_dir() {
        fs::read_dir(root).map_err(|source| fs_error("read_dir", root, source))?;
    }
    Ok(())
}

fn fs_error(operation: &str, path: &Path, source: std::io::Error) -> ProbeError {
    InfrastructureError::FileSystemOperation { operation: operation.to_string(), path: path.to_path_buf(), source }
        .into()
}

// `file_type` is the entry's own type (links are not resolved), so a symlink
// to a regular file is not a regular file here.
fn is_regular_file(entry: &DirEntry) -> bool {
    entry.file_type().is_some_and(|ft| ft.is_file())
}
