// crates/ports/src/filesystem.rs
use std::path::Path;

use sandbox_probe_shared_kernel::{FilePath, Result};

/// Lazy sequence of regular-file paths. Errors met mid-walk are yielded in place.
pub type FileStream<'a> = Box<dyn Iterator<Item = Result<FilePath>> + 'a>;

/// Port for enumerating regular files under a root.
pub trait FileEnumerator: Send + Sync {
    /// Opens a fresh traversal of `root`.
    ///
    /// Returns `Err` when the root cannot be traversed at all; nothing has been
    /// produced at that point. Each call starts over from the root.
    fn enumerate(&self, root: &Path) -> Result<FileStream<'_>>;
}
