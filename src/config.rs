// src/config.rs
use std::path::PathBuf;

use crate::args::Args;

/// Runtime configuration derived from CLI arguments.
#[derive(Debug, Clone)]
pub struct Config {
    /// Traversal root. Always the working directory for the binary.
    pub root: PathBuf,
    pub verbosity: u8,
    pub ignored_args: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { root: PathBuf::from("."), verbosity: 0, ignored_args: 0 }
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self { verbosity: args.verbose, ignored_args: args.ignored.len(), ..Self::default() }
    }
}
