// src/main.rs
use std::io;

use anyhow::Result;
use clap::Parser;
use sandbox_probe::{args::Args, config::Config, logging};

fn main() -> Result<()> {
    let config = Config::from(Args::parse());
    logging::init_logger(config.verbosity);

    if config.ignored_args > 0 {
        tracing::debug!(count = config.ignored_args, "ignoring extra arguments");
    }

    sandbox_probe::run(&config, &mut io::stdout().lock())?;
    Ok(())
}
