use std::sync::Arc;

use anyhow::{Context, Result};
use county_domain::{CountConfig, CountReport};
use county_infra::{FileRangeCounter, StdFileProbe};
use county_usecase::CountFileLines;

use crate::{args::Args, logging, presentation};

/// Count `config.file_path()` with the file-backed adapters.
///
/// # Errors
///
/// See [`CountFileLines::run`].
pub fn count_file(config: &CountConfig) -> county_shared_kernel::Result<CountReport> {
    let probe = StdFileProbe;
    CountFileLines::new(&probe, Arc::new(FileRangeCounter)).run(config)
}

pub fn run(args: Args) -> Result<()> {
    logging::init_cli_logger(args.verbose);

    let config = CountConfig::try_from(&args)
        .map_err(county_shared_kernel::CountyError::from)
        .context("invalid arguments")?;
    tracing::debug!(?config, "resolved configuration");

    let report = count_file(&config)
        .with_context(|| format!("failed to count lines in '{}'", config.file_path()))?;
    let rendered = presentation::render(&report, config.file_path(), args.format)
        .context("failed to render report")?;
    println!("{rendered}");
    Ok(())
}
