// src/app.rs
use std::io::{self, BufWriter, Write};

use anyhow::Result;
use comm_lines_domain::Totals;
use comm_lines_infra::{Deadline, FsSourceOpener};
use comm_lines_ports::{Cancellation, NeverCancel};
use comm_lines_shared_kernel::{CommLinesError, InfrastructureError};
use comm_lines_usecase::CompareFiles;
use tracing::debug;

use crate::config::RunConfig;

/// Compare the two configured inputs, writing records to stdout.
pub fn run(config: &RunConfig) -> Result<Totals> {
    debug!(?config, "starting comparison");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let totals = run_with_output(config, &mut out)?;
    out.flush()
        .map_err(|source| CommLinesError::from(InfrastructureError::OutputWrite { source }))?;
    Ok(totals)
}

/// Same as [`run`] but writes to `out`; partial output stays in `out` on error.
pub fn run_with_output(config: &RunConfig, out: &mut dyn Write) -> Result<Totals> {
    // A deadline beyond the clock's range never fires.
    let cancel: Box<dyn Cancellation> = match config.timeout.and_then(Deadline::after) {
        Some(deadline) => Box::new(deadline),
        None => Box::new(NeverCancel),
    };
    let totals = CompareFiles::new(&FsSourceOpener, cancel.as_ref(), config.options).run(
        &config.first,
        &config.second,
        out,
    )?;
    Ok(totals)
}
