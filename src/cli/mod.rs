// src/cli/mod.rs
mod args;

pub use args::Args;
use clap::Parser;
use comm_lines_shared_kernel::Result;

use crate::config::RunConfig;

/// Parse the process arguments into a validated run configuration.
///
/// Malformed flags exit through clap; operand and value problems come back
/// as errors so the caller can report them in the usual `comm: ...` form.
pub fn load_config() -> Result<RunConfig> {
    RunConfig::try_from(Args::parse())
}
