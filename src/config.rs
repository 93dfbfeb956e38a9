// src/config.rs
use std::time::Duration;

use comm_lines_domain::CompareOptions;
use comm_lines_shared_kernel::{CommLinesError, DomainError, PresentationError, Result};

use crate::cli::Args;

/// Number of file operands a comparison takes.
pub const OPERAND_COUNT: usize = 2;

/// Everything one invocation needs, validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub first: String,
    pub second: String,
    pub options: CompareOptions,
    pub timeout: Option<Duration>,
}

impl TryFrom<Args> for RunConfig {
    type Error = CommLinesError;

    fn try_from(args: Args) -> Result<Self> {
        validate_timeout("--timeout", args.timeout)?;
        let [first, second] = take_operands(args.files)?;

        let options = CompareOptions::builder()
            .suppress_first(args.suppress_first)
            .suppress_second(args.suppress_second)
            .suppress_common(args.suppress_common)
            .check_order(args.check_order && !args.nocheck_order)
            .total(args.total)
            .build()
            .map_err(DomainError::from)?;

        Ok(Self { first, second, options, timeout: args.timeout.map(Duration::from_secs) })
    }
}

fn take_operands(files: Vec<String>) -> Result<[String; OPERAND_COUNT]> {
    let found = files.len();
    <[String; OPERAND_COUNT]>::try_from(files)
        .map_err(|_| CommLinesError::from(PresentationError::InvalidArgumentCount { found }))
}

fn validate_timeout(flag: &str, timeout: Option<u64>) -> Result<()> {
    if timeout == Some(0) {
        return Err(PresentationError::InvalidValue {
            flag: flag.to_string(),
            value: "0".to_string(),
            reason: "must be at least 1".to_string(),
        }
        .into());
    }
    Ok(())
}
