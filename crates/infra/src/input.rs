// crates/infra/src/input.rs
use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
};

use comm_lines_ports::{LineSource, SourceOpener};
use comm_lines_shared_kernel::{InfrastructureError, Line, Result};
use tracing::debug;

use crate::reader::{ReaderSource, read_line};

/// Operand naming standard input.
pub const STDIN_OPERAND: &str = "-";

/// Where one side of the comparison reads from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    pub fn from_operand(operand: &str) -> Self {
        if operand == STDIN_OPERAND { Self::Stdin } else { Self::File(PathBuf::from(operand)) }
    }

    /// Open the input as a line source labelled `operand`.
    pub fn open(&self, operand: &str) -> io::Result<Box<dyn LineSource>> {
        match self {
            Self::Stdin => Ok(Box::new(StdinSource::new(operand))),
            Self::File(path) => {
                let reader = BufReader::new(File::open(path)?);
                Ok(Box::new(ReaderSource::new(operand, reader)))
            }
        }
    }
}

/// Standard input, read through the process-wide stdin buffer.
///
/// The stdin lock is held for one line at a time, so when both operands
/// are `-` the two sides take alternate lines from the same stream.
#[derive(Debug)]
pub struct StdinSource {
    label: String,
    exhausted: bool,
}

impl StdinSource {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), exhausted: false }
    }
}

impl LineSource for StdinSource {
    fn next_line(&mut self) -> Result<Option<Line>> {
        if self.exhausted {
            return Ok(None);
        }
        let line = read_line(&mut io::stdin().lock(), &self.label)?;
        self.exhausted = line.is_none();
        Ok(line)
    }

    fn label(&self) -> &str {
        &self.label
    }
}

/// Opens operands from the filesystem, or stdin for `-`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSourceOpener;

impl SourceOpener for FsSourceOpener {
    fn open(&self, operand: &str) -> Result<Box<dyn LineSource>> {
        let input = Input::from_operand(operand);
        let source = input
            .open(operand)
            .map_err(|source| InfrastructureError::SourceOpen { operand: operand.to_string(), source })?;
        debug!(operand, ?input, "opened input");
        Ok(source)
    }
}
