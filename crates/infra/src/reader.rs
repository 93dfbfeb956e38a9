// crates/infra/src/reader.rs
use std::io::BufRead;

use comm_lines_ports::LineSource;
use comm_lines_shared_kernel::{InfrastructureError, Line, Result};

/// Reads one `\n`-terminated line; `None` at end of input.
pub(crate) fn read_line<R: BufRead + ?Sized>(reader: &mut R, label: &str) -> Result<Option<Line>> {
    let mut buf = Vec::new();
    let read = reader
        .read_until(b'\n', &mut buf)
        .map_err(|source| InfrastructureError::SourceRead { operand: label.to_string(), source })?;
    Ok((read > 0).then(|| Line::from_terminated(buf)))
}

/// Line source over any buffered reader.
///
/// Lines are split on `\n`; a final line without terminator still counts.
/// Each line is its own allocation and only the current one is held.
pub struct ReaderSource<R> {
    label: String,
    reader: R,
    exhausted: bool,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(label: impl Into<String>, reader: R) -> Self {
        Self { label: label.into(), reader, exhausted: false }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn next_line(&mut self) -> Result<Option<Line>> {
        if self.exhausted {
            return Ok(None);
        }
        let line = read_line(&mut self.reader, &self.label)?;
        self.exhausted = line.is_none();
        Ok(line)
    }

    fn label(&self) -> &str {
        &self.label
    }
}
