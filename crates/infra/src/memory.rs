// crates/infra/src/memory.rs
use std::collections::VecDeque;

use comm_lines_ports::LineSource;
use comm_lines_shared_kernel::{Line, Result};

/// Fully materialized line source.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    label: String,
    lines: VecDeque<Line>,
}

impl MemorySource {
    pub fn new<I, L>(label: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Line>,
    {
        Self { label: label.into(), lines: lines.into_iter().map(Into::into).collect() }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl LineSource for MemorySource {
    fn next_line(&mut self) -> Result<Option<Line>> {
        Ok(self.lines.pop_front())
    }

    fn label(&self) -> &str {
        &self.label
    }
}
