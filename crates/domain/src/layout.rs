// crates/domain/src/layout.rs
use std::io::{self, Write};

use crate::{
    model::{ClassifiedLine, Column},
    options::CompareOptions,
};

const TABS: [&str; 3] = ["", "\t", "\t\t"];

/// Leading-tab prefix for each visible column.
///
/// A column is indented by one tab per visible column to its left, so
/// suppressing column 1 shifts columns 2 and 3 one tab to the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    prefixes: [Option<&'static str>; 3],
}

impl ColumnLayout {
    pub fn new(options: &CompareOptions) -> Self {
        let mut prefixes = [None; 3];
        let mut visible_before = 0;
        for (slot, column) in prefixes.iter_mut().zip(Column::ALL) {
            if !options.is_suppressed(column) {
                *slot = Some(TABS[visible_before]);
                visible_before += 1;
            }
        }
        Self { prefixes }
    }

    /// `None` when the column is suppressed.
    pub const fn prefix(&self, column: Column) -> Option<&'static str> {
        self.prefixes[column.number() as usize - 1]
    }

    /// Writes the record for `classified`, newline included. Lines in a
    /// suppressed column write nothing.
    pub fn write_record(&self, classified: &ClassifiedLine, out: &mut dyn Write) -> io::Result<()> {
        let Some(prefix) = self.prefix(classified.column()) else {
            return Ok(());
        };
        out.write_all(prefix.as_bytes())?;
        out.write_all(classified.line().as_bytes())?;
        out.write_all(b"\n")
    }
}
