// crates/domain/src/totals.rs
use std::fmt;

use comm_lines_shared_kernel::LineCount;
use serde::{Deserialize, Serialize};

use crate::model::Column;

/// Per-column classification counts. Suppression never affects these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub only_first: LineCount,
    pub only_second: LineCount,
    pub common: LineCount,
}

impl Totals {
    pub fn record(&mut self, column: Column) {
        match column {
            Column::OnlyFirst => self.only_first.increment(),
            Column::OnlySecond => self.only_second.increment(),
            Column::Common => self.common.increment(),
        }
    }

    pub const fn get(&self, column: Column) -> LineCount {
        match column {
            Column::OnlyFirst => self.only_first,
            Column::OnlySecond => self.only_second,
            Column::Common => self.common,
        }
    }

    /// Number of classified lines so far. A common pair counts once.
    pub fn classified(&self) -> LineCount {
        self.only_first + self.only_second + self.common
    }

    /// Lines pulled from the first input.
    pub fn consumed_first(&self) -> LineCount {
        self.only_first + self.common
    }

    /// Lines pulled from the second input.
    pub fn consumed_second(&self) -> LineCount {
        self.only_second + self.common
    }

    #[must_use]
    pub const fn mirrored(self) -> Self {
        Self { only_first: self.only_second, only_second: self.only_first, common: self.common }
    }
}

/// The summary record, without its trailing newline.
impl fmt::Display for Totals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}\ttotal", self.only_first, self.only_second, self.common)
    }
}
