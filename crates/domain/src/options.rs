// crates/domain/src/options.rs
use comm_lines_shared_kernel::DomainError;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::model::Column;

/// Switches controlling one comparison run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct CompareOptions {
    /// Hide lines unique to the first input (`-1`).
    pub suppress_first: bool,
    /// Hide lines unique to the second input (`-2`).
    pub suppress_second: bool,
    /// Hide lines common to both inputs (`-3`).
    pub suppress_common: bool,
    /// Fail on input that is not in ascending byte order. Off means no checking at all.
    pub check_order: bool,
    /// Append the `count1\tcount2\tcount3\ttotal` record.
    pub total: bool,
}

impl CompareOptions {
    pub fn builder() -> CompareOptionsBuilder {
        CompareOptionsBuilder::default()
    }

    pub const fn is_suppressed(&self, column: Column) -> bool {
        match column {
            Column::OnlyFirst => self.suppress_first,
            Column::OnlySecond => self.suppress_second,
            Column::Common => self.suppress_common,
        }
    }

    /// The same run seen from the other side: inputs swapped, so the
    /// suppressions of columns 1 and 2 trade places.
    #[must_use]
    pub const fn mirrored(self) -> Self {
        Self {
            suppress_first: self.suppress_second,
            suppress_second: self.suppress_first,
            ..self
        }
    }
}

impl From<CompareOptionsBuilderError> for DomainError {
    fn from(err: CompareOptionsBuilderError) -> Self {
        Self::InvalidConfiguration { reason: err.to_string() }
    }
}
