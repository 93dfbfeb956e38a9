// crates/domain/src/model.rs
use comm_lines_shared_kernel::Line;
use serde::{Deserialize, Serialize};

/// Output column a line is classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    /// Column 1: present only in the first input.
    OnlyFirst,
    /// Column 2: present only in the second input.
    OnlySecond,
    /// Column 3: present in both inputs.
    Common,
}

impl Column {
    pub const ALL: [Self; 3] = [Self::OnlyFirst, Self::OnlySecond, Self::Common];

    /// 1-based column number as used by `-1`, `-2`, `-3`.
    pub const fn number(self) -> u8 {
        match self {
            Self::OnlyFirst => 1,
            Self::OnlySecond => 2,
            Self::Common => 3,
        }
    }

    #[must_use]
    pub const fn mirrored(self) -> Self {
        match self {
            Self::OnlyFirst => Self::OnlySecond,
            Self::OnlySecond => Self::OnlyFirst,
            Self::Common => Self::Common,
        }
    }
}

/// A line tagged with the input(s) it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedLine {
    Only1(Line),
    Only2(Line),
    Common(Line),
}

impl ClassifiedLine {
    pub const fn column(&self) -> Column {
        match self {
            Self::Only1(_) => Column::OnlyFirst,
            Self::Only2(_) => Column::OnlySecond,
            Self::Common(_) => Column::Common,
        }
    }

    pub const fn line(&self) -> &Line {
        match self {
            Self::Only1(line) | Self::Only2(line) | Self::Common(line) => line,
        }
    }

    #[must_use]
    pub fn mirrored(self) -> Self {
        match self {
            Self::Only1(line) => Self::Only2(line),
            Self::Only2(line) => Self::Only1(line),
            common @ Self::Common(_) => common,
        }
    }
}
