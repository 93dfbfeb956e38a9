#![allow(clippy::multiple_crate_versions)]

pub mod layout;
pub mod model;
pub mod options;
pub mod totals;

pub use layout::ColumnLayout;
pub use model::{ClassifiedLine, Column};
pub use options::{CompareOptions, CompareOptionsBuilder};
pub use totals::Totals;
