// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod cancel;
pub mod input;
pub mod memory;
pub mod reader;

pub use cancel::{CancelFlag, Deadline};
pub use input::{FsSourceOpener, Input, StdinSource};
pub use memory::MemorySource;
pub use reader::ReaderSource;
