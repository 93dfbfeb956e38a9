// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod line;

pub use counts::LineCount;
pub use line::Line;
