//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and the ports to implement the
//! comparison:
//!
//! - [`comparator`]: Lazy merge classification of two sorted line sources
//! - [`compare`]: Emission, cancellation checkpoints and the total record
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod comparator;
pub mod compare;

pub use comparator::MergeComparator;
pub use compare::{CANCEL_CHECK_INTERVAL, CompareFiles, CompareStreams};
