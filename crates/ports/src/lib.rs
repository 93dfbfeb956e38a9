//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`source`]: Forward-only producers of input lines, and how they are opened
//! - [`cancel`]: Cooperative cancellation polled by long-running comparisons
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod cancel;
pub mod source;

pub use cancel::{Cancellation, NeverCancel};
pub use source::{LineSource, SourceOpener};
