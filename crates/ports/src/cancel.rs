// crates/ports/src/cancel.rs

/// Cooperative cancellation signal.
///
/// Polled at coarse checkpoints only, so implementations may do a little
/// work (reading a clock, an atomic load) per call.
pub trait Cancellation: Send + Sync {
    fn is_cancelled(&self) -> bool;
}

/// A signal that never fires.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl Cancellation for NeverCancel {
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<C: Cancellation + ?Sized> Cancellation for &C {
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}
