// crates/ports/src/source.rs
use comm_lines_shared_kernel::{Line, Result};

/// Lazy, forward-only sequence of lines.
///
/// Each line is handed out once. `Ok(None)` marks the end of input and
/// is sticky: later calls keep returning it.
pub trait LineSource {
    fn next_line(&mut self) -> Result<Option<Line>>;

    /// Operand this source was opened from, used in messages.
    fn label(&self) -> &str;
}

impl<S: LineSource + ?Sized> LineSource for Box<S> {
    fn next_line(&mut self) -> Result<Option<Line>> {
        (**self).next_line()
    }

    fn label(&self) -> &str {
        (**self).label()
    }
}

impl<S: LineSource + ?Sized> LineSource for &mut S {
    fn next_line(&mut self) -> Result<Option<Line>> {
        (**self).next_line()
    }

    fn label(&self) -> &str {
        (**self).label()
    }
}

/// Port for turning an operand (a path, or `-` for stdin) into a source.
pub trait SourceOpener {
    fn open(&self, operand: &str) -> Result<Box<dyn LineSource>>;
}
