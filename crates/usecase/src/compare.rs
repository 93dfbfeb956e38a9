// crates/usecase/src/compare.rs
use std::io::Write;

use comm_lines_domain::{ColumnLayout, CompareOptions, Totals};
use comm_lines_ports::{Cancellation, LineSource, SourceOpener};
use comm_lines_shared_kernel::{ApplicationError, InfrastructureError, Result};
use tracing::{debug, debug_span};

use crate::comparator::MergeComparator;

/// Merge iterations between two cancellation polls.
pub const CANCEL_CHECK_INTERVAL: usize = 1000;

fn checkpoint(cancel: &dyn Cancellation, stage: &'static str) -> Result<()> {
    if cancel.is_cancelled() {
        debug!(stage, "cancellation honoured");
        return Err(ApplicationError::Cancelled { stage }.into());
    }
    Ok(())
}


/// Compares two already opened sources and writes the formatted records.
pub struct CompareStreams<'a> {
    options: CompareOptions,
    cancel: &'a dyn Cancellation,
}

impl<'a> CompareStreams<'a> {
    pub fn new(options: CompareOptions, cancel: &'a dyn Cancellation) -> Self {
        Self { options, cancel }
    }

    /// Run the merge, writing every visible record to `out`.
    ///
    /// Counts cover suppressed columns too. The total record is written
    /// only after both inputs were read to the end; a read failure or a
    /// cancellation leaves the partial output in place and skips it.
    pub fn run<A, B>(&self, first: A, second: B, out: &mut dyn Write) -> Result<Totals>
    where
        A: LineSource,
        B: LineSource,
    {
        let span = debug_span!("compare", first = first.label(), second = second.label());
        let _guard = span.enter();
        debug!(options = ?self.options, "merge started");

        let layout = ColumnLayout::new(&self.options);
        let mut comparator = MergeComparator::new(first, second).check_order(self.options.check_order);

        let mut iterations = 0usize;
        while let Some(classified) = comparator.next_classified()? {
            iterations += 1;
            if iterations % CANCEL_CHECK_INTERVAL == 0 {
                checkpoint(self.cancel, "during merge")?;
            }
            layout
                .write_record(&classified, out)
                .map_err(|source| InfrastructureError::OutputWrite { source })?;
        }
        checkpoint(self.cancel, "after merge")?;

        let totals = comparator.totals();
        if self.options.total {
            writeln!(out, "{totals}").map_err(|source| InfrastructureError::OutputWrite { source })?;
        }
        debug!(%totals, "merge finished");
        Ok(totals)
    }
}

/// Opens both operands and compares them.
pub struct CompareFiles<'a> {
    opener: &'a dyn SourceOpener,
    cancel: &'a dyn Cancellation,
    options: CompareOptions,
}

impl<'a> CompareFiles<'a> {
    pub fn new(opener: &'a dyn SourceOpener, cancel: &'a dyn Cancellation, options: CompareOptions) -> Self {
        Self { opener, cancel, options }
    }

    /// Errors from opening either operand are reported before any output.
    pub fn run(&self, first: &str, second: &str, out: &mut dyn Write) -> Result<Totals> {
        checkpoint(self.cancel, "before opening inputs")?;
        let first = self.opener.open(first)?;
        checkpoint(self.cancel, "after opening the first input")?;
        let second = self.opener.open(second)?;

        CompareStreams::new(self.options, self.cancel).run(first, second, out)
    }
}
