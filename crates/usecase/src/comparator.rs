// crates/usecase/src/comparator.rs
use std::cmp::Ordering;

use comm_lines_domain::{ClassifiedLine, Totals};
use comm_lines_ports::LineSource;
use comm_lines_shared_kernel::{DomainError, Line, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Priming,
    Merging,
    Done,
}

/// One input plus its single line of lookahead.
struct Side<S> {
    source: S,
    input: u8,
    current: Option<Line>,
    /// The current line was handed out and must be replaced before use.
    stale: bool,
    pulled: usize,
    /// Last line handed out, kept only while checking order.
    previous: Option<Line>,
}

impl<S: LineSource> Side<S> {
    fn new(source: S, input: u8) -> Self {
        Self { source, input, current: None, stale: true, pulled: 0, previous: None }
    }

    fn refill(&mut self, check_order: bool) -> Result<()> {
        if !self.stale {
            return Ok(());
        }
        self.current = self.source.next_line()?;
        self.stale = false;
        let Some(line) = &self.current else {
            return Ok(());
        };
        self.pulled += 1;
        match &self.previous {
            Some(previous) if check_order && line < previous => {
                Err(DomainError::UnsortedInput { input: self.input, line_number: self.pulled }.into())
            }
            _ => Ok(()),
        }
    }

    fn take(&mut self, check_order: bool) -> Line {
        self.stale = true;
        let line = self.current.take().unwrap_or_default();
        if check_order {
            self.previous = Some(line.clone());
        }
        line
    }
}

/// Walks two ascending line sources in lockstep and classifies every line.
///
/// Classification is lazy: each call pulls at most one line from each
/// side. Equal lines advance both sides, so equal runs pair off one to one.
/// The line just handed out is replaced on the following call, which means
/// a read failure never swallows an already classified line.
///
/// Unsorted input gives an unspecified interleaving unless `check_order`
/// is set, in which case it fails with [`DomainError::UnsortedInput`].
pub struct MergeComparator<A, B> {
    first: Side<A>,
    second: Side<B>,
    check_order: bool,
    state: State,
    totals: Totals,
}

impl<A: LineSource, B: LineSource> MergeComparator<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self {
            first: Side::new(first, 1),
            second: Side::new(second, 2),
            check_order: false,
            state: State::Priming,
            totals: Totals::default(),
        }
    }

    #[must_use]
    pub fn check_order(mut self, enabled: bool) -> Self {
        self.check_order = enabled;
        self
    }

    /// Counts of everything classified so far.
    pub const fn totals(&self) -> Totals {
        self.totals
    }

    /// Next classified line, or `None` once both sides are exhausted.
    ///
    /// After an error the comparator is finished and keeps returning `None`.
    pub fn next_classified(&mut self) -> Result<Option<ClassifiedLine>> {
        match self.state {
            State::Done => return Ok(None),
            State::Priming | State::Merging => {}
        }
        match self.step() {
            Ok(Some(classified)) => {
                self.totals.record(classified.column());
                Ok(Some(classified))
            }
            Ok(None) => {
                self.state = State::Done;
                Ok(None)
            }
            Err(err) => {
                self.state = State::Done;
                Err(err)
            }
        }
    }

    fn step(&mut self) -> Result<Option<ClassifiedLine>> {
        self.first.refill(self.check_order)?;
        self.second.refill(self.check_order)?;
        self.state = State::Merging;

        let order = match (&self.first.current, &self.second.current) {
            (None, None) => return Ok(None),
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(line1), Some(line2)) => line1.cmp(line2),
        };

        let classified = match order {
            Ordering::Less => ClassifiedLine::Only1(self.first.take(self.check_order)),
            Ordering::Greater => ClassifiedLine::Only2(self.second.take(self.check_order)),
            Ordering::Equal => {
                let line = self.first.take(self.check_order);
                self.second.take(self.check_order);
                ClassifiedLine::Common(line)
            }
        };
        Ok(Some(classified))
    }
}

impl<A: LineSource, B: LineSource> Iterator for MergeComparator<A, B> {
    type Item = Result<ClassifiedLine>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_classified().transpose()
    }
}
