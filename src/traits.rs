//! The step-log seam shared by both engines.
//!
//! Each engine threads a single [`StepSink`] down its recursion and appends one
//! record per algorithmic event, in the exact temporal order of a depth-first
//! traversal:
//! - a divide record before either recursive call,
//! - base-case records as leaves resolve,
//! - combine/merge records after every child has returned.
//!
//! Nothing is ever reordered or removed, so the finished log can be indexed and
//! replayed one record at a time (see [`crate::playback::Playback`]).

use serde::Serialize;

/// Append-only destination for step records.
///
/// `Vec<S>` is the usual sink. [`StepCounter`] discards records and only
/// counts them, which is handy for benchmarks and shape checks.
pub trait StepSink<S> {
    /// Append one record. Implementations must preserve call order.
    fn record(&mut self, step: S);
}

impl<S> StepSink<S> for Vec<S> {
    #[inline]
    fn record(&mut self, step: S) {
        self.push(step);
    }
}

/// Sink that keeps only the number of records it has seen.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StepCounter {
    pub count: usize,
}

impl<S> StepSink<S> for StepCounter {
    #[inline]
    fn record(&mut self, _step: S) {
        self.count += 1;
    }
}

/// Accessors a playback layer needs from any step record.
pub trait TraceStep {
    /// Lower-case tag, identical to the serialized `"type"` field.
    fn tag(&self) -> &'static str;

    /// Human-readable summary of the event.
    fn description(&self) -> &str;

    /// Recursion depth of the event, for engines that track it.
    fn level(&self) -> Option<usize> {
        None
    }
}

/// Final answer of a run together with its ordered step log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Traced<R, S> {
    pub result: R,
    pub steps: Vec<S>,
}

impl<R, S> Traced<R, S> {
    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True if no step was recorded.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The last recorded step, which for both engines is the `result` record.
    pub fn last_step(&self) -> Option<&S> {
        self.steps.last()
    }
}
