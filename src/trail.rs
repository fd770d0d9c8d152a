//! Per-run record of a chain execution.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::step::StepStatus;

/// What happened to one step during a chain run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrailEntry {
    /// Position of the step in the chain, starting at 0.
    pub index: usize,
    /// Step name, see [`Step::name`](crate::Step::name).
    pub name: Cow<'static, str>,
    /// Whether the step succeeded, failed or was skipped.
    pub status: StepStatus,
}

/// Ordered record of every step of one chain run.
///
/// Produced by [`Chain::run_traced`](crate::Chain::run_traced). A trail of a
/// chain with `n` steps always holds `n` entries: those that ran followed
/// by those skipped after the first failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trail {
    entries: Vec<TrailEntry>,
}

impl Trail {
    /// Create an empty trail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty trail with room for `steps` entries.
    pub fn with_capacity(steps: usize) -> Self {
        Self {
            entries: Vec::with_capacity(steps),
        }
    }

    /// Append the status of the step at `index`.
    pub fn record(&mut self, index: usize, name: &'static str, status: StepStatus) {
        self.entries.push(TrailEntry {
            index,
            name: Cow::Borrowed(name),
            status,
        });
    }

    /// All entries in chain order.
    pub fn entries(&self) -> &[TrailEntry] {
        &self.entries
    }

    /// Index of the step that failed, if any.
    pub fn failed_at(&self) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| e.status == StepStatus::Failed)
            .map(|e| e.index)
    }

    /// Number of steps that actually ran.
    pub fn executed_count(&self) -> usize {
        self.entries.iter().filter(|e| e.status.ran()).count()
    }

    /// Returns `true` if any step was skipped.
    pub fn is_short_circuited(&self) -> bool {
        self.entries.iter().any(|e| e.status == StepStatus::Skipped)
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
