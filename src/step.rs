//! Step trait and related types.
//!
//! A `Step` is one link of a chain: it takes the previous success payload
//! and produces an [`Outcome`]. Any `Fn(T) -> Outcome<U, E>` is a step, so
//! plain functions and closures compose without wrappers. Steps are
//! sequenced with [`Chain`](crate::Chain) using HList-based lists.

use serde::{Deserialize, Serialize};

use crate::outcome::Outcome;

/// Status of a single step within one chain run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepStatus {
    /// The step ran and produced a `Success`.
    Succeeded,
    /// The step ran and produced a `Failure`.
    Failed,
    /// The step never ran because an earlier step failed.
    Skipped,
}

impl StepStatus {
    /// Returns `true` if the step actually ran.
    pub fn ran(&self) -> bool {
        !matches!(self, Self::Skipped)
    }
}

/// A single fallible step of a chain.
///
/// # Type Parameters
/// - `T`: the success payload the step receives
/// - `E`: the failure reason shared by the whole chain
pub trait Step<T, E> {
    /// The success payload this step produces.
    type Output;

    /// Execute the step on the previous success payload.
    fn execute(&self, input: T) -> Outcome<Self::Output, E>;

    /// Name used in trails and tracing events.
    ///
    /// Defaults to the type name, which for functions is their path.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<T, U, E, F> Step<T, E> for F
where
    F: Fn(T) -> Outcome<U, E>,
{
    type Output = U;

    fn execute(&self, input: T) -> Outcome<U, E> {
        self(input)
    }
}
