//! Heterogeneous list types for statically typed step sequences.
//!
//! Each step of a chain may change the success type, so a chain is an HList
//! rather than a `Vec`. `HSingle` is the base case and `HCons` prepends a
//! step. There is no empty list: a chain always has at least one step.

use serde::{Deserialize, Serialize};

use crate::outcome::{Failure, Outcome, Success};
use crate::step::{Step, StepStatus};
use crate::trail::Trail;

/// Non-empty heterogeneous list node.
///
/// `HCons<H, T>` holds a head step and a tail (another `HCons` or `HSingle`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HCons<H, T> {
    /// The first step of this list segment.
    pub head: H,
    /// The remaining steps.
    pub tail: T,
}

impl<H, T> HCons<H, T> {
    /// Create a new HCons with the given head and tail.
    pub fn new(head: H, tail: T) -> Self {
        Self { head, tail }
    }
}

/// Single-step list (base case).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HSingle<H>(pub H);

impl<H> HSingle<H> {
    /// Create a new single-step list.
    pub fn new(head: H) -> Self {
        Self(head)
    }
}

/// A sequence of steps run left to right with short-circuiting.
///
/// Running a chain is exactly `step0(input).then(step1).then(step2)...`:
/// the first `Failure` is returned unchanged and no later step runs.
pub trait Chain<T, E> {
    /// Success payload of the last step.
    type Output;

    /// Number of steps in this chain.
    const LEN: usize;

    /// Run the steps starting at position `offset`, recording into `trail`
    /// when one is given.
    fn run_from(
        &self,
        input: T,
        offset: usize,
        trail: Option<&mut Trail>,
    ) -> Outcome<Self::Output, E>;

    /// Record every step from position `offset` on as skipped.
    fn skip_from(&self, offset: usize, trail: &mut Trail);

    /// Run the chain.
    fn run(&self, input: T) -> Outcome<Self::Output, E> {
        self.run_from(input, 0, None)
    }

    /// Run the chain and return a [`Trail`] of what each step did.
    fn run_traced(&self, input: T) -> (Outcome<Self::Output, E>, Trail) {
        let mut trail = Trail::with_capacity(Self::LEN);
        let outcome = self.run_from(input, 0, Some(&mut trail));
        (outcome, trail)
    }
}

fn run_step<S, T, E>(
    step: &S,
    index: usize,
    input: T,
    trail: Option<&mut Trail>,
) -> Outcome<S::Output, E>
where
    S: Step<T, E>,
{
    #[cfg(feature = "tracing")]
    tracing::debug!(step = index, name = step.name(), "step.start");

    let outcome = step.execute(input);
    let status = match outcome {
        Success(_) => StepStatus::Succeeded,
        Failure(_) => StepStatus::Failed,
    };

    #[cfg(feature = "tracing")]
    match status {
        StepStatus::Failed => {
            tracing::warn!(step = index, name = step.name(), outcome = "failure", "step.end")
        }
        _ => tracing::debug!(step = index, name = step.name(), outcome = "success", "step.end"),
    }

    if let Some(trail) = trail {
        trail.record(index, step.name(), status);
    }

    outcome
}

impl<S, T, E> Chain<T, E> for HSingle<S>
where
    S: Step<T, E>,
{
    type Output = S::Output;

    const LEN: usize = 1;

    fn run_from(
        &self,
        input: T,
        offset: usize,
        trail: Option<&mut Trail>,
    ) -> Outcome<Self::Output, E> {
        run_step(&self.0, offset, input, trail)
    }

    fn skip_from(&self, offset: usize, trail: &mut Trail) {
        trail.record(offset, self.0.name(), StepStatus::Skipped);
    }
}

impl<H, Tail, T, E> Chain<T, E> for HCons<H, Tail>
where
    H: Step<T, E>,
    Tail: Chain<H::Output, E>,
{
    type Output = Tail::Output;

    const LEN: usize = 1 + Tail::LEN;

    fn run_from(
        &self,
        input: T,
        offset: usize,
        mut trail: Option<&mut Trail>,
    ) -> Outcome<Self::Output, E> {
        match run_step(&self.head, offset, input, trail.as_deref_mut()) {
            Success(value) => self.tail.run_from(value, offset + 1, trail),
            Failure(reason) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(step = offset, skipped = Tail::LEN, "chain.short_circuit");

                if let Some(trail) = trail {
                    self.tail.skip_from(offset + 1, trail);
                }
                Failure(reason)
            }
        }
    }

    fn skip_from(&self, offset: usize, trail: &mut Trail) {
        trail.record(offset, self.head.name(), StepStatus::Skipped);
        self.tail.skip_from(offset + 1, trail);
    }
}

// A chain is itself a step, so chains nest.
impl<S, T, E> Step<T, E> for HSingle<S>
where
    S: Step<T, E>,
{
    type Output = S::Output;

    fn execute(&self, input: T) -> Outcome<Self::Output, E> {
        self.run(input)
    }
}

impl<H, Tail, T, E> Step<T, E> for HCons<H, Tail>
where
    H: Step<T, E>,
    Tail: Chain<H::Output, E>,
{
    type Output = Tail::Output;

    fn execute(&self, input: T) -> Outcome<Self::Output, E> {
        self.run(input)
    }
}
