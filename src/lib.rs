#![deny(missing_docs)]

//! Outcome — short-circuiting chains of fallible steps.
//!
//! # Design Goals
//!
//! - **One result type**: every step returns an [`Outcome`], either
//!   `Success(value)` or `Failure(reason)`, with a caller-chosen reason type
//! - **Short-circuit chaining**: [`Outcome::then`] (and `>>`) stops at the
//!   first failure and hands its reason to the end of the chain unchanged
//! - **Explicit interop**: sentinel-returning code enters through
//!   [`pure_outcome`]/[`lift_outcome`] and carries the [`Absent`] placeholder
//! - **Lazy projections**: [`filter_map_succeeded`] and friends run nothing
//!   until iterated
//!
//! # Core Concepts
//!
//! - [`Outcome`]: the two-variant result of a step
//! - [`Step`]: anything that maps a success payload to a new `Outcome`
//! - [`Chain`]: a statically typed, non-empty sequence of steps, built with
//!   [`chain!`], that can report a [`Trail`] of what ran
//!
//! ```
//! use outcome::{on_failure, Outcome, Success, Failure};
//!
//! fn foo(a: i32) -> Outcome<i32, &'static str> {
//!     if a < 10 { Success(a + 1) } else { Failure("foo failed") }
//! }
//! fn bar(b: i32) -> Outcome<i32, &'static str> {
//!     if b > 8 { Success(b - 1) } else { Failure("bar failed") }
//! }
//! fn baz(c: i32) -> Outcome<i32, &'static str> {
//!     if c % 2 == 0 { Success(c) } else { Failure("baz failed") }
//! }
//!
//! let result = foo(9) >> bar >> baz;
//! assert_eq!(result, Failure("baz failed"));
//! assert_eq!(on_failure(&result).collect::<Vec<_>>(), [&"baz failed"]);
//! ```

// Modules
pub mod hlist;
pub mod lift;
mod macros;
pub mod outcome;
pub mod project;
pub mod step;
pub mod trail;

// Re-exports for convenience
pub use hlist::{Chain, HCons, HSingle};
pub use lift::{lift_outcome, pure_outcome, pure_outcome_unless, Absent, Lifted};
pub use outcome::{failed, succeeded, Failure, Outcome, Success};
pub use project::{
    filter_map_failed, filter_map_succeeded, on_failure, on_success, FilterMapFailed,
    FilterMapSucceeded, IntoIter, OnFailure, OnSuccess, OutcomeIterExt,
};
pub use step::{Step, StepStatus};
pub use trail::{Trail, TrailEntry};

#[cfg(test)]
mod tests;
