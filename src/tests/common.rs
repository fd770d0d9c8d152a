//! Common steps and helpers for tests.

use std::cell::Cell;

use serde::{Deserialize, Serialize};

use crate::{Absent, Failure, Outcome, Success};

// ============================================================================
// Error Type
// ============================================================================

/// Reasons the test steps fail with.
#[derive(thiserror::Error, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum StepError {
    /// `foo` input was 10 or more.
    #[error("foo failed")]
    Foo,

    /// `bar` input was 8 or less.
    #[error("bar failed")]
    Bar,

    /// `baz` input was odd.
    #[error("baz failed")]
    Baz,

    /// A lifted step hit its sentinel.
    #[error(transparent)]
    Absent(#[from] Absent),
}

// ============================================================================
// Steps
// ============================================================================

/// Increment `a`; fails from 10 on.
pub fn foo(a: i32) -> Outcome<i32, &'static str> {
    if a < 10 {
        Success(a + 1)
    } else {
        Failure("foo failed")
    }
}

/// Decrement `b`; fails at 8 or below.
pub fn bar(b: i32) -> Outcome<i32, &'static str> {
    if b > 8 {
        Success(b - 1)
    } else {
        Failure("bar failed")
    }
}

/// Pass `c` through when even.
pub fn baz(c: i32) -> Outcome<i32, &'static str> {
    if c % 2 == 0 {
        Success(c)
    } else {
        Failure("baz failed")
    }
}

/// `foo`, `bar` and `baz` with a structured reason.
pub fn typed_foo(a: i32) -> Outcome<i32, StepError> {
    foo(a).map_failure(|_| StepError::Foo)
}

/// [`bar`] failing with [`StepError::Bar`].
pub fn typed_bar(b: i32) -> Outcome<i32, StepError> {
    bar(b).map_failure(|_| StepError::Bar)
}

/// [`baz`] failing with [`StepError::Baz`].
pub fn typed_baz(c: i32) -> Outcome<i32, StepError> {
    baz(c).map_failure(|_| StepError::Baz)
}

// ============================================================================
// Call counting
// ============================================================================

/// Counts how many times a wrapped function ran.
#[derive(Debug, Default)]
pub struct Counter(Cell<usize>);

impl Counter {
    /// A counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one call.
    pub fn hit(&self) {
        self.0.set(self.0.get() + 1);
    }

    /// Count a call and pass `value` through.
    pub fn hit_and<X>(&self, value: X) -> X {
        self.hit();
        value
    }

    /// Calls counted so far.
    pub fn get(&self) -> usize {
        self.0.get()
    }
}
