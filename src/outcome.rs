//! The `Outcome` type and its chaining protocol.
//!
//! An [`Outcome`] is exactly one of [`Outcome::Success`] or [`Outcome::Failure`].
//! Chains are built with [`Outcome::then`] (or its `>>` alias): a `Failure`
//! short-circuits every later step and reaches the end of the chain untouched.

use std::ops::Shr;

use serde::{Deserialize, Serialize};

/// Result of a fallible computation step.
///
/// `E` is unconstrained: a string, an error enum, a structured record or a
/// marker type all work. Equality is structural on the variant and payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[must_use = "an Outcome may be a Failure, which should be inspected"]
pub enum Outcome<T, E> {
    /// The step produced a value.
    Success(T),
    /// The step failed for the given reason.
    Failure(E),
}

pub use Outcome::{Failure, Success};

impl<T, E> Outcome<T, E> {
    /// Wrap a value as a `Success`.
    pub const fn success(value: T) -> Self {
        Success(value)
    }

    /// Wrap a reason as a `Failure`.
    pub const fn failure(reason: E) -> Self {
        Failure(reason)
    }

    /// Run the next step of a chain.
    ///
    /// On `Success(value)` this returns `f(value)` as is, without re-wrapping.
    /// On `Failure` it returns `self` unchanged and `f` is never called.
    ///
    /// Chaining is associative: `a.then(f).then(g)` equals
    /// `a.then(|v| f(v).then(g))`.
    ///
    /// ```
    /// use outcome::{Outcome, Success, Failure};
    ///
    /// fn half(n: u32) -> Outcome<u32, &'static str> {
    ///     if n % 2 == 0 { Success(n / 2) } else { Failure("odd") }
    /// }
    ///
    /// assert_eq!(Success(8).then(half).then(half), Success(2));
    /// assert_eq!(Success(6).then(half).then(half), Failure("odd"));
    /// ```
    #[inline]
    pub fn then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Success(value) => f(value),
            Failure(reason) => Failure(reason),
        }
    }

    /// Returns `true` if this is a `Success`.
    pub const fn is_success(&self) -> bool {
        matches!(self, Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    pub const fn is_failure(&self) -> bool {
        matches!(self, Failure(_))
    }

    /// Borrow the payload without consuming the outcome.
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Success(value) => Success(value),
            Failure(reason) => Failure(reason),
        }
    }

    /// Transform the success payload; a `Failure` passes through.
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Success(value) => Success(f(value)),
            Failure(reason) => Failure(reason),
        }
    }

    /// Transform the failure reason.
    ///
    /// Chains never call this on their own. It is meant for joining two
    /// chains whose reason types differ, e.g. a lifted outcome and a
    /// hand-written one.
    pub fn map_failure<R, F>(self, f: F) -> Outcome<T, R>
    where
        F: FnOnce(E) -> R,
    {
        match self {
            Success(value) => Success(value),
            Failure(reason) => Failure(f(reason)),
        }
    }

    /// The success payload, if any.
    pub fn success_value(self) -> Option<T> {
        match self {
            Success(value) => Some(value),
            Failure(_) => None,
        }
    }

    /// The failure reason, if any.
    pub fn failure_reason(self) -> Option<E> {
        match self {
            Success(_) => None,
            Failure(reason) => Some(reason),
        }
    }

    /// The success payload, or `default` on failure.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Success(value) => value,
            Failure(_) => default,
        }
    }

    /// The success payload, or a value computed from the failure reason.
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Success(value) => value,
            Failure(reason) => f(reason),
        }
    }

    /// Convert into a `Result` so `?` can be used at the edge of a chain.
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

/// `outcome >> f` is shorthand for `outcome.then(f)`.
impl<T, E, U, F> Shr<F> for Outcome<T, E>
where
    F: FnOnce(T) -> Outcome<U, E>,
{
    type Output = Outcome<U, E>;

    fn shr(self, f: F) -> Self::Output {
        self.then(f)
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Success(value),
            Err(reason) => Failure(reason),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Success(value) => Ok(value),
            Failure(reason) => Err(reason),
        }
    }
}

/// Returns `true` if `outcome` is a `Success`.
pub fn succeeded<T, E>(outcome: &Outcome<T, E>) -> bool {
    outcome.is_success()
}

/// Returns `true` if `outcome` is a `Failure`.
pub fn failed<T, E>(outcome: &Outcome<T, E>) -> bool {
    outcome.is_failure()
}
