//! Lifting sentinel-returning code into outcomes.
//!
//! Code written without [`Outcome`] often reports failure by returning a
//! designated sentinel: `None`, `-1`, `usize::MAX`. The functions here turn
//! such results into outcomes at the boundary.
//!
//! The sentinel carries no reason, so neither can the lifted failure. Every
//! lifted failure holds [`Absent`], a placeholder meaning "the sentinel was
//! seen" and nothing more. Code that needs a descriptive reason has to be
//! written against `Outcome` directly.

use serde::{Deserialize, Serialize};

use crate::outcome::{Failure, Outcome, Success};

/// Placeholder failure reason for lifted code.
///
/// Records only that the absence sentinel was observed. The origin of the
/// failure was already discarded by the function that returned the sentinel.
#[derive(
    thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[error("absence sentinel observed; no failure reason available")]
pub struct Absent;

/// An outcome produced by lifting sentinel-returning code.
pub type Lifted<T> = Outcome<T, Absent>;

/// Inject a possibly-absent value.
///
/// `None` becomes `Failure(Absent)`; any `Some(value)` becomes
/// `Success(value)`, including falsy values such as `0` or `""`.
///
/// ```
/// use outcome::{pure_outcome, Absent, Success, Failure};
///
/// assert_eq!(pure_outcome(Some(0)), Success(0));
/// assert_eq!(pure_outcome::<i32>(None), Failure(Absent));
/// ```
pub fn pure_outcome<T>(value: Option<T>) -> Lifted<T> {
    match value {
        Some(value) => Success(value),
        None => {
            #[cfg(feature = "tracing")]
            tracing::debug!(ty = std::any::type_name::<T>(), "lift.absent");

            Failure(Absent)
        }
    }
}

/// Inject a value that uses an in-band sentinel.
///
/// `value` is compared once against `sentinel`. Equal means
/// `Failure(Absent)`, anything else is `Success(value)`.
///
/// ```
/// use outcome::{pure_outcome_unless, Absent, Success, Failure};
///
/// let index = [3, 7, 9].iter().position(|&n| n == 7).map_or(-1, |i| i as i64);
/// assert_eq!(pure_outcome_unless(index, &-1), Success(1));
/// assert_eq!(pure_outcome_unless(-1_i64, &-1), Failure(Absent));
/// ```
pub fn pure_outcome_unless<T: PartialEq>(value: T, sentinel: &T) -> Lifted<T> {
    pure_outcome(Some(value).filter(|v| v != sentinel))
}

/// Lift a function that returns `None` on failure.
///
/// The lifted function takes the same argument and returns
/// `pure_outcome(f(arg))`. For functions of several arguments use the
/// [`lift!`](crate::lift!) macro, which keeps the arity.
///
/// ```
/// use outcome::{lift_outcome, Absent, Success, Failure};
///
/// let first_char = lift_outcome(|s: &str| s.chars().next());
/// assert_eq!(first_char("abc"), Success('a'));
/// assert_eq!(first_char(""), Failure(Absent));
/// ```
pub fn lift_outcome<A, T, F>(f: F) -> impl Fn(A) -> Lifted<T>
where
    F: Fn(A) -> Option<T>,
{
    move |arg| pure_outcome(f(arg))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn falsy_values_are_successes() {
        assert_eq!(pure_outcome(Some(0)), Success(0));
        assert_eq!(pure_outcome(Some("")), Success(""));
        assert_eq!(pure_outcome(Some(false)), Success(false));
        assert_eq!(pure_outcome(Some(Vec::<u8>::new())), Success(vec![]));
    }

    #[test]
    fn none_is_placeholder_failure() {
        assert_eq!(pure_outcome::<u8>(None), Failure(Absent));
    }

    #[test]
    fn sentinel_comparison() {
        assert_eq!(pure_outcome_unless(usize::MAX, &usize::MAX), Failure(Absent));
        assert_eq!(pure_outcome_unless(0_usize, &usize::MAX), Success(0));
    }

    #[test]
    fn lifted_function_calls_through_once() {
        let calls = Cell::new(0);
        let checked_half = lift_outcome(|n: u32| {
            calls.set(calls.get() + 1);
            (n % 2 == 0).then_some(n / 2)
        });

        assert_eq!(checked_half(10), Success(5));
        assert_eq!(checked_half(3), Failure(Absent));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn absent_is_an_error() {
        let err: Box<dyn std::error::Error> = Box::new(Absent);
        assert_eq!(
            err.to_string(),
            "absence sentinel observed; no failure reason available"
        );

        let result: Result<u8, Absent> = pure_outcome(None).into_result();
        assert_eq!(result, Err(Absent));
    }
}
