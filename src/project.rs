//! Projections over outcomes.
//!
//! Every adapter here is lazy: nothing is inspected and no callback runs
//! until the returned iterator is advanced. Adapters are single-pass, like
//! any iterator. To iterate again, call the projection again.

use std::convert;
use std::iter::FusedIterator;

use crate::outcome::{Failure, Outcome, Success};

// ============================================================================
// Single-outcome projections
// ============================================================================

/// Iterator over the success payload of one outcome (zero or one item).
///
/// Created by [`on_success`].
#[derive(Debug, Clone)]
pub struct OnSuccess<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for OnSuccess<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<T> DoubleEndedIterator for OnSuccess<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for OnSuccess<'_, T> {}
impl<T> FusedIterator for OnSuccess<'_, T> {}

/// Iterator over the failure reason of one outcome (zero or one item).
///
/// Created by [`on_failure`].
#[derive(Debug, Clone)]
pub struct OnFailure<'a, E> {
    inner: Option<&'a E>,
}

impl<'a, E> Iterator for OnFailure<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<&'a E> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<E> DoubleEndedIterator for OnFailure<'_, E> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<E> ExactSizeIterator for OnFailure<'_, E> {}
impl<E> FusedIterator for OnFailure<'_, E> {}

/// Yields the success payload once, or nothing for a `Failure`.
///
/// ```
/// use outcome::{on_success, Outcome, Success, Failure};
///
/// let ok: Outcome<i32, &str> = Success(5);
/// let ko: Outcome<i32, &str> = Failure("e");
/// assert_eq!(on_success(&ok).collect::<Vec<_>>(), [&5]);
/// assert_eq!(on_success(&ko).count(), 0);
/// ```
pub fn on_success<T, E>(outcome: &Outcome<T, E>) -> OnSuccess<'_, T> {
    OnSuccess {
        inner: outcome.as_ref().success_value(),
    }
}

/// Yields the failure reason once, or nothing for a `Success`.
pub fn on_failure<T, E>(outcome: &Outcome<T, E>) -> OnFailure<'_, E> {
    OnFailure {
        inner: outcome.as_ref().failure_reason(),
    }
}

/// Owning iterator over the success payload of an outcome.
///
/// Created by `Outcome::into_iter`.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, Some(n))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.success_value(),
        }
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = OnSuccess<'a, T>;

    fn into_iter(self) -> OnSuccess<'a, T> {
        on_success(self)
    }
}

// ============================================================================
// Sequence projections
// ============================================================================

/// Lazy map over the success payloads of a sequence of outcomes.
///
/// Created by [`filter_map_succeeded`] or
/// [`OutcomeIterExt::filter_map_succeeded`].
#[derive(Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct FilterMapSucceeded<I, F> {
    iter: I,
    f: F,
}

impl<I, F, T, E, R> Iterator for FilterMapSucceeded<I, F>
where
    I: Iterator<Item = Outcome<T, E>>,
    F: FnMut(T) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        for outcome in self.iter.by_ref() {
            if let Success(value) = outcome {
                return Some((self.f)(value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, F, T, E, R> FusedIterator for FilterMapSucceeded<I, F>
where
    I: FusedIterator<Item = Outcome<T, E>>,
    F: FnMut(T) -> R,
{
}

impl<I: std::fmt::Debug, F> std::fmt::Debug for FilterMapSucceeded<I, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterMapSucceeded")
            .field("iter", &self.iter)
            .finish_non_exhaustive()
    }
}

/// Lazy map over the failure reasons of a sequence of outcomes.
///
/// Created by [`filter_map_failed`] or [`OutcomeIterExt::filter_map_failed`].
#[derive(Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct FilterMapFailed<I, F> {
    iter: I,
    f: F,
}

impl<I, F, T, E, R> Iterator for FilterMapFailed<I, F>
where
    I: Iterator<Item = Outcome<T, E>>,
    F: FnMut(E) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        for outcome in self.iter.by_ref() {
            if let Failure(reason) = outcome {
                return Some((self.f)(reason));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

impl<I, F, T, E, R> FusedIterator for FilterMapFailed<I, F>
where
    I: FusedIterator<Item = Outcome<T, E>>,
    F: FnMut(E) -> R,
{
}

impl<I: std::fmt::Debug, F> std::fmt::Debug for FilterMapFailed<I, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterMapFailed")
            .field("iter", &self.iter)
            .finish_non_exhaustive()
    }
}

/// Apply `f` to every success payload in `outcomes`, skipping failures.
///
/// Order is preserved. `f` runs only when the result is iterated, and never
/// for a `Failure`. Safe on infinite inputs.
///
/// ```
/// use outcome::{filter_map_succeeded, Outcome, Success, Failure};
///
/// let outcomes: Vec<Outcome<i32, &str>> = vec![Success(1), Failure("x"), Success(2)];
/// let doubled: Vec<i32> = filter_map_succeeded(|v| v * 2, outcomes).collect();
/// assert_eq!(doubled, [2, 4]);
/// ```
pub fn filter_map_succeeded<I, F, T, E, R>(f: F, outcomes: I) -> FilterMapSucceeded<I::IntoIter, F>
where
    I: IntoIterator<Item = Outcome<T, E>>,
    F: FnMut(T) -> R,
{
    FilterMapSucceeded {
        iter: outcomes.into_iter(),
        f,
    }
}

/// Apply `f` to every failure reason in `outcomes`, skipping successes.
pub fn filter_map_failed<I, F, T, E, R>(f: F, outcomes: I) -> FilterMapFailed<I::IntoIter, F>
where
    I: IntoIterator<Item = Outcome<T, E>>,
    F: FnMut(E) -> R,
{
    FilterMapFailed {
        iter: outcomes.into_iter(),
        f,
    }
}

/// Method-style projections on any iterator of outcomes.
pub trait OutcomeIterExt<T, E>: Iterator<Item = Outcome<T, E>> + Sized {
    /// See [`filter_map_succeeded`].
    fn filter_map_succeeded<F, R>(self, f: F) -> FilterMapSucceeded<Self, F>
    where
        F: FnMut(T) -> R,
    {
        FilterMapSucceeded { iter: self, f }
    }

    /// See [`filter_map_failed`].
    fn filter_map_failed<F, R>(self, f: F) -> FilterMapFailed<Self, F>
    where
        F: FnMut(E) -> R,
    {
        FilterMapFailed { iter: self, f }
    }

    /// Only the success payloads, in order.
    fn successes(self) -> FilterMapSucceeded<Self, fn(T) -> T> {
        self.filter_map_succeeded(convert::identity as fn(T) -> T)
    }

    /// Only the failure reasons, in order.
    fn failures(self) -> FilterMapFailed<Self, fn(E) -> E> {
        self.filter_map_failed(convert::identity as fn(E) -> E)
    }
}

impl<I, T, E> OutcomeIterExt<T, E> for I where I: Iterator<Item = Outcome<T, E>> {}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn on_success_restarts_per_call() {
        let ok: Outcome<i32, &str> = Success(5);

        let mut first = on_success(&ok);
        assert_eq!(first.len(), 1);
        assert_eq!(first.next(), Some(&5));
        assert_eq!(first.next(), None);

        assert_eq!(on_success(&ok).copied().collect::<Vec<_>>(), [5]);
    }

    #[test]
    fn on_failure_is_symmetric() {
        let ok: Outcome<i32, &str> = Success(5);
        let ko: Outcome<i32, &str> = Failure("e");

        assert_eq!(on_failure(&ok).count(), 0);
        assert_eq!(on_failure(&ko).copied().collect::<Vec<_>>(), ["e"]);
    }

    #[test]
    fn reversed_projection_yields_once() {
        let ok: Outcome<i32, &str> = Success(5);
        let ko: Outcome<i32, &str> = Failure("e");

        let mut back = on_success(&ok).rev();
        assert_eq!(back.next(), Some(&5));
        assert_eq!(back.next(), None);
        assert_eq!(back.next(), None);

        let mut both = on_failure(&ko);
        assert_eq!(both.next_back(), Some(&"e"));
        assert_eq!(both.next(), None);
        assert_eq!(both.len(), 0);
        assert_eq!(on_failure(&ok).rev().count(), 0);
    }

    #[test]
    fn owned_iteration_yields_success_only() {
        let ok: Outcome<String, ()> = Success("v".into());
        let ko: Outcome<String, ()> = Failure(());

        assert_eq!(ok.into_iter().collect::<Vec<_>>(), ["v".to_string()]);
        assert_eq!(ko.into_iter().count(), 0);
    }

    #[test]
    fn filter_map_is_lazy() {
        let calls = Cell::new(0);
        let outcomes: Vec<Outcome<i32, &str>> = vec![Success(1), Success(2)];

        let mapped = filter_map_succeeded(
            |v| {
                calls.set(calls.get() + 1);
                v
            },
            outcomes,
        );
        assert_eq!(calls.get(), 0);
        drop(mapped);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn filter_map_handles_infinite_input() {
        let outcomes = (0..).map(|n: u64| {
            if n % 3 == 0 {
                Failure(n)
            } else {
                Success(n)
            }
        });

        let first: Vec<u64> = outcomes
            .clone()
            .filter_map_succeeded(|n| n * 10)
            .take(3)
            .collect();
        assert_eq!(first, [10, 20, 40]);

        let reasons: Vec<u64> = outcomes.failures().take(3).collect();
        assert_eq!(reasons, [0, 3, 6]);
    }

    #[test]
    fn successes_and_failures_keep_order() {
        let outcomes: Vec<Outcome<char, u8>> =
            vec![Failure(1), Success('a'), Failure(2), Success('b')];

        assert_eq!(
            outcomes.clone().into_iter().successes().collect::<String>(),
            "ab"
        );
        assert_eq!(outcomes.into_iter().failures().collect::<Vec<_>>(), [1, 2]);
    }
}
