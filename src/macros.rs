//! Macros for building chains and lifting functions.
//!
//! - `chain!`: Build a statically typed step sequence
//! - `lift!`: Lift a sentinel-returning function of any arity

/// Build a chain from a list of steps.
///
/// `chain![a, b, c]` expands to
/// `HCons::new(a, HCons::new(b, HSingle::new(c)))`. At least one step is
/// required; `chain![]` does not compile.
///
/// ```
/// use outcome::{chain, Chain, Outcome, Success, Failure};
///
/// fn parse(s: &str) -> Outcome<u32, String> {
///     s.parse::<u32>().map_err(|e| format!("{e}")).into()
/// }
/// fn even(n: u32) -> Outcome<u32, String> {
///     if n % 2 == 0 { Success(n) } else { Failure(format!("{n} is odd")) }
/// }
///
/// let steps = chain![parse, even];
/// assert_eq!(steps.run("4"), Success(4));
/// assert_eq!(steps.run("3"), Failure("3 is odd".to_string()));
/// ```
#[macro_export]
macro_rules! chain {
    ($only:expr $(,)?) => {
        $crate::HSingle::new($only)
    };

    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::HCons::new($first, $crate::chain!($($rest),+))
    };
}

/// Lift a function that returns `None` on failure, keeping its arity.
///
/// `lift!(f; a, b)` builds `move |a, b| pure_outcome(f(a, b))`. Argument
/// types may be given when they cannot be inferred: `lift!(f; a: u8, b: u8)`.
///
/// ```
/// use outcome::{lift, Absent, Success, Failure};
///
/// let checked_div = lift!(u32::checked_div; a: u32, b: u32);
/// assert_eq!(checked_div(9, 3), Success(3));
/// assert_eq!(checked_div(9, 0), Failure(Absent));
/// ```
#[macro_export]
macro_rules! lift {
    ($f:expr; $($arg:ident $(: $ty:ty)?),+ $(,)?) => {{
        let f = $f;
        move |$($arg $(: $ty)?),+| $crate::pure_outcome(f($($arg),+))
    }};
}
