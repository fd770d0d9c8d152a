//! Cross-module tests.
//!
//! ## Test Organization
//!
//! - `common`: Shared steps, error type and call counters
//! - `chaining`: Chain scenarios, short-circuiting and trails
//! - `lifting`: Sentinel lifting joined with hand-written chains
//! - `projection`: Projections over chain results
//! - `laws`: Algebraic laws checked with proptest
//!
//! ## Test Steps
//!
//! Most tests use three integer steps:
//! - `foo`: `a + 1` while `a < 10`
//! - `bar`: `b - 1` while `b > 8`
//! - `baz`: passes even numbers through

mod common;
