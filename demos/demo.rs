//! Walkthrough of chaining, lifting and projections.
//!
//! Run with: cargo run --example demo

use std::collections::HashMap;

use outcome::{
    chain, filter_map_failed, filter_map_succeeded, lift_outcome, on_failure, on_success, Absent,
    Chain, Failure, Outcome, Success,
};
use thiserror::Error;

// ============================================================================
// Error type
// ============================================================================

#[derive(Debug, Clone, PartialEq, Error)]
enum CheckoutError {
    #[error("unknown item")]
    UnknownItem(#[from] Absent),
    #[error("quantity {0} is out of range")]
    BadQuantity(u32),
    #[error("total {0} exceeds the budget")]
    OverBudget(u32),
}

// ============================================================================
// The foo/bar/baz chain
// ============================================================================

fn foo(a: i32) -> Outcome<i32, &'static str> {
    if a < 10 {
        Success(a + 1)
    } else {
        Failure("foo failed")
    }
}

fn bar(b: i32) -> Outcome<i32, &'static str> {
    if b > 8 {
        Success(b - 1)
    } else {
        Failure("bar failed")
    }
}

fn baz(c: i32) -> Outcome<i32, &'static str> {
    if c % 2 == 0 {
        Success(c)
    } else {
        Failure("baz failed")
    }
}

fn show_basic_chain() {
    println!("\n=== foo(9) >> bar >> baz ===");

    println!("  foo(9)  = {:?}", foo(9));
    println!("  bar(10) = {:?}", bar(10));
    println!("  baz(9)  = {:?}", baz(9));

    let result = foo(9) >> bar >> baz;
    println!("  result  = {:?}", result);
    println!(
        "  on_success -> {:?}",
        on_success(&result).collect::<Vec<_>>()
    );
    println!(
        "  on_failure -> {:?}",
        on_failure(&result).collect::<Vec<_>>()
    );
}

fn show_trail() {
    println!("\n=== chain![foo, bar, baz] with a trail ===");

    let steps = chain![foo, bar, baz];
    for start in [8, 9, 12] {
        let (result, trail) = steps.run_traced(start);
        println!("  start {start:>2}: {result:?}");
        for entry in trail.entries() {
            println!("    [{}] {:<40} {:?}", entry.index, entry.name, entry.status);
        }
    }
}

// ============================================================================
// Lifting a sentinel-returning lookup
// ============================================================================

fn show_checkout() {
    println!("\n=== Checkout with a lifted price lookup ===");

    let prices: HashMap<&str, u32> = [("tea", 4), ("cake", 9), ("caviar", 120)].into();
    let price = lift_outcome(|item: &'static str| prices.get(item).copied());

    let checkout = |item: &'static str, quantity: u32| -> Outcome<u32, CheckoutError> {
        let within_range = |unit: u32| {
            if (1..=10).contains(&quantity) {
                Success(unit * quantity)
            } else {
                Failure(CheckoutError::BadQuantity(quantity))
            }
        };
        let within_budget = |total: u32| {
            if total <= 100 {
                Success(total)
            } else {
                Failure(CheckoutError::OverBudget(total))
            }
        };

        price(item).map_failure(CheckoutError::from) >> within_range >> within_budget
    };

    let orders = [("tea", 3), ("coffee", 1), ("cake", 0), ("caviar", 1), ("cake", 2)];
    let results: Vec<Outcome<u32, CheckoutError>> = orders
        .iter()
        .map(|&(item, quantity)| checkout(item, quantity))
        .collect();

    for ((item, quantity), result) in orders.iter().zip(&results) {
        println!("  {quantity} x {item:<7} -> {result:?}");
    }

    let totals: Vec<u32> = filter_map_succeeded(|t| t, results.clone()).collect();
    let reasons: Vec<String> = filter_map_failed(|e| e.to_string(), results).collect();
    println!("  paid:     {:?}", totals);
    println!("  rejected: {:?}", reasons);
}

fn main() {
    println!("Outcome demo");
    println!("============");

    show_basic_chain();
    show_trail();
    show_checkout();
}
