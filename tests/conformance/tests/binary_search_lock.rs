//! Binary search contract locks.
//!
//! - Found index points at an element the comparator calls `Equal`.
//! - Insert index is a valid order-preserving insertion point.
//! - Round-trip: inserting the sought value at the reported position keeps
//!   the sequence ascending.
//! - Zero length is a pre-flight argument error.

use wayfind_kernel::compare::{compare_to, compare_to_by};
use wayfind_search::binary::{binary_search, binary_search_by, BinaryOutcome};
use wayfind_search::error::SearchError;

fn ascending_fixture() -> Vec<i64> {
    // Duplicates and gaps on purpose.
    vec![-40, -7, -7, 0, 3, 3, 3, 12, 50, 50, 901]
}

#[test]
fn found_index_matches_under_the_comparator() {
    let items = ascending_fixture();
    for target in [-40, -7, 0, 3, 12, 50, 901] {
        let outcome = binary_search(&items, compare_to(target)).unwrap();
        let index = outcome.found().unwrap_or_else(|| {
            panic!("{target} is present but search reported {outcome:?}")
        });
        assert_eq!(items[index], target, "index must point at a match");
    }
}

#[test]
fn absent_values_report_valid_insertion_points() {
    let items = ascending_fixture();
    for target in [-100, -8, -1, 1, 4, 13, 51, 1000] {
        let outcome = binary_search(&items, compare_to(target)).unwrap();
        assert!(
            outcome.found().is_none(),
            "{target} is absent but search reported {outcome:?}"
        );
        let at = outcome.position();
        assert!(at <= items.len(), "insertion point in bounds");
        if at > 0 {
            assert!(items[at - 1] < target, "left neighbor sorts before");
        }
        if at < items.len() {
            assert!(target < items[at], "right neighbor sorts after");
        }
    }
}

#[test]
fn round_trip_insertion_keeps_sequence_ascending() {
    let items = ascending_fixture();
    for target in -45..910 {
        let outcome = binary_search(&items, compare_to(target)).unwrap();
        let mut extended = items.clone();
        extended.insert(outcome.position(), target);
        assert!(
            extended.windows(2).all(|w| w[0] <= w[1]),
            "inserting {target} at {} broke ordering",
            outcome.position()
        );
    }
}

#[test]
fn zero_length_fails_before_any_read() {
    let mut reads = 0u32;
    let result = binary_search_by(
        |i| {
            reads += 1;
            i
        },
        0,
        compare_to(5usize),
    );
    assert_eq!(result.unwrap_err(), SearchError::EmptySequence);
    assert_eq!(reads, 0, "no element may be read on a pre-flight failure");
}

#[test]
fn comparator_evaluations_are_logarithmic() {
    let items: Vec<u64> = (0..1024).map(|i| i * 2).collect();
    let mut evaluations = 0u32;
    let outcome = binary_search(&items, |probe: &u64| {
        evaluations += 1;
        probe.cmp(&2047)
    })
    .unwrap();
    assert_eq!(outcome, BinaryOutcome::Insert(1024));
    assert!(
        evaluations <= 11,
        "expected <= ceil(log2(1024)) + 1 evaluations, got {evaluations}"
    );
}

#[test]
fn custom_ordering_searches_descending_sequences() {
    let items: Vec<i32> = (0..100).rev().collect();
    let cmp = compare_to_by(42, |a: &i32, b: &i32| b.cmp(a));
    let outcome = binary_search(&items, cmp).unwrap();
    assert_eq!(items[outcome.found().unwrap()], 42);
}
