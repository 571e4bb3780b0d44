//! Property-based tests for the chain evaluators.
//!
//! This module verifies the chain guarantees over arbitrary branch
//! configurations:
//!
//! - **First-match-wins**: the earliest true/equal branch carries the chain
//! - **Fallback correctness**: unmatched chains resolve with the fallback
//! - **Immutability**: extending a cloned chain never changes the original
//! - **Single invocation**: at most one transform runs, exactly once
//! - **Identity round-trip**: unmatched pipeline chains return the source

#![cfg(feature = "chain")]

use condq::chain::{BranchChain, Conditional, DiscriminatorChain};
use condq::query::{ConditionalQuery, Query};
use proptest::prelude::*;
use static_assertions::assert_impl_all;
use std::cell::Cell;
use std::rc::Rc;

// Chain states are persistent values: cloneable whenever the source is.
assert_impl_all!(BranchChain<Vec<i32>, Vec<i32>>: Clone);
assert_impl_all!(BranchChain<Vec<i32>, usize>: Clone);
assert_impl_all!(DiscriminatorChain<String, Vec<i32>, Vec<i32>>: Clone);
assert_impl_all!(Query<i32>: Clone);

/// Builds a branch chain whose branch `i` resolves to `i`, from a vector of
/// branch conditions.
fn indexed_branch_chain(source: i32, conditions: &[bool]) -> BranchChain<i32, usize> {
    let mut chain = source.if_chain(conditions[0], move |_| 0_usize);
    for (index, &condition) in conditions.iter().enumerate().skip(1) {
        chain = chain.else_if(condition, move |_| index);
    }
    chain
}

// =============================================================================
// First-match-wins
// =============================================================================

proptest! {
    /// The resolved chain always carries the transform of the earliest true
    /// condition; with no true condition, the fallback runs.
    #[test]
    fn prop_first_true_branch_wins(
        conditions in proptest::collection::vec(any::<bool>(), 1..8),
        source in any::<i32>(),
    ) {
        let result = indexed_branch_chain(source, &conditions).or_else(|_| usize::MAX);
        let expected = conditions.iter().position(|&c| c).unwrap_or(usize::MAX);
        prop_assert_eq!(result, expected);
    }
}

proptest! {
    /// The resolved chain always carries the transform of the earliest case
    /// equal to the switch value; with no equal case, the fallback runs.
    #[test]
    fn prop_first_equal_case_wins(
        switch_value in 0_u8..10,
        case_values in proptest::collection::vec(0_u8..10, 0..8),
        source in any::<i32>(),
    ) {
        let mut chain = source.switch_on(switch_value);
        for (index, &case_value) in case_values.iter().enumerate() {
            chain = chain.case(case_value, move |_| index);
        }
        let result = chain.default_with(|_| usize::MAX);
        let expected = case_values
            .iter()
            .position(|&v| v == switch_value)
            .unwrap_or(usize::MAX);
        prop_assert_eq!(result, expected);
    }
}

// =============================================================================
// Immutability
// =============================================================================

proptest! {
    /// Extending a cloned chain with an always-true branch never changes
    /// what the original resolves to.
    #[test]
    fn prop_extending_a_clone_leaves_original_unchanged(
        conditions in proptest::collection::vec(any::<bool>(), 1..6),
        source in any::<i32>(),
    ) {
        let sentinel = usize::MAX - 1;
        let base = indexed_branch_chain(source, &conditions);
        let extended = base.clone().else_if(true, move |_| sentinel);

        let original = base.or_else(|_| usize::MAX);
        prop_assert_eq!(original, conditions.iter().position(|&c| c).unwrap_or(usize::MAX));

        // The clone picks up the extension only while still unresolved
        let expected_extended = conditions.iter().position(|&c| c).unwrap_or(sentinel);
        prop_assert_eq!(extended.or_else(|_| usize::MAX), expected_extended);
    }
}

// =============================================================================
// Single invocation
// =============================================================================

proptest! {
    /// Across an entire chain, transforms and fallback together run exactly
    /// once, and only at the terminal call.
    #[test]
    fn prop_exactly_one_transform_runs_exactly_once(
        conditions in proptest::collection::vec(any::<bool>(), 1..8),
        source in any::<i32>(),
    ) {
        let calls = Rc::new(Cell::new(0_u32));

        let probe = Rc::clone(&calls);
        let mut chain = source.if_chain(conditions[0], move |n| {
            probe.set(probe.get() + 1);
            n
        });
        for &condition in &conditions[1..] {
            let probe = Rc::clone(&calls);
            chain = chain.else_if(condition, move |n| {
                probe.set(probe.get() + 1);
                n
            });
        }
        prop_assert_eq!(calls.get(), 0);

        let probe = Rc::clone(&calls);
        let _ = chain.or_else(move |n| {
            probe.set(probe.get() + 1);
            n
        });
        prop_assert_eq!(calls.get(), 1);
    }
}

// =============================================================================
// Identity round-trip
// =============================================================================

proptest! {
    /// A pipeline-preserving chain with no matching case hands the source
    /// back unchanged.
    #[test]
    fn prop_unmatched_pipeline_chain_is_identity(
        source in proptest::collection::vec(any::<i32>(), 0..16),
        switch_value in 0_u8..5,
        case_values in proptest::collection::vec(5_u8..10, 0..6),
    ) {
        let mut chain = source.clone().switch_on(switch_value);
        for &case_value in &case_values {
            chain = chain.case(case_value, |_: Vec<i32>| Vec::new());
        }
        prop_assert_eq!(chain.default(), source);
    }
}

proptest! {
    /// An unmatched branch chain resolved through `or_source` is identity.
    #[test]
    fn prop_unmatched_branch_chain_is_identity(
        source in proptest::collection::vec(any::<i32>(), 0..16),
    ) {
        let result = source
            .clone()
            .if_chain(false, |_: Vec<i32>| Vec::new())
            .else_if(false, |_| Vec::new())
            .or_source();
        prop_assert_eq!(result, source);
    }
}

// =============================================================================
// Single-shot helpers
// =============================================================================

proptest! {
    /// `where_if` with a false condition is identity; with a true condition
    /// it agrees with a plain filter.
    #[test]
    fn prop_where_if_matches_filter_semantics(
        source in proptest::collection::vec(any::<i32>(), 0..16),
        condition in any::<bool>(),
    ) {
        let result = source.clone().where_if(condition, |n| n % 2 == 0);
        let expected: Vec<i32> = if condition {
            source.iter().copied().filter(|n| n % 2 == 0).collect()
        } else {
            source
        };
        prop_assert_eq!(result, expected);
    }
}

proptest! {
    /// `apply_if` with a false condition is identity.
    #[test]
    fn prop_apply_if_false_is_identity(source in any::<i32>()) {
        prop_assert_eq!(source.apply_if(false, |n| n.wrapping_add(1)), source);
        prop_assert_eq!(source.apply_if(true, |n| n.wrapping_add(1)), source.wrapping_add(1));
    }
}
