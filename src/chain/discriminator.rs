//! Value-equality discriminator chain.
//!
//! This module provides [`DiscriminatorChain`], the `switch_on` / `case` /
//! `default` evaluator: structurally the same state machine as
//! [`BranchChain`](super::BranchChain), but a branch matches by comparing
//! its match value against the chain's switch value instead of evaluating a
//! boolean.
//!
//! On pipeline-preserving chains whose source implements
//! [`QuerySource`](crate::query::QuerySource), the `*_case` convenience
//! methods wrap the common filter/sort stages so the caller supplies a key
//! selector or predicate instead of a full transform.
//!
//! # Examples
//!
//! ```rust
//! use condq::prelude::*;
//!
//! let people = vec![("ada", 36), ("bob", 41), ("eve", 29)];
//! let sort_key = "age";
//!
//! let sorted = people
//!     .switch_on(sort_key)
//!     .order_by_case("name", |p: &(&str, i32)| p.0)
//!     .order_by_case("age", |p: &(&str, i32)| p.1)
//!     .default();
//!
//! assert_eq!(sorted[0].0, "eve");
//! ```

use std::cmp::Ordering;
use std::fmt;

use super::state::ChainState;
use crate::query::QuerySource;

/// A discriminator chain over a source value.
///
/// `DiscriminatorChain<K, S, R>` remembers the switch value of type `K`
/// supplied at the start of the chain and matches each
/// [`case`](Self::case)'s value against it by `PartialEq`. As with
/// [`BranchChain`](super::BranchChain), the first matching case wins and
/// nothing runs until a terminal call.
///
/// Two instantiations of the one generic type:
///
/// - `DiscriminatorChain<K, S, S>` is pipeline-preserving; it gains the
///   identity terminal [`default`](Self::default) and, when
///   `S: QuerySource`, the `*_case` convenience methods.
/// - Arbitrary `R` is terminal-value; it is resolved with
///   [`default_with`](Self::default_with).
///
/// # Examples
///
/// ```rust
/// use condq::chain::Conditional;
///
/// let status = 404_u16;
/// let message = status
///     .switch_on(status / 100)
///     .case(2, |_| "ok".to_string())
///     .case(4, |code| format!("client error {code}"))
///     .case(5, |code| format!("server error {code}"))
///     .default_with(|code| format!("status {code}"));
/// assert_eq!(message, "client error 404");
/// ```
#[must_use = "a discriminator chain runs nothing until resolved with `default` or `default_with`"]
pub struct DiscriminatorChain<K, S, R> {
    switch_value: K,
    state: ChainState<S, R>,
}

impl<K: Clone, S: Clone, R> Clone for DiscriminatorChain<K, S, R> {
    fn clone(&self) -> Self {
        Self {
            switch_value: self.switch_value.clone(),
            state: self.state.clone(),
        }
    }
}

impl<K: fmt::Debug, S, R> fmt::Debug for DiscriminatorChain<K, S, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("DiscriminatorChain")
            .field("switch_value", &self.switch_value)
            .field("resolved", &self.state.is_resolved())
            .finish_non_exhaustive()
    }
}

impl<K, S, R> DiscriminatorChain<K, S, R> {
    /// Starts an unresolved chain remembering `switch_value`.
    ///
    /// Callers normally reach this through
    /// [`Conditional::switch_on`](super::Conditional::switch_on).
    pub(crate) const fn start(source: S, switch_value: K) -> Self {
        Self {
            switch_value,
            state: ChainState::unresolved(source),
        }
    }

    /// Adds a case: stores `transform` when the chain is still unresolved
    /// and `match_value` equals the switch value.
    ///
    /// Once a previous case has matched this is a no-op; a later case with
    /// an equal match value is never considered.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use condq::chain::Conditional;
    ///
    /// let doubled = 21_i32
    ///     .switch_on("x")
    ///     .case("x", |n| n * 2)
    ///     .case("x", |n| n * 10) // ignored: first match wins
    ///     .default_with(|n| n);
    /// assert_eq!(doubled, 42);
    /// ```
    pub fn case<F>(self, match_value: K, transform: F) -> Self
    where
        K: PartialEq,
        F: Fn(S) -> R + 'static,
    {
        if !self.state.is_resolved() && match_value == self.switch_value {
            Self {
                switch_value: self.switch_value,
                state: self.state.attach(transform),
            }
        } else {
            self
        }
    }

    /// Returns `true` once some case has matched.
    #[inline]
    pub const fn is_resolved(&self) -> bool {
        self.state.is_resolved()
    }

    /// Terminal call, value-producing form: runs the matched case's
    /// transform against the source, or `fallback` when no case matched.
    pub fn default_with<F>(self, fallback: F) -> R
    where
        F: FnOnce(S) -> R,
    {
        self.state.resolve_with(fallback)
    }
}

impl<K, S> DiscriminatorChain<K, S, S> {
    /// Terminal call, pipeline-preserving form: runs the matched transform,
    /// or returns the source unchanged when no case matched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use condq::chain::Conditional;
    ///
    /// let source = vec![1, 2, 3];
    /// let same = source
    ///     .clone()
    ///     .switch_on("none-of-these")
    ///     .case("reverse", |v: Vec<i32>| v.into_iter().rev().collect())
    ///     .default();
    /// assert_eq!(same, source);
    /// ```
    pub fn default(self) -> S {
        self.state.resolve_source()
    }
}

// =============================================================================
// Query-stage convenience cases (sugar over `case` / `default_with`)
// =============================================================================

impl<K, S> DiscriminatorChain<K, S, S>
where
    S: QuerySource,
{
    /// Case that filters the source by `predicate` when `match_value`
    /// equals the switch value.
    pub fn where_case<P>(self, match_value: K, predicate: P) -> Self
    where
        K: PartialEq,
        P: Fn(&S::Item) -> bool + Clone + 'static,
    {
        self.case(match_value, move |source: S| {
            source.filter_items(predicate.clone())
        })
    }

    /// Case that sorts the source ascending by `key` when `match_value`
    /// equals the switch value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use condq::prelude::*;
    ///
    /// let sorted = vec![3, 1, 2]
    ///     .switch_on("by-value")
    ///     .order_by_case("by-value", |n: &i32| *n)
    ///     .default();
    /// assert_eq!(sorted, vec![1, 2, 3]);
    /// ```
    pub fn order_by_case<O, F>(self, match_value: K, key: F) -> Self
    where
        K: PartialEq,
        O: Ord,
        F: Fn(&S::Item) -> O + Clone + 'static,
    {
        self.case(match_value, move |source: S| source.order_by(key.clone()))
    }

    /// Case that sorts the source descending by `key` when `match_value`
    /// equals the switch value.
    pub fn order_by_descending_case<O, F>(self, match_value: K, key: F) -> Self
    where
        K: PartialEq,
        O: Ord,
        F: Fn(&S::Item) -> O + Clone + 'static,
    {
        self.case(match_value, move |source: S| {
            source.order_by_descending(key.clone())
        })
    }

    /// Case that sorts the source with a custom comparer when `match_value`
    /// equals the switch value.
    pub fn order_by_case_with<C>(self, match_value: K, compare: C) -> Self
    where
        K: PartialEq,
        C: Fn(&S::Item, &S::Item) -> Ordering + Clone + 'static,
    {
        self.case(match_value, move |source: S| {
            source.order_with(compare.clone())
        })
    }

    /// Terminal call that sorts ascending by `key` when no case matched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use condq::prelude::*;
    ///
    /// let sorted = vec![3, 1, 2]
    ///     .switch_on("unknown")
    ///     .where_case("evens", |n: &i32| n % 2 == 0)
    ///     .order_by_default(|n: &i32| *n);
    /// assert_eq!(sorted, vec![1, 2, 3]);
    /// ```
    pub fn order_by_default<O, F>(self, key: F) -> S
    where
        O: Ord,
        F: Fn(&S::Item) -> O + 'static,
    {
        self.default_with(move |source| source.order_by(key))
    }

    /// Terminal call that sorts descending by `key` when no case matched.
    pub fn order_by_descending_default<O, F>(self, key: F) -> S
    where
        O: Ord,
        F: Fn(&S::Item) -> O + 'static,
    {
        self.default_with(move |source| source.order_by_descending(key))
    }
}
