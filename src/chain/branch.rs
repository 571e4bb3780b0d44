//! Boolean conditional chain.
//!
//! This module provides [`BranchChain`], the `if_chain` / `else_if` /
//! `or_else` evaluator. The first branch whose condition is true has its
//! transform stored; every later branch is a no-op; nothing runs until a
//! terminal resolving call.
//!
//! # Examples
//!
//! ```rust
//! use condq::chain::Conditional;
//!
//! let page_size = Some(10_usize);
//! let rows: Vec<i32> = (1..=25).collect();
//!
//! let page = rows
//!     .if_chain(page_size.is_some(), move |v: Vec<i32>| {
//!         v.into_iter().take(page_size.unwrap_or(0)).collect()
//!     })
//!     .or_source();
//!
//! assert_eq!(page.len(), 10);
//! ```

use std::fmt;

use super::state::ChainState;

/// A boolean conditional chain over a source value.
///
/// `BranchChain<S, R>` carries the original source of type `S` and, once a
/// branch has matched, a stored transform producing `R`. Two instantiations
/// matter:
///
/// - `BranchChain<S, S>` is pipeline-preserving: every branch maps the
///   source to the same type, and [`or_source`](Self::or_source) resolves
///   with the identity fallback.
/// - `BranchChain<S, R>` with arbitrary `R` is terminal-value: the chain is
///   resolved by [`or_else`](Self::or_else) with an explicit fallback.
///
/// The compiler enforces that all transforms in one chain share the output
/// type `R`.
///
/// # Immutability
///
/// Every step consumes the chain and returns a new value; no state is
/// mutated in place. When `S: Clone` the chain itself is `Clone`, so an
/// intermediate chain can be captured and resolved independently of any
/// longer chain built from it.
///
/// # Laziness
///
/// A stored transform is invoked at most once, only by the terminal call.
/// Dropping an unresolved chain runs nothing.
///
/// # Examples
///
/// ```rust
/// use condq::chain::Conditional;
///
/// let role = "editor";
/// let access = 0_u8
///     .if_chain(role == "admin", |_| 255)
///     .else_if(role == "editor", |_| 7)
///     .else_if(role == "viewer", |_| 1)
///     .or_else(|_| 0);
/// assert_eq!(access, 7);
/// ```
#[must_use = "a branch chain runs nothing until resolved with `or_else` or `or_source`"]
pub struct BranchChain<S, R> {
    state: ChainState<S, R>,
}

impl<S: Clone, R> Clone for BranchChain<S, R> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<S, R> fmt::Debug for BranchChain<S, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("BranchChain")
            .field("resolved", &self.state.is_resolved())
            .finish_non_exhaustive()
    }
}

impl<S, R> BranchChain<S, R> {
    /// Starts a chain: resolved with `transform` when `condition` is true,
    /// unresolved otherwise.
    ///
    /// Callers normally reach this through
    /// [`Conditional::if_chain`](super::Conditional::if_chain).
    pub(crate) fn start<F>(source: S, condition: bool, transform: F) -> Self
    where
        F: Fn(S) -> R + 'static,
    {
        let state = if condition {
            ChainState::resolved_with(source, transform)
        } else {
            ChainState::unresolved(source)
        };
        Self { state }
    }

    /// Adds a branch: stores `transform` when the chain is still unresolved
    /// and `condition` is true.
    ///
    /// Once a previous branch has matched this is a no-op returning an
    /// equivalent chain — the first true condition wins, regardless of how
    /// many later conditions are also true. Note that `condition` is an
    /// already-computed boolean: branch *selection* short-circuits, not the
    /// caller's evaluation of the condition expression itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use condq::chain::Conditional;
    ///
    /// let n = 3_i32
    ///     .if_chain(true, |n| n + 10)
    ///     .else_if(true, |n| n + 100) // ignored: already resolved
    ///     .or_else(|n| n);
    /// assert_eq!(n, 13);
    /// ```
    pub fn else_if<F>(self, condition: bool, transform: F) -> Self
    where
        F: Fn(S) -> R + 'static,
    {
        if condition {
            Self {
                state: self.state.attach(transform),
            }
        } else {
            self
        }
    }

    /// Returns `true` once some branch has matched.
    ///
    /// Observing this does not resolve the chain.
    #[inline]
    pub const fn is_resolved(&self) -> bool {
        self.state.is_resolved()
    }

    /// Terminal call: runs the matched branch's transform against the
    /// source, or `fallback` when no branch matched.
    ///
    /// This is the only point at which any transform executes. Exactly one
    /// of stored-transform / fallback runs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use condq::chain::Conditional;
    ///
    /// let out = "data"
    ///     .if_chain(false, |s: &str| s.to_uppercase())
    ///     .or_else(|s| s.to_string());
    /// assert_eq!(out, "data");
    /// ```
    pub fn or_else<F>(self, fallback: F) -> R
    where
        F: FnOnce(S) -> R,
    {
        self.state.resolve_with(fallback)
    }
}

impl<S> BranchChain<S, S> {
    /// Terminal call for pipeline-preserving chains: runs the matched
    /// transform, or returns the source unchanged when no branch matched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use condq::chain::Conditional;
    ///
    /// let source = vec![1, 2, 3];
    /// let same = source
    ///     .clone()
    ///     .if_chain(false, |v: Vec<i32>| v.into_iter().rev().collect())
    ///     .or_source();
    /// assert_eq!(same, source);
    /// ```
    pub fn or_source(self) -> S {
        self.state.resolve_source()
    }
}
