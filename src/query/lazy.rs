//! A deferred reference sequence over a `Vec`.
//!
//! This module provides the `Query<T>` type, a minimal deferred-evaluation
//! plan: each pipeline stage wraps the plan with another step instead of
//! running it, and nothing is enumerated until [`run`](Query::run) (or
//! `count_items`) is called.
//!
//! # Examples
//!
//! ```rust
//! use condq::query::{Query, QuerySource};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let pulls = Rc::new(Cell::new(0));
//! let probe = Rc::clone(&pulls);
//!
//! let query = Query::from_fn(move || {
//!     probe.set(probe.get() + 1);
//!     vec![3, 1, 2]
//! })
//! .filter_items(|n| *n > 1)
//! .order_by(|n| *n);
//!
//! // Stages composed, nothing enumerated yet
//! assert_eq!(pulls.get(), 0);
//!
//! assert_eq!(query.run(), vec![2, 3]);
//! assert_eq!(pulls.get(), 1);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use super::source::QuerySource;

/// A lazily evaluated sequence plan.
///
/// `Query<T>` holds a reference-counted producer of `Vec<T>` together with
/// the stages composed onto it so far. Composing a stage builds a new plan;
/// enumeration happens only when the plan is run. Unlike a memoizing lazy
/// cell, the plan is re-enumerable: every call to [`run`](Self::run)
/// replays the producer and the composed stages.
///
/// # Thread Safety
///
/// This type is NOT thread-safe (the plan is `Rc`-shared). Resolve the
/// pipeline to a `Vec` before crossing threads.
///
/// # Examples
///
/// ```rust
/// use condq::prelude::*;
///
/// let include_drafts = false;
/// let posts = Query::from_source(vec!["published-a", "draft-b", "published-c"])
///     .where_if(!include_drafts, |post| !post.starts_with("draft"));
///
/// assert_eq!(posts.run(), vec!["published-a", "published-c"]);
/// ```
pub struct Query<T> {
    plan: Rc<dyn Fn() -> Vec<T>>,
}

impl<T> Clone for Query<T> {
    fn clone(&self) -> Self {
        Self {
            plan: Rc::clone(&self.plan),
        }
    }
}

impl<T> fmt::Debug for Query<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Query").finish_non_exhaustive()
    }
}

impl<T: 'static> Query<T> {
    /// Creates a plan from a producer function.
    ///
    /// The producer is not called here; it runs once per enumeration.
    pub fn from_fn<F>(producer: F) -> Self
    where
        F: Fn() -> Vec<T> + 'static,
    {
        Self {
            plan: Rc::new(producer),
        }
    }

    /// Creates a plan over an in-memory source.
    ///
    /// Each enumeration clones the source, so the plan stays re-enumerable.
    pub fn from_source(items: Vec<T>) -> Self
    where
        T: Clone,
    {
        Self::from_fn(move || items.clone())
    }

    /// Enumerates the plan: runs the producer and every composed stage.
    #[must_use]
    pub fn run(&self) -> Vec<T> {
        (self.plan)()
    }

    /// Composes one more stage onto the plan without running anything.
    fn compose<F>(self, step: F) -> Self
    where
        F: Fn(Vec<T>) -> Vec<T> + 'static,
    {
        let plan = self.plan;
        Self {
            plan: Rc::new(move || step(plan())),
        }
    }
}

impl<T: Clone + 'static> From<Vec<T>> for Query<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_source(items)
    }
}

impl<T: 'static> QuerySource for Query<T> {
    type Item = T;

    fn filter_items<P>(self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        self.compose(move |mut items| {
            items.retain(|item| predicate(item));
            items
        })
    }

    fn order_by<O, F>(self, key: F) -> Self
    where
        O: Ord,
        F: Fn(&T) -> O + 'static,
    {
        self.compose(move |mut items| {
            items.sort_by(|left, right| key(left).cmp(&key(right)));
            items
        })
    }

    fn order_by_descending<O, F>(self, key: F) -> Self
    where
        O: Ord,
        F: Fn(&T) -> O + 'static,
    {
        self.compose(move |mut items| {
            items.sort_by(|left, right| key(right).cmp(&key(left)));
            items
        })
    }

    fn order_with<C>(self, compare: C) -> Self
    where
        C: Fn(&T, &T) -> Ordering + 'static,
    {
        self.compose(move |mut items| {
            items.sort_by(|left, right| compare(left, right));
            items
        })
    }

    fn skip_items(self, count: usize) -> Self {
        self.compose(move |mut items| {
            let bound = count.min(items.len());
            items.drain(..bound);
            items
        })
    }

    fn take_items(self, count: usize) -> Self {
        self.compose(move |mut items| {
            items.truncate(count);
            items
        })
    }

    fn count_items(self) -> usize {
        self.run().len()
    }
}
