//! The `QuerySource` capability trait and single-shot conditional helpers.

use std::cmp::Ordering;

/// The minimal contract the chain layer consumes from a sequence.
///
/// Every operation is pipeline-preserving (`Self -> Self`): applying a
/// stage composes it onto the sequence without changing the sequence's
/// representation, and without forcing enumeration beyond what the
/// implementation itself performs. A deferred implementation (such as
/// [`Query`](crate::query::Query)) records the stage; a materialized one
/// (such as `Vec<T>`) applies it immediately — both satisfy the contract.
///
/// Closure arguments are bounded `'static` so implementations may store
/// them inside a deferred plan.
pub trait QuerySource: Sized {
    /// The element type of the sequence.
    type Item;

    /// Keeps only the items for which `predicate` returns `true`.
    fn filter_items<P>(self, predicate: P) -> Self
    where
        P: Fn(&Self::Item) -> bool + 'static;

    /// Sorts ascending by the given key selector. The sort is stable.
    fn order_by<O, F>(self, key: F) -> Self
    where
        O: Ord,
        F: Fn(&Self::Item) -> O + 'static;

    /// Sorts descending by the given key selector. The sort is stable.
    fn order_by_descending<O, F>(self, key: F) -> Self
    where
        O: Ord,
        F: Fn(&Self::Item) -> O + 'static;

    /// Sorts with a custom comparer.
    fn order_with<C>(self, compare: C) -> Self
    where
        C: Fn(&Self::Item, &Self::Item) -> Ordering + 'static;

    /// Skips the first `count` items; an over-long skip yields an empty
    /// sequence.
    fn skip_items(self, count: usize) -> Self;

    /// Keeps at most the first `count` items.
    fn take_items(self, count: usize) -> Self;

    /// Enumerates the sequence and returns its length.
    fn count_items(self) -> usize;
}

/// Single-shot conditional stages over any [`QuerySource`].
///
/// Each helper applies its stage when the condition is true and otherwise
/// returns the sequence unchanged. There is no chain state: these are thin
/// pass-throughs for the common "apply this stage only if" cases. For
/// multi-branch conditions, use
/// [`Conditional::if_chain`](crate::chain::Conditional::if_chain) or
/// [`Conditional::switch_on`](crate::chain::Conditional::switch_on).
///
/// # Examples
///
/// ```rust
/// use condq::query::ConditionalQuery;
///
/// let name_filter: Option<&str> = Some("b");
/// let names = vec!["ada", "bob", "bea", "eve"];
///
/// let found = names.where_if(name_filter.is_some(), move |name| {
///     name.starts_with(name_filter.unwrap_or_default())
/// });
/// assert_eq!(found, vec!["bob", "bea"]);
/// ```
pub trait ConditionalQuery: QuerySource {
    /// Filters by `predicate` when `condition` is true.
    fn where_if<P>(self, condition: bool, predicate: P) -> Self
    where
        P: Fn(&Self::Item) -> bool + 'static,
    {
        if condition {
            self.filter_items(predicate)
        } else {
            self
        }
    }

    /// Sorts ascending by `key` when `condition` is true.
    fn order_by_if<O, F>(self, condition: bool, key: F) -> Self
    where
        O: Ord,
        F: Fn(&Self::Item) -> O + 'static,
    {
        if condition { self.order_by(key) } else { self }
    }

    /// Sorts descending by `key` when `condition` is true.
    fn order_by_descending_if<O, F>(self, condition: bool, key: F) -> Self
    where
        O: Ord,
        F: Fn(&Self::Item) -> O + 'static,
    {
        if condition {
            self.order_by_descending(key)
        } else {
            self
        }
    }

    /// Sorts with a custom comparer when `condition` is true.
    fn order_by_if_with<C>(self, condition: bool, compare: C) -> Self
    where
        C: Fn(&Self::Item, &Self::Item) -> Ordering + 'static,
    {
        if condition { self.order_with(compare) } else { self }
    }

    /// Skips `count` items when `condition` is true.
    fn skip_if(self, condition: bool, count: usize) -> Self {
        if condition { self.skip_items(count) } else { self }
    }

    /// Takes at most `count` items when `condition` is true.
    fn take_if(self, condition: bool, count: usize) -> Self {
        if condition { self.take_items(count) } else { self }
    }
}

impl<S: QuerySource> ConditionalQuery for S {}

impl<T> QuerySource for Vec<T> {
    type Item = T;

    fn filter_items<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        self.retain(|item| predicate(item));
        self
    }

    fn order_by<O, F>(mut self, key: F) -> Self
    where
        O: Ord,
        F: Fn(&T) -> O + 'static,
    {
        self.sort_by(|left, right| key(left).cmp(&key(right)));
        self
    }

    fn order_by_descending<O, F>(mut self, key: F) -> Self
    where
        O: Ord,
        F: Fn(&T) -> O + 'static,
    {
        self.sort_by(|left, right| key(right).cmp(&key(left)));
        self
    }

    fn order_with<C>(mut self, compare: C) -> Self
    where
        C: Fn(&T, &T) -> Ordering + 'static,
    {
        self.sort_by(|left, right| compare(left, right));
        self
    }

    fn skip_items(mut self, count: usize) -> Self {
        let bound = count.min(self.len());
        self.drain(..bound);
        self
    }

    fn take_items(mut self, count: usize) -> Self {
        self.truncate(count);
        self
    }

    fn count_items(self) -> usize {
        self.len()
    }
}
