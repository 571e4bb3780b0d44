//! Shared chain-state value underlying both chain evaluators.

use std::rc::Rc;

/// The persistent "has a branch matched, and with which transform" snapshot.
///
/// A stored transform is reference-counted so that chain states can be
/// cloned and branched; `pending.is_some()` doubles as the resolved flag
/// since a branch can never match without supplying a transform.
pub(crate) struct ChainState<S, R> {
    source: S,
    pending: Option<Rc<dyn Fn(S) -> R>>,
}

impl<S: Clone, R> Clone for ChainState<S, R> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            pending: self.pending.clone(),
        }
    }
}

impl<S, R> ChainState<S, R> {
    pub(crate) const fn unresolved(source: S) -> Self {
        Self {
            source,
            pending: None,
        }
    }

    pub(crate) fn resolved_with<F>(source: S, transform: F) -> Self
    where
        F: Fn(S) -> R + 'static,
    {
        Self {
            source,
            pending: Some(Rc::new(transform)),
        }
    }

    /// Attaches a transform unless one is already stored.
    ///
    /// Once resolved the state is frozen: the call is a no-op returning the
    /// state unchanged.
    pub(crate) fn attach<F>(self, transform: F) -> Self
    where
        F: Fn(S) -> R + 'static,
    {
        if self.pending.is_some() {
            self
        } else {
            Self::resolved_with(self.source, transform)
        }
    }

    pub(crate) const fn is_resolved(&self) -> bool {
        self.pending.is_some()
    }

    /// Terminal call: runs the stored transform, or `fallback` when no
    /// branch ever matched. Exactly one of the two runs, exactly once.
    pub(crate) fn resolve_with<F>(self, fallback: F) -> R
    where
        F: FnOnce(S) -> R,
    {
        match self.pending {
            Some(transform) => transform(self.source),
            None => fallback(self.source),
        }
    }
}

impl<S> ChainState<S, S> {
    /// Terminal call with the identity fallback: an unresolved chain hands
    /// the source back unchanged.
    pub(crate) fn resolve_source(self) -> S {
        match self.pending {
            Some(transform) => transform(self.source),
            None => self.source,
        }
    }
}
