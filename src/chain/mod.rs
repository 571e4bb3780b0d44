//! Conditional chain evaluators over a query source.
//!
//! This module provides the two chain state machines and the entry-point
//! trait that starts them:
//!
//! - [`BranchChain`]: boolean chain (`if_chain` / `else_if` / `or_else`)
//! - [`DiscriminatorChain`]: value-equality chain (`switch_on` / `case` /
//!   `default`)
//! - [`Conditional`]: blanket extension trait supplying `if_chain`,
//!   `switch_on`, and the single-shot `apply_if`
//!
//! Both chains are immutable builders: every step returns a new value, the
//! first matching branch wins, and the stored transform only runs at the
//! terminal resolving call.
//!
//! # Examples
//!
//! ## Boolean chain
//!
//! ```rust
//! use condq::chain::Conditional;
//!
//! let tier = 2;
//! let price = 100_u32
//!     .if_chain(tier == 1, |p| p * 9 / 10)
//!     .else_if(tier == 2, |p| p * 8 / 10)
//!     .or_else(|p| p);
//! assert_eq!(price, 80);
//! ```
//!
//! ## Discriminator chain
//!
//! ```rust
//! use condq::chain::Conditional;
//!
//! let shape = "circle";
//! let area = 4.0_f64
//!     .switch_on(shape)
//!     .case("circle", |r: f64| std::f64::consts::PI * r * r)
//!     .case("square", |side: f64| side * side)
//!     .default_with(|_| 0.0);
//! assert!((area - 50.265).abs() < 0.01);
//! ```

mod branch;
mod discriminator;
mod state;

pub use branch::BranchChain;
pub use discriminator::DiscriminatorChain;

/// Entry points for conditional chains on any owned value.
///
/// This trait is blanket-implemented for every sized type, so any value a
/// pipeline is built from (a `Vec`, a [`Query`](crate::query::Query), or any
/// other query representation) can start a chain directly.
pub trait Conditional: Sized {
    /// Starts a boolean conditional chain.
    ///
    /// The chain is resolved immediately when `condition` is true, storing
    /// `transform` without invoking it. Otherwise the chain starts
    /// unresolved and later [`else_if`](BranchChain::else_if) branches may
    /// still match.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use condq::chain::Conditional;
    ///
    /// let items = vec![3, 1, 2];
    /// let sorted = items
    ///     .if_chain(true, |mut v: Vec<i32>| {
    ///         v.sort_unstable();
    ///         v
    ///     })
    ///     .or_source();
    /// assert_eq!(sorted, vec![1, 2, 3]);
    /// ```
    fn if_chain<R, F>(self, condition: bool, transform: F) -> BranchChain<Self, R>
    where
        F: Fn(Self) -> R + 'static,
    {
        BranchChain::start(self, condition, transform)
    }

    /// Starts a discriminator chain matched by value equality.
    ///
    /// `switch_value` is remembered and compared against each
    /// [`case`](DiscriminatorChain::case)'s match value. Equality is
    /// whatever `K`'s [`PartialEq`] implementation says; a discriminator
    /// type without meaningful value semantics will match accordingly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use condq::chain::Conditional;
    ///
    /// let label = 7_i32
    ///     .switch_on('b')
    ///     .case('a', |n| format!("a{n}"))
    ///     .case('b', |n| format!("b{n}"))
    ///     .default_with(|n| n.to_string());
    /// assert_eq!(label, "b7");
    /// ```
    fn switch_on<K, R>(self, switch_value: K) -> DiscriminatorChain<K, Self, R> {
        DiscriminatorChain::start(self, switch_value)
    }

    /// Single-shot conditional transform.
    ///
    /// Returns `transform(self)` when `condition` is true, otherwise returns
    /// `self` unchanged. No chain state is built and nothing is deferred
    /// beyond what the transform itself defers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use condq::chain::Conditional;
    ///
    /// let capped = 150_u32.apply_if(true, |n| n.min(100));
    /// assert_eq!(capped, 100);
    ///
    /// let untouched = 150_u32.apply_if(false, |n| n.min(100));
    /// assert_eq!(untouched, 150);
    /// ```
    fn apply_if<F>(self, condition: bool, transform: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { transform(self) } else { self }
    }
}

impl<S> Conditional for S {}
