//! # condq
//!
//! Conditional composition operators for lazy query pipelines.
//!
//! ## Overview
//!
//! This library lets callers build a single query pipeline whose individual
//! stages (filter, sort, page, transform) are applied only when a runtime
//! condition holds, without branching imperative code and without forcing
//! evaluation of the underlying sequence. It includes:
//!
//! - **Branch chains**: `if_chain` / `else_if` / `or_else` — a boolean
//!   conditional chain where exactly one branch's transform runs
//! - **Discriminator chains**: `switch_on` / `case` / `default` — the same
//!   state machine keyed by value equality against a switch value
//! - **Single-shot helpers**: `where_if`, `order_by_if`, `skip_if`, `take_if`
//!   for one-off conditional stages
//! - **Query contract**: a minimal capability trait ([`query::QuerySource`])
//!   the chain layer consumes, plus a small deferred reference sequence
//!   ([`query::Query`])
//!
//! Every chain step returns a new immutable value; the transform attached by
//! the first matching branch is stored, never run, until a terminal resolving
//! call (`or_else`, `or_source`, `default`, `default_with`) consumes the chain.
//!
//! ## Feature Flags
//!
//! - `chain`: The conditional chain evaluators
//! - `query`: The query capability trait, single-shot helpers, and the
//!   deferred reference sequence
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use condq::prelude::*;
//!
//! let rows = vec![4, 1, 3, 2, 5];
//! let sort_mode = "descending";
//!
//! let result = rows
//!     .switch_on(sort_mode)
//!     .order_by_case("ascending", |n: &i32| *n)
//!     .order_by_descending_case("descending", |n: &i32| *n)
//!     .default();
//!
//! assert_eq!(result, vec![5, 4, 3, 2, 1]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use condq::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "chain")]
    pub use crate::chain::*;

    #[cfg(feature = "query")]
    pub use crate::query::*;
}

#[cfg(feature = "chain")]
pub mod chain;

#[cfg(feature = "query")]
pub mod query;
