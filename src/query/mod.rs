//! The query-source contract and single-shot conditional helpers.
//!
//! This module defines the boundary between the chain evaluators and
//! whatever lazy sequence engine actually runs the pipeline:
//!
//! - [`QuerySource`]: the minimal capability trait a sequence must offer
//!   (filter, order, skip, take, count), pipeline-preserving
//! - [`ConditionalQuery`]: single-shot conditional stages (`where_if`,
//!   `order_by_if`, `skip_if`, `take_if`) provided for every `QuerySource`
//! - [`Query`]: a small deferred reference sequence over a `Vec` for hosts
//!   without their own engine, and for exercising the laziness guarantees
//!
//! `Vec<T>` implements [`QuerySource`] directly: an already-materialized
//! sequence trivially satisfies the contract.
//!
//! # Examples
//!
//! ```rust
//! use condq::query::ConditionalQuery;
//!
//! let wants_even = true;
//! let result = vec![1, 2, 3, 4, 5, 6]
//!     .where_if(wants_even, |n| n % 2 == 0)
//!     .take_if(true, 2);
//! assert_eq!(result, vec![2, 4]);
//! ```

mod lazy;
mod source;

pub use lazy::Query;
pub use source::{ConditionalQuery, QuerySource};
