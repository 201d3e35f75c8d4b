//! # combinars
//!
//! A compile-time combinator algebra over fixed-length heterogeneous
//! sequences.
//!
//! ## Overview
//!
//! A handful of primitive combinators (`unpack`, `by`, `construct`,
//! `compose`, `conditional`, `always`, `pack`, `capture`, `combine`,
//! `compress`) are enough to express the usual sequence algorithms
//! (`transform`, `for_each`, `fold`, `cat`, `join`, `filter`,
//! `zip_with`, `dot`) over tuples, arrays and heterogeneous lists whose
//! element types may all differ. Every composition is resolved by the
//! type checker: an arity or kind mismatch, an empty fold or a
//! non-boolean guard is a compile error, and there is no run-time error
//! path.
//!
//! - **Callables**: the [`Callable`](callable::Callable) trait, implemented
//!   by every closure and by polymorphic unit structs
//! - **Sequences**: the [`Sequence`](sequence::Sequence) trait for tuples,
//!   arrays, heterogeneous lists and their borrows
//! - **Combinators**: the primitives, each a reusable callable value
//! - **Algorithms**: the derived sequence operations
//!
//! ## Feature Flags
//!
//! - `combinator`: the primitive combinators
//! - `algorithm`: the sequence algorithms (implies `combinator`)
//! - `serde`: serialization of lists, packs and type-level conditions
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use combinars::prelude::*;
//!
//! let multiply = |left: i32, right: i32| left * right;
//!
//! assert_eq!(transform((1, 2), |value: i32| value * value), (1, 4));
//! assert_eq!(fold(zip_with((1, 2), (3, 4), multiply), Plus), 11);
//! assert_eq!(cat(((1, 'a'), ["b"])), (1, 'a', "b"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]
// Generic bounds over associated-type projections read better spelled out
#![allow(clippy::type_complexity)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use combinars::prelude::*;
/// ```
pub mod prelude {
    pub use crate::callable::*;

    pub use crate::hlist::{HCons, HList, HNil, IntoArray, IntoTuple};

    pub use crate::sequence::{ArrayKind, Build, ListKind, Sequence, TupleKind};

    #[cfg(feature = "combinator")]
    pub use crate::combinator::*;

    #[cfg(feature = "algorithm")]
    pub use crate::algorithm::*;

    pub use crate::{HList, hlist, hlist_pat};
}

pub mod callable;

pub mod hlist;

pub mod sequence;

#[cfg(feature = "combinator")]
pub mod combinator;

#[cfg(feature = "algorithm")]
pub mod algorithm;
