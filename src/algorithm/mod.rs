//! Sequence algorithms built from the combinators.
//!
//! Each algorithm is a composition of the primitives in
//! [`combinator`](crate::combinator), exposed both as a function and as a
//! unit callable so that algorithms can be composed further.
//!
//! # Overview
//!
//! | Function | Callable | Built as |
//! |---|---|---|
//! | [`transform`] | [`TransformFn`] | `unpack(by(f, construct::<Kind>()))` |
//! | [`for_each`] | [`ForEachFn`] | `unpack(by_each(f))`, result discarded |
//! | [`fold`] | [`FoldFn`] | `unpack(compress(f))` |
//! | [`fold_from`] | [`FoldFromFn`] | seeded left fold |
//! | [`cat`] | [`CAT`] | `unpack(construct::<TupleKind>())` |
//! | [`join`] | [`JOIN`] | `unpack(CAT)` |
//! | [`filter`] | [`FilterFn`] | `compose(JOIN, TransformFn)` with [`keep`] |
//! | [`zip_with`] | [`ZipWithFn`] | `transform` with `capture(f)`, then `combine` |
//! | [`dot`] | [`DotFn`] | `fold(zip_with(a, b, Times), Plus)` |
//!
//! # Examples
//!
//! ```rust
//! use combinars::algorithm::{dot, fold, transform, zip_with};
//! use combinars::callable::Plus;
//!
//! let multiply = |left: i32, right: i32| left * right;
//!
//! assert_eq!(transform((1, 2), |value: i32| value * value), (1, 4));
//! assert_eq!(zip_with((1, 2), (3, 4), multiply), (3, 8));
//! assert_eq!(fold(zip_with((1, 2), (3, 4), multiply), Plus), 11);
//! assert_eq!(dot((1_i32, 2_i32), (3_i32, 4_i32)), 11);
//! ```
//!
//! # Laws
//!
//! - **Identity**: `transform(s, Identity) == s`
//! - **Composition**: `transform(transform(s, f), g) == transform(s, compose(g, f))`
//! - **Cardinality**: `cat((s1, s2))` has `s1.len() + s2.len()` elements
//! - **Idempotence**: `filter(filter(s, p), p) == filter(s, p)`
//! - **Seeded fold**: `fold_from(s, seed, f) == fold(cat(((seed,), s)), f)`

mod cat;
mod filter;
mod fold;
mod for_each;
mod transform;
mod zip;

pub use cat::{CAT, Cat, JOIN, Join, cat, join};
pub use filter::{FilterFn, Keep, filter, keep};
pub use fold::{FoldFn, FoldFromFn, fold, fold_from};
pub use for_each::{ForEachFn, for_each};
pub use transform::{TransformFn, transform};
pub use zip::{DotFn, ZipWithFn, dot, zip_with};
