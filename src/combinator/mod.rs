//! The primitive combinators.
//!
//! Every combinator is a small value wrapping the callables it was built
//! from, and is itself [`Callable`](crate::callable::Callable). Combinators
//! only ever borrow their parts when called, so a combinator can be called
//! any number of times and nested inside other combinators.
//!
//! # Overview
//!
//! - [`unpack`]: spread sequence arguments into positional arguments
//! - [`by`] / [`by_each`]: project every argument before a call
//! - [`construct`]: build a sequence of a given kind from the arguments
//! - [`compose`] / [`compose!`]: right-to-left composition
//! - [`conditional`] / [`conditional!`] / [`if_`]: ordered branch selection
//! - [`always`]: ignore the arguments and return a constant
//! - [`pack`] / [`pack!`] / [`Packer`]: hold values until applied
//! - [`capture`]: partial application from the left
//! - [`combine`] / [`CombineFn`]: apply callables position by position
//! - [`compress`] / [`compress_from`]: fold the arguments from the left
//!
//! # Examples
//!
//! ```rust
//! use combinars::callable::Callable;
//! use combinars::combinator::{by, compose, compress, construct, unpack};
//! use combinars::sequence::TupleKind;
//!
//! let square = |value: i32| value * value;
//! let add = |left: i32, right: i32| left + right;
//!
//! // Squares every element of a tuple, then adds the squares up.
//! let squares = unpack(by(square, construct::<TupleKind>()));
//! let sum_of_squares = compose(unpack(compress(add)), squares);
//!
//! assert_eq!(squares.invoke(((1, 2, 3),)), (1, 4, 9));
//! assert_eq!(sum_of_squares.invoke(((1, 2, 3),)), 14);
//! ```
//!
//! # Laws
//!
//! - **Unpack**: `unpack(f).invoke((s,)) == f(s.0, s.1, ...)`
//! - **Composition**: `compose(f, compose(g, h)) == compose(compose(f, g), h)`
//! - **Capture**: `capture(f).with(a).invoke(b) == f(a..., b...)`
//! - **Compress**: `compress(f).invoke((a, b, c)) == f(f(a, b), c)`

mod always;
mod by;
mod capture;
mod combine;
mod compose;
mod compress;
mod conditional;
mod construct;
mod pack;
mod unpack;

pub use always::{Always, always};
pub use by::{By, by, by_each};
pub use capture::{Capture, Captured, capture};
pub use combine::{Combine, CombineFn, combine};
pub use compose::{Compose, compose};
pub use compress::{Compress, CompressFrom, compress, compress_from};
pub use conditional::{Branch, Condition, Conditional, False, If, Predicate, True, conditional, if_};
pub use construct::{Constructor, construct};
pub use pack::{Pack, Packer, pack};
pub use unpack::{Unpack, unpack};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::conditional;
pub use crate::pack;

// Combinators hold nothing but their parts.
static_assertions::assert_impl_all!(Compose<fn(i32) -> i32, fn(i32) -> i32>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Unpack<Packer>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Constructor<std::rc::Rc<()>>: Send, Sync, Copy);
static_assertions::assert_not_impl_any!(Pack<(std::rc::Rc<i32>,)>: Send, Sync);
