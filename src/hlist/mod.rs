//! Heterogeneous lists.
//!
//! Rust tuples have no structural recursion, so every arity-generic
//! operation in this crate is written once against a cons-list of types
//! and bridged to tuples at the call boundary. This module provides that
//! list.
//!
//! # Overview
//!
//! - [`HNil`]: the empty list
//! - [`HCons`]: a head element followed by a tail list
//! - [`HList`]: the trait implemented by both, carrying the length as a
//!   compile-time constant
//! - [`hlist!`](crate::hlist!), [`hlist_pat!`](crate::hlist_pat!) and
//!   [`HList!`](crate::HList!): construction, destructuring and type
//!   macros
//!
//! The list algorithms used by the combinators ([`Append`], [`MapList`],
//! [`ZipApply`], [`FoldLeft`], [`Reduce`]) and the tuple/array bridges
//! ([`IntoTuple`], [`IntoArray`]) live in submodules and are re-exported
//! here.
//!
//! # Examples
//!
//! ```rust
//! use combinars::hlist::{HList, IntoTuple};
//! use combinars::{hlist, hlist_pat};
//!
//! let list = hlist![1, "two", 3.0];
//! assert_eq!(list.len(), 3);
//!
//! let hlist_pat![first, second, third] = list;
//! assert_eq!((first, second, third), (1, "two", 3.0));
//!
//! assert_eq!(hlist![1, 'x'].into_tuple(), (1, 'x'));
//! ```

mod array;
mod ops;
#[cfg(feature = "serde")]
mod serde_impls;
mod tuple;

pub use array::IntoArray;
pub(crate) use array::replace_type;
pub use ops::{Append, Concat, FoldLeft, MapList, Reduce, ZipApply, ZipApplyOnce};
pub use tuple::{IntoTuple, TupleOf};

/// The empty heterogeneous list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HNil;

/// A non-empty heterogeneous list: one `head` element followed by a `tail`
/// list.
///
/// Values are normally built with [`hlist!`](crate::hlist!) rather than
/// by naming the fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HCons<H, T> {
    /// The first element.
    pub head: H,
    /// The remaining elements.
    pub tail: T,
}

/// A heterogeneous list whose length is known at compile time.
///
/// # Examples
///
/// ```rust
/// use combinars::hlist::{HCons, HList, HNil};
///
/// type Pair = HCons<i32, HCons<char, HNil>>;
/// assert_eq!(<Pair as HList>::LEN, 2);
///
/// let list = HNil.prepend('x').prepend(1);
/// assert_eq!(list, HCons { head: 1, tail: HCons { head: 'x', tail: HNil } });
/// ```
pub trait HList: Sized {
    /// Number of elements in the list.
    const LEN: usize;

    /// Returns the number of elements.
    #[inline]
    fn len(&self) -> usize {
        Self::LEN
    }

    /// Returns `true` for [`HNil`].
    #[inline]
    fn is_empty(&self) -> bool {
        Self::LEN == 0
    }

    /// Puts `head` in front of this list.
    #[inline]
    fn prepend<H>(self, head: H) -> HCons<H, Self> {
        HCons { head, tail: self }
    }
}

impl HList for HNil {
    const LEN: usize = 0;
}

impl<H, T: HList> HList for HCons<H, T> {
    const LEN: usize = 1 + T::LEN;
}

// =============================================================================
// Macros
// =============================================================================

/// Builds a heterogeneous list value.
///
/// `hlist![a, b, c]` expands to `HCons { head: a, tail: HCons { head: b, ... HNil } }`.
///
/// # Examples
///
/// ```rust
/// use combinars::hlist;
/// use combinars::hlist::{HCons, HNil};
///
/// assert_eq!(hlist![], HNil);
/// assert_eq!(hlist![1], HCons { head: 1, tail: HNil });
/// ```
#[macro_export]
macro_rules! hlist {
    () => {
        $crate::hlist::HNil
    };
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::hlist::HCons {
            head: $head,
            tail: $crate::hlist!($($tail),*),
        }
    };
}

/// Destructures a heterogeneous list in pattern position.
///
/// # Examples
///
/// ```rust
/// use combinars::{hlist, hlist_pat};
///
/// let hlist_pat![number, text] = hlist![7, "seven"];
/// assert_eq!(number, 7);
/// assert_eq!(text, "seven");
/// ```
#[macro_export]
macro_rules! hlist_pat {
    () => {
        $crate::hlist::HNil
    };
    ($head:pat $(, $tail:pat)* $(,)?) => {
        $crate::hlist::HCons {
            head: $head,
            tail: $crate::hlist_pat!($($tail),*),
        }
    };
}

/// Names the type of a heterogeneous list.
///
/// # Examples
///
/// ```rust
/// use combinars::{hlist, HList};
///
/// let list: HList![i32, &str] = hlist![1, "one"];
/// assert_eq!(list.head, 1);
/// ```
#[macro_export]
macro_rules! HList {
    () => {
        $crate::hlist::HNil
    };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::hlist::HCons<$head, $crate::HList!($($tail),*)>
    };
}
