//! Fixed-length heterogeneous sequences.
//!
//! A sequence is any value whose length and per-position element types
//! are known at compile time. The [`Sequence`] trait exposes such a value
//! as a heterogeneous list of its elements, which is what every
//! combinator in this crate destructures.
//!
//! # Implementors
//!
//! | Value | Elements | Kind |
//! |---|---|---|
//! | `(A, B, ...)` (0 to 12 elements) | `A, B, ...` | [`TupleKind`] |
//! | `&(A, B, ...)` | `&A, &B, ...` | [`TupleKind`] |
//! | `&mut (A, B, ...)` | `&mut A, &mut B, ...` | [`TupleKind`] |
//! | `[T; N]` (0 to 12 elements) | `T, T, ...` | [`ArrayKind`] |
//! | `&[T; N]` | `&T, &T, ...` | [`ArrayKind`] |
//! | `&mut [T; N]` | `&mut T, &mut T, ...` | [`ArrayKind`] |
//! | `HNil`, `HCons<H, T>` | the list itself | [`ListKind`] |
//! | `&HNil`, `&HCons<H, T>` | `&H, ...` | [`ListKind`] |
//! | `&mut HNil`, `&mut HCons<H, T>` | `&mut H, ...` | [`ListKind`] |
//!
//! An empty array has no element left to name its type, so algorithms
//! that rebuild the input kind (such as `transform`) reject `[T; 0]`;
//! the others accept it.
//!
//! The ownership of the sequence decides the ownership of its elements:
//! destructuring a borrowed tuple yields borrowed elements and never
//! moves out of it.
//!
//! # Examples
//!
//! ```rust
//! use combinars::hlist;
//! use combinars::sequence::Sequence;
//!
//! let owned = (1, String::from("two"));
//! assert_eq!((&owned).into_elements(), hlist![&1, &String::from("two")]);
//! assert_eq!(owned.into_elements(), hlist![1, String::from("two")]);
//!
//! assert_eq!(<(u8, char, bool) as Sequence>::LEN, 3);
//! ```

mod impls;
mod kind;

pub use kind::{ArrayKind, Build, ListKind, TupleKind};

use crate::hlist::{Append, HCons, HList, HNil};

/// A value with a compile-time length and per-position element types.
///
/// # Associated Types
///
/// - `Elements`: the elements as a heterogeneous list, with ownership
///   matching the sequence (owned for owned sequences, references for
///   borrowed ones).
/// - `Kind`: the marker naming what sort of sequence this is, so that
///   derived operations can rebuild a result of the same sort.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a fixed-length sequence",
    note = "tuples of up to twelve elements, arrays of one to twelve elements, heterogeneous lists, packs and borrows of these are sequences"
)]
pub trait Sequence {
    /// The elements, in order.
    type Elements: HList;

    /// The sort of sequence, used to rebuild results of the same sort.
    type Kind;

    /// Number of elements.
    const LEN: usize = <Self::Elements as HList>::LEN;

    /// Destructures the sequence into its elements.
    fn into_elements(self) -> Self::Elements;
}

/// The element list of the sequence `S`.
pub type ElementsOf<S> = <S as Sequence>::Elements;

/// The kind marker of the sequence `S`.
pub type KindOf<S> = <S as Sequence>::Kind;

// =============================================================================
// Flatten
// =============================================================================

/// Concatenates the elements of a list of sequences.
///
/// `hlist![(a, b), (c,)]` flattens to `hlist![a, b, c]`. Every element of
/// the list must itself be a [`Sequence`]; each contributes its elements
/// with its own ownership.
///
/// # Examples
///
/// ```rust
/// use combinars::hlist;
/// use combinars::sequence::Flatten;
///
/// let nested = hlist![(1, 2), (), ('x',)];
/// assert_eq!(nested.flatten(), hlist![1, 2, 'x']);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a list of sequences",
    note = "every argument spread by `unpack` must itself be a sequence"
)]
pub trait Flatten {
    /// The concatenated element list.
    type Output: HList;

    /// Concatenates the element lists, first sequence first.
    fn flatten(self) -> Self::Output;
}

impl Flatten for HNil {
    type Output = Self;

    #[inline]
    fn flatten(self) -> Self {
        self
    }
}

impl<S, T> Flatten for HCons<S, T>
where
    S: Sequence,
    T: Flatten,
    S::Elements: Append<T::Output>,
    <S::Elements as Append<T::Output>>::Output: HList,
{
    type Output = <S::Elements as Append<T::Output>>::Output;

    #[inline]
    fn flatten(self) -> Self::Output {
        self.head.into_elements().append(self.tail.flatten())
    }
}

/// The concatenated element list of the list of sequences `L`.
pub type Flattened<L> = <L as Flatten>::Output;
