//! Sequence kinds.
//!
//! A kind is a marker type standing for a family of sequences ("tuples",
//! "arrays", "heterogeneous lists"). Kinds let an operation rebuild a
//! result of the same sort as its input without naming the concrete
//! element types, which change as elements are transformed.

use crate::hlist::{HList, IntoArray, IntoTuple};

/// Builds a value of this kind from a list of elements.
///
/// Implement it for your own marker type to make
/// [`construct`](crate::combinator::construct) produce your own container.
///
/// # Examples
///
/// ```rust
/// use combinars::hlist;
/// use combinars::hlist::{HCons, HNil};
/// use combinars::sequence::{ArrayKind, Build, TupleKind};
///
/// assert_eq!(TupleKind::build(hlist![1, 'a']), (1, 'a'));
/// assert_eq!(ArrayKind::build(hlist![1, 2]), [1, 2]);
///
/// struct Total;
///
/// impl Build<HCons<u32, HCons<u32, HNil>>> for Total {
///     type Output = u32;
///     fn build(elements: HCons<u32, HCons<u32, HNil>>) -> u32 {
///         elements.head + elements.tail.head
///     }
/// }
///
/// assert_eq!(Total::build(hlist![2, 3]), 5);
/// ```
#[diagnostic::on_unimplemented(
    message = "the kind `{Self}` cannot be built from `{L}`",
    note = "tuples hold up to twelve elements; arrays need one to twelve elements of a single type"
)]
pub trait Build<L> {
    /// The built value.
    type Output;

    /// Builds the value, moving the elements in.
    fn build(elements: L) -> Self::Output;
}

/// Tuples of up to twelve elements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TupleKind;

impl<L: IntoTuple> Build<L> for TupleKind {
    type Output = L::Tuple;

    #[inline]
    fn build(elements: L) -> L::Tuple {
        elements.into_tuple()
    }
}

/// Heterogeneous lists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ListKind;

impl<L: HList> Build<L> for ListKind {
    type Output = L;

    #[inline]
    fn build(elements: L) -> L {
        elements
    }
}

/// Arrays of one to twelve elements of a single type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ArrayKind;

impl<L: IntoArray> Build<L> for ArrayKind {
    type Output = L::Array;

    #[inline]
    fn build(elements: L) -> L::Array {
        elements.into_array()
    }
}
