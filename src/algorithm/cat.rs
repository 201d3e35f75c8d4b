//! Concatenation and flattening.

use crate::callable::{Callable, OutputOf};
use crate::combinator::{Constructor, Unpack, construct, unpack};
use crate::sequence::TupleKind;

/// The callable that concatenates its sequence arguments into one tuple.
pub type Cat = Unpack<Constructor<TupleKind>>;

/// The callable that flattens a sequence of sequences into one tuple.
pub type Join = Unpack<Cat>;

/// Concatenates the sequences it is called with:
/// `CAT.invoke(((1, 2), [3]))` is `(1, 2, 3)`.
pub const CAT: Cat = unpack(construct::<TupleKind>());

/// Flattens the one sequence of sequences it is called with:
/// `JOIN.invoke((((1, 2), [3]),))` is `(1, 2, 3)`.
pub const JOIN: Join = unpack(CAT);

/// Concatenates a group of sequences, first sequence first.
///
/// `sequences` is a tuple whose elements are the sequences to
/// concatenate; they may be of different kinds and lengths. The result is
/// a tuple whose length is the sum of their lengths.
///
/// # Examples
///
/// ```rust
/// use combinars::algorithm::cat;
/// use combinars::combinator::pack;
/// use combinars::hlist;
///
/// assert_eq!(cat(((1, 'a'), [2, 3], hlist!["b"])), (1, 'a', 2, 3, "b"));
/// assert_eq!(cat(((), pack((1,)))), (1,));
/// ```
#[inline]
pub fn cat<Ss>(sequences: Ss) -> OutputOf<Cat, Ss>
where
    Cat: Callable<Ss>,
{
    CAT.invoke(sequences)
}

/// Flattens one level of nesting: the elements of `sequence` must
/// themselves be sequences, and the result is the tuple of all their
/// elements.
///
/// # Examples
///
/// ```rust
/// use combinars::algorithm::join;
///
/// assert_eq!(join(((1, 2), (), (3,))), (1, 2, 3));
///
/// let nested = ((String::from("a"),), (String::from("b"),));
/// let (first, second) = join(&nested);
/// assert_eq!((first.as_str(), second.as_str()), ("a", "b"));
/// ```
#[inline]
pub fn join<S>(sequence: S) -> OutputOf<Join, (S,)>
where
    Join: Callable<(S,)>,
{
    JOIN.invoke((sequence,))
}
