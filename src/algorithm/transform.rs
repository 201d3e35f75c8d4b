//! Element-wise mapping.

use crate::callable::{Callable, OutputOf};
use crate::combinator::{By, Constructor, Unpack, by, construct, unpack};
use crate::sequence::{KindOf, Sequence};

/// The callable form of [`transform`], called with `(sequence, function)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TransformFn;

type Mapper<S, F> = Unpack<By<F, Constructor<KindOf<S>>>>;

impl<S, F> Callable<(S, F)> for TransformFn
where
    S: Sequence,
    Mapper<S, F>: Callable<(S,)>,
{
    type Output = OutputOf<Mapper<S, F>, (S,)>;

    #[inline]
    fn invoke(&self, (sequence, function): (S, F)) -> Self::Output {
        unpack(by(function, construct::<KindOf<S>>())).invoke((sequence,))
    }
}

/// Applies `function` to every element of `sequence`, left to right, and
/// collects the results into a sequence of the same kind.
///
/// A tuple yields a tuple, an array an array and a heterogeneous list a
/// heterogeneous list. Borrowed sequences are not consumed: `function`
/// receives references to their elements.
///
/// # Examples
///
/// ```rust
/// use combinars::algorithm::transform;
///
/// let square = |value: i32| value * value;
/// assert_eq!(transform((1, 2), square), (1, 4));
/// assert_eq!(transform([1, 2, 3], square), [1, 4, 9]);
///
/// let words = (String::from("one"), String::from("three"));
/// assert_eq!(transform(&words, |word: &String| word.len()), (3, 5));
/// assert_eq!(words.0, "one");
/// ```
#[inline]
pub fn transform<S, F>(sequence: S, function: F) -> OutputOf<TransformFn, (S, F)>
where
    TransformFn: Callable<(S, F)>,
{
    TransformFn.invoke((sequence, function))
}
