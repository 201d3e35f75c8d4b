//! Element-wise effects.

use crate::callable::Callable;
use crate::combinator::{By, Packer, Unpack, by_each, unpack};
use crate::sequence::Sequence;

/// The callable form of [`for_each`], called with `(sequence, function)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ForEachFn;

type Visitor<F> = Unpack<By<F, Packer>>;

impl<S, F> Callable<(S, F)> for ForEachFn
where
    S: Sequence,
    Visitor<F>: Callable<(S,)>,
{
    type Output = ();

    #[inline]
    fn invoke(&self, (sequence, function): (S, F)) {
        unpack(by_each(function)).invoke((sequence,));
    }
}

/// Calls `function` on every element of `sequence`, left to right, and
/// discards the results.
///
/// Pass `&mut sequence` to modify the elements in place.
///
/// # Examples
///
/// ```rust
/// use combinars::algorithm::for_each;
///
/// let mut counters = (1, 10, 100);
/// for_each(&mut counters, |counter: &mut i32| *counter += 1);
/// assert_eq!(counters, (2, 11, 101));
/// ```
#[inline]
pub fn for_each<S, F>(sequence: S, function: F)
where
    ForEachFn: Callable<(S, F), Output = ()>,
{
    ForEachFn.invoke((sequence, function));
}
