//! Reductions.

use crate::callable::{Callable, OutputOf};
use crate::combinator::{Compress, Unpack, compress, unpack};
use crate::hlist::FoldLeft;
use crate::sequence::{ElementsOf, Sequence};

/// The callable form of [`fold`], called with `(sequence, function)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FoldFn;

impl<S, F> Callable<(S, F)> for FoldFn
where
    Unpack<Compress<F>>: Callable<(S,)>,
{
    type Output = OutputOf<Unpack<Compress<F>>, (S,)>;

    #[inline]
    fn invoke(&self, (sequence, function): (S, F)) -> Self::Output {
        unpack(compress(function)).invoke((sequence,))
    }
}

/// Reduces the elements of a non-empty `sequence` from the left:
/// `fold((a, b, c), f) == f(f(a, b), c)`.
///
/// A single element is returned as is. An empty sequence is rejected at
/// compile time; see [`fold_from`] for a seeded fold.
///
/// # Examples
///
/// ```rust
/// use combinars::algorithm::fold;
/// use combinars::callable::Plus;
///
/// assert_eq!(fold((1_u32, 2_u32, 3_u32), Plus), 6);
/// assert_eq!(fold([2.5], Plus), 2.5);
///
/// let longest = |left: &'static str, right: &'static str| {
///     if right.len() > left.len() { right } else { left }
/// };
/// assert_eq!(fold(("a", "abc", "ab"), longest), "abc");
/// ```
///
/// ```compile_fail
/// use combinars::algorithm::fold;
/// use combinars::callable::Plus;
///
/// let nothing: i32 = fold((), Plus);
/// ```
#[inline]
pub fn fold<S, F>(sequence: S, function: F) -> OutputOf<FoldFn, (S, F)>
where
    FoldFn: Callable<(S, F)>,
{
    FoldFn.invoke((sequence, function))
}

/// The callable form of [`fold_from`], called with
/// `(sequence, seed, function)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FoldFromFn;

impl<S, A, F> Callable<(S, A, F)> for FoldFromFn
where
    S: Sequence,
    ElementsOf<S>: FoldLeft<F, A>,
{
    type Output = <ElementsOf<S> as FoldLeft<F, A>>::Output;

    #[inline]
    fn invoke(&self, (sequence, seed, function): (S, A, F)) -> Self::Output {
        sequence.into_elements().fold_left(seed, &function)
    }
}

/// Folds the elements of `sequence` into `seed` from the left:
/// `fold_from((a, b), s, f) == f(f(s, a), b)`.
///
/// An empty sequence returns `seed`. The seed is moved in, never cloned.
///
/// # Examples
///
/// ```rust
/// use combinars::algorithm::fold_from;
///
/// let push = |mut names: Vec<String>, name: &str| {
///     names.push(name.to_uppercase());
///     names
/// };
///
/// assert_eq!(fold_from(("ann", "bo"), Vec::new(), push), vec!["ANN", "BO"]);
/// assert!(fold_from((), Vec::<String>::new(), push).is_empty());
/// ```
#[inline]
pub fn fold_from<S, A, F>(sequence: S, seed: A, function: F) -> OutputOf<FoldFromFn, (S, A, F)>
where
    FoldFromFn: Callable<(S, A, F)>,
{
    FoldFromFn.invoke((sequence, seed, function))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callable::{Plus, Times};
    use crate::hlist;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn single_element_skips_the_operator() {
        let calls = Cell::new(0);
        let counting = |left: i32, right: i32| {
            calls.set(calls.get() + 1);
            left + right
        };
        assert_eq!(fold((9,), counting), 9);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn operator_is_called_once_per_pair() {
        let calls = Cell::new(0);
        let counting = |left: i32, right: i32| {
            calls.set(calls.get() + 1);
            left * right
        };
        assert_eq!(fold((1, 2, 3, 4), counting), 24);
        assert_eq!(calls.get(), 3);
    }

    #[rstest]
    fn folds_borrowed_sequences() {
        let values = (2_i32, 3_i32);
        assert_eq!(fold(&values, Times), 6);
        assert_eq!(fold(hlist![1_u8, 2_u8], Plus), 3);
    }

    #[rstest]
    fn seeded_fold_equals_fold_with_seed_in_front() {
        let subtract = |left: i32, right: i32| left - right;
        assert_eq!(fold_from((1, 2), 10, subtract), fold((10, 1, 2), subtract));
    }

    #[rstest]
    fn seeded_fold_of_empty_sequence_is_seed() {
        assert_eq!(fold_from((), String::from("seed"), Plus), "seed");
    }
}
