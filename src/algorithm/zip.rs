//! Pairwise combination of two sequences.

use crate::callable::{Callable, CallableOnce, OutputOf, Plus, Times};
use crate::combinator::{Capture, Combine, Constructor, capture, combine, construct};
use crate::sequence::{ElementsOf, KindOf, Sequence};

use super::fold::FoldFn;
use super::transform::TransformFn;

/// The callable form of [`zip_with`], called with
/// `(first, second, function)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ZipWithFn;

// One partial application of the function per element of the first
// sequence, in a sequence of the same kind.
type Partials<S, F> = OutputOf<TransformFn, (S, Capture<F>)>;

type Pairing<S, F> = Combine<Constructor<KindOf<S>>, ElementsOf<Partials<S, F>>>;

impl<S1, S2, F> Callable<(S1, S2, F)> for ZipWithFn
where
    S1: Sequence,
    F: Clone,
    TransformFn: Callable<(S1, Capture<F>)>,
    Partials<S1, F>: Sequence,
    Pairing<S1, F>: CallableOnce<S2>,
{
    type Output = <Pairing<S1, F> as CallableOnce<S2>>::Output;

    #[inline]
    fn invoke(&self, (first, second, function): (S1, S2, F)) -> Self::Output {
        let partials = TransformFn.invoke((first, capture(function)));
        combine(construct::<KindOf<S1>>(), partials).invoke_once(second)
    }
}

/// Combines two sequences of equal length position by position:
/// `zip_with((a0, a1), (b0, b1), f) == (f(a0, b0), f(a1, b1))`.
///
/// The result has the kind of `first`. Sequences of different lengths
/// are rejected at compile time.
///
/// Each element of `first` is captured in a partial application of
/// `function`, which is then applied to the matching element of
/// `second`. `function` is cloned once per element. Each partial
/// application runs exactly once and is consumed by it, so the elements
/// of an owned `first` are moved into `function`, never copied.
///
/// # Examples
///
/// ```rust
/// use combinars::algorithm::zip_with;
///
/// let multiply = |left: i32, right: i32| left * right;
/// assert_eq!(zip_with((1, 2), (3, 4), multiply), (3, 8));
/// assert_eq!(zip_with([1, 2], [3, 4], multiply), [3, 8]);
///
/// let names = (String::from("x"), String::from("y"));
/// let label = |name: &String, value: i32| format!("{name}={value}");
/// assert_eq!(zip_with(&names, (1, 2), label), (String::from("x=1"), String::from("y=2")));
/// ```
///
/// ```compile_fail
/// use combinars::algorithm::zip_with;
///
/// let multiply = |left: i32, right: i32| left * right;
/// zip_with((1, 2), (3, 4, 5), multiply);
/// ```
#[inline]
pub fn zip_with<S1, S2, F>(first: S1, second: S2, function: F) -> OutputOf<ZipWithFn, (S1, S2, F)>
where
    ZipWithFn: Callable<(S1, S2, F)>,
{
    ZipWithFn.invoke((first, second, function))
}

/// The callable form of [`dot`], called with `(first, second)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DotFn;

type Products<S1, S2> = OutputOf<ZipWithFn, (S1, S2, Times)>;

impl<S1, S2> Callable<(S1, S2)> for DotFn
where
    ZipWithFn: Callable<(S1, S2, Times)>,
    FoldFn: Callable<(Products<S1, S2>, Plus)>,
{
    type Output = OutputOf<FoldFn, (Products<S1, S2>, Plus)>;

    #[inline]
    fn invoke(&self, (first, second): (S1, S2)) -> Self::Output {
        FoldFn.invoke((ZipWithFn.invoke((first, second, Times)), Plus))
    }
}

/// The sum of the pairwise products of two non-empty sequences of equal
/// length: `dot((a0, a1), (b0, b1)) == a0 * b0 + a1 * b1`.
///
/// # Examples
///
/// ```rust
/// use combinars::algorithm::dot;
///
/// assert_eq!(dot((1_i32, 2_i32), (3_i32, 4_i32)), 11);
/// assert_eq!(dot([1.5_f64, 2.0], [2.0_f64, 0.25]), 3.5);
/// ```
#[inline]
pub fn dot<S1, S2>(first: S1, second: S2) -> OutputOf<DotFn, (S1, S2)>
where
    DotFn: Callable<(S1, S2)>,
{
    DotFn.invoke((first, second))
}
