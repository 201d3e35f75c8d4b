//! Position-wise application of several callables.

use crate::callable::{Callable, CallableOnce};
use crate::hlist::{HCons, IntoTuple, TupleOf, ZipApply, ZipApplyOnce};
use crate::sequence::{ElementsOf, Sequence};

/// A callable that applies callable `i` to argument `i` and passes the
/// results to a continuation.
///
/// Created by [`combine`] or by calling [`CombineFn`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Combine<G, Fs> {
    continuation: G,
    functions: Fs,
}

/// Returns a callable that, given `n` arguments, applies the `i`-th
/// callable of `functions` to the `i`-th argument and calls
/// `continuation` with the `n` results.
///
/// `combine(g, (f0, f1)).invoke((x0, x1)) == g.invoke((f0.invoke((x0,)), f1.invoke((x1,))))`.
///
/// The number of callables and the number of arguments must match; a
/// mismatch is rejected at compile time.
///
/// # Examples
///
/// ```rust
/// use combinars::callable::Callable;
/// use combinars::combinator::{combine, construct};
/// use combinars::sequence::TupleKind;
///
/// let increment = |value: i32| value + 1;
/// let shout = |text: &str| text.to_uppercase();
///
/// let both = combine(construct::<TupleKind>(), (increment, shout));
/// assert_eq!(both.invoke((41, "hi")), (42, String::from("HI")));
/// ```
///
/// ```compile_fail
/// use combinars::callable::Callable;
/// use combinars::combinator::{combine, construct};
/// use combinars::sequence::TupleKind;
///
/// let increment = |value: i32| value + 1;
/// combine(construct::<TupleKind>(), (increment, increment)).invoke((1,));
/// ```
#[inline]
pub fn combine<G, Fs>(continuation: G, functions: Fs) -> Combine<G, ElementsOf<Fs>>
where
    Fs: Sequence,
{
    Combine {
        continuation,
        functions: functions.into_elements(),
    }
}

impl<G, Fs, Args> Callable<Args> for Combine<G, Fs>
where
    Args: Sequence,
    Fs: ZipApply<ElementsOf<Args>>,
    Fs::Output: IntoTuple,
    G: Callable<TupleOf<Fs::Output>>,
{
    type Output = G::Output;

    #[inline]
    fn invoke(&self, arguments: Args) -> Self::Output {
        let results = self.functions.zip_apply(arguments.into_elements());
        self.continuation.invoke(results.into_tuple())
    }
}

/// Consuming a `Combine` consumes each of its callables, so partial
/// applications inside it move their captured values into the call.
impl<G, Fs, Args> CallableOnce<Args> for Combine<G, Fs>
where
    Args: Sequence,
    Fs: ZipApplyOnce<ElementsOf<Args>>,
    Fs::Output: IntoTuple,
    G: Callable<TupleOf<Fs::Output>>,
{
    type Output = G::Output;

    #[inline]
    fn invoke_once(self, arguments: Args) -> Self::Output {
        let results = self.functions.zip_apply_once(arguments.into_elements());
        self.continuation.invoke(results.into_tuple())
    }
}

/// The callable form of [`combine`]: called with a continuation followed
/// by any number of callables, it returns the corresponding
/// [`Combine`].
///
/// Useful when the callables are only available as a sequence, since
/// [`unpack`](super::unpack) can spread them into the call.
///
/// # Examples
///
/// ```rust
/// use combinars::callable::Callable;
/// use combinars::combinator::{CombineFn, construct};
/// use combinars::sequence::TupleKind;
///
/// let double = |value: i32| value * 2;
/// let negate = |value: i32| -value;
///
/// let both = CombineFn.invoke((construct::<TupleKind>(), double, negate));
/// assert_eq!(both.invoke((3, 4)), (6, -4));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CombineFn;

impl<Args, G, Fs> Callable<Args> for CombineFn
where
    Args: Sequence<Elements = HCons<G, Fs>>,
    Fs: crate::hlist::HList,
{
    type Output = Combine<G, Fs>;

    #[inline]
    fn invoke(&self, arguments: Args) -> Self::Output {
        let HCons {
            head: continuation,
            tail: functions,
        } = arguments.into_elements();
        Combine {
            continuation,
            functions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinator::{Packer, construct, pack};
    use crate::sequence::TupleKind;
    use rstest::rstest;

    #[rstest]
    fn empty_combine_calls_continuation_with_nothing() {
        let answer = || 1;
        assert_eq!(combine(answer, ()).invoke(()), 1);
    }

    #[rstest]
    fn results_reach_a_reducing_continuation() {
        let add = |left: i32, right: i32| left + right;
        let square = |value: i32| value * value;
        assert_eq!(combine(add, (square, square)).invoke((3, 4)), 25);
    }

    #[rstest]
    fn combine_forwards_borrows() {
        let text = String::from("borrowed");
        let length = |value: &String| value.len();
        let first = |value: &String| value.chars().next();
        let combined = combine(Packer, (length, first));
        assert_eq!(combined.invoke((&text, &text)), pack((8, Some('b'))));
    }

    #[rstest]
    fn consuming_call_moves_into_each_callable() {
        let owned = String::from("once");
        let append = move |suffix: &str| owned + suffix;
        let length = |value: usize| value * 2;
        let combined = combine(construct::<TupleKind>(), (append, length));
        assert_eq!(combined.invoke_once(("!", 3)), (String::from("once!"), 6));
    }

    #[rstest]
    fn callable_form_matches_function_form() {
        let double = |value: i32| value * 2;
        let by_function = combine(construct::<TupleKind>(), (double,));
        let by_callable = CombineFn.invoke((construct::<TupleKind>(), double));
        assert_eq!(by_function.invoke((5,)), by_callable.invoke((5,)));
    }
}
