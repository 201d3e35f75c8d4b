//! Left-to-right reduction of an argument list.

use crate::callable::Callable;
use crate::hlist::{FoldLeft, Reduce};
use crate::sequence::{ElementsOf, Sequence};

/// A callable that reduces its arguments pairwise with a binary callable.
///
/// Created by [`compress`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Compress<F> {
    function: F,
}

/// Returns a callable that folds its arguments from the left:
/// `compress(f).invoke((e0, e1, e2)) == f(f(e0, e1), e2)`.
///
/// With a single argument the argument is returned and `f` is never
/// called. Calling it with no arguments does not compile, since no value
/// exists that a reduction of nothing could return for an arbitrary `f`;
/// use [`compress_from`] to fold possibly empty argument lists.
///
/// `f` is called with the running result first, so it must accept every
/// intermediate type it produces.
///
/// # Examples
///
/// ```rust
/// use combinars::callable::Callable;
/// use combinars::combinator::compress;
///
/// let subtract = |left: i32, right: i32| left - right;
/// assert_eq!(compress(subtract).invoke((10, 3, 2)), 5);
/// assert_eq!(compress(subtract).invoke((10,)), 10);
/// ```
///
/// ```compile_fail
/// use combinars::callable::Callable;
/// use combinars::combinator::compress;
///
/// let subtract = |left: i32, right: i32| left - right;
/// let nothing: i32 = compress(subtract).invoke(());
/// ```
#[inline]
pub const fn compress<F>(function: F) -> Compress<F> {
    Compress { function }
}

impl<F, Args> Callable<Args> for Compress<F>
where
    Args: Sequence,
    ElementsOf<Args>: Reduce<F>,
{
    type Output = <ElementsOf<Args> as Reduce<F>>::Output;

    #[inline]
    fn invoke(&self, arguments: Args) -> Self::Output {
        arguments.into_elements().reduce(&self.function)
    }
}

/// A callable that folds its arguments into a seed.
///
/// Created by [`compress_from`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CompressFrom<F, S> {
    function: F,
    seed: S,
}

/// Returns a callable that folds its arguments from the left, starting
/// from `seed`: `compress_from(f, s).invoke((e0, e1)) == f(f(s, e0), e1)`.
///
/// Called with no arguments it returns a copy of `seed`. The seed is
/// cloned on every call.
///
/// # Examples
///
/// ```rust
/// use combinars::callable::Callable;
/// use combinars::combinator::compress_from;
///
/// let push = |mut text: String, part: &str| {
///     text.push_str(part);
///     text
/// };
/// let join = compress_from(push, String::from(">"));
///
/// assert_eq!(join.invoke(("a", "b")), ">ab");
/// assert_eq!(join.invoke(()), ">");
/// ```
#[inline]
pub const fn compress_from<F, S>(function: F, seed: S) -> CompressFrom<F, S> {
    CompressFrom { function, seed }
}

impl<F, S, Args> Callable<Args> for CompressFrom<F, S>
where
    S: Clone,
    Args: Sequence,
    ElementsOf<Args>: FoldLeft<F, S>,
{
    type Output = <ElementsOf<Args> as FoldLeft<F, S>>::Output;

    #[inline]
    fn invoke(&self, arguments: Args) -> Self::Output {
        arguments
            .into_elements()
            .fold_left(self.seed.clone(), &self.function)
    }
}
