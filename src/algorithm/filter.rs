//! Type-level selection of elements.

use crate::callable::{Callable, OutputOf};
use crate::combinator::{
    Always, Branch, Compose, Conditional, Pack, Packer, Predicate, always, compose, conditional, if_,
    pack,
};

use super::cat::{JOIN, Join};
use super::transform::TransformFn;

/// The per-element step of [`filter`]: wraps an element in a one-element
/// pack when the predicate accepts it, and returns the empty pack
/// otherwise.
///
/// Created by [`keep`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Keep<P> {
    predicate: P,
}

/// Returns the per-element step of [`filter`] for `predicate`.
///
/// # Examples
///
/// ```rust
/// use combinars::algorithm::keep;
/// use combinars::callable::Callable;
/// use combinars::combinator::{False, True, pack};
///
/// let always_keep = keep(|_: &i32| True);
/// let never_keep = keep(|_: &i32| False);
///
/// assert_eq!(always_keep.invoke((4,)), pack((4,)));
/// assert_eq!(never_keep.invoke((4,)), pack(()));
/// ```
#[inline]
pub const fn keep<P>(predicate: P) -> Keep<P> {
    Keep { predicate }
}

type Selector<C> = Conditional<Branch<C, Packer>, Always<Pack<()>>>;

impl<P, X> Callable<(X,)> for Keep<P>
where
    P: Predicate<X>,
    Selector<P::Output>: Callable<(X,)>,
{
    type Output = OutputOf<Selector<P::Output>, (X,)>;

    #[inline]
    fn invoke(&self, (element,): (X,)) -> Self::Output {
        let condition = self.predicate.test(&element);
        conditional(if_(condition).then(Packer), always(pack(()))).invoke((element,))
    }
}

/// The callable form of [`filter`], called with `(sequence, predicate)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FilterFn;

type Filtering = Compose<Join, TransformFn>;

impl<S, P> Callable<(S, P)> for FilterFn
where
    Filtering: Callable<(S, Keep<P>)>,
{
    type Output = OutputOf<Filtering, (S, Keep<P>)>;

    #[inline]
    fn invoke(&self, (sequence, predicate): (S, P)) -> Self::Output {
        compose(JOIN, TransformFn).invoke((sequence, keep(predicate)))
    }
}

/// Returns the tuple of the elements of `sequence` accepted by
/// `predicate`, in their original order.
///
/// The length of the result depends on which elements are accepted, so
/// the predicate must decide at compile time: it returns [`True`] or
/// [`False`] for each element type. A predicate returning `bool` is
/// rejected when the code is compiled.
///
/// [`True`]: crate::combinator::True
/// [`False`]: crate::combinator::False
///
/// # Examples
///
/// ```rust
/// use combinars::algorithm::filter;
/// use combinars::combinator::{False, Predicate, True};
///
/// struct IsInteger;
///
/// impl Predicate<i32> for IsInteger {
///     type Output = True;
///     fn test(&self, _: &i32) -> True {
///         True
///     }
/// }
///
/// impl Predicate<char> for IsInteger {
///     type Output = False;
///     fn test(&self, _: &char) -> False {
///         False
///     }
/// }
///
/// let mixed: (i32, i32, char, i32) = (1, 2, 'x', 3);
/// assert_eq!(filter(mixed, IsInteger), (1, 2, 3));
/// ```
///
/// ```compile_fail
/// use combinars::algorithm::filter;
///
/// let positive = |value: &i32| *value > 0;
/// filter((1, -2, 3), positive);
/// ```
#[inline]
pub fn filter<S, P>(sequence: S, predicate: P) -> OutputOf<FilterFn, (S, P)>
where
    FilterFn: Callable<(S, P)>,
{
    FilterFn.invoke((sequence, predicate))
}
