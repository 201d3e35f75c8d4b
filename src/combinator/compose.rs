//! Right-to-left composition of callables.

use crate::callable::Callable;

/// A callable that feeds the result of `G` into `F`.
///
/// Created by [`compose`] or [`compose!`](crate::compose!).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Compose<F, G> {
    outer: F,
    inner: G,
}

/// Composes two callables: `compose(f, g).invoke(args) == f.invoke((g.invoke(args),))`.
///
/// The inner callable receives the original arguments and may take any
/// number of them; the outer one receives the inner result as its only
/// argument.
///
/// # Laws
///
/// - **Associativity**: `compose(compose(f, g), h)` and
///   `compose(f, compose(g, h))` return the same results
/// - **Identity**: `compose(Identity, f)` and `compose(f, Identity)`
///   return the same results as `f`
///
/// # Examples
///
/// ```rust
/// use combinars::callable::Callable;
/// use combinars::combinator::compose;
///
/// let add = |left: i32, right: i32| left + right;
/// let double = |value: i32| value * 2;
///
/// assert_eq!(compose(double, add).invoke((2, 3)), 10);
/// ```
#[inline]
pub const fn compose<F, G>(outer: F, inner: G) -> Compose<F, G> {
    Compose { outer, inner }
}

impl<F, G, Args> Callable<Args> for Compose<F, G>
where
    G: Callable<Args>,
    F: Callable<(G::Output,)>,
{
    type Output = F::Output;

    #[inline]
    fn invoke(&self, arguments: Args) -> Self::Output {
        self.outer.invoke((self.inner.invoke(arguments),))
    }
}

/// Composes any number of callables from right to left.
///
/// `compose!(f, g, h)` is `compose(f, compose(g, h))`: `h` receives the
/// arguments, `g` receives the result of `h`, and `f` the result of `g`.
/// `compose!(f)` is `f` itself.
///
/// # Examples
///
/// ```rust
/// use combinars::callable::Callable;
/// use combinars::compose;
///
/// let add_one = |value: i32| value + 1;
/// let double = |value: i32| value * 2;
/// let square = |value: i32| value * value;
///
/// // add_one(double(square(3))) = add_one(double(9)) = add_one(18) = 19
/// assert_eq!(compose!(add_one, double, square).invoke((3,)), 19);
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };
    ($outer:expr, $($rest:expr),+ $(,)?) => {
        $crate::combinator::compose($outer, $crate::compose!($($rest),+))
    };
}
