//! Projecting every argument before a call.

use crate::callable::Callable;
use crate::hlist::{IntoTuple, MapList, TupleOf};
use crate::sequence::{ElementsOf, Sequence};

use super::pack::Packer;

/// A callable that projects each argument through one callable and
/// passes the results to another.
///
/// Created by [`by`] and [`by_each`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct By<F, G> {
    projection: F,
    continuation: G,
}

/// Returns a callable that applies `projection` to each argument
/// individually, left to right, and calls `continuation` with the
/// results.
///
/// `by(f, g).invoke((x, y)) == g.invoke((f.invoke((x,)), f.invoke((y,))))`.
///
/// # Examples
///
/// ```rust
/// use combinars::callable::Callable;
/// use combinars::combinator::by;
///
/// let length = |text: &str| text.len();
/// let add = |left: usize, right: usize| left + right;
///
/// assert_eq!(by(length, add).invoke(("four", "five!")), 9);
/// ```
#[inline]
pub const fn by<F, G>(projection: F, continuation: G) -> By<F, G> {
    By {
        projection,
        continuation,
    }
}

/// Returns a callable that applies `projection` to each argument and
/// packs the results.
///
/// This is [`by`] with [`Packer`] as the continuation. The result is a
/// [`Pack`](super::Pack), which is itself a sequence; drop it to run
/// `projection` purely for its effects.
///
/// # Examples
///
/// ```rust
/// use combinars::callable::Callable;
/// use combinars::combinator::{by_each, pack};
///
/// let double = |value: i32| value * 2;
/// assert_eq!(by_each(double).invoke((1, 2, 3)), pack((2, 4, 6)));
/// ```
#[inline]
pub const fn by_each<F>(projection: F) -> By<F, Packer> {
    by(projection, Packer)
}

impl<F, G> By<F, G> {
    /// Returns the projection.
    #[inline]
    pub const fn projection(&self) -> &F {
        &self.projection
    }
}

impl<F, G, Args> Callable<Args> for By<F, G>
where
    Args: Sequence,
    ElementsOf<Args>: MapList<F>,
    <ElementsOf<Args> as MapList<F>>::Output: IntoTuple,
    G: Callable<TupleOf<<ElementsOf<Args> as MapList<F>>::Output>>,
{
    type Output = G::Output;

    #[inline]
    fn invoke(&self, arguments: Args) -> Self::Output {
        let projected = arguments.into_elements().map_list(&self.projection);
        self.continuation.invoke(projected.into_tuple())
    }
}
