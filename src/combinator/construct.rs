//! Building sequences from positional arguments.

use std::fmt;
use std::marker::PhantomData;

use crate::callable::Callable;
use crate::sequence::{Build, ElementsOf, Sequence};

/// A callable that builds a value of kind `K` from its arguments.
///
/// Created by [`construct`].
pub struct Constructor<K> {
    kind: PhantomData<fn() -> K>,
}

/// Returns a callable that collects its arguments, in order, into a value
/// of kind `K`.
///
/// # Examples
///
/// ```rust
/// use combinars::callable::Callable;
/// use combinars::combinator::construct;
/// use combinars::hlist;
/// use combinars::sequence::{ArrayKind, ListKind, TupleKind};
///
/// assert_eq!(construct::<TupleKind>().invoke((1, 'a')), (1, 'a'));
/// assert_eq!(construct::<ArrayKind>().invoke((1, 2, 3)), [1, 2, 3]);
/// assert_eq!(construct::<ListKind>().invoke((1, 'a')), hlist![1, 'a']);
/// ```
#[inline]
pub const fn construct<K>() -> Constructor<K> {
    Constructor { kind: PhantomData }
}

impl<K> Clone for Constructor<K> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Constructor<K> {}

impl<K> Default for Constructor<K> {
    #[inline]
    fn default() -> Self {
        construct()
    }
}

impl<K> fmt::Debug for Constructor<K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Constructor<{}>", std::any::type_name::<K>())
    }
}

impl<K, Args> Callable<Args> for Constructor<K>
where
    Args: Sequence,
    K: Build<ElementsOf<Args>>,
{
    type Output = K::Output;

    #[inline]
    fn invoke(&self, arguments: Args) -> Self::Output {
        K::build(arguments.into_elements())
    }
}
