//! Argument packs.
//!
//! A [`Pack`] holds a fixed set of values until they are applied to a
//! callable. Packs are sequences, so they can be spread by
//! [`unpack`](super::unpack) and concatenated by the sequence algorithms,
//! which is how per-element results of different lengths are stitched
//! back together.
//!
//! # Ownership
//!
//! - [`Pack::apply`] consumes the pack and moves every value into the
//!   callable. A pack applied this way is single-use.
//! - [`Pack::apply_ref`] lends the values and can be repeated.
//! - The [`Callable`] impl exists so a pack can sit inside a combinator
//!   chain (which only ever borrows its parts); it requires the values to
//!   be [`Clone`] and hands the callable a fresh copy on every call.

use crate::callable::Callable;
use crate::hlist::{IntoTuple, TupleOf};
use crate::sequence::{ElementsOf, Sequence};

/// An opaque holder of captured values awaiting a callable.
///
/// Created by [`pack`], the [`pack!`](crate::pack!) macro, or by calling
/// [`Packer`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pack<T> {
    values: T,
}

/// Captures `values` (a tuple, array or list) in a [`Pack`].
///
/// # Examples
///
/// ```rust
/// use combinars::combinator::pack;
///
/// let packed = pack((2, 3));
/// assert_eq!(packed.apply(|left: i32, right: i32| left * right), 6);
/// ```
#[inline]
pub const fn pack<T>(values: T) -> Pack<T> {
    Pack { values }
}

impl<T> Pack<T> {
    /// Returns the captured values.
    #[inline]
    pub fn into_inner(self) -> T {
        self.values
    }

    /// Returns a reference to the captured values.
    #[inline]
    pub const fn as_inner(&self) -> &T {
        &self.values
    }

    /// Calls `function` with the captured values, moving them out.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::combinator::pack;
    ///
    /// let packed = pack((String::from("moved "), String::from("out")));
    /// let joined = packed.apply(|left: String, right: String| left + &right);
    /// assert_eq!(joined, "moved out");
    /// ```
    #[inline]
    pub fn apply<F>(self, function: F) -> F::Output
    where
        T: Sequence,
        ElementsOf<T>: IntoTuple,
        F: Callable<TupleOf<ElementsOf<T>>>,
    {
        function.invoke(self.values.into_elements().into_tuple())
    }

    /// Calls `function` with references to the captured values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::combinator::pack;
    ///
    /// let packed = pack((String::from("kept"),));
    /// assert_eq!(packed.apply_ref(|text: &String| text.len()), 4);
    /// assert_eq!(packed.apply_ref(|text: &String| text.len()), 4);
    /// ```
    #[inline]
    pub fn apply_ref<'a, F>(&'a self, function: F) -> F::Output
    where
        &'a T: Sequence,
        ElementsOf<&'a T>: IntoTuple,
        F: Callable<TupleOf<ElementsOf<&'a T>>>,
    {
        function.invoke((&self.values).into_elements().into_tuple())
    }
}

impl<T, F> Callable<(F,)> for Pack<T>
where
    T: Clone + Sequence,
    ElementsOf<T>: IntoTuple,
    F: Callable<TupleOf<ElementsOf<T>>>,
{
    type Output = F::Output;

    #[inline]
    fn invoke(&self, (function,): (F,)) -> Self::Output {
        self.clone().apply(function)
    }
}

impl<T: Sequence> Sequence for Pack<T> {
    type Elements = T::Elements;
    type Kind = T::Kind;

    #[inline]
    fn into_elements(self) -> Self::Elements {
        self.values.into_elements()
    }
}

impl<'a, T> Sequence for &'a Pack<T>
where
    &'a T: Sequence,
{
    type Elements = ElementsOf<&'a T>;
    type Kind = <&'a T as Sequence>::Kind;

    #[inline]
    fn into_elements(self) -> Self::Elements {
        (&self.values).into_elements()
    }
}

/// The callable form of [`pack`]: packs whatever arguments it is called
/// with.
///
/// # Examples
///
/// ```rust
/// use combinars::callable::Callable;
/// use combinars::combinator::{Packer, pack};
///
/// assert_eq!(Packer.invoke((1, 'a')), pack((1, 'a')));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Packer;

impl<Args> Callable<Args> for Packer {
    type Output = Pack<Args>;

    #[inline]
    fn invoke(&self, arguments: Args) -> Pack<Args> {
        pack(arguments)
    }
}

/// Packs the given expressions.
///
/// `pack!(a, b)` is `pack((a, b))`; `pack!()` is the empty pack.
///
/// # Examples
///
/// ```rust
/// use combinars::combinator::pack;
///
/// assert_eq!(combinars::pack!(1, 2), pack((1, 2)));
/// assert_eq!(combinars::pack!(), pack(()));
/// ```
#[macro_export]
macro_rules! pack {
    ($($value:expr),* $(,)?) => {
        $crate::combinator::pack(($($value,)*))
    };
}

// =============================================================================
// Serde
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Pack<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.values.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Pack<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        T::deserialize(deserializer).map(pack)
    }
}
