//! Polymorphic callables for common operators.
//!
//! Closures cannot be generic, so `|x, y| x + y` only works for one pair
//! of types. These unit structs implement [`Callable`] for every argument
//! type the underlying operator supports.

use std::ops::{Add, Mul};

use super::Callable;

/// Returns its single argument unchanged.
///
/// # Examples
///
/// ```rust
/// use combinars::callable::{Callable, Identity};
///
/// assert_eq!(Identity.invoke((5,)), 5);
/// assert_eq!(Identity.invoke(("text",)), "text");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Identity;

impl<T> Callable<(T,)> for Identity {
    type Output = T;

    #[inline]
    fn invoke(&self, (value,): (T,)) -> T {
        value
    }
}

/// Adds two values with [`Add`].
///
/// # Examples
///
/// ```rust
/// use combinars::callable::{Callable, Plus};
///
/// assert_eq!(Plus.invoke((2, 3)), 5);
/// assert_eq!(Plus.invoke((1.5, 0.25)), 1.75);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Plus;

impl<A, B> Callable<(A, B)> for Plus
where
    A: Add<B>,
{
    type Output = A::Output;

    #[inline]
    fn invoke(&self, (left, right): (A, B)) -> A::Output {
        left + right
    }
}

/// Multiplies two values with [`Mul`].
///
/// Works on borrowed numbers too, since `&i32: Mul<&i32>`.
///
/// # Examples
///
/// ```rust
/// use combinars::callable::{Callable, Times};
///
/// assert_eq!(Times.invoke((3, 4)), 12);
/// assert_eq!(Times.invoke((&3, &4)), 12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Times;

impl<A, B> Callable<(A, B)> for Times
where
    A: Mul<B>,
{
    type Output = A::Output;

    #[inline]
    fn invoke(&self, (left, right): (A, B)) -> A::Output {
        left * right
    }
}
