//! Ordered branch selection.
//!
//! A [`Conditional`] is a chain of guarded branches ending in a fallback.
//! Each guard is a [`Condition`] computed before the chain is built; when
//! the chain is called, the first branch whose guard holds receives the
//! arguments, and the fallback receives them when none does.
//!
//! # Conditions
//!
//! Two sorts of guards exist:
//!
//! - [`True`] and [`False`] decide the branch at compile time. Different
//!   branches may return different types, which is what lets a branch
//!   change the *shape* of a result (see [`filter`](crate::algorithm::filter)).
//! - `bool` decides at run time. Every branch must then return the same
//!   type.
//!
//! A fallback is always required, and it must accept the arguments even
//! when an earlier branch is selected statically.
//!
//! # Examples
//!
//! ```rust
//! use combinars::callable::Callable;
//! use combinars::combinator::{False, True, always, if_};
//! use combinars::conditional;
//!
//! let describe = conditional!(
//!     if_(False).then(|value: i32| value),
//!     if_(True).then(|value: i32| format!("picked {value}")),
//!     always("fallback"),
//! );
//! assert_eq!(describe.invoke((7,)), "picked 7");
//!
//! let sign = |value: i32| {
//!     conditional!(if_(value < 0).then(always(-1)), if_(value > 0).then(always(1)), always(0))
//!         .invoke((value,))
//! };
//! assert_eq!((sign(-4), sign(0), sign(9)), (-1, 0, 1));
//! ```

use std::ops::{BitAnd, BitOr, Not};

use crate::callable::Callable;

// =============================================================================
// Conditions
// =============================================================================

/// A guard for a branch of a [`Conditional`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a branch condition",
    note = "conditions are `bool` for run-time selection or `True`/`False` for compile-time selection"
)]
pub trait Condition: Copy {
    /// Returns whether the condition holds.
    fn holds(self) -> bool;
}

/// The condition that always holds, decided at compile time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct True;

/// The condition that never holds, decided at compile time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct False;

impl Condition for True {
    #[inline]
    fn holds(self) -> bool {
        true
    }
}

impl Condition for False {
    #[inline]
    fn holds(self) -> bool {
        false
    }
}

impl Condition for bool {
    #[inline]
    fn holds(self) -> bool {
        self
    }
}

impl Not for True {
    type Output = False;

    #[inline]
    fn not(self) -> False {
        False
    }
}

impl Not for False {
    type Output = True;

    #[inline]
    fn not(self) -> True {
        True
    }
}

impl<Rhs: Condition> BitAnd<Rhs> for True {
    type Output = Rhs;

    #[inline]
    fn bitand(self, rhs: Rhs) -> Rhs {
        rhs
    }
}

impl<Rhs: Condition> BitAnd<Rhs> for False {
    type Output = False;

    #[inline]
    fn bitand(self, _rhs: Rhs) -> False {
        False
    }
}

impl<Rhs: Condition> BitOr<Rhs> for True {
    type Output = True;

    #[inline]
    fn bitor(self, _rhs: Rhs) -> True {
        True
    }
}

impl<Rhs: Condition> BitOr<Rhs> for False {
    type Output = Rhs;

    #[inline]
    fn bitor(self, rhs: Rhs) -> Rhs {
        rhs
    }
}

/// A test over a single value that produces a [`Condition`].
///
/// Any `Fn(&X) -> C` closure is a predicate. A predicate over several
/// element types (for [`filter`](crate::algorithm::filter) over a mixed
/// sequence) is a type implementing this trait once per element type.
///
/// # Examples
///
/// ```rust
/// use combinars::combinator::{False, Predicate, True};
///
/// struct IsText;
///
/// impl Predicate<&str> for IsText {
///     type Output = True;
///     fn test(&self, _value: &&str) -> True {
///         True
///     }
/// }
///
/// impl Predicate<i32> for IsText {
///     type Output = False;
///     fn test(&self, _value: &i32) -> False {
///         False
///     }
/// }
///
/// assert_eq!(IsText.test(&"word"), True);
/// assert!((|value: &i32| *value > 2).test(&3));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a predicate over `{X}`",
    label = "must inspect a `&{X}` and return `bool`, `True` or `False`"
)]
pub trait Predicate<X> {
    /// The condition produced by the test.
    type Output: Condition;

    /// Tests `value`.
    fn test(&self, value: &X) -> Self::Output;
}

impl<P, X, C> Predicate<X> for P
where
    P: Fn(&X) -> C,
    C: Condition,
{
    type Output = C;

    #[inline]
    fn test(&self, value: &X) -> C {
        self(value)
    }
}

// =============================================================================
// Branches
// =============================================================================

/// A condition waiting for the callable it guards.
///
/// Created by [`if_`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct If<C> {
    condition: C,
}

/// A callable guarded by a condition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Branch<C, F> {
    condition: C,
    function: F,
}

/// Starts a branch guarded by `condition`.
///
/// `if_(c).then(f)` is the branch; it becomes callable once placed in a
/// [`conditional`] with a fallback.
#[inline]
pub const fn if_<C: Condition>(condition: C) -> If<C> {
    If { condition }
}

impl<C: Condition> If<C> {
    /// Guards `function` with this condition.
    #[inline]
    pub fn then<F>(self, function: F) -> Branch<C, F> {
        Branch {
            condition: self.condition,
            function,
        }
    }
}

impl<C: Condition, F> Branch<C, F> {
    /// Returns whether the guard holds.
    #[inline]
    pub fn holds(&self) -> bool {
        self.condition.holds()
    }
}

// =============================================================================
// Conditional
// =============================================================================

/// A guarded branch followed by the rest of the chain.
///
/// Created by [`conditional`] or [`conditional!`](crate::conditional!).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Conditional<B, R> {
    branch: B,
    fallback: R,
}

/// Chains `branch` in front of `fallback`.
///
/// `fallback` is either the final callable or another chain, so
/// `conditional(b1, conditional(b2, f))` tries `b1`, then `b2`, then `f`.
#[inline]
pub const fn conditional<C, F, R>(branch: Branch<C, F>, fallback: R) -> Conditional<Branch<C, F>, R> {
    Conditional { branch, fallback }
}

impl<F, R, Args> Callable<Args> for Conditional<Branch<True, F>, R>
where
    F: Callable<Args>,
    R: Callable<Args>,
{
    type Output = F::Output;

    #[inline]
    fn invoke(&self, arguments: Args) -> Self::Output {
        self.branch.function.invoke(arguments)
    }
}

impl<F, R, Args> Callable<Args> for Conditional<Branch<False, F>, R>
where
    R: Callable<Args>,
{
    type Output = R::Output;

    #[inline]
    fn invoke(&self, arguments: Args) -> Self::Output {
        self.fallback.invoke(arguments)
    }
}

impl<F, R, Args, O> Callable<Args> for Conditional<Branch<bool, F>, R>
where
    F: Callable<Args, Output = O>,
    R: Callable<Args, Output = O>,
{
    type Output = O;

    #[inline]
    fn invoke(&self, arguments: Args) -> O {
        if self.branch.condition {
            self.branch.function.invoke(arguments)
        } else {
            self.fallback.invoke(arguments)
        }
    }
}

/// Builds a chain of guarded branches ending in a fallback.
///
/// `conditional!(b1, b2, fallback)` is
/// `conditional(b1, conditional(b2, fallback))`; `conditional!(fallback)`
/// is the fallback itself.
#[macro_export]
macro_rules! conditional {
    ($fallback:expr $(,)?) => {
        $fallback
    };
    ($branch:expr, $($rest:expr),+ $(,)?) => {
        $crate::combinator::conditional($branch, $crate::conditional!($($rest),+))
    };
}

// =============================================================================
// Serde
// =============================================================================

#[cfg(feature = "serde")]
mod serde_impls {
    use super::{False, True};
    use serde::de::{Deserialize, Deserializer, Error, Visitor};
    use serde::ser::{Serialize, Serializer};
    use std::fmt;

    struct ConditionVisitor {
        name: &'static str,
    }

    impl Visitor<'_> for ConditionVisitor {
        type Value = ();

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            write!(formatter, "the unit struct {}", self.name)
        }

        fn visit_unit<E: Error>(self) -> Result<(), E> {
            Ok(())
        }
    }

    macro_rules! condition_serde {
        ($condition:ident) => {
            impl Serialize for $condition {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.serialize_unit_struct(stringify!($condition))
                }
            }

            impl<'de> Deserialize<'de> for $condition {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    deserializer.deserialize_unit_struct(
                        stringify!($condition),
                        ConditionVisitor {
                            name: stringify!($condition),
                        },
                    )?;
                    Ok($condition)
                }
            }
        };
    }

    condition_serde!(True);
    condition_serde!(False);
}
