//! Constant callables.

use crate::callable::Callable;

/// A callable that ignores its arguments and returns a copy of a fixed
/// value.
///
/// Created by [`always`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Always<T> {
    value: T,
}

/// Returns a callable that accepts any arguments and returns `value`.
///
/// Every call returns a clone, so the callable can be used repeatedly.
/// The usual fallback of a [`conditional`](super::conditional) chain.
///
/// # Examples
///
/// ```rust
/// use combinars::callable::Callable;
/// use combinars::combinator::always;
///
/// let zero = always(0);
/// assert_eq!(zero.invoke(()), 0);
/// assert_eq!(zero.invoke((1, "ignored", 3.5)), 0);
/// ```
#[inline]
pub const fn always<T>(value: T) -> Always<T> {
    Always { value }
}

impl<T> Always<T> {
    /// Returns the value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Clone, Args> Callable<Args> for Always<T> {
    type Output = T;

    #[inline]
    fn invoke(&self, _arguments: Args) -> T {
        self.value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(())]
    #[case((1,))]
    #[case(("a", 'b'))]
    fn ignores_any_arguments<Args>(#[case] arguments: Args) {
        assert_eq!(always("constant").invoke(arguments), "constant");
    }

    #[rstest]
    fn arguments_are_dropped_not_returned() {
        let owned = String::from("consumed");
        assert_eq!(always(1).invoke((owned,)), 1);
    }

    #[rstest]
    fn into_inner_returns_value() {
        assert_eq!(always(vec![1, 2]).into_inner(), vec![1, 2]);
    }
}
