//! Spreading sequences into positional arguments.

use crate::callable::Callable;
use crate::hlist::{IntoTuple, TupleOf};
use crate::sequence::{ElementsOf, Flatten, Flattened, Sequence};

/// A callable that spreads its sequence arguments into positional
/// arguments for the wrapped callable.
///
/// Created by [`unpack`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Unpack<F> {
    function: F,
}

/// Returns a callable that destructures its sequence arguments and calls
/// `function` with their elements.
///
/// `unpack(f).invoke((seq,))` calls `f(e0, e1, ...)`. Given several
/// sequences, `unpack(f).invoke((s1, s2))` calls `f` with the elements of
/// `s1` followed by those of `s2`. Each element keeps the ownership the
/// sequence gave it: owned sequences move their elements, borrowed ones
/// lend them.
///
/// Nesting peels one level of structure per layer:
/// `unpack(unpack(f)).invoke((((a, b), (c,)),))` calls `f(a, b, c)`.
///
/// # Examples
///
/// ```rust
/// use combinars::callable::Callable;
/// use combinars::combinator::unpack;
///
/// let add = |left: i32, right: i32| left + right;
/// assert_eq!(unpack(add).invoke(((2, 3),)), 5);
/// assert_eq!(unpack(add).invoke(((2,), (3,))), 5);
///
/// let pair = (String::from("a"), String::from("b"));
/// let joined = unpack(|x: &String, y: &String| format!("{x}{y}")).invoke((&pair,));
/// assert_eq!(joined, "ab");
/// assert_eq!(pair.0, "a");
/// ```
///
/// A callable that does not accept the element types is rejected when
/// the code is compiled:
///
/// ```compile_fail
/// use combinars::callable::Callable;
/// use combinars::combinator::unpack;
///
/// let add = |left: i32, right: i32| left + right;
/// unpack(add).invoke(((1, 2, 3),));
/// ```
#[inline]
pub const fn unpack<F>(function: F) -> Unpack<F> {
    Unpack { function }
}

impl<F> Unpack<F> {
    /// Returns the wrapped callable.
    #[inline]
    pub fn into_inner(self) -> F {
        self.function
    }
}

impl<F, Args> Callable<Args> for Unpack<F>
where
    Args: Sequence,
    ElementsOf<Args>: Flatten,
    Flattened<ElementsOf<Args>>: IntoTuple,
    F: Callable<TupleOf<Flattened<ElementsOf<Args>>>>,
{
    type Output = F::Output;

    #[inline]
    fn invoke(&self, sequences: Args) -> Self::Output {
        let spread = sequences.into_elements().flatten().into_tuple();
        self.function.invoke(spread)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hlist;
    use rstest::rstest;

    #[rstest]
    fn empty_sequence_calls_with_nothing() {
        let answer = || 42;
        assert_eq!(unpack(answer).invoke(((),)), 42);
        assert_eq!(unpack(answer).invoke(()), 42);
    }

    #[rstest]
    fn spreads_arrays_and_lists() {
        let sum = |a: i32, b: i32, c: i32| a + b + c;
        assert_eq!(unpack(sum).invoke(([1, 2, 3],)), 6);
        assert_eq!(unpack(sum).invoke((hlist![1, 2, 3],)), 6);
        assert_eq!(unpack(sum).invoke(([1], hlist![2], (3,))), 6);
    }

    #[rstest]
    fn nested_unpack_flattens_one_more_level() {
        let sum = |a: i32, b: i32, c: i32| a + b + c;
        let nested = ((1, 2), (3,));
        assert_eq!(unpack(unpack(sum)).invoke((nested,)), 6);
    }

    #[rstest]
    fn owned_elements_are_moved_through() {
        let concat = |left: String, right: String| left + &right;
        let pair = (String::from("own"), String::from("ed"));
        assert_eq!(unpack(concat).invoke((pair,)), "owned");
    }

    #[rstest]
    fn exclusive_borrow_reaches_the_callee() {
        let bump = |first: &mut i32, second: &mut i32| {
            *first += 1;
            *second += 1;
        };
        let mut pair = (1, 2);
        unpack(bump).invoke((&mut pair,));
        assert_eq!(pair, (2, 3));
    }
}
