//! Partial application.

use crate::callable::{Callable, CallableOnce};
use crate::hlist::{Append, Concat, IntoTuple, TupleOf};
use crate::sequence::{ElementsOf, Sequence};

/// A callable waiting for the arguments to capture in front of `F`.
///
/// Created by [`capture`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Capture<F> {
    function: F,
}

/// A callable holding `F` together with arguments captured for it.
///
/// Calling it with `more` calls `F` with the captured arguments followed
/// by `more`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Captured<F, T> {
    function: F,
    captured: T,
}

/// Starts a partial application of `function`.
///
/// `capture(f).with(args)` captures `args`; calling the result with
/// `more` calls `f` with `args` followed by `more`. `capture(f)` is also
/// a callable, so it can be mapped over a sequence to turn every element
/// into a partial application (this requires `F: Clone`, since every
/// call hands out a copy of `f`).
///
/// # Captured values
///
/// [`Captured::call_once`] (or [`CallableOnce::invoke_once`]) consumes
/// the holder and moves the captured values into `f`. Calling it through [`Callable`] keeps the holder and
/// clones the captured values each time, so it requires them to be
/// [`Clone`]; capture references to avoid copying.
///
/// # Examples
///
/// ```rust
/// use combinars::callable::Callable;
/// use combinars::combinator::capture;
///
/// let describe = |name: &str, count: u32, unit: &str| format!("{name}: {count} {unit}");
/// let apples = capture(describe).with(("apples", 3));
///
/// assert_eq!(apples.invoke(("kg",)), "apples: 3 kg");
/// assert_eq!(apples.invoke(("boxes",)), "apples: 3 boxes");
/// ```
#[inline]
pub const fn capture<F>(function: F) -> Capture<F> {
    Capture { function }
}

impl<F> Capture<F> {
    /// Captures `arguments` for later calls.
    #[inline]
    pub fn with<T>(self, arguments: T) -> Captured<F, T> {
        Captured {
            function: self.function,
            captured: arguments,
        }
    }
}

impl<F: Clone, Args> Callable<Args> for Capture<F> {
    type Output = Captured<F, Args>;

    #[inline]
    fn invoke(&self, arguments: Args) -> Self::Output {
        self.clone().with(arguments)
    }
}

impl<F, T> Captured<F, T> {
    /// Returns the captured arguments.
    #[inline]
    pub const fn captured(&self) -> &T {
        &self.captured
    }

    /// Calls the function with the captured arguments followed by `more`,
    /// consuming the holder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::combinator::capture;
    ///
    /// let join = |left: String, right: String| left + &right;
    /// let greeting = capture(join).with((String::from("hello, "),));
    /// assert_eq!(greeting.call_once((String::from("world"),)), "hello, world");
    /// ```
    #[inline]
    pub fn call_once<Args>(self, more: Args) -> F::Output
    where
        T: Sequence,
        Args: Sequence,
        ElementsOf<T>: Append<ElementsOf<Args>>,
        Concat<ElementsOf<T>, ElementsOf<Args>>: IntoTuple,
        F: Callable<TupleOf<Concat<ElementsOf<T>, ElementsOf<Args>>>>,
    {
        let arguments = self.captured.into_elements().append(more.into_elements());
        self.function.invoke(arguments.into_tuple())
    }
}

impl<F, T, Args> CallableOnce<Args> for Captured<F, T>
where
    T: Sequence,
    Args: Sequence,
    ElementsOf<T>: Append<ElementsOf<Args>>,
    Concat<ElementsOf<T>, ElementsOf<Args>>: IntoTuple,
    F: Callable<TupleOf<Concat<ElementsOf<T>, ElementsOf<Args>>>>,
{
    type Output = F::Output;

    #[inline]
    fn invoke_once(self, more: Args) -> Self::Output {
        self.call_once(more)
    }
}

impl<F, T, Args> Callable<Args> for Captured<F, T>
where
    T: Clone + Sequence,
    Args: Sequence,
    ElementsOf<T>: Append<ElementsOf<Args>>,
    Concat<ElementsOf<T>, ElementsOf<Args>>: IntoTuple,
    F: Callable<TupleOf<Concat<ElementsOf<T>, ElementsOf<Args>>>>,
{
    type Output = F::Output;

    #[inline]
    fn invoke(&self, more: Args) -> Self::Output {
        let arguments = self
            .captured
            .clone()
            .into_elements()
            .append(more.into_elements());
        self.function.invoke(arguments.into_tuple())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinator::{by_each, pack};
    use rstest::rstest;

    #[rstest]
    fn captured_arguments_come_first() {
        let subtract = |left: i32, right: i32| left - right;
        assert_eq!(capture(subtract).with((10,)).invoke((3,)), 7);
    }

    #[rstest]
    fn everything_captured_up_front() {
        let subtract = |left: i32, right: i32| left - right;
        assert_eq!(capture(subtract).with((10, 3)).invoke(()), 7);
    }

    #[rstest]
    fn nothing_captured() {
        let subtract = |left: i32, right: i32| left - right;
        assert_eq!(capture(subtract).with(()).invoke((10, 3)), 7);
    }

    #[rstest]
    fn captured_references_are_not_copied() {
        let text = String::from("shared");
        let same = |left: &String, right: &String| std::ptr::eq(left, right);
        let holder = capture(same).with((&text,));
        assert!(holder.invoke((&text,)));
    }

    #[rstest]
    fn capture_maps_elements_to_partial_applications() {
        let multiply = |left: i32, right: i32| left * right;
        let partials = by_each(capture(multiply)).invoke((2, 3)).into_inner();
        assert_eq!(partials.0.invoke((10,)), 20);
        assert_eq!(partials.1.invoke((10,)), 30);
        assert_eq!(*partials.0.captured(), (2,));
    }

    #[rstest]
    fn consuming_call_accepts_values_without_clone() {
        struct Ticket(u32);
        let redeem = |Ticket(number): Ticket, bonus: u32| number + bonus;
        let holder = capture(redeem).with((Ticket(40),));
        assert_eq!(holder.invoke_once((2,)), 42);
    }

    #[rstest]
    fn capture_composes_with_pack() {
        let add = |a: i32, b: i32, c: i32| a + b + c;
        let holder = capture(add).with(pack((1, 2)));
        assert_eq!(holder.invoke((3,)), 6);
    }
}
