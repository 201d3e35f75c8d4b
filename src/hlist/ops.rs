//! Structural algorithms over heterogeneous lists.
//!
//! Each operation is a trait implemented once for [`HNil`] and once,
//! recursively, for [`HCons`]. Missing impls are how arity and kind
//! mismatches surface: the operation simply does not exist for those
//! lists.

use super::{HCons, HNil};
use crate::callable::{Callable, CallableOnce};

// =============================================================================
// Append
// =============================================================================

/// Concatenates two lists, keeping the elements of `self` in front.
///
/// # Examples
///
/// ```rust
/// use combinars::hlist;
/// use combinars::hlist::Append;
///
/// assert_eq!(hlist![1, 'a'].append(hlist!["b"]), hlist![1, 'a', "b"]);
/// ```
pub trait Append<Rhs> {
    /// The concatenated list.
    type Output;

    /// Moves every element of `self` in front of `rhs`.
    fn append(self, rhs: Rhs) -> Self::Output;
}

impl<Rhs> Append<Rhs> for HNil {
    type Output = Rhs;

    #[inline]
    fn append(self, rhs: Rhs) -> Rhs {
        rhs
    }
}

impl<H, T, Rhs> Append<Rhs> for HCons<H, T>
where
    T: Append<Rhs>,
{
    type Output = HCons<H, T::Output>;

    #[inline]
    fn append(self, rhs: Rhs) -> Self::Output {
        HCons {
            head: self.head,
            tail: self.tail.append(rhs),
        }
    }
}

/// The list produced by appending `Rhs` to `Lhs`.
pub type Concat<Lhs, Rhs> = <Lhs as Append<Rhs>>::Output;

// =============================================================================
// MapList
// =============================================================================

/// Applies one polymorphic callable to every element, head first.
pub trait MapList<F> {
    /// The list of results.
    type Output;

    /// Maps each element through `function`.
    fn map_list(self, function: &F) -> Self::Output;
}

impl<F> MapList<F> for HNil {
    type Output = Self;

    #[inline]
    fn map_list(self, _function: &F) -> Self {
        self
    }
}

impl<F, H, T> MapList<F> for HCons<H, T>
where
    F: Callable<(H,)>,
    T: MapList<F>,
{
    type Output = HCons<F::Output, T::Output>;

    #[inline]
    fn map_list(self, function: &F) -> Self::Output {
        let head = function.invoke((self.head,));
        HCons {
            head,
            tail: self.tail.map_list(function),
        }
    }
}

// =============================================================================
// ZipApply
// =============================================================================

/// Applies a list of callables position by position to a list of
/// arguments of the same length.
///
/// Only lists of equal length implement this trait.
#[diagnostic::on_unimplemented(
    message = "cannot apply the callables `{Self}` position by position to `{Args}`",
    note = "both lists must have the same length and callable `i` must accept argument `i`"
)]
pub trait ZipApply<Args> {
    /// The list of results.
    type Output;

    /// Calls the callable at each position with the argument at the same
    /// position.
    fn zip_apply(&self, arguments: Args) -> Self::Output;
}

impl ZipApply<HNil> for HNil {
    type Output = Self;

    #[inline]
    fn zip_apply(&self, _arguments: HNil) -> Self {
        Self
    }
}

impl<F, Fs, X, Xs> ZipApply<HCons<X, Xs>> for HCons<F, Fs>
where
    F: Callable<(X,)>,
    Fs: ZipApply<Xs>,
{
    type Output = HCons<F::Output, Fs::Output>;

    #[inline]
    fn zip_apply(&self, arguments: HCons<X, Xs>) -> Self::Output {
        let head = self.head.invoke((arguments.head,));
        HCons {
            head,
            tail: self.tail.zip_apply(arguments.tail),
        }
    }
}

/// The consuming form of [`ZipApply`]: each callable is used up by its
/// call, so holders inside the list move their captured values instead
/// of cloning them.
#[diagnostic::on_unimplemented(
    message = "cannot consume the callables `{Self}` position by position on `{Args}`",
    note = "both lists must have the same length and callable `i` must accept argument `i`"
)]
pub trait ZipApplyOnce<Args> {
    /// The list of results.
    type Output;

    /// Calls the callable at each position with the argument at the same
    /// position, consuming the callables.
    fn zip_apply_once(self, arguments: Args) -> Self::Output;
}

impl ZipApplyOnce<HNil> for HNil {
    type Output = Self;

    #[inline]
    fn zip_apply_once(self, _arguments: HNil) -> Self {
        Self
    }
}

impl<F, Fs, X, Xs> ZipApplyOnce<HCons<X, Xs>> for HCons<F, Fs>
where
    F: CallableOnce<(X,)>,
    Fs: ZipApplyOnce<Xs>,
{
    type Output = HCons<F::Output, Fs::Output>;

    #[inline]
    fn zip_apply_once(self, arguments: HCons<X, Xs>) -> Self::Output {
        let head = self.head.invoke_once((arguments.head,));
        HCons {
            head,
            tail: self.tail.zip_apply_once(arguments.tail),
        }
    }
}

// =============================================================================
// FoldLeft / Reduce
// =============================================================================

/// Left fold starting from an explicit accumulator.
///
/// `hlist![a, b, c].fold_left(seed, &f) == f(f(f(seed, a), b), c)`.
/// The empty list returns the accumulator untouched.
pub trait FoldLeft<F, Acc> {
    /// The final accumulator.
    type Output;

    /// Folds the elements into `accumulator`, left to right.
    fn fold_left(self, accumulator: Acc, function: &F) -> Self::Output;
}

impl<F, Acc> FoldLeft<F, Acc> for HNil {
    type Output = Acc;

    #[inline]
    fn fold_left(self, accumulator: Acc, _function: &F) -> Acc {
        accumulator
    }
}

impl<F, Acc, H, T> FoldLeft<F, Acc> for HCons<H, T>
where
    F: Callable<(Acc, H)>,
    T: FoldLeft<F, F::Output>,
{
    type Output = T::Output;

    #[inline]
    fn fold_left(self, accumulator: Acc, function: &F) -> Self::Output {
        let next = function.invoke((accumulator, self.head));
        self.tail.fold_left(next, function)
    }
}

/// Left fold seeded with the first element.
///
/// Only non-empty lists implement this trait: there is no value a
/// reduction of nothing could return for an arbitrary operator. A
/// single-element list returns its element without calling the operator.
#[diagnostic::on_unimplemented(
    message = "cannot reduce `{Self}` with `{F}`",
    label = "empty sequences have no reduction",
    note = "reduce needs at least one element; use a seeded fold for possibly empty sequences"
)]
pub trait Reduce<F> {
    /// The reduced value.
    type Output;

    /// Combines the elements pairwise, left to right.
    fn reduce(self, function: &F) -> Self::Output;
}

impl<F, H, T> Reduce<F> for HCons<H, T>
where
    T: FoldLeft<F, H>,
{
    type Output = T::Output;

    #[inline]
    fn reduce(self, function: &F) -> Self::Output {
        self.tail.fold_left(self.head, function)
    }
}

static_assertions::assert_not_impl_any!(HNil: Reduce<fn(i32, i32) -> i32>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hlist;
    use rstest::rstest;
    use std::cell::RefCell;

    #[rstest]
    fn append_to_nil_is_identity() {
        assert_eq!(HNil.append(hlist![1, 2]), hlist![1, 2]);
        assert_eq!(hlist![1, 2].append(HNil), hlist![1, 2]);
    }

    #[rstest]
    fn map_list_visits_head_first() {
        let visited = RefCell::new(Vec::new());
        let record = |value: i32| {
            visited.borrow_mut().push(value);
            value * 10
        };

        let mapped = hlist![1, 2, 3].map_list(&record);

        assert_eq!(mapped, hlist![10, 20, 30]);
        assert_eq!(*visited.borrow(), vec![1, 2, 3]);
    }

    #[rstest]
    fn zip_apply_pairs_positions() {
        let functions = hlist![|value: i32| value + 1, |text: &str| text.len()];
        assert_eq!(functions.zip_apply(hlist![41, "four"]), hlist![42, 4]);
    }

    #[rstest]
    fn zip_apply_once_moves_into_each_callable() {
        let first = String::from("ab");
        let second = vec![1, 2, 3];
        let functions = hlist![
            move |tail: &str| first + tail,
            move |extra: usize| second.len() + extra
        ];
        assert_eq!(
            functions.zip_apply_once(hlist!["c", 1_usize]),
            hlist![String::from("abc"), 4_usize]
        );
    }

    #[rstest]
    fn fold_left_of_nil_returns_seed() {
        let add = |left: i32, right: i32| left + right;
        assert_eq!(HNil.fold_left(7, &add), 7);
    }

    #[rstest]
    fn reduce_groups_to_the_left() {
        let subtract = |left: i32, right: i32| left - right;
        // ((10 - 3) - 2) - 1
        assert_eq!(hlist![10, 3, 2, 1].reduce(&subtract), 4);
    }

    #[rstest]
    fn reduce_of_one_never_calls_operator() {
        let calls = RefCell::new(0);
        let counting = |left: i32, right: i32| {
            *calls.borrow_mut() += 1;
            left + right
        };
        assert_eq!(hlist![5].reduce(&counting), 5);
        assert_eq!(*calls.borrow(), 0);
    }
}
