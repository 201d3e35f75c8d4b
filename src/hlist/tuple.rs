//! Conversion from heterogeneous lists back to tuples.

use super::HNil;

/// Converts a heterogeneous list of up to twelve elements into the tuple
/// with the same elements in the same order.
///
/// Combinators work on lists internally and call user callables with
/// tuples; this is the bridge between the two.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be turned into a tuple",
    note = "argument lists are limited to twelve positions"
)]
pub trait IntoTuple {
    /// The tuple type.
    type Tuple;

    /// Moves the elements into a tuple.
    fn into_tuple(self) -> Self::Tuple;
}

/// The tuple type corresponding to the list `L`.
pub type TupleOf<L> = <L as IntoTuple>::Tuple;

impl IntoTuple for HNil {
    type Tuple = ();

    #[inline]
    fn into_tuple(self) {}
}

macro_rules! into_tuple_impls {
    ($( ( $($name:ident),+ ) )+) => {
        $(
            impl<$($name),+> IntoTuple for crate::HList!($($name),+) {
                type Tuple = ($($name,)+);

                #[allow(non_snake_case)]
                #[inline]
                fn into_tuple(self) -> Self::Tuple {
                    let crate::hlist_pat![$($name),+] = self;
                    ($($name,)+)
                }
            }
        )+
    };
}

into_tuple_impls! {
    (A)
    (A, B)
    (A, B, C)
    (A, B, C, D)
    (A, B, C, D, E)
    (A, B, C, D, E, F)
    (A, B, C, D, E, F, G)
    (A, B, C, D, E, F, G, H)
    (A, B, C, D, E, F, G, H, I)
    (A, B, C, D, E, F, G, H, I, J)
    (A, B, C, D, E, F, G, H, I, J, K)
    (A, B, C, D, E, F, G, H, I, J, K, L)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hlist;
    use rstest::rstest;

    #[rstest]
    fn nil_becomes_unit() {
        HNil.into_tuple();
    }

    #[rstest]
    fn elements_keep_their_order() {
        assert_eq!(hlist![1, 'b', "c"].into_tuple(), (1, 'b', "c"));
    }

    #[rstest]
    fn twelve_elements_fit() {
        let list = hlist![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];
        assert_eq!(list.into_tuple(), (0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11));
    }
}
