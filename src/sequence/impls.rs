//! [`Sequence`] implementations for tuples, arrays and heterogeneous lists.

use super::{ArrayKind, ListKind, Sequence, TupleKind};
use crate::hlist::{HCons, HList, HNil, replace_type};

// =============================================================================
// Tuples
// =============================================================================

macro_rules! tuple_sequence_impls {
    ($( ( $($name:ident),* ) )+) => {
        $(
            impl<$($name),*> Sequence for ($($name,)*) {
                type Elements = crate::HList!($($name),*);
                type Kind = TupleKind;

                #[allow(non_snake_case, clippy::unused_unit)]
                #[inline]
                fn into_elements(self) -> Self::Elements {
                    let ($($name,)*) = self;
                    crate::hlist![$($name),*]
                }
            }

            impl<'a, $($name),*> Sequence for &'a ($($name,)*) {
                type Elements = crate::HList!($(&'a $name),*);
                type Kind = TupleKind;

                #[allow(non_snake_case, clippy::unused_unit)]
                #[inline]
                fn into_elements(self) -> Self::Elements {
                    let ($($name,)*) = self;
                    crate::hlist![$($name),*]
                }
            }

            impl<'a, $($name),*> Sequence for &'a mut ($($name,)*) {
                type Elements = crate::HList!($(&'a mut $name),*);
                type Kind = TupleKind;

                #[allow(non_snake_case, clippy::unused_unit)]
                #[inline]
                fn into_elements(self) -> Self::Elements {
                    let ($($name,)*) = self;
                    crate::hlist![$($name),*]
                }
            }
        )+
    };
}

tuple_sequence_impls! {
    ()
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

// =============================================================================
// Arrays
// =============================================================================

macro_rules! array_sequence_impls {
    ($( $length:literal => ( $($name:ident),+ ) )+) => {
        $(
            impl<T> Sequence for [T; $length] {
                type Elements = crate::HList!($(replace_type!($name, T)),+);
                type Kind = ArrayKind;

                #[inline]
                fn into_elements(self) -> Self::Elements {
                    let [$($name),+] = self;
                    crate::hlist![$($name),+]
                }
            }

            impl<'a, T> Sequence for &'a [T; $length] {
                type Elements = crate::HList!($(replace_type!($name, &'a T)),+);
                type Kind = ArrayKind;

                #[inline]
                fn into_elements(self) -> Self::Elements {
                    let [$($name),+] = self;
                    crate::hlist![$($name),+]
                }
            }

            impl<'a, T> Sequence for &'a mut [T; $length] {
                type Elements = crate::HList!($(replace_type!($name, &'a mut T)),+);
                type Kind = ArrayKind;

                #[inline]
                fn into_elements(self) -> Self::Elements {
                    let [$($name),+] = self;
                    crate::hlist![$($name),+]
                }
            }
        )+
    };
}

// Empty arrays have no elements to carry their type, so they list as
// `HNil` and cannot be rebuilt as arrays.
impl<T> Sequence for [T; 0] {
    type Elements = HNil;
    type Kind = ArrayKind;

    #[inline]
    fn into_elements(self) -> HNil {
        HNil
    }
}

impl<T> Sequence for &[T; 0] {
    type Elements = HNil;
    type Kind = ArrayKind;

    #[inline]
    fn into_elements(self) -> HNil {
        HNil
    }
}

impl<T> Sequence for &mut [T; 0] {
    type Elements = HNil;
    type Kind = ArrayKind;

    #[inline]
    fn into_elements(self) -> HNil {
        HNil
    }
}

array_sequence_impls! {
    1 => (e0)
    2 => (e0, e1)
    3 => (e0, e1, e2)
    4 => (e0, e1, e2, e3)
    5 => (e0, e1, e2, e3, e4)
    6 => (e0, e1, e2, e3, e4, e5)
    7 => (e0, e1, e2, e3, e4, e5, e6)
    8 => (e0, e1, e2, e3, e4, e5, e6, e7)
    9 => (e0, e1, e2, e3, e4, e5, e6, e7, e8)
    10 => (e0, e1, e2, e3, e4, e5, e6, e7, e8, e9)
    11 => (e0, e1, e2, e3, e4, e5, e6, e7, e8, e9, e10)
    12 => (e0, e1, e2, e3, e4, e5, e6, e7, e8, e9, e10, e11)
}

// =============================================================================
// Heterogeneous lists
// =============================================================================

impl Sequence for HNil {
    type Elements = Self;
    type Kind = ListKind;

    #[inline]
    fn into_elements(self) -> Self {
        self
    }
}

impl<H, T: HList> Sequence for HCons<H, T> {
    type Elements = Self;
    type Kind = ListKind;

    #[inline]
    fn into_elements(self) -> Self {
        self
    }
}

impl Sequence for &HNil {
    type Elements = HNil;
    type Kind = ListKind;

    #[inline]
    fn into_elements(self) -> HNil {
        HNil
    }
}

impl<'a, H, T> Sequence for &'a HCons<H, T>
where
    &'a T: Sequence,
{
    type Elements = HCons<&'a H, <&'a T as Sequence>::Elements>;
    type Kind = ListKind;

    #[inline]
    fn into_elements(self) -> Self::Elements {
        HCons {
            head: &self.head,
            tail: self.tail.into_elements(),
        }
    }
}

impl Sequence for &mut HNil {
    type Elements = HNil;
    type Kind = ListKind;

    #[inline]
    fn into_elements(self) -> HNil {
        HNil
    }
}

impl<'a, H, T> Sequence for &'a mut HCons<H, T>
where
    &'a mut T: Sequence,
{
    type Elements = HCons<&'a mut H, <&'a mut T as Sequence>::Elements>;
    type Kind = ListKind;

    #[inline]
    fn into_elements(self) -> Self::Elements {
        let HCons { head, tail } = self;
        HCons {
            head,
            tail: tail.into_elements(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hlist;
    use rstest::rstest;

    #[rstest]
    fn unit_tuple_has_no_elements() {
        assert_eq!(().into_elements(), HNil);
        assert_eq!(<() as Sequence>::LEN, 0);
    }

    #[rstest]
    fn owned_tuple_moves_elements() {
        let elements = (String::from("a"), 2).into_elements();
        assert_eq!(elements, hlist![String::from("a"), 2]);
    }

    #[rstest]
    fn borrowed_tuple_lends_elements() {
        let tuple = (String::from("a"), 2);
        let elements = (&tuple).into_elements();
        assert!(std::ptr::eq(elements.head, &tuple.0));
        assert_eq!(tuple.1, 2);
    }

    #[rstest]
    fn exclusive_borrow_allows_mutation() {
        let mut tuple = (1, 2);
        let crate::hlist_pat![first, second] = (&mut tuple).into_elements();
        *first += 10;
        *second += 20;
        assert_eq!(tuple, (11, 22));
    }

    #[rstest]
    fn array_elements_share_a_type() {
        assert_eq!([1, 2, 3].into_elements(), hlist![1, 2, 3]);
        assert_eq!(<[u8; 12] as Sequence>::LEN, 12);
    }

    #[rstest]
    fn empty_arrays_have_no_elements() {
        let empty: [String; 0] = [];
        assert_eq!((&empty).into_elements(), HNil);
        assert_eq!(empty.into_elements(), HNil);
        assert_eq!(<[u8; 0] as Sequence>::LEN, 0);
    }

    #[rstest]
    fn exclusive_list_borrow_allows_mutation() {
        let mut list = hlist![1, String::from("a")];
        let crate::hlist_pat![number, text] = (&mut list).into_elements();
        *number += 1;
        text.push('b');
        assert_eq!(list, hlist![2, String::from("ab")]);
    }

    #[rstest]
    fn borrowed_list_lends_elements() {
        let list = hlist![1, "two"];
        assert_eq!((&list).into_elements(), hlist![&1, &"two"]);
        assert_eq!(list.len(), 2);
    }
}
