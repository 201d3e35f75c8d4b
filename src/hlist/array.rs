//! Conversion from homogeneous lists to arrays.

/// Converts a list whose elements all have the same type into an array.
///
/// Implemented for one to twelve elements. The empty list is excluded
/// because it carries no element type to build `[T; 0]` from.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be turned into an array",
    note = "every element must have the same type, and there must be between one and twelve of them"
)]
pub trait IntoArray {
    /// The array type.
    type Array;

    /// Moves the elements into an array.
    fn into_array(self) -> Self::Array;
}

macro_rules! replace_type {
    ($_name:ident, $replacement:ty) => {
        $replacement
    };
}

macro_rules! into_array_impls {
    ($( $length:literal => ( $($name:ident),+ ) )+) => {
        $(
            impl<T> IntoArray for crate::HList!($(replace_type!($name, T)),+) {
                type Array = [T; $length];

                #[inline]
                fn into_array(self) -> Self::Array {
                    let crate::hlist_pat![$($name),+] = self;
                    [$($name),+]
                }
            }
        )+
    };
}

into_array_impls! {
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

pub(crate) use replace_type;
