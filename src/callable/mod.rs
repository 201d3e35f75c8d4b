//! Callable values.
//!
//! Rust closures are monomorphic: a closure accepts exactly one argument
//! list type. Combinators that apply one function to every element of a
//! heterogeneous sequence need something more general, so this module
//! defines [`Callable`], an argument-list-indexed trait that a type may
//! implement many times.
//!
//! # Overview
//!
//! - [`Callable`]: "can be called with the argument tuple `Args`"
//! - Blanket impls for every [`Fn`] of up to twelve parameters, so
//!   closures, function items and function pointers are callables
//! - [`CallableOnce`]: "can be consumed by a call with `Args`", for
//!   holders whose captured values should be moved rather than copied
//! - [`Identity`], [`Plus`], [`Times`]: small polymorphic callables
//!   used by the sequence algorithms
//!
//! # Examples
//!
//! ## Closures are callables
//!
//! ```rust
//! use combinars::callable::Callable;
//!
//! let add = |left: i32, right: i32| left + right;
//! assert_eq!(add.invoke((2, 3)), 5);
//! ```
//!
//! ## A polymorphic callable
//!
//! ```rust
//! use combinars::callable::Callable;
//!
//! struct Describe;
//!
//! impl Callable<(i32,)> for Describe {
//!     type Output = String;
//!     fn invoke(&self, (value,): (i32,)) -> String {
//!         format!("int {value}")
//!     }
//! }
//!
//! impl Callable<(char,)> for Describe {
//!     type Output = String;
//!     fn invoke(&self, (value,): (char,)) -> String {
//!         format!("char {value}")
//!     }
//! }
//!
//! assert_eq!(Describe.invoke((1,)), "int 1");
//! assert_eq!(Describe.invoke(('x',)), "char x");
//! ```

mod ops;

pub use ops::{Identity, Plus, Times};

/// A value that can be invoked with the argument tuple `Args`.
///
/// Arguments are passed as a tuple so that one trait covers every arity:
/// `f.invoke(())`, `f.invoke((a,))`, `f.invoke((a, b))`. The ownership of each
/// argument is part of its type. An owned `T` is moved into the callee and
/// a `&T` stays a borrow; combinators forward both unchanged.
///
/// `invoke` takes `&self`, so a callable can be invoked any number of
/// times. Callables that need to mutate state do so through interior
/// mutability. Holders that can hand their contents over only once
/// implement [`CallableOnce`] as well.
///
/// # Laws
///
/// Implementations should be deterministic with respect to their
/// arguments and captured state: two callables with the same state and
/// the same behavior are interchangeable.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be called with arguments `{Args}`",
    label = "not callable with `{Args}`",
    note = "closures must take exactly the argument types given; polymorphic callables need one `Callable` impl per argument list"
)]
pub trait Callable<Args> {
    /// The value returned by the call.
    type Output;

    /// Invokes the callable.
    fn invoke(&self, arguments: Args) -> Self::Output;
}

/// The value returned when `F` is called with `Args`.
pub type OutputOf<F, Args> = <F as Callable<Args>>::Output;

/// A value that can be consumed by one call with the argument tuple
/// `Args`.
///
/// Every [`FnOnce`] of up to twelve parameters implements it. Holders of
/// captured arguments implement it to move those arguments into the
/// call, where [`Callable::invoke`] would have to clone them.
///
/// # Examples
///
/// ```rust
/// use combinars::callable::CallableOnce;
///
/// let owned = String::from("moved");
/// let consume = move |suffix: &str| owned + suffix;
/// assert_eq!(consume.invoke_once(("!",)), "moved!");
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be consumed by a call with arguments `{Args}`",
    label = "not callable once with `{Args}`"
)]
pub trait CallableOnce<Args> {
    /// The value returned by the call.
    type Output;

    /// Invokes the callable, consuming it.
    fn invoke_once(self, arguments: Args) -> Self::Output;
}

macro_rules! fn_impls {
    ($( ( $($name:ident),* ) )+) => {
        $(
            impl<Function, Ret, $($name),*> Callable<($($name,)*)> for Function
            where
                Function: Fn($($name),*) -> Ret,
            {
                type Output = Ret;

                #[allow(non_snake_case)]
                #[inline]
                fn invoke(&self, ($($name,)*): ($($name,)*)) -> Ret {
                    self($($name),*)
                }
            }

            impl<Function, Ret, $($name),*> CallableOnce<($($name,)*)> for Function
            where
                Function: FnOnce($($name),*) -> Ret,
            {
                type Output = Ret;

                #[allow(non_snake_case)]
                #[inline]
                fn invoke_once(self, ($($name,)*): ($($name,)*)) -> Ret {
                    self($($name),*)
                }
            }
        )+
    };
}

fn_impls! {
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
