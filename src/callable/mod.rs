//! The call protocol shared by every adaptor.
//!
//! A callable value is anything implementing [`Callable`]. Arguments travel as
//! a single tuple, so a value passed as `T`, `&T` or `&mut T` keeps exactly
//! that category on its way through any number of adaptors.
//!
//! Plain closures and function items implement [`Callable`] through blanket
//! impls for arities 0 to 8. User types implement the trait directly, once per
//! accepted argument tuple, which gives them an overload set.
//!
//! # Routes
//!
//! The second parameter of [`Callable`] is a *route*: a zero-sized marker
//! recording which call path of an adaptor accepted the call. Routes are
//! inferred by the compiler and only appear in generic bounds. Closures use
//! [`Direct`]; [`Compose`](crate::compose::Compose) uses a pair of the routes
//! of its two halves; [`Conditional`](crate::probe::Conditional) uses
//! [`First`] or [`Rest`] depending on the candidate that accepted the call.
//!
//! # Examples
//!
//! ```
//! use fitting::callable::Callable;
//!
//! let add = |first: i32, second: i32| first + second;
//! assert_eq!(add.call((1, 2)), 3);
//! assert_eq!(fitting::call!(add, 1, 2), 3);
//! ```

mod function;
mod pair;
mod route;

pub use function::{Always, Identity, always};
pub use pair::Pair;
pub use route::{Direct, First, Rest, Unresolved};

/// A value that can be called with the argument tuple `Args`.
///
/// `Route` identifies the call path that accepts `Args`. It defaults to
/// [`Direct`], which is the route of closures, function items and any user
/// type that implements this trait by hand.
///
/// # Examples
///
/// An overload set on a user type:
///
/// ```
/// use fitting::callable::Callable;
///
/// struct Describe;
///
/// impl Callable<(i32,)> for Describe {
///     type Output = &'static str;
///     fn call(&self, _: (i32,)) -> &'static str {
///         "integer"
///     }
/// }
///
/// impl<'a> Callable<(&'a str,)> for Describe {
///     type Output = &'static str;
///     fn call(&self, _: (&'a str,)) -> &'static str {
///         "text"
///     }
/// }
///
/// assert_eq!(Describe.call((1,)), "integer");
/// assert_eq!(Describe.call(("one",)), "text");
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be called with arguments `{Args}`",
    label = "no call path of this callable accepts `{Args}`",
    note = "wrap the callable in `fitting::reveal::reveal` and invoke it with `fitting::try_call!` to list every rejected candidate"
)]
pub trait Callable<Args, Route = Direct> {
    /// The value returned by the call.
    type Output;

    /// Calls the value with `arguments`.
    fn call(&self, arguments: Args) -> Self::Output;
}

/// The output of calling `F` with `Args` through `Route`.
pub type CallOutput<F, Args, Route = Direct> = <F as Callable<Args, Route>>::Output;

/// Calls a [`Callable`] with a list of arguments.
///
/// `call!(f, a, b)` expands to `Callable::call(&f, (a, b))`, so the trait does
/// not need to be imported at the call site.
///
/// # Examples
///
/// ```
/// use fitting::{call, compose};
///
/// let composed = compose!(|x: i32| x + 1, |x: i32| x * 2);
/// assert_eq!(call!(composed, 5), 11);
/// ```
#[macro_export]
macro_rules! call {
    ($function:expr $(, $argument:expr)* $(,)?) => {
        $crate::callable::Callable::call(&$function, ($($argument,)*))
    };
}
