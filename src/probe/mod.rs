//! Well-formedness probing.
//!
//! Whether `f` can be called with `Args` is the trait bound
//! `F: Callable<Args, Route>` for some route. In generic code that bound is
//! the probe: an adaptor whose bound is not met simply does not offer the
//! call, and the compiler moves on to the next candidate. [`Conditional`]
//! is built on exactly that: it offers one route per candidate and the
//! compiler keeps the route whose candidate accepts the arguments.
//!
//! At a call site with concrete types, [`is_callable!`](crate::is_callable)
//! turns the same question into a `bool` without a compile error when the
//! answer is `false`.
//!
//! # Limitation
//!
//! Only the signature of a callable is probed. A callable whose signature
//! accepts the arguments but whose body does not type-check is still a hard
//! error; nothing short of type-checking the body could detect it.
//!
//! # Examples
//!
//! ```
//! use fitting::is_callable;
//!
//! let length = |text: &str| text.len();
//!
//! assert!(is_callable!(length, (&str,)));
//! assert!(!is_callable!(length, (i32,)));
//! assert!(!is_callable!(length, (&str, &str)));
//! ```

mod conditional;
pub mod failure;

pub use conditional::{Conditional, Exhausted};

use crate::callable::{CallOutput, Callable, Unresolved};
use failure::{Candidates, RejectedCall};
use std::any::type_name;
use std::convert::Infallible;
use std::marker::PhantomData;

/// A question: can `F` be called with `Args`, and through which route?
///
/// A `Probe` holds no data. The route is left for the compiler to infer;
/// when no route exists it resolves to [`Unresolved`].
pub struct Probe<F: ?Sized, Args, Route = Unresolved> {
    marker: PhantomData<fn(&F, Args) -> Route>,
}

impl<F: ?Sized, Args, Route> Probe<F, Args, Route> {
    /// Asks about the type `F`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }

    /// Asks about the type of `function`.
    #[inline]
    pub const fn of(_function: &F) -> Self {
        Self::new()
    }

    /// Asks about the type of `function` called with the type of
    /// `arguments`.
    #[inline]
    pub const fn with_arguments(_function: &F, _arguments: &Args) -> Self {
        Self::new()
    }
}

impl<F: ?Sized, Args, Route> Default for Probe<F, Args, Route> {
    fn default() -> Self {
        Self::new()
    }
}

/// The call is accepted through `Route`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Accepted<Route>(PhantomData<fn() -> Route>);

impl<Route> Accepted<Route> {
    /// Performs the call.
    #[inline]
    pub fn invoke<F, Args, Describe>(
        self,
        function: &F,
        arguments: Args,
        _describe: Describe,
    ) -> Result<CallOutput<F, Args, Route>, RejectedCall>
    where
        F: Callable<Args, Route> + ?Sized,
        Describe: FnOnce() -> Candidates,
    {
        Ok(function.call(arguments))
    }
}

/// No route accepts the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rejected;

impl Rejected {
    /// Reports the rejected call, naming the candidates listed by `describe`.
    pub fn invoke<F, Args, Describe>(
        self,
        _function: &F,
        _arguments: Args,
        describe: Describe,
    ) -> Result<Infallible, RejectedCall>
    where
        F: ?Sized,
        Describe: FnOnce() -> Candidates,
    {
        let error = RejectedCall::new(describe(), type_name::<Args>());
        #[cfg(feature = "tracing")]
        tracing::debug!(
            arguments = error.arguments(),
            candidates = error.rejections().len(),
            "call rejected by every candidate"
        );
        Err(error)
    }
}

/// Answers a [`Probe`] whose call is accepted.
///
/// Implemented on `&Probe` so that method lookup prefers it over
/// [`ProbeRejected`] whenever its bound holds.
#[doc(hidden)]
pub trait ProbeAccepted {
    /// [`Accepted`] with the inferred route.
    type Strategy;

    /// Always `true`.
    fn is_callable(&self) -> bool;

    /// The strategy performing the call.
    fn strategy(&self) -> Self::Strategy;
}

impl<F, Args, Route> ProbeAccepted for &Probe<F, Args, Route>
where
    F: Callable<Args, Route> + ?Sized,
{
    type Strategy = Accepted<Route>;

    #[inline]
    fn is_callable(&self) -> bool {
        true
    }

    #[inline]
    fn strategy(&self) -> Accepted<Route> {
        Accepted(PhantomData)
    }
}

/// Answers a [`Probe`] whose call no route accepts.
#[doc(hidden)]
pub trait ProbeRejected {
    /// Always `false`.
    fn is_callable(&self) -> bool;

    /// The strategy reporting the rejection.
    fn strategy(&self) -> Rejected;
}

impl<F: ?Sized, Args> ProbeRejected for Probe<F, Args, Unresolved> {
    #[inline]
    fn is_callable(&self) -> bool {
        false
    }

    #[inline]
    fn strategy(&self) -> Rejected {
        Rejected
    }
}

/// Evaluates to `true` when a callable accepts an argument tuple type, and to
/// `false` otherwise, without a compile error.
///
/// The first form takes a value (only its type is used, the value is not
/// called); the second form takes a type.
///
/// The answer is computed where the macro is written, so the types must be
/// concrete there. An argument list accepted through more than one route is
/// ambiguous and is reported by the compiler.
///
/// # Examples
///
/// ```
/// use fitting::{conditional, is_callable};
///
/// struct Meters(f64);
/// struct Feet(f64);
///
/// let to_meters = conditional!(|m: Meters| m.0, |f: Feet| f.0 * 0.3048);
///
/// assert!(is_callable!(to_meters, (Meters,)));
/// assert!(is_callable!(to_meters, (Feet,)));
/// assert!(!is_callable!(to_meters, (f64,)));
/// assert!(is_callable!(type fn(u8) -> u8, (u8,)));
/// ```
#[macro_export]
macro_rules! is_callable {
    (type $function:ty, $arguments:ty $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::probe::{ProbeAccepted as _, ProbeRejected as _};
        (&&$crate::probe::Probe::<$function, $arguments, _>::new()).is_callable()
    }};

    ($function:expr, $arguments:ty $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::probe::{ProbeAccepted as _, ProbeRejected as _};
        (&&$crate::probe::Probe::<_, $arguments, _>::of(&$function)).is_callable()
    }};
}
