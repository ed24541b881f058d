//! Readable reports for calls that no candidate accepts.
//!
//! A rejected call is normally a compile-time error, and the compiler names
//! the adaptor rather than the callable inside it that refused the
//! arguments. This module offers two improvements:
//!
//! - [`reveal`] wraps a callable so that its report names the candidates it
//!   holds. Calls that are accepted go through unchanged.
//! - [`try_call!`](crate::try_call) performs a call when it is accepted and
//!   otherwise returns a [`RejectedCall`] listing every candidate together
//!   with the rejected argument types, instead of failing to compile.
//!
//! # Examples
//!
//! ```
//! use fitting::reveal::reveal;
//! use fitting::{conditional, try_call};
//!
//! struct Celsius(f64);
//! struct Kelvin(f64);
//!
//! let to_kelvin = reveal(conditional!(
//!     |celsius: Celsius| celsius.0 + 273.15,
//!     |kelvin: Kelvin| kelvin.0,
//! ));
//!
//! assert_eq!(try_call!(to_kelvin, Kelvin(1.0)), Ok(1.0));
//!
//! let error = try_call!(to_kelvin, 1.0_f64).unwrap_err();
//! assert_eq!(error.arguments(), "(f64,)");
//! assert_eq!(error.rejections().len(), 2);
//! ```
//!
//! [`RejectedCall`]: crate::probe::failure::RejectedCall

use crate::callable::{CallOutput, Callable};
use crate::probe::failure::{Candidate, Candidates, Failure};
use std::marker::PhantomData;

/// A callable whose rejected calls are reported by candidate.
///
/// Forwards every call to the wrapped callable. Revealing an already
/// revealed value through [`Reveal::reveal`] returns it unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Reveal<F> {
    function: F,
}

/// Wraps `function` in a [`Reveal`].
///
/// # Examples
///
/// ```
/// use fitting::call;
/// use fitting::reveal::reveal;
///
/// let double = reveal(|x: i32| x * 2);
/// assert_eq!(call!(double, 21), 42);
/// ```
#[inline]
pub const fn reveal<F>(function: F) -> Reveal<F> {
    Reveal { function }
}

impl<F> Reveal<F> {
    /// Returns `self`: a revealed callable is not wrapped a second time.
    ///
    /// # Examples
    ///
    /// ```
    /// use fitting::reveal::{Reveal, RevealExt};
    ///
    /// let once = (|x: u8| x).reveal();
    /// let twice = once.reveal();
    /// let _: &Reveal<_> = &twice;
    /// ```
    #[inline]
    #[must_use]
    pub const fn reveal(self) -> Self {
        self
    }

    /// Returns the wrapped callable.
    #[inline]
    pub const fn get_ref(&self) -> &F {
        &self.function
    }

    /// Unwraps the callable.
    #[inline]
    pub fn into_inner(self) -> F {
        self.function
    }
}

/// Method form of [`reveal`] for every value.
///
/// [`Reveal`] has an inherent `reveal` method that takes precedence, so
/// calling `.reveal()` on a revealed value does not nest it.
pub trait RevealExt: Sized {
    /// Wraps `self` in a [`Reveal`].
    #[inline]
    fn reveal(self) -> Reveal<Self> {
        reveal(self)
    }
}

impl<F> RevealExt for F {}

impl<F, Args, Route> Callable<Args, Route> for Reveal<F>
where
    F: Callable<Args, Route>,
{
    type Output = CallOutput<F, Args, Route>;

    #[inline]
    fn call(&self, arguments: Args) -> Self::Output {
        self.function.call(arguments)
    }
}

impl<F: Failure> Failure for Reveal<F> {
    fn failures(candidates: &mut Candidates) {
        F::failures(candidates);
    }
}

/// Collects the candidates of a callable for a failure report.
///
/// Looked up through layers of references so that the most precise
/// description available wins: the [`Failure`] impl of the callable, then the
/// callable inside one or two [`Reveal`] layers, then the callable itself.
#[doc(hidden)]
pub struct Describe<F: ?Sized> {
    marker: PhantomData<fn(&F)>,
}

impl<F: ?Sized> Describe<F> {
    /// Describes the type of `function`.
    #[inline]
    pub const fn new(_function: &F) -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

fn single<F: ?Sized>() -> Candidates {
    let mut candidates = Candidates::new();
    candidates.push(Candidate::of::<F>());
    candidates
}

#[doc(hidden)]
pub trait DescribeFailure {
    /// The candidates to name in a failure report.
    fn candidates(&self) -> Candidates;
}

impl<F: Failure + ?Sized> DescribeFailure for &&&Describe<F> {
    fn candidates(&self) -> Candidates {
        let mut candidates = Candidates::new();
        F::failures(&mut candidates);
        candidates
    }
}

#[doc(hidden)]
pub trait DescribeRevealedTwice {
    /// The candidates to name in a failure report.
    fn candidates(&self) -> Candidates;
}

impl<F> DescribeRevealedTwice for &&Describe<Reveal<Reveal<F>>> {
    fn candidates(&self) -> Candidates {
        single::<F>()
    }
}

#[doc(hidden)]
pub trait DescribeRevealed {
    /// The candidates to name in a failure report.
    fn candidates(&self) -> Candidates;
}

impl<F> DescribeRevealed for &Describe<Reveal<F>> {
    fn candidates(&self) -> Candidates {
        single::<F>()
    }
}

#[doc(hidden)]
pub trait DescribeItself {
    /// The candidates to name in a failure report.
    fn candidates(&self) -> Candidates;
}

impl<F: ?Sized> DescribeItself for Describe<F> {
    fn candidates(&self) -> Candidates {
        single::<F>()
    }
}

/// Calls a callable if it accepts the arguments, and reports every rejecting
/// candidate otherwise.
///
/// `try_call!(f, a, b)` evaluates to `Ok(output)` when `f` accepts `(a, b)`.
/// When no call path accepts them it evaluates to
/// `Err(`[`RejectedCall`](crate::probe::failure::RejectedCall)`)` instead of
/// failing to compile; the `Ok` type is then
/// [`Infallible`](std::convert::Infallible).
///
/// The types must be concrete where the macro is written.
///
/// # Examples
///
/// ```
/// use fitting::reveal::reveal;
/// use fitting::{conditional, try_call};
///
/// let parse = reveal(conditional!(
///     |text: &str| text.len(),
///     |bytes: &[u8]| bytes.len(),
/// ));
///
/// assert_eq!(try_call!(parse, "four"), Ok(4));
///
/// let error = try_call!(parse, 4_u32).unwrap_err();
/// assert!(error.to_string().starts_with("no candidate accepts `(u32,)`"));
/// ```
#[macro_export]
macro_rules! try_call {
    ($function:expr $(, $argument:expr)* $(,)?) => {{
        #[allow(unused_imports)]
        use $crate::probe::{ProbeAccepted as _, ProbeRejected as _};
        #[allow(unused_imports)]
        use $crate::reveal::{
            DescribeFailure as _, DescribeItself as _, DescribeRevealed as _,
            DescribeRevealedTwice as _,
        };
        let function = &$function;
        let arguments = ($($argument,)*);
        (&&$crate::probe::Probe::with_arguments(function, &arguments))
            .strategy()
            .invoke(function, arguments, || {
                (&&&&$crate::reveal::Describe::new(function)).candidates()
            })
    }};
}
