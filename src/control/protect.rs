//! The [`Protect`] adaptor.

use crate::callable::{CallOutput, Callable};
use crate::probe::failure::{Candidates, Failure};

/// Forwards calls unchanged, but is never evaluated as a binding.
///
/// Used as a binding of a bound expression (see
/// [`lazy`](crate::control::lazy())), a protected callable is passed to the deferred
/// callable as a callable instead of being evaluated with the call
/// arguments.
///
/// # Examples
///
/// ```rust
/// use fitting::call;
/// use fitting::control::{_1, Protect, lazy, protect};
///
/// fn triple(x: i32) -> i32 {
///     x * 3
/// }
///
/// let twice = |function: Protect<fn(i32) -> i32>, x: i32| call!(function, call!(function, x));
/// let expression = call!(lazy(twice), protect(triple as fn(i32) -> i32), _1);
///
/// assert_eq!(call!(expression, 2), 18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Protect<F> {
    function: F,
}

/// Protects `function` from evaluation as a binding.
#[inline]
pub const fn protect<F>(function: F) -> Protect<F> {
    Protect { function }
}

impl<F> Protect<F> {
    /// Returns the protected callable.
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

impl<F, Args, Route> Callable<Args, Route> for Protect<F>
where
    F: Callable<Args, Route>,
{
    type Output = CallOutput<F, Args, Route>;

    #[inline]
    fn call(&self, arguments: Args) -> Self::Output {
        self.function.call(arguments)
    }
}

impl<F: Failure> Failure for Protect<F> {
    fn failures(candidates: &mut Candidates) {
        F::failures(candidates);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::call;

    #[test]
    fn test_protect_forwards_calls() {
        let add = protect(|a: i32, b: i32| a + b);
        assert_eq!(call!(add, 2, 3), 5);
    }

    #[test]
    fn test_protect_keeps_size() {
        let offset = 10_u64;
        let add = protect(move |x: u64| x + offset);
        assert_eq!(size_of_val(&add), size_of::<u64>());
        assert_eq!(add.into_inner()(1), 11);
    }
}
