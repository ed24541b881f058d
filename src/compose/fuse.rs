//! Tuple adaptors: [`Fuse`] spreads a tuple into arguments, [`Pack`] holds
//! arguments until a callable is supplied.

use crate::callable::{CallOutput, Callable};
use crate::probe::failure::{Candidate, Candidates, Failure};

/// Calls the wrapped function with the elements of a tuple passed as its
/// single argument.
///
/// `fuse(f).call(((a, b),)) == f.call((a, b))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Fuse<Function> {
    function: Function,
}

/// Creates a [`Fuse`] adaptor.
///
/// # Examples
///
/// ```
/// use fitting::callable::Callable;
/// use fitting::compose::fuse;
///
/// let add = fuse(|first: i32, second: i32| first + second);
/// assert_eq!(add.call(((1, 2),)), 3);
/// ```
#[inline]
pub const fn fuse<Function>(function: Function) -> Fuse<Function> {
    Fuse { function }
}

impl<Function, Args, Route> Callable<(Args,), Route> for Fuse<Function>
where
    Function: Callable<Args, Route>,
{
    type Output = CallOutput<Function, Args, Route>;

    #[inline]
    fn call(&self, (arguments,): (Args,)) -> Self::Output {
        self.function.call(arguments)
    }
}

impl<Function> Failure for Fuse<Function> {
    fn failures(candidates: &mut Candidates) {
        candidates.push(Candidate::of::<Function>());
    }
}

/// A tuple of arguments waiting for a callable.
///
/// `pack((a, b)).call((f,)) == f.call((a, b))`. Calling through
/// [`Callable`] clones the stored tuple so the pack can be reused;
/// [`Pack::unpack`] moves it out instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pack<Values> {
    values: Values,
}

/// Packs a tuple of arguments.
///
/// # Examples
///
/// ```
/// use fitting::callable::{Callable, always};
/// use fitting::compose::pack;
///
/// let arguments = pack((1, 2));
/// assert_eq!(arguments.call((|a: i32, b: i32| a + b,)), 3);
/// assert_eq!(pack(()).call((always(3),)), 3);
/// ```
#[inline]
pub const fn pack<Values>(values: Values) -> Pack<Values> {
    Pack { values }
}

impl<Values> Pack<Values> {
    /// Returns the stored tuple.
    #[inline]
    pub const fn values(&self) -> &Values {
        &self.values
    }

    /// Calls `function` with the stored values, moving them.
    ///
    /// # Examples
    ///
    /// ```
    /// use fitting::compose::pack;
    ///
    /// let boxed = pack((Box::new(3),));
    /// assert_eq!(boxed.unpack(&|value: Box<i32>| *value), 3);
    /// ```
    #[inline]
    pub fn unpack<Function, Route>(self, function: &Function) -> CallOutput<Function, Values, Route>
    where
        Function: Callable<Values, Route>,
    {
        function.call(self.values)
    }
}

impl<Values, Function, Route> Callable<(Function,), Route> for Pack<Values>
where
    Values: Clone,
    Function: Callable<Values, Route>,
{
    type Output = CallOutput<Function, Values, Route>;

    #[inline]
    fn call(&self, (function,): (Function,)) -> Self::Output {
        function.call(self.values.clone())
    }
}

impl<Values> Failure for Pack<Values> {
    fn failures(candidates: &mut Candidates) {
        candidates.push(Candidate::of::<Self>());
    }
}
