//! The [`Indirect`] adaptor.

use crate::callable::{CallOutput, Callable};
use crate::probe::failure::{Candidate, Candidates, Failure};
use std::ops::Deref;

/// Calls the callable behind a reference-like handle.
///
/// `indirect(handle).call(arguments) == (*handle).call(arguments)` for any
/// handle implementing [`Deref`]: `Box`, `Rc`, `Arc`, `&T` and so on. The
/// target may be unsized, such as `dyn Fn(i32) -> i32`.
///
/// # Examples
///
/// ```rust
/// use fitting::call;
/// use fitting::control::indirect;
/// use std::rc::Rc;
///
/// let sum = |a: i32, b: i32| a + b;
///
/// assert_eq!(call!(indirect(Box::new(sum)), 3, 2), 5);
/// assert_eq!(call!(indirect(Rc::new(sum)), 3, 2), 5);
/// assert_eq!(call!(indirect(&sum), 3, 2), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Indirect<Handle> {
    handle: Handle,
}

/// Calls through `handle`.
#[inline]
pub const fn indirect<Handle>(handle: Handle) -> Indirect<Handle> {
    Indirect { handle }
}

impl<Handle> Indirect<Handle> {
    /// Returns the handle.
    #[inline]
    pub const fn handle(&self) -> &Handle {
        &self.handle
    }
}

impl<Handle, Args, Route> Callable<Args, Route> for Indirect<Handle>
where
    Handle: Deref,
    Handle::Target: Callable<Args, Route>,
{
    type Output = CallOutput<Handle::Target, Args, Route>;

    #[inline]
    fn call(&self, arguments: Args) -> Self::Output {
        (*self.handle).call(arguments)
    }
}

impl<Handle: Deref> Failure for Indirect<Handle> {
    fn failures(candidates: &mut Candidates) {
        candidates.push(Candidate::of::<Handle::Target>());
    }
}
