//! Route markers.
//!
//! Routes are never constructed at runtime. They exist only as type
//! parameters of [`Callable`](super::Callable) so that the compiler can pick
//! the one call path that accepts a given argument tuple.

use std::marker::PhantomData;

/// The route of a value that is called as-is: closures, function items and
/// hand-written [`Callable`](super::Callable) impls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Direct;

/// The call was accepted by the first candidate of a
/// [`Conditional`](crate::probe::Conditional), itself through `Route`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct First<Route>(PhantomData<fn() -> Route>);

/// The call was passed on to the remaining candidates of a
/// [`Conditional`](crate::probe::Conditional), which accepted it through
/// `Route`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rest<Route>(PhantomData<fn() -> Route>);

/// No route accepts the call.
///
/// Used by [`Probe`](crate::probe::Probe) when it falls back to rejecting a
/// call, so that the route parameter is always resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Unresolved;
