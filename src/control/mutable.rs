//! Adaptors for callables that mutate their own state.
//!
//! Every adaptor is called through `&self`, so an `FnMut` cannot be stored
//! in one directly. [`mutable`] moves the state behind a [`RefCell`] for
//! single-threaded use; [`mutable_sync`] uses a [`parking_lot::Mutex`] so the
//! adaptor can be shared between threads.
//!
//! # Examples
//!
//! ```rust
//! use fitting::callable::Callable;
//! use fitting::compose;
//! use fitting::control::mutable;
//!
//! let mut total = 0;
//! let running_total = compose!(
//!     |sum: i32| sum * 10,
//!     mutable(move |x: i32| {
//!         total += x;
//!         total
//!     }),
//! );
//!
//! let shared = &running_total;
//! assert_eq!(shared.call((1,)), 10);
//! assert_eq!(shared.call((2,)), 30);
//! ```

use crate::callable::{Callable, Direct};
use crate::probe::failure::{Candidate, Candidates, Failure};
use parking_lot::Mutex;
use std::cell::RefCell;

/// Calls an `FnMut` through a shared reference, single-threaded.
///
/// # Panics
///
/// A call panics if the same `Mutable` is called again from inside the
/// wrapped callable.
#[derive(Debug, Clone, Default)]
pub struct Mutable<F> {
    function: RefCell<F>,
}

/// Wraps an `FnMut` so that it can be called through `&self`.
#[inline]
pub const fn mutable<F>(function: F) -> Mutable<F> {
    Mutable {
        function: RefCell::new(function),
    }
}

impl<F> Mutable<F> {
    /// Unwraps the callable, with its current state.
    #[inline]
    pub fn into_inner(self) -> F {
        self.function.into_inner()
    }
}

/// Calls an `FnMut` through a shared reference, from any thread.
///
/// Calls are serialized by a [`Mutex`]. A call from inside the wrapped
/// callable deadlocks.
#[derive(Debug, Default)]
pub struct SyncMutable<F> {
    function: Mutex<F>,
}

/// Wraps an `FnMut` so that it can be called through `&self` from several
/// threads.
///
/// # Examples
///
/// ```rust
/// use fitting::call;
/// use fitting::control::mutable_sync;
/// use std::thread;
///
/// let mut calls = 0_usize;
/// let counter = mutable_sync(move || {
///     calls += 1;
///     calls
/// });
///
/// thread::scope(|scope| {
///     for _ in 0..4 {
///         scope.spawn(|| call!(counter));
///     }
/// });
///
/// assert_eq!(counter.into_inner()(), 5);
/// ```
#[inline]
pub fn mutable_sync<F>(function: F) -> SyncMutable<F> {
    SyncMutable {
        function: Mutex::new(function),
    }
}

impl<F> SyncMutable<F> {
    /// Unwraps the callable, with its current state.
    #[inline]
    pub fn into_inner(self) -> F {
        self.function.into_inner()
    }
}

macro_rules! impl_mutable {
    ($($argument:ident $value:ident),*) => {
        impl<F, Return, $($argument,)*> Callable<($($argument,)*), Direct> for Mutable<F>
        where
            F: FnMut($($argument),*) -> Return,
        {
            type Output = Return;

            #[inline]
            fn call(&self, ($($value,)*): ($($argument,)*)) -> Return {
                let mut function = self.function.borrow_mut();
                (&mut *function)($($value),*)
            }
        }

        impl<F, Return, $($argument,)*> Callable<($($argument,)*), Direct> for SyncMutable<F>
        where
            F: FnMut($($argument),*) -> Return,
        {
            type Output = Return;

            #[inline]
            fn call(&self, ($($value,)*): ($($argument,)*)) -> Return {
                let mut function = self.function.lock();
                (&mut *function)($($value),*)
            }
        }
    };
}

impl_mutable!();
impl_mutable!(A1 a1);
impl_mutable!(A1 a1, A2 a2);
impl_mutable!(A1 a1, A2 a2, A3 a3);
impl_mutable!(A1 a1, A2 a2, A3 a3, A4 a4);
impl_mutable!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5);
impl_mutable!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6);
impl_mutable!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7);
impl_mutable!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7, A8 a8);

impl<F> Failure for Mutable<F> {
    fn failures(candidates: &mut Candidates) {
        candidates.push(Candidate::of::<F>());
    }
}

impl<F> Failure for SyncMutable<F> {
    fn failures(candidates: &mut Candidates) {
        candidates.push(Candidate::of::<F>());
    }
}

static_assertions::assert_not_impl_any!(Mutable<fn()>: Sync);
static_assertions::assert_impl_all!(SyncMutable<fn()>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::call;

    #[test]
    fn test_mutable_keeps_state_between_calls() {
        let mut seen = Vec::new();
        let collect = mutable(move |value: u8| {
            seen.push(value);
            seen.len()
        });
        assert_eq!(call!(collect, 1), 1);
        assert_eq!(call!(collect, 2), 2);
    }

    #[test]
    fn test_mutable_into_inner_returns_state() {
        let mut count = 0;
        let counter = mutable(move || {
            count += 1;
            count
        });
        call!(counter);
        call!(counter);
        let mut inner = counter.into_inner();
        assert_eq!(inner(), 3);
    }

    #[test]
    #[should_panic(expected = "already")]
    fn test_mutable_reentrant_call_panics() {
        let counter = mutable(|| 1);
        let _guard = counter.function.borrow_mut();
        call!(counter);
    }

    #[test]
    fn test_sync_mutable_is_sync() {
        fn assert_sync<T: Sync>(_: &T) {}
        let counter = mutable_sync(|| ());
        assert_sync(&counter);
    }
}
