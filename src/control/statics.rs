//! Constructor constants.
//!
//! Each constant is a zero-sized callable that wraps its single argument in
//! the matching adaptor, so adaptors can be built in a `static` or `const`
//! item and passed around like any other callable.
//!
//! # Examples
//!
//! ```rust
//! use fitting::call;
//! use fitting::control::{INDIRECT, PROTECT};
//!
//! let protected = call!(PROTECT, |x: i32| x + 1);
//! assert_eq!(call!(protected, 1), 2);
//!
//! let boxed = call!(INDIRECT, Box::new(|x: i32| x * 2));
//! assert_eq!(call!(boxed, 4), 8);
//! ```

use super::indirect::{Indirect, indirect};
use super::lazy::{Lazy, lazy};
use super::mutable::{Mutable, mutable};
use super::protect::{Protect, protect};
use crate::callable::{Callable, Direct};

macro_rules! define_constructors {
    ($($(#[$meta:meta])* $name:ident => $adaptor:ident($constructor:path);)+) => {
        paste::paste! {
            $(
                #[doc = concat!("Builds a [`", stringify!($adaptor), "`] from one callable.")]
                $(#[$meta])*
                #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
                pub struct [<$adaptor Constructor>];

                #[doc = concat!("Constant form of [`", stringify!($constructor), "`].")]
                $(#[$meta])*
                pub const $name: [<$adaptor Constructor>] = [<$adaptor Constructor>];

                $(#[$meta])*
                impl<F> Callable<(F,), Direct> for [<$adaptor Constructor>] {
                    type Output = $adaptor<F>;

                    #[inline]
                    fn call(&self, (function,): (F,)) -> $adaptor<F> {
                        $constructor(function)
                    }
                }
            )+
        }
    };
}

#[cfg(feature = "reveal")]
use crate::reveal::{Reveal, reveal};

define_constructors! {
    PROTECT => Protect(protect);
    INDIRECT => Indirect(indirect);
    LAZY => Lazy(lazy);
    MUTABLE => Mutable(mutable);
    #[cfg(feature = "reveal")]
    REVEAL => Reveal(reveal);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::call;
    use crate::control::_1;

    static INCREMENT: Protect<fn(i32) -> i32> = protect(increment as fn(i32) -> i32);

    fn increment(x: i32) -> i32 {
        x + 1
    }

    #[test]
    fn test_constant_in_static_initializer() {
        assert_eq!(call!(INCREMENT, 41), 42);
    }

    #[test]
    fn test_lazy_constant() {
        let deferred = call!(LAZY, |a: i32, b: i32| a * b);
        let square = call!(deferred, _1, _1);
        assert_eq!(call!(square, 7), 49);
    }

    #[test]
    fn test_constructors_are_zero_sized() {
        assert_eq!(size_of_val(&PROTECT), 0);
        assert_eq!(size_of_val(&MUTABLE), 0);
    }

    #[cfg(feature = "reveal")]
    #[test]
    fn test_reveal_constant() {
        let revealed = call!(REVEAL, |x: u8| x);
        assert_eq!(call!(revealed, 3), 3);
    }
}
