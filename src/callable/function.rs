//! Blanket impls for closures and a couple of helper callables.

use super::{Callable, Direct};

macro_rules! impl_callable_for_functions {
    ($($argument:ident $value:ident),*) => {
        impl<Function, Return, $($argument,)*> Callable<($($argument,)*), Direct> for Function
        where
            Function: Fn($($argument),*) -> Return + ?Sized,
        {
            type Output = Return;

            #[inline]
            fn call(&self, ($($value,)*): ($($argument,)*)) -> Return {
                self($($value),*)
            }
        }
    };
}

impl_callable_for_functions!();
impl_callable_for_functions!(A1 a1);
impl_callable_for_functions!(A1 a1, A2 a2);
impl_callable_for_functions!(A1 a1, A2 a2, A3 a3);
impl_callable_for_functions!(A1 a1, A2 a2, A3 a3, A4 a4);
impl_callable_for_functions!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5);
impl_callable_for_functions!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6);
impl_callable_for_functions!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7);
impl_callable_for_functions!(A1 a1, A2 a2, A3 a3, A4 a4, A5 a5, A6 a6, A7 a7, A8 a8);

/// Returns its single argument unchanged, whatever its type.
///
/// The unit of composition: `compose(Identity, f)` and `compose(f, Identity)`
/// behave like `f`.
///
/// # Examples
///
/// ```
/// use fitting::callable::{Callable, Identity};
///
/// assert_eq!(Identity.call((42,)), 42);
/// assert_eq!(Identity.call(("hello",)), "hello");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Identity;

impl<Value> Callable<(Value,), Direct> for Identity {
    type Output = Value;

    #[inline]
    fn call(&self, (value,): (Value,)) -> Value {
        value
    }
}

/// Ignores its arguments, whatever they are, and returns a clone of the
/// stored value.
///
/// Created with [`always`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Always<Value> {
    value: Value,
}

/// Creates a callable that returns `value` for any argument tuple.
///
/// # Examples
///
/// ```
/// use fitting::callable::{Callable, always};
///
/// let three = always(3);
/// assert_eq!(three.call(()), 3);
/// assert_eq!(three.call(("ignored", 1.5)), 3);
/// ```
#[inline]
pub const fn always<Value>(value: Value) -> Always<Value> {
    Always { value }
}

impl<Value: Clone, Args> Callable<Args, Direct> for Always<Value> {
    type Output = Value;

    #[inline]
    fn call(&self, _: Args) -> Value {
        self.value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add_three(first: i32, second: i32, third: i32) -> i32 {
        first + second + third
    }

    #[test]
    fn test_function_item_is_callable() {
        assert_eq!(add_three.call((1, 2, 3)), 6);
    }

    #[test]
    fn test_eight_argument_closure_is_callable() {
        let sum = |a: u8, b: u8, c: u8, d: u8, e: u8, f: u8, g: u8, h: u8| {
            a + b + c + d + e + f + g + h
        };
        assert_eq!(sum.call((1, 1, 1, 1, 1, 1, 1, 1)), 8);
    }

    #[test]
    fn test_boxed_closure_is_callable() {
        let boxed: Box<dyn Fn(i32) -> i32> = Box::new(|x| x * 10);
        assert_eq!(boxed.call((4,)), 40);
    }

    #[test]
    fn test_always_clones_value() {
        let greeting = always(String::from("hello"));
        assert_eq!(greeting.call((1, 2)), "hello");
        assert_eq!(greeting.call(()), "hello");
    }
}
