//! Deferred calls with placeholder arguments.
//!
//! `lazy(f)` turns `f` into a builder of bound expressions: calling it with a
//! list of *bindings* returns a [`Bound`] instead of calling `f`. Calling the
//! bound expression evaluates every binding against the arguments it was
//! called with and then calls `f` with the results.
//!
//! A binding is anything implementing [`Transform`]:
//!
//! - a placeholder [`_1`] .. [`_6`] selects (a clone of) the matching argument,
//! - a nested [`Bound`] is evaluated with the same arguments,
//! - a [`Protect`] is passed on as a callable without being evaluated,
//! - a constant (number, `bool`, `char`, `String`, reference or [`val`]) is
//!   passed on as is.
//!
//! Bindings are evaluated left to right.
//!
//! Placeholders hand out clones because an expression can be called many
//! times. Shared references are `Clone` and pass through unchanged; a
//! `&mut T` argument cannot be selected by a placeholder.
//!
//! # Examples
//!
//! ```rust
//! use fitting::call;
//! use fitting::control::{_1, _2, lazy};
//!
//! let add = |a: i32, b: i32| a + b;
//! let multiply = |a: i32, b: i32| a * b;
//!
//! // add(x, multiply(x, y))
//! let expression = call!(lazy(add), _1, call!(lazy(multiply), _1, _2));
//! assert_eq!(call!(expression, 2, 5), 12);
//! ```

use super::protect::Protect;
use crate::callable::{CallOutput, Callable, Direct};
use crate::probe::failure::{Candidate, Candidates, Failure};

/// Selects the `N`th argument (counting from 1) of a bound expression call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Placeholder<const N: usize>;

/// The first argument.
pub const _1: Placeholder<1> = Placeholder;
/// The second argument.
pub const _2: Placeholder<2> = Placeholder;
/// The third argument.
pub const _3: Placeholder<3> = Placeholder;
/// The fourth argument.
pub const _4: Placeholder<4> = Placeholder;
/// The fifth argument.
pub const _5: Placeholder<5> = Placeholder;
/// The sixth argument.
pub const _6: Placeholder<6> = Placeholder;

/// Access to the `N`th element (counting from 1) of an argument tuple.
pub trait Select<const N: usize> {
    /// The type of the element.
    type Output;

    /// Returns the element.
    fn select(&self) -> &Self::Output;
}

macro_rules! impl_select {
    ($all:tt; $($index:literal => $field:tt $selected:ident),+) => {
        $(impl_select!(@single $all $index $field $selected);)+
    };

    (@single [$($all:ident)+] $index:literal $field:tt $selected:ident) => {
        impl<$($all,)+> Select<$index> for ($($all,)+) {
            type Output = $selected;

            #[inline]
            fn select(&self) -> &$selected {
                &self.$field
            }
        }
    };
}

impl_select!([A1]; 1 => 0 A1);
impl_select!([A1 A2]; 1 => 0 A1, 2 => 1 A2);
impl_select!([A1 A2 A3]; 1 => 0 A1, 2 => 1 A2, 3 => 2 A3);
impl_select!([A1 A2 A3 A4]; 1 => 0 A1, 2 => 1 A2, 3 => 2 A3, 4 => 3 A4);
impl_select!([A1 A2 A3 A4 A5]; 1 => 0 A1, 2 => 1 A2, 3 => 2 A3, 4 => 3 A4, 5 => 4 A5);
impl_select!([A1 A2 A3 A4 A5 A6]; 1 => 0 A1, 2 => 1 A2, 3 => 2 A3, 4 => 3 A4, 5 => 4 A5, 6 => 5 A6);

/// A binding of a bound expression: turns the call arguments into one
/// argument for the deferred callable.
///
/// `Route` plays the same part as in [`Callable`]: nested bound expressions
/// carry the routes of their own calls.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a binding for arguments `{Args}`",
    note = "use a placeholder such as `_1`, a value wrapped in `val`, or another bound expression"
)]
pub trait Transform<Args, Route = Direct> {
    /// The argument produced for the deferred callable.
    type Output;

    /// Evaluates the binding against `arguments`.
    fn transform(&self, arguments: &Args) -> Self::Output;
}

impl<const N: usize, Args> Transform<Args> for Placeholder<N>
where
    Args: Select<N>,
    <Args as Select<N>>::Output: Clone,
{
    type Output = <Args as Select<N>>::Output;

    #[inline]
    fn transform(&self, arguments: &Args) -> Self::Output {
        arguments.select().clone()
    }
}

macro_rules! impl_transform_for_constants {
    ($($constant:ty),* $(,)?) => {
        $(
            #[allow(clippy::clone_on_copy)]
            impl<Args> Transform<Args> for $constant {
                type Output = Self;

                #[inline]
                fn transform(&self, _: &Args) -> Self {
                    self.clone()
                }
            }
        )*
    };
}

impl_transform_for_constants!(
    (), bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    String,
);

impl<'a, T: ?Sized, Args> Transform<Args> for &'a T {
    type Output = &'a T;

    #[inline]
    fn transform(&self, _: &Args) -> &'a T {
        *self
    }
}

/// A constant binding of any `Clone` type.
///
/// Created with [`val`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Value<T> {
    value: T,
}

/// Binds a constant. Each evaluation of the expression receives a clone.
///
/// # Examples
///
/// ```rust
/// use fitting::call;
/// use fitting::control::{_1, lazy, val};
///
/// let join = |mut items: Vec<u8>, item: u8| { items.push(item); items };
/// let expression = call!(lazy(join), val(vec![1, 2]), _1);
/// assert_eq!(call!(expression, 3_u8), vec![1, 2, 3]);
/// assert_eq!(call!(expression, 4_u8), vec![1, 2, 4]);
/// ```
#[inline]
pub const fn val<T>(value: T) -> Value<T> {
    Value { value }
}

impl<T: Clone, Args> Transform<Args> for Value<T> {
    type Output = T;

    #[inline]
    fn transform(&self, _: &Args) -> T {
        self.value.clone()
    }
}

impl<F: Clone, Args> Transform<Args> for Protect<F> {
    type Output = Self;

    #[inline]
    fn transform(&self, _: &Args) -> Self {
        self.clone()
    }
}

/// Defers calls to `F`; calling it builds a [`Bound`] expression.
///
/// Created with [`lazy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Lazy<F> {
    function: F,
}

/// Makes `function` lazy.
///
/// # Examples
///
/// ```rust
/// use fitting::call;
/// use fitting::control::{_1, _2, lazy};
///
/// let subtract = lazy(|a: i32, b: i32| a - b);
/// let swapped = call!(subtract, _2, _1);
/// assert_eq!(call!(swapped, 1, 10), 9);
/// ```
#[inline]
pub const fn lazy<F>(function: F) -> Lazy<F> {
    Lazy { function }
}

impl<F> Lazy<F> {
    /// Binds `bindings`, a tuple of [`Transform`] values, to the deferred
    /// callable.
    #[inline]
    pub fn bind<Bindings>(&self, bindings: Bindings) -> Bound<F, Bindings>
    where
        F: Clone,
    {
        Bound::new(self.function.clone(), bindings)
    }

    /// Returns the deferred callable.
    #[inline]
    pub const fn get_ref(&self) -> &F {
        &self.function
    }
}

impl<F: Clone, Bindings> Callable<Bindings, Direct> for Lazy<F> {
    type Output = Bound<F, Bindings>;

    #[inline]
    fn call(&self, bindings: Bindings) -> Bound<F, Bindings> {
        self.bind(bindings)
    }
}

impl<F> Failure for Lazy<F> {
    fn failures(candidates: &mut Candidates) {
        candidates.push(Candidate::of::<F>());
    }
}

/// A deferred call: a callable and the bindings of its arguments.
///
/// Calling a `Bound` evaluates the bindings against the call arguments, in
/// order, and calls the callable with the results. A `Bound` is also a
/// binding itself, which is how bound expressions nest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bound<F, Bindings> {
    function: F,
    bindings: Bindings,
}

impl<F, Bindings> Bound<F, Bindings> {
    /// Binds `bindings` to `function`.
    #[inline]
    pub const fn new(function: F, bindings: Bindings) -> Self {
        Self { function, bindings }
    }

    /// Returns the bindings.
    #[inline]
    pub const fn bindings(&self) -> &Bindings {
        &self.bindings
    }
}

macro_rules! impl_bound {
    ($($binding:ident $route:ident $value:ident),*) => {
        impl<F, FunctionRoute, Args, $($binding, $route,)*>
            Transform<Args, (FunctionRoute, ($($route,)*))> for Bound<F, ($($binding,)*)>
        where
            $($binding: Transform<Args, $route>,)*
            F: Callable<($(<$binding as Transform<Args, $route>>::Output,)*), FunctionRoute>,
        {
            type Output = CallOutput<
                F,
                ($(<$binding as Transform<Args, $route>>::Output,)*),
                FunctionRoute,
            >;

            #[inline]
            #[allow(unused_variables)]
            fn transform(&self, arguments: &Args) -> Self::Output {
                let ($($value,)*) = &self.bindings;
                <F as Callable<_, FunctionRoute>>::call(
                    &self.function,
                    ($(<$binding as Transform<Args, $route>>::transform($value, arguments),)*),
                )
            }
        }

        impl<F, FunctionRoute, Args, $($binding, $route,)*>
            Callable<Args, (FunctionRoute, ($($route,)*))> for Bound<F, ($($binding,)*)>
        where
            $($binding: Transform<Args, $route>,)*
            F: Callable<($(<$binding as Transform<Args, $route>>::Output,)*), FunctionRoute>,
        {
            type Output = CallOutput<
                F,
                ($(<$binding as Transform<Args, $route>>::Output,)*),
                FunctionRoute,
            >;

            #[inline]
            fn call(&self, arguments: Args) -> Self::Output {
                <Self as Transform<Args, (FunctionRoute, ($($route,)*))>>::transform(
                    self,
                    &arguments,
                )
            }
        }
    };
}

impl_bound!();
impl_bound!(B1 R1 b1);
impl_bound!(B1 R1 b1, B2 R2 b2);
impl_bound!(B1 R1 b1, B2 R2 b2, B3 R3 b3);
impl_bound!(B1 R1 b1, B2 R2 b2, B3 R3 b3, B4 R4 b4);
impl_bound!(B1 R1 b1, B2 R2 b2, B3 R3 b3, B4 R4 b4, B5 R5 b5);
impl_bound!(B1 R1 b1, B2 R2 b2, B3 R3 b3, B4 R4 b4, B5 R5 b5, B6 R6 b6);

impl<F, Bindings> Failure for Bound<F, Bindings> {
    fn failures(candidates: &mut Candidates) {
        candidates.push(Candidate::of::<F>());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::call;
    use crate::control::protect;
    use rstest::rstest;
    use std::cell::Cell;

    fn f_0() -> i64 {
        17041
    }

    fn f_1(a: i64) -> i64 {
        a
    }

    fn f_2(a: i64, b: i64) -> i64 {
        a + 10 * b
    }

    fn f_3(a: i64, b: i64, c: i64) -> i64 {
        a + 10 * b + 100 * c
    }

    #[rstest]
    #[case(1, 2, 21)]
    #[case(3, 0, 3)]
    #[case(-1, 1, 9)]
    fn test_nested_bind_with_two_placeholders(#[case] x: i64, #[case] y: i64, #[case] expected: i64) {
        let expression = call!(lazy(f_1), call!(lazy(f_2), _1, _2));
        assert_eq!(call!(expression, x, y), expected);
    }

    #[test]
    fn test_placeholder_reused_by_two_bindings() {
        let expression = call!(lazy(f_2), call!(lazy(f_1), _1), call!(lazy(f_1), _1));
        assert_eq!(call!(expression, 1_i64), 11);
    }

    #[test]
    fn test_constants_and_placeholders_mixed() {
        let expression = call!(lazy(f_3), 6_i64, _1, 9_i64);
        assert_eq!(call!(expression, 3_i64), 936);
    }

    #[test]
    fn test_nullary_bind() {
        let expression = call!(lazy(f_1), call!(lazy(f_0)));
        assert_eq!(call!(expression), 17041);
    }

    #[test]
    fn test_bound_constant_is_reused() {
        let expression = call!(lazy(|x: i32| x), 3);
        assert_eq!(call!(expression), 3);
        assert_eq!(call!(expression), 3);
    }

    #[test]
    fn test_reference_binding_is_not_copied() {
        let counter = Cell::new(6);
        let increment = |cell: &Cell<i32>| {
            cell.set(cell.get() + 1);
            cell.get()
        };
        let expression = call!(lazy(increment), &counter);
        assert_eq!(call!(expression), 7);
        assert_eq!(call!(expression), 8);
        assert_eq!(counter.get(), 8);
    }

    #[test]
    fn test_protected_expression_is_passed_as_callable() {
        let apply = |function: Protect<Bound<fn(i64) -> i64, (Placeholder<1>,)>>, x: i64| {
            call!(function, x) * 2
        };
        let inner = call!(lazy(f_1 as fn(i64) -> i64), _1);
        let expression = call!(lazy(apply), protect(inner), _1);
        assert_eq!(call!(expression, 4_i64), 8);
    }

    #[test]
    fn test_bindings_evaluated_left_to_right() {
        let order = std::cell::RefCell::new(Vec::new());
        let record = |tag: char| {
            order.borrow_mut().push(tag);
            tag
        };
        let pair = |a: char, b: char| (a, b);
        let expression = call!(lazy(pair), call!(lazy(&record), 'a'), call!(lazy(&record), 'b'));
        assert_eq!(call!(expression), ('a', 'b'));
        assert_eq!(*order.borrow(), vec!['a', 'b']);
    }
}
