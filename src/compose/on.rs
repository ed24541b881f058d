//! The [`On`] adaptor: project every argument, then call.

use crate::callable::{CallOutput, Callable, Pair};
use crate::probe::failure::{Candidate, Candidates, Failure};

/// Applies a projection to each argument independently before calling a
/// function with the projected values.
///
/// `on(p, f).call((a, b, c)) == f.call((p(a), p(b), p(c)))`. The projection is
/// called exactly once per argument, from left to right, and must accept each
/// argument type on its own (not the whole argument list). Arities 1 to 6 are
/// supported.
///
/// # Examples
///
/// Comparing records by one of their fields:
///
/// ```
/// use fitting::callable::Callable;
/// use fitting::compose::on;
///
/// struct Employee {
///     age: u32,
/// }
///
/// let older = on(|employee: &Employee| employee.age, |a: u32, b: u32| a > b);
///
/// let alice = Employee { age: 41 };
/// let bob = Employee { age: 29 };
/// assert!(older.call((&alice, &bob)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct On<Projection, Function> {
    parts: Pair<Projection, Function>,
}

impl<Projection, Function> On<Projection, Function> {
    /// Calls `function` with every argument passed through `projection`.
    #[inline]
    pub const fn new(projection: Projection, function: Function) -> Self {
        Self {
            parts: Pair::new(projection, function),
        }
    }

    /// Returns the projection.
    #[inline]
    pub const fn projection(&self) -> &Projection {
        self.parts.first()
    }

    /// Returns the function called with the projected arguments.
    #[inline]
    pub const fn function(&self) -> &Function {
        self.parts.second()
    }
}

macro_rules! impl_on {
    ($($argument:ident $value:ident $route:ident),+) => {
        impl<Projection, Function, FunctionRoute, $($argument, $route,)+>
            Callable<($($argument,)+), (FunctionRoute, ($($route,)+))> for On<Projection, Function>
        where
            $(Projection: Callable<($argument,), $route>,)+
            Function: Callable<($(CallOutput<Projection, ($argument,), $route>,)+), FunctionRoute>,
        {
            type Output = CallOutput<
                Function,
                ($(CallOutput<Projection, ($argument,), $route>,)+),
                FunctionRoute,
            >;

            #[inline]
            fn call(&self, ($($value,)+): ($($argument,)+)) -> Self::Output {
                let projection = self.parts.first();
                let projected = ($(
                    <Projection as Callable<($argument,), $route>>::call(projection, ($value,)),
                )+);
                <Function as Callable<
                    ($(CallOutput<Projection, ($argument,), $route>,)+),
                    FunctionRoute,
                >>::call(self.parts.second(), projected)
            }
        }
    };
}

impl_on!(A1 a1 R1);
impl_on!(A1 a1 R1, A2 a2 R2);
impl_on!(A1 a1 R1, A2 a2 R2, A3 a3 R3);
impl_on!(A1 a1 R1, A2 a2 R2, A3 a3 R3, A4 a4 R4);
impl_on!(A1 a1 R1, A2 a2 R2, A3 a3 R3, A4 a4 R4, A5 a5 R5);
impl_on!(A1 a1 R1, A2 a2 R2, A3 a3 R3, A4 a4 R4, A5 a5 R5, A6 a6 R6);

impl<Projection, Function> Failure for On<Projection, Function> {
    fn failures(candidates: &mut Candidates) {
        candidates.push(Candidate::of::<Self>());
    }
}

/// Creates an [`On`] adaptor applying `projection` to every argument of
/// `function`.
#[inline]
pub const fn on<Projection, Function>(
    projection: Projection,
    function: Function,
) -> On<Projection, Function> {
    On::new(projection, function)
}

/// Same adaptor as [`on`], under the name used by later releases of the
/// original library.
///
/// # Examples
///
/// ```
/// use fitting::call;
/// use fitting::compose::by;
///
/// let sum_of_lengths = by(|text: &str| text.len(), |a: usize, b: usize| a + b);
/// assert_eq!(call!(sum_of_lengths, "four", "five!"), 9);
/// ```
#[inline]
pub const fn by<Projection, Function>(
    projection: Projection,
    function: Function,
) -> On<Projection, Function> {
    On::new(projection, function)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_unary_projection() {
        let negate_then_double = on(|x: i32| -x, |x: i32| x * 2);
        assert_eq!(negate_then_double.call((4,)), -8);
    }

    #[test]
    fn test_projection_order_is_left_to_right() {
        let seen = RefCell::new(Vec::new());
        let record = |x: i32| {
            seen.borrow_mut().push(x);
            x
        };
        let sum = |a: i32, b: i32, c: i32| a + b + c;

        assert_eq!(on(record, sum).call((1, 2, 3)), 6);
        assert_eq!(*seen.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn test_six_arguments() {
        let count = on(|flag: bool| u8::from(flag), |a: u8, b: u8, c: u8, d: u8, e: u8, f: u8| {
            a + b + c + d + e + f
        });
        assert_eq!(count.call((true, false, true, true, false, true)), 4);
    }
}
