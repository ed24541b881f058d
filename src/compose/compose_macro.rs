//! The [`Compose`] adaptor and the [`compose!`] / [`flow!`] macros.

use crate::callable::{CallOutput, Callable, Pair};
use crate::probe::failure::{Candidate, Candidates, Failure};

/// Two callables composed: the output of `Inner` becomes the single argument
/// of `Outer`.
///
/// `Compose::new(f, g).call(xs) == f.call((g.call(xs),))`.
///
/// Longer chains nest on the right: `compose!(f, g, h)` is
/// `Compose<F, Compose<G, H>>`, with the last callable stored as-is.
///
/// The adaptor is `Clone`, `Copy`, `Default` or `Debug` exactly when both
/// callables are, so composing move-only callables yields a move-only
/// adaptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Compose<Outer, Inner> {
    functions: Pair<Outer, Inner>,
}

impl<Outer, Inner> Compose<Outer, Inner> {
    /// Composes `outer` after `inner`.
    #[inline]
    pub const fn new(outer: Outer, inner: Inner) -> Self {
        Self {
            functions: Pair::new(outer, inner),
        }
    }

    /// Returns the callable applied last.
    #[inline]
    pub const fn outer(&self) -> &Outer {
        self.functions.first()
    }

    /// Returns the callable applied first.
    #[inline]
    pub const fn inner(&self) -> &Inner {
        self.functions.second()
    }

    /// Returns both callables, outer first.
    #[inline]
    pub fn into_parts(self) -> (Outer, Inner) {
        self.functions.into_parts()
    }
}

impl<Outer, Inner, Args, OuterRoute, InnerRoute> Callable<Args, (OuterRoute, InnerRoute)>
    for Compose<Outer, Inner>
where
    Inner: Callable<Args, InnerRoute>,
    Outer: Callable<(CallOutput<Inner, Args, InnerRoute>,), OuterRoute>,
{
    type Output = CallOutput<Outer, (CallOutput<Inner, Args, InnerRoute>,), OuterRoute>;

    #[inline]
    fn call(&self, arguments: Args) -> Self::Output {
        let intermediate =
            <Inner as Callable<Args, InnerRoute>>::call(self.functions.second(), arguments);
        <Outer as Callable<(CallOutput<Inner, Args, InnerRoute>,), OuterRoute>>::call(
            self.functions.first(),
            (intermediate,),
        )
    }
}

impl<Outer, Inner> Failure for Compose<Outer, Inner> {
    fn failures(candidates: &mut Candidates) {
        candidates.push(Candidate::of::<Self>());
    }
}

/// Composes `outer` after `inner`.
///
/// # Examples
///
/// ```
/// use fitting::callable::Callable;
/// use fitting::compose::compose;
///
/// let to_text = |x: i32| x.to_string();
/// let length = |text: String| text.len();
///
/// assert_eq!(compose(length, to_text).call((12345,)), 5);
/// ```
#[inline]
pub const fn compose<Outer, Inner>(outer: Outer, inner: Inner) -> Compose<Outer, Inner> {
    Compose::new(outer, inner)
}

/// Composes callables from right to left.
///
/// `compose!(f, g, h)` called with `xs` is `f(g(h(xs)))`: the last callable
/// receives the original arguments, the first one produces the result.
/// `compose!(f)` is `f` itself.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h))` and
///   `compose!(compose!(f, g), h)` give the same results
/// - **Identity**: `compose!(Identity, f)` and `compose!(f, Identity)` behave
///   like `f`
///
/// # Examples
///
/// ```
/// use fitting::{call, compose};
///
/// let increment = |x: i32| x + 1;
/// let decrement = |x: i32| x - 1;
///
/// let composed = compose!(increment, decrement, increment);
/// assert_eq!(call!(composed, 3), 4);
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer:expr, $($remaining:expr),+ $(,)?) => {
        $crate::compose::Compose::new($outer, $crate::compose!($($remaining),+))
    };
}

/// Composes callables from left to right.
///
/// `flow!(f, g, h)` called with `xs` is `h(g(f(xs)))`: the reading order is
/// the order of evaluation.
///
/// # Examples
///
/// ```
/// use fitting::{call, flow};
///
/// let square = |x: i32| x * x;
/// let double = |x: i32| x * 2;
/// let increment = |x: i32| x + 1;
///
/// let pipeline = flow!(square, double, increment);
/// assert_eq!(call!(pipeline, 3), 19);
/// ```
#[macro_export]
macro_rules! flow {
    ($function:expr $(,)?) => {
        $function
    };

    ($first:expr, $($remaining:expr),+ $(,)?) => {
        $crate::compose::Compose::new($crate::flow!($($remaining),+), $first)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callable::Identity;

    #[test]
    fn test_compose_single() {
        let double = |x: i32| x * 2;
        let composed = compose!(double);
        assert_eq!(composed.call((5,)), 10);
    }

    #[test]
    fn test_compose_two() {
        let add_one = |x: i32| x + 1;
        let double = |x: i32| x * 2;
        assert_eq!(compose!(add_one, double).call((5,)), 11);
    }

    #[test]
    fn test_compose_three() {
        let add_one = |x: i32| x + 1;
        let double = |x: i32| x * 2;
        let square = |x: i32| x * x;
        assert_eq!(compose!(add_one, double, square).call((3,)), 19);
    }

    #[test]
    fn test_inner_receives_every_argument() {
        let negate = |x: i32| -x;
        let add = |first: i32, second: i32| first + second;
        assert_eq!(compose(negate, add).call((2, 3)), -5);
    }

    #[test]
    fn test_flow_reverses_order() {
        let add_one = |x: i32| x + 1;
        let double = |x: i32| x * 2;
        assert_eq!(flow!(add_one, double).call((5,)), 12);
    }

    #[test]
    fn test_identity_is_unit_of_composition() {
        let triple = |x: i32| x * 3;
        assert_eq!(compose(Identity, triple).call((4,)), 12);
        assert_eq!(compose(triple, Identity).call((4,)), 12);
    }

    #[test]
    fn test_accessors_expose_parts() {
        let composed = compose(|x: i32| x + 1, |x: i32| x * 2);
        assert_eq!((composed.outer())(1), 2);
        assert_eq!((composed.inner())(1), 2);
    }
}
