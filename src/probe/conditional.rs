//! The [`Conditional`] adaptor: dispatch a call to the candidate that accepts
//! it.

use crate::callable::{CallOutput, Callable, First, Pair, Rest};
use super::failure::{Candidate, Candidates, Failure};

/// A list of candidate callables; a call goes to the candidate that accepts
/// its argument types.
///
/// `Conditional<Head, Tail>` offers two routes for every argument list:
/// [`First`] calls `Head`, [`Rest`] passes the call on to `Tail`, which is
/// either another `Conditional` or [`Exhausted`]. The compiler keeps the one
/// route whose bound holds, so the choice is made entirely at compile time.
///
/// - A call no candidate accepts is a compile-time error.
/// - A call more than one candidate accepts is ambiguous and also a
///   compile-time error; the route can then be named explicitly.
///
/// Built with [`conditional!`](crate::conditional).
///
/// # Examples
///
/// ```
/// use fitting::{call, conditional};
///
/// struct Circle(f64);
/// struct Square(f64);
///
/// let area = conditional!(
///     |circle: Circle| 3.0 * circle.0 * circle.0,
///     |square: Square| square.0 * square.0,
/// );
///
/// assert_eq!(call!(area, Circle(1.0)), 3.0);
/// assert_eq!(call!(area, Square(2.0)), 4.0);
/// ```
///
/// Naming the route when two candidates accept the same arguments:
///
/// ```
/// use fitting::callable::{Callable, Direct, First, Rest};
/// use fitting::conditional;
///
/// let overlapping = conditional!(|x: i32| x, |x: i32| x * 100);
///
/// assert_eq!(Callable::<_, First<Direct>>::call(&overlapping, (2,)), 2);
/// assert_eq!(Callable::<_, Rest<First<Direct>>>::call(&overlapping, (2,)), 200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Conditional<Head, Tail> {
    candidates: Pair<Head, Tail>,
}

/// The end of a [`Conditional`] list. Accepts nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Exhausted;

impl<Head, Tail> Conditional<Head, Tail> {
    /// Tries `head` before the candidates of `tail`.
    #[inline]
    pub const fn new(head: Head, tail: Tail) -> Self {
        Self {
            candidates: Pair::new(head, tail),
        }
    }

    /// Returns the first candidate.
    #[inline]
    pub const fn head(&self) -> &Head {
        self.candidates.first()
    }

    /// Returns the remaining candidates.
    #[inline]
    pub const fn tail(&self) -> &Tail {
        self.candidates.second()
    }
}

impl<Head> Conditional<Head, Exhausted> {
    /// A list holding the single candidate `head`.
    #[inline]
    pub const fn single(head: Head) -> Self {
        Self::new(head, Exhausted)
    }
}

impl<Head, Tail, Args, Route> Callable<Args, First<Route>> for Conditional<Head, Tail>
where
    Head: Callable<Args, Route>,
{
    type Output = CallOutput<Head, Args, Route>;

    #[inline]
    fn call(&self, arguments: Args) -> Self::Output {
        self.candidates.first().call(arguments)
    }
}

impl<Head, Tail, Args, Route> Callable<Args, Rest<Route>> for Conditional<Head, Tail>
where
    Tail: Callable<Args, Route>,
{
    type Output = CallOutput<Tail, Args, Route>;

    #[inline]
    fn call(&self, arguments: Args) -> Self::Output {
        self.candidates.second().call(arguments)
    }
}

impl<Head, Tail: Failure> Failure for Conditional<Head, Tail> {
    fn failures(candidates: &mut Candidates) {
        candidates.push(Candidate::of::<Head>());
        Tail::failures(candidates);
    }
}

impl Failure for Exhausted {
    fn failures(_: &mut Candidates) {}
}

/// Builds a [`Conditional`] from a list of candidates, tried in order.
///
/// # Examples
///
/// ```
/// use fitting::callable::Callable;
/// use fitting::conditional;
///
/// let describe = conditional!(
///     |flag: bool| if flag { "yes" } else { "no" },
///     |_: ()| "nothing",
/// );
///
/// assert_eq!(describe.call((true,)), "yes");
/// assert_eq!(describe.call(((),)), "nothing");
/// ```
#[macro_export]
macro_rules! conditional {
    ($candidate:expr $(,)?) => {
        $crate::probe::Conditional::single($candidate)
    };

    ($candidate:expr, $($remaining:expr),+ $(,)?) => {
        $crate::probe::Conditional::new($candidate, $crate::conditional!($($remaining),+))
    };
}
