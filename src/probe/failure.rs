//! Failure descriptors.
//!
//! When no call path accepts an argument list, the report names each
//! candidate callable that was tried together with the rejected argument
//! types. Aggregate adaptors implement [`Failure`] so that the report lists
//! their candidates instead of the aggregate itself.

use smallvec::SmallVec;
use std::any::type_name;
use std::fmt;

/// The identity of a callable that may have accepted a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate {
    callable: &'static str,
}

impl Candidate {
    /// The candidate of type `F`.
    #[inline]
    pub fn of<F: ?Sized>() -> Self {
        Self {
            callable: type_name::<F>(),
        }
    }

    /// The type name of the candidate.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.callable
    }
}

/// Candidates collected for one report. Most adaptors contribute a handful.
pub type Candidates = SmallVec<[Candidate; 4]>;

/// Describes the candidates of an adaptor for failure reports.
///
/// Aggregates list every candidate they hold, wrappers describe what they
/// wrap, and other adaptors describe themselves.
///
/// # Examples
///
/// ```
/// use fitting::conditional;
/// use fitting::probe::failure::{Candidates, Failure};
///
/// fn named<F: Failure>(_: &F) -> usize {
///     let mut candidates = Candidates::new();
///     F::failures(&mut candidates);
///     candidates.len()
/// }
///
/// let dispatch = conditional!(|x: i32| x, |x: &str| x.len() as i32);
/// assert_eq!(named(&dispatch), 2);
/// ```
pub trait Failure {
    /// Appends the candidates of `Self` to `candidates`.
    fn failures(candidates: &mut Candidates);
}

/// A candidate paired with the argument types it rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rejection {
    /// The type name of the rejecting callable.
    pub callable: &'static str,
    /// The type name of the rejected argument tuple.
    pub arguments: &'static str,
}

impl fmt::Display for Rejection {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "`{}` cannot be called with `{}`",
            self.callable, self.arguments
        )
    }
}

/// Error returned when no candidate accepts a call.
///
/// Produced by [`try_call!`](crate::try_call). Candidates appear in the order
/// the adaptor tries them.
///
/// # Examples
///
/// ```rust
/// use fitting::probe::failure::{Candidate, RejectedCall};
///
/// let error = RejectedCall::new([Candidate::of::<fn(u8) -> u8>()], "(bool,)");
/// assert_eq!(
///     format!("{error}"),
///     "no candidate accepts `(bool,)`:\n  `fn(u8) -> u8` cannot be called with `(bool,)`"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedCall {
    arguments: &'static str,
    rejections: SmallVec<[Rejection; 4]>,
}

impl RejectedCall {
    /// Builds the report for `arguments` from the tried candidates.
    pub fn new<I>(candidates: I, arguments: &'static str) -> Self
    where
        I: IntoIterator<Item = Candidate>,
    {
        let rejections = candidates
            .into_iter()
            .map(|candidate| Rejection {
                callable: candidate.name(),
                arguments,
            })
            .collect();
        Self {
            arguments,
            rejections,
        }
    }

    /// The type name of the rejected argument tuple.
    #[inline]
    pub const fn arguments(&self) -> &'static str {
        self.arguments
    }

    /// Every candidate with the arguments it rejected.
    #[inline]
    pub fn rejections(&self) -> &[Rejection] {
        &self.rejections
    }

    /// Returns `true` if the report names a candidate whose type name
    /// contains `fragment`.
    pub fn mentions(&self, fragment: &str) -> bool {
        self.rejections
            .iter()
            .any(|rejection| rejection.callable.contains(fragment))
    }
}

impl fmt::Display for RejectedCall {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "no candidate accepts `{}`:", self.arguments)?;
        for rejection in &self.rejections {
            write!(formatter, "\n  {rejection}")?;
        }
        Ok(())
    }
}

impl std::error::Error for RejectedCall {}

#[cfg(test)]
mod tests {
    use super::*;

    struct Left;
    struct Right;

    #[test]
    fn test_candidate_uses_type_name() {
        assert!(Candidate::of::<Left>().name().ends_with("Left"));
        assert_eq!(Candidate::of::<str>().name(), "str");
    }

    #[test]
    fn test_rejected_call_keeps_candidate_order() {
        let error = RejectedCall::new(
            [Candidate::of::<Left>(), Candidate::of::<Right>()],
            "(i32,)",
        );
        assert_eq!(error.rejections().len(), 2);
        assert!(error.rejections()[0].callable.ends_with("Left"));
        assert!(error.rejections()[1].callable.ends_with("Right"));
        assert!(error.mentions("Right"));
        assert!(!error.mentions("Up"));
    }

    #[test]
    fn test_rejected_call_without_candidates() {
        let error = RejectedCall::new([], "()");
        assert!(error.rejections().is_empty());
        assert_eq!(format!("{error}"), "no candidate accepts `()`:");
    }

    #[test]
    fn test_rejection_display() {
        let rejection = Rejection {
            callable: "Left",
            arguments: "(u8,)",
        };
        assert_eq!(format!("{rejection}"), "`Left` cannot be called with `(u8,)`");
    }
}
