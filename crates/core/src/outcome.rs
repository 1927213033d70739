//! The two-track outcome type and its combinators.
//!
//! `Outcome` keeps success and failure on separate tracks so fallible
//! pipelines compose without a branch check at every step. All combinators
//! are pure: they consume or borrow the outcome and construct a new value,
//! invoking at most one caller-supplied function per call.

use std::fmt;

use either::Either;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A value that is exactly one of two things: a success payload or a
/// failure payload.
///
/// The failure track carries ordinary domain data - error codes, messages,
/// structured diagnostics - which this type stores but never interprets.
/// Reading the wrong track (`unwrap_success` on a `Failure`) is a caller
/// bug, not a domain failure, and panics immediately.
///
/// Equality is structural: same variant, equal payloads.
///
/// # Examples
///
/// ```
/// use outcome_core::Outcome;
///
/// fn parse(input: &str) -> Outcome<i32, String> {
///     Outcome::from_option_else(input.trim().parse().ok(), || {
///         format!("not a number: {input}")
///     })
/// }
///
/// let doubled = parse(" 21 ").map(|n| n * 2);
/// assert_eq!(doubled, Outcome::Success(42));
///
/// let failed = parse("garbage").map(|n| n * 2);
/// assert_eq!(failed, Outcome::Failure("not a number: garbage".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome<S, F> {
    /// The operation produced a value.
    Success(S),
    /// The operation failed with a domain failure value.
    Failure(F),
}

impl<S, F> Outcome<S, F> {
    /// True iff this is the `Success` variant.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// True iff this is the `Failure` variant.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Consume the outcome and return the success payload.
    ///
    /// Callers are expected to test the variant first or reach for
    /// [`fold`](Self::fold) / [`map`](Self::map) instead of blind access.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a `Failure`.
    #[allow(clippy::panic)]
    pub fn unwrap_success(self) -> S {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => {
                panic!("called `Outcome::unwrap_success()` on a `Failure` value")
            }
        }
    }

    /// Consume the outcome and return the failure payload.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a `Success`.
    #[allow(clippy::panic)]
    pub fn unwrap_failure(self) -> F {
        match self {
            Self::Failure(value) => value,
            Self::Success(_) => {
                panic!("called `Outcome::unwrap_failure()` on a `Success` value")
            }
        }
    }

    /// Borrow both tracks, leaving the original in place.
    pub const fn as_ref(&self) -> Outcome<&S, &F> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(value) => Outcome::Failure(value),
        }
    }

    /// Inspect the success payload without consuming the outcome.
    ///
    /// The callback fires iff this is a `Success`; the original outcome is
    /// returned either way.
    #[must_use]
    pub fn tap_success(self, f: impl FnOnce(&S)) -> Self {
        if let Self::Success(ref value) = self {
            f(value);
        }
        self
    }

    /// Inspect the failure payload without consuming the outcome.
    #[must_use]
    pub fn tap_failure(self, f: impl FnOnce(&F)) -> Self {
        if let Self::Failure(ref value) = self {
            f(value);
        }
        self
    }

    /// Inspect whichever track is populated and return the original outcome.
    ///
    /// Exactly one of the two callbacks fires. Useful for inline side
    /// effects (logging, metrics counters) mid-chain.
    #[must_use]
    pub fn tap(self, on_success: impl FnOnce(&S), on_failure: impl FnOnce(&F)) -> Self {
        match self {
            Self::Success(ref value) => on_success(value),
            Self::Failure(ref value) => on_failure(value),
        }
        self
    }

    /// Fold both tracks into a single value.
    ///
    /// The universal eliminator: exactly one branch function runs, and its
    /// result is returned directly. Every other combinator on this type is
    /// expressible in terms of `fold`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_core::Outcome;
    ///
    /// let status: Outcome<u16, String> = Outcome::Success(200);
    /// let text = status.fold(|code| code.to_string(), |err| err);
    /// assert_eq!(text, "200");
    /// ```
    pub fn fold<R>(self, on_success: impl FnOnce(S) -> R, on_failure: impl FnOnce(F) -> R) -> R {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(value) => on_failure(value),
        }
    }

    /// Transform the success payload, propagating a failure untouched.
    ///
    /// The mapper never observes a failure payload.
    pub fn map<T>(self, f: impl FnOnce(S) -> T) -> Outcome<T, F> {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(value) => Outcome::Failure(value),
        }
    }

    /// Transform the failure payload, propagating a success untouched.
    pub fn map_failure<G>(self, f: impl FnOnce(F) -> G) -> Outcome<S, G> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(value) => Outcome::Failure(f(value)),
        }
    }

    /// Chain a dependent fallible step.
    ///
    /// On `Success` the mapper runs and its outcome is returned directly;
    /// on `Failure` the mapper is skipped and the failure short-circuits
    /// through.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_core::Outcome;
    ///
    /// fn positive(n: i32) -> Outcome<i32, String> {
    ///     if n > 0 {
    ///         Outcome::Success(n)
    ///     } else {
    ///         Outcome::Failure(format!("{n} is not positive"))
    ///     }
    /// }
    ///
    /// let chained = Outcome::<i32, String>::Success(3).and_then(positive);
    /// assert_eq!(chained, Outcome::Success(3));
    ///
    /// let chained = Outcome::<i32, String>::Success(-3).and_then(positive);
    /// assert_eq!(chained, Outcome::Failure("-3 is not positive".into()));
    /// ```
    pub fn and_then<T>(self, f: impl FnOnce(S) -> Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(value) => Outcome::Failure(value),
        }
    }

    /// Derive a second success value while keeping the first.
    ///
    /// On `Success` the function runs against a borrow of the payload; if
    /// it also succeeds, the result pairs the original payload with the
    /// derived one. Either failure short-circuits through unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_core::Outcome;
    ///
    /// let paired = Outcome::<i32, String>::Success(1).fanout(|n| Outcome::Success(n + 1));
    /// assert_eq!(paired, Outcome::Success((1, 2)));
    /// ```
    pub fn fanout<T>(self, f: impl FnOnce(&S) -> Outcome<T, F>) -> Outcome<(S, T), F> {
        match self {
            Self::Success(value) => match f(&value) {
                Outcome::Success(derived) => Outcome::Success((value, derived)),
                Outcome::Failure(failure) => Outcome::Failure(failure),
            },
            Self::Failure(value) => Outcome::Failure(value),
        }
    }

    /// Convert to an `Option`, discarding the failure payload.
    #[must_use]
    pub fn into_option(self) -> Option<S> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Lift an `Option` onto the two tracks, with an eager failure payload
    /// for the absent case.
    pub fn from_option(maybe: Option<S>, when_absent: F) -> Self {
        match maybe {
            Some(value) => Self::Success(value),
            None => Self::Failure(when_absent),
        }
    }

    /// Lift an `Option` onto the two tracks, constructing the failure
    /// payload only when the value is actually absent.
    ///
    /// The producer is guaranteed not to run when the value is present.
    pub fn from_option_else(maybe: Option<S>, when_absent: impl FnOnce() -> F) -> Self {
        match maybe {
            Some(value) => Self::Success(value),
            None => Self::Failure(when_absent()),
        }
    }

    /// Split a sequence of outcomes into its success and failure payloads.
    ///
    /// Relative order within each group is preserved; the cross-group
    /// interleaving is not recorded.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_core::Outcome;
    ///
    /// let outcomes = vec![
    ///     Outcome::<i32, &str>::Failure("a"),
    ///     Outcome::Success(1),
    ///     Outcome::Failure("b"),
    ///     Outcome::Success(2),
    /// ];
    ///
    /// let (successes, failures) = Outcome::partition(outcomes);
    /// assert_eq!(successes, vec![1, 2]);
    /// assert_eq!(failures, vec!["a", "b"]);
    /// ```
    pub fn partition(outcomes: impl IntoIterator<Item = Self>) -> (Vec<S>, Vec<F>) {
        outcomes.into_iter().partition_map(|outcome| match outcome {
            Self::Success(value) => Either::Left(value),
            Self::Failure(value) => Either::Right(value),
        })
    }
}

impl<S, F: fmt::Display> Outcome<S, F> {
    /// Convert to an `Option`, logging the failure if present.
    pub fn into_option_logged(self) -> Option<S> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(failure) => {
                tracing::error!("Operation failed: {}", failure);
                None
            }
        }
    }

    /// Get the success payload or a default, logging the failure if present.
    pub fn or_default_logged(self, default: S) -> S {
        match self {
            Self::Success(value) => value,
            Self::Failure(failure) => {
                tracing::error!("Operation failed, using default: {}", failure);
                default
            }
        }
    }
}
