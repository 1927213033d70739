//! Interop with the std `Result` and `Option` types.
//!
//! `Outcome` and `std::result::Result` carry the same information; the
//! bridge in both directions is lossless. `Option` conversions need a
//! failure payload for the absent case, eager or lazy.

use crate::outcome::Outcome;

impl<S, F> From<Result<S, F>> for Outcome<S, F> {
    fn from(result: Result<S, F>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(failure) => Self::Failure(failure),
        }
    }
}

impl<S, F> Outcome<S, F> {
    /// Convert into the std `Result`, `Success` to `Ok` and `Failure` to `Err`.
    ///
    /// The reverse direction is the `From` impl above; the orphan rule keeps
    /// this direction an inherent method.
    #[must_use]
    pub fn into_result(self) -> Result<S, F> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(failure) => Err(failure),
        }
    }
}

/// Extension trait lifting any std `Result` onto the two tracks.
pub trait ResultExt<T, E> {
    /// Convert into an [`Outcome`], `Ok` to `Success` and `Err` to `Failure`.
    fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn into_outcome(self) -> Outcome<T, E> {
        self.into()
    }
}

/// Extension trait lifting any `Option` onto the two tracks.
pub trait OptionExt<T> {
    /// Convert into an [`Outcome`] with an eager failure payload for `None`.
    fn into_outcome_or<F>(self, when_absent: F) -> Outcome<T, F>;

    /// Convert into an [`Outcome`] with a lazily built failure payload.
    ///
    /// The producer does not run when the value is present.
    fn into_outcome_or_else<F>(self, when_absent: impl FnOnce() -> F) -> Outcome<T, F>;
}

impl<T> OptionExt<T> for Option<T> {
    fn into_outcome_or<F>(self, when_absent: F) -> Outcome<T, F> {
        Outcome::from_option(self, when_absent)
    }

    fn into_outcome_or_else<F>(self, when_absent: impl FnOnce() -> F) -> Outcome<T, F> {
        Outcome::from_option_else(self, when_absent)
    }
}
