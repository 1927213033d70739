//! # Outcome Core
//!
//! A two-track outcome type for railway-oriented error handling: every
//! fallible value is explicitly an [`Outcome::Success`] or an
//! [`Outcome::Failure`], and combinators chain the happy path while
//! failures short-circuit through untouched.
//!
//! ## Laws
//!
//! - Exactly one variant, exactly one payload - enforced by the enum.
//! - Combinators are pure; the only side effects are the caller-supplied
//!   `tap` callbacks and the `_logged` conversions.
//! - Wrong-variant extraction is a caller bug and panics; domain failures
//!   are ordinary `Failure` payloads and never panic.
//!
//! ## Error Handling
//!
//! Use:
//! - `map`, `map_failure`, `and_then`, `fanout` for transformation
//! - `fold` to collapse the two tracks into a single value
//! - `tap`, `tap_success`, `tap_failure` for inline inspection
//! - `partition` to split a batch into its success and failure payloads

pub mod convert;
pub mod outcome;

pub use convert::{OptionExt, ResultExt};
pub use outcome::Outcome;
