//! The optional-value container and its single error type.
//!
//! [`Maybe`] represents a computation or lookup result that may be absent.
//! It is a genuine tagged union (two variants, payload only in one), so
//! the invalid state "present but no payload" cannot be constructed. Both
//! variants are immutable after construction: nothing here mutates an
//! existing instance, and every transformation produces a new one.
//!
//! # The extraction ladder
//!
//! Call sites pick the rung matching how sure they are that a value exists:
//!
//! ```text
//! value_or(default)       total; substitutes a default, never fails
//! extract_into(&mut slot) total; writes into a caller slot, bool signals presence
//! value() / into_value()  fallible; Err(AbsentValueError) when absent
//! ```
//!
//! The fallible rung is the *only* failure path in the crate. It is a
//! contract violation surfaced exactly once per offending call: never
//! logged, never retried, never swallowed. Callers either rule it out
//! first ([`Maybe::is_present`] / [`Maybe::is_absent`]) or propagate the
//! error with `?` at a boundary of their choosing.
//!
//! # Equality
//!
//! Structural, via derived `PartialEq`: two absent values are equal, two
//! present values compare their payloads, and present never equals absent.
//! Comparing containers of different payload types is a compile error, so
//! no runtime rule is needed for that case.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Returned by [`Maybe::value`] and [`Maybe::into_value`] when the
/// container is absent.
///
/// Deliberately a unit struct: there is exactly one way to misuse the
/// unchecked extraction path, and the message names it without requiring
/// the caller to inspect anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("attempted to access value of an absent optional")]
pub struct AbsentValueError;

/// A value that may or may not be present.
///
/// Functions that can come up empty, like lookups and parse results,
/// return `Maybe<T>` instead of a sentinel or a flag-plus-value pair, and
/// use [`Maybe::absent`] as the canonical "no result" signal.
///
/// With the `serde` feature enabled, `Present(v)` serializes as `v` alone
/// and `Absent` as null, so a `Maybe` field is a drop-in for a nullable
/// field in consumer formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Maybe<T> {
    /// A value is present.
    Present(T),
    /// No value. Holds nothing, not even a stale payload.
    Absent,
}

impl<T> Maybe<T> {
    /// Wrap a value. Always succeeds.
    pub fn present(value: T) -> Self {
        Maybe::Present(value)
    }

    /// The empty container. The payload type must be supplied or
    /// inferable at the call site, since there is no value to infer it
    /// from: `Maybe::<u32>::absent()`.
    pub fn absent() -> Self {
        Maybe::Absent
    }

    /// True iff a value is present. Pure, total.
    pub fn is_present(&self) -> bool {
        matches!(self, Maybe::Present(_))
    }

    /// Logical negation of [`Maybe::is_present`]. Total.
    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Borrow the payload, or fail if absent.
    ///
    /// This is the unchecked extraction path: the caller asserts presence
    /// and gets [`AbsentValueError`] back when the assertion is wrong.
    /// Prefer [`Maybe::value_or`] or [`Maybe::extract_into`] when absence
    /// is an expected case rather than a bug.
    pub fn value(&self) -> Result<&T, AbsentValueError> {
        match self {
            Maybe::Present(v) => Ok(v),
            Maybe::Absent => Err(AbsentValueError),
        }
    }

    /// Take the payload out, or fail if absent.
    ///
    /// Consuming twin of [`Maybe::value`]: same contract, same error.
    pub fn into_value(self) -> Result<T, AbsentValueError> {
        match self {
            Maybe::Present(v) => Ok(v),
            Maybe::Absent => Err(AbsentValueError),
        }
    }

    /// The payload if present, otherwise `default`. Total.
    ///
    /// `default` is evaluated eagerly at the call site; there is no lazy
    /// variant because nothing in this crate defers work.
    pub fn value_or(self, default: T) -> T {
        match self {
            Maybe::Present(v) => v,
            Maybe::Absent => default,
        }
    }

    /// Borrow as a container of references, leaving the original intact.
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Present(v) => Maybe::Present(v),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Transform the payload. Absence passes through untouched.
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Present(v) => Maybe::Present(f(v)),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Chain a computation that itself may come up empty.
    pub fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Present(v) => f(v),
            Maybe::Absent => Maybe::Absent,
        }
    }
}

impl<T: Clone> Maybe<T> {
    /// Conditionally extract into a caller-owned slot.
    ///
    /// If present, writes a copy of the payload into `slot` and returns
    /// `true`. If absent, returns `false` and leaves `slot` exactly as it
    /// was, including any value it already held. Never fails: the bool is
    /// the sole signal.
    ///
    /// This lets one conditional both test presence and bind the value in
    /// the surrounding scope:
    ///
    /// ```text
    /// let mut title = None;
    /// if lookup(id).extract_into(&mut title) {
    ///     render(title.as_deref().unwrap_or_default());
    /// }
    /// ```
    ///
    /// The slot is any `&mut Option<T>`, typically one field of a caller
    /// struct. Which field to fill is chosen by the caller at the call
    /// site, and no other field can be touched.
    pub fn extract_into(&self, slot: &mut Option<T>) -> bool {
        match self {
            Maybe::Present(v) => {
                *slot = Some(v.clone());
                true
            }
            Maybe::Absent => false,
        }
    }
}

/// Defaults to [`Maybe::Absent`], with no bound on `T`.
impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::Absent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Construction and predicates
    // =========================================================================

    #[test]
    fn present_is_present() {
        let m = Maybe::present(5);
        assert!(m.is_present());
        assert!(!m.is_absent());
    }

    #[test]
    fn absent_is_absent() {
        let m = Maybe::<i32>::absent();
        assert!(m.is_absent());
        assert!(!m.is_present());
    }

    #[test]
    fn default_is_absent() {
        assert!(Maybe::<String>::default().is_absent());
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    #[test]
    fn into_value_round_trips_payload() {
        assert_eq!(Maybe::present(5).into_value(), Ok(5));
    }

    #[test]
    fn value_borrows_payload() {
        let m = Maybe::present("hello".to_string());
        assert_eq!(m.value(), Ok(&"hello".to_string()));
        // Still usable afterward.
        assert!(m.is_present());
    }

    #[test]
    fn into_value_on_absent_fails() {
        assert_eq!(Maybe::<i32>::absent().into_value(), Err(AbsentValueError));
    }

    #[test]
    fn value_on_absent_fails() {
        assert_eq!(Maybe::<i32>::absent().value(), Err(AbsentValueError));
    }

    #[test]
    fn absent_error_message_names_the_misuse() {
        let err = Maybe::<i32>::absent().into_value().unwrap_err();
        assert_eq!(
            err.to_string(),
            "attempted to access value of an absent optional"
        );
    }

    #[test]
    fn value_or_returns_payload_when_present() {
        assert_eq!(Maybe::present(5).value_or(42), 5);
    }

    #[test]
    fn value_or_returns_default_when_absent() {
        assert_eq!(Maybe::<i32>::absent().value_or(42), 42);
    }

    // =========================================================================
    // extract_into
    // =========================================================================

    #[test]
    fn extract_into_fills_slot_when_present() {
        let mut slot = None;
        assert!(Maybe::present(5).extract_into(&mut slot));
        assert_eq!(slot, Some(5));
    }

    #[test]
    fn extract_into_leaves_empty_slot_alone_when_absent() {
        let mut slot: Option<i32> = None;
        assert!(!Maybe::absent().extract_into(&mut slot));
        assert_eq!(slot, None);
    }

    #[test]
    fn extract_into_leaves_occupied_slot_alone_when_absent() {
        let mut slot = Some(7);
        assert!(!Maybe::<i32>::absent().extract_into(&mut slot));
        assert_eq!(slot, Some(7));
    }

    #[test]
    fn extract_into_overwrites_occupied_slot_when_present() {
        let mut slot = Some(7);
        assert!(Maybe::present(5).extract_into(&mut slot));
        assert_eq!(slot, Some(5));
    }

    #[test]
    fn extract_into_keeps_container_usable() {
        let m = Maybe::present("photo".to_string());
        let mut slot = None;
        assert!(m.extract_into(&mut slot));
        assert_eq!(m.value(), Ok(&"photo".to_string()));
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    #[test]
    fn as_ref_borrows_without_consuming() {
        let m = Maybe::present(5);
        assert_eq!(m.as_ref(), Maybe::Present(&5));
        assert_eq!(m, Maybe::Present(5));
    }

    #[test]
    fn as_ref_of_absent_is_absent() {
        assert_eq!(Maybe::<i32>::absent().as_ref(), Maybe::Absent);
    }

    #[test]
    fn map_applies_to_payload() {
        assert_eq!(Maybe::present(5).map(|n| n * 2), Maybe::Present(10));
    }

    #[test]
    fn map_passes_absence_through() {
        assert_eq!(Maybe::<i32>::absent().map(|n| n * 2), Maybe::Absent);
    }

    #[test]
    fn and_then_chains_presence() {
        let halve = |n: i32| {
            if n % 2 == 0 {
                Maybe::present(n / 2)
            } else {
                Maybe::absent()
            }
        };
        assert_eq!(Maybe::present(10).and_then(halve), Maybe::Present(5));
        assert_eq!(Maybe::present(5).and_then(halve), Maybe::Absent);
        assert_eq!(Maybe::<i32>::absent().and_then(halve), Maybe::Absent);
    }

    // =========================================================================
    // Equality
    // =========================================================================

    #[test]
    fn equal_payloads_compare_equal() {
        assert_eq!(Maybe::present(5), Maybe::present(5));
    }

    #[test]
    fn unequal_payloads_compare_unequal() {
        assert_ne!(Maybe::present(5), Maybe::present(6));
    }

    #[test]
    fn absent_equals_absent() {
        assert_eq!(Maybe::<i32>::absent(), Maybe::<i32>::absent());
    }

    #[test]
    fn present_never_equals_absent() {
        assert_ne!(Maybe::present(5), Maybe::absent());
        assert_ne!(Maybe::<i32>::absent(), Maybe::present(5));
    }
}
