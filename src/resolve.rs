//! First-present-wins resolution over an ordered list of candidates.
//!
//! Callers that consult several fallible sources in priority order (a
//! user override, then an embedded value, then a derived fallback) want
//! the first source that actually produced something:
//!
//! ```text
//! title:       coalesce([override_title, embedded_title, derived_title])
//! description: coalesce([sidecar_text, embedded_caption])
//! ```
//!
//! Each source returns a [`Maybe`] and stays ignorant of the others; the
//! priority lives in one place, the order of the list.

use crate::maybe::Maybe;

/// Return the first present candidate, or absent when none is.
///
/// Candidates after the first present one are not inspected. An empty
/// input resolves to absent. Total; never fails.
pub fn coalesce<T, I>(candidates: I) -> Maybe<T>
where
    I: IntoIterator<Item = Maybe<T>>,
{
    candidates
        .into_iter()
        .find(Maybe::is_present)
        .unwrap_or(Maybe::Absent)
}
