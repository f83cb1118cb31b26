//! Lossless interop with the standard library's `Option`.
//!
//! [`Maybe`] and `Option` carry the same information, so conversion is a
//! plain variant rename in both directions: `Some` ↔ `Present`, `None` ↔
//! `Absent`. This keeps the crate usable at boundaries that speak
//! `Option` (iterator adapters, combinator chains, third-party APIs)
//! without hand-written match blocks at every seam.

use crate::maybe::Maybe;

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Maybe::Present(v),
            None => Maybe::Absent,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        match value {
            Maybe::Present(v) => Some(v),
            Maybe::Absent => None,
        }
    }
}
