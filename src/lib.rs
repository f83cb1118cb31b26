//! # Perhaps
//!
//! An optional-value container with explicit present and absent states.
//! Functions that can come up empty, like lookups and parse results,
//! return a [`Maybe`] instead of a sentinel value or a flag-plus-value
//! pair, and every call site says out loud how it handles absence.
//!
//! ```text
//! let title = coalesce([embedded_title(img), filename_title(img)]);
//!
//! let mut caption = None;
//! if title.extract_into(&mut caption) {
//!     // caption is Some(..) here, shared with the surrounding scope
//! }
//!
//! let shown = title.value_or("Untitled".to_string());
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`maybe`] | The [`Maybe`] container: construction, inspection, extraction, equality, and [`AbsentValueError`] |
//! | [`convert`] | Lossless `From` conversions to and from `Option` |
//! | [`resolve`] | [`coalesce`], a first-present-wins merge over prioritized candidates |
//!
//! # Design Decisions
//!
//! ## A Real Tagged Union
//!
//! `Maybe` is an enum with the payload inside the `Present` variant, not a
//! struct with a flag and a field. The state "claims present, holds
//! nothing" is therefore unrepresentable, and `match` forces call sites to
//! handle both states exhaustively.
//!
//! ## Errors as Values, One Error Only
//!
//! The single failure mode in the crate is unchecked extraction of an
//! absent value. It surfaces as a `Result` carrying [`AbsentValueError`]
//! rather than a panic, so misuse travels the same `?` rails as every
//! other error in a caller's program. All remaining operations are total:
//! [`Maybe::value_or`] substitutes a default, [`Maybe::extract_into`]
//! reports presence through its return value.
//!
//! ## Why Not Just `Option`?
//!
//! `Option` is the right tool inside Rust code, and [`convert`] makes the
//! two freely interchangeable. `Maybe` exists for API surfaces that want
//! absence handling to be loud: extraction never silently panics, the
//! default-substitution and slot-extraction forms are first-class named
//! operations, and with the `serde` feature the container reads and
//! writes like a nullable field (`Present(v)` ↔ `v`, `Absent` ↔ null)
//! for consumers migrating schemas away from raw nulls.

pub mod convert;
pub mod maybe;
pub mod resolve;

pub use maybe::{AbsentValueError, Maybe};
pub use resolve::coalesce;
