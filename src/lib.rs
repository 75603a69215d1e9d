//! Structured errors with key/value attributes, and bounded excerpts and
//! diffs of long strings for use in their messages.
//!
//! # Basic usage
//!
//! ```rust
//! use serr::{args, SError};
//!
//! let error = SError::new("unexpected document body")
//!     .args(args!["id", 7, "path", "/docs/7"]);
//!
//! let error = SError::wrap(error, "sync failed");
//!
//! assert_eq!(
//!     error.to_string(),
//!     "sync failed; unexpected document body [id=7] [path='/docs/7']",
//! );
//! ```
//!
//! # Excerpts and diffs
//!
//! ```rust
//! let expected = "{\"title\": \"draft\", \"body\": \"...\"}";
//! let actual = "{\"title\": \"final version\", \"body\": \"...\"}";
//!
//! let diff = serr::diff(expected, actual, 8);
//!
//! assert_eq!(diff.left, "draft");
//! assert_eq!(diff.right, "fina\u{2026}ion");
//! ```
//!
//! # Features
//!
//! - `simd` (default): SIMD accelerated char counting.
//! - `terminal` (default): colored [`Diff`] output with `{:#}`.
//! - `tracing` (default): [`SError::log()`] and render diagnostics.

#![deny(
    unused_qualifications,
    clippy::pedantic
)]
#![forbid(
    unsafe_code,
    anonymous_parameters,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_extern_crates,
    unused_import_braces,
    unused_results
)]
#![allow(
    clippy::inline_always,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::return_self_not_must_use
)]

#[macro_use]
mod macros;

pub mod error;
pub mod text;
mod util;

pub use self::error::{as_serror, Attr, BoxError, Plain, ResultExt, SError, Value};
pub use self::text::{diff, excerpt, excerpt_with_len, Diff, ELLIPSIS};
