//! Checks whether a password appears in known credential breaches without
//! revealing it to the lookup service.
//!
//! The client speaks the Pwned Passwords range protocol: the password is
//! hashed with SHA-1 and rendered as 40 uppercase hex characters, the first
//! [`PREFIX_LEN`] characters are sent to `{base_url}/range/{prefix}`, and the
//! service answers with every known hash suffix sharing that prefix, one
//! `SUFFIX:COUNT` record per line. The remaining [`SUFFIX_LEN`] characters are
//! compared against those records locally, so the service never sees enough of
//! the digest to identify the password (k-anonymity).
//!
//! # Privacy
//!
//! Only the 5-character prefix ever leaves the process. Neither the raw
//! password nor the full digest is logged, transmitted, or persisted;
//! [`PasswordDigest`]'s `Debug` output is truncated to the prefix for the same
//! reason.
//!
//! # Failure semantics
//!
//! A lookup that cannot complete is an [`Error`], never
//! [`BreachStatus::NotFound`]. Callers decide whether to surface the error or
//! degrade to [`BreachStatus::Unknown`]; collapsing a failed lookup into "not
//! breached" is exactly the bug this split prevents.

pub mod client;
pub mod digest;
pub mod error;

pub use client::{BreachClient, BreachClientConfig, BreachStatus};
pub use digest::PasswordDigest;
pub use error::Error;

/// Length of a SHA-1 digest in uppercase hex characters.
pub const DIGEST_LEN: usize = 40;

/// Length of the range-query prefix (5 hex characters).
pub const PREFIX_LEN: usize = 5;

/// Length of the locally matched suffix.
pub const SUFFIX_LEN: usize = DIGEST_LEN - PREFIX_LEN;
