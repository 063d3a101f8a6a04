//! Password vetting pipeline.
//!
//! One call evaluates a candidate password along three axes and returns them
//! as a single [`EvaluationResult`]:
//!
//! - **strength**: entropy-based score, warning, and suggestions from a
//!   [`StrengthScorer`] (by default the `zxcvbn` estimator);
//! - **breach exposure**: a privacy-preserving k-anonymity lookup against a
//!   Pwned Passwords range endpoint, through
//!   [`passvet-breach-client`](passvet_breach_client);
//! - **crack time**: the scorer's offline-slow-hashing estimate bucketed into
//!   a coarse [`CrackTimeBucket`].
//!
//! Breach lookups are memoized in a digest-keyed, bounded LRU cache with a
//! single-flight guarantee, so repeated and concurrent evaluations of the
//! same password reach the network once. A lookup failure never masquerades
//! as "not breached": depending on [`FailurePolicy`] it is reported as
//! [`BreachStatus::Unknown`] or propagated as an error, while strength and
//! crack-time remain available.
//!
//! # Example
//!
//! ```no_run
//! use passvet_evaluator::{Evaluator, EvaluatorConfig};
//!
//! # async fn demo() -> Result<(), passvet_evaluator::Error> {
//! let evaluator = Evaluator::new(EvaluatorConfig::default())?;
//! let result = evaluator.evaluate("hunter2").await?;
//! println!(
//!     "score {}/4, breach {:?}, crack time {}",
//!     result.strength.score, result.breach, result.crack_time
//! );
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod crack_time;
pub mod error;
pub mod evaluator;
pub mod scorer;

pub use config::{DEFAULT_CACHE_CAPACITY, EvaluatorConfig, FailurePolicy};
pub use crack_time::{CrackTimeBucket, OFFLINE_SLOW_HASHING_KEY, classify, classify_report};
pub use error::Error;
pub use evaluator::{EvaluationResult, Evaluator};
pub use scorer::{StrengthReport, StrengthScorer, ZxcvbnScorer};

pub use passvet_breach_client::{
    BreachClient, BreachClientConfig, BreachStatus, PasswordDigest,
};
