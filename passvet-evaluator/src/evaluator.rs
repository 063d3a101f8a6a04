use passvet_breach_client::{BreachClient, BreachStatus, PasswordDigest};
use passvet_cache::FlightCache;
use serde::{Deserialize, Serialize};

use crate::config::{EvaluatorConfig, FailurePolicy};
use crate::crack_time::{CrackTimeBucket, classify_report};
use crate::error::Error;
use crate::scorer::{StrengthReport, StrengthScorer, ZxcvbnScorer};

/// Outcome of a single password evaluation.
///
/// An immutable snapshot of one evaluation instant: the crack-time bucket is
/// always derived from the strength report carried in the same value, and
/// results are never merged across calls. A degraded breach lookup shows up
/// as [`BreachStatus::Unknown`], so callers can tell a definitive "not
/// breached" from a lookup that did not complete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub strength: StrengthReport,
    pub breach: BreachStatus,
    pub crack_time: CrackTimeBucket,
}

/// Orchestrates strength scoring, breach lookup, and crack-time
/// classification into one [`EvaluationResult`].
///
/// Breach lookups go through a digest-keyed single-flight LRU cache, so
/// repeated or concurrent evaluations of the same password hit the network
/// once. The raw password is never retained; the cache key is the digest.
pub struct Evaluator<S = ZxcvbnScorer> {
    scorer: S,
    client: BreachClient,
    cache: FlightCache<String, BreachStatus>,
    policy: FailurePolicy,
}

impl Evaluator<ZxcvbnScorer> {
    /// Builds an evaluator with the default zxcvbn-backed scorer.
    pub fn new(config: EvaluatorConfig) -> Result<Self, Error> {
        Self::with_scorer(ZxcvbnScorer, config)
    }
}

impl<S: StrengthScorer> Evaluator<S> {
    /// Builds an evaluator around a caller-provided scorer.
    pub fn with_scorer(scorer: S, config: EvaluatorConfig) -> Result<Self, Error> {
        let client = BreachClient::new(config.breach)?;
        Ok(Self {
            scorer,
            client,
            cache: FlightCache::new(config.cache_capacity),
            policy: config.failure_policy,
        })
    }

    /// Evaluates a candidate password.
    ///
    /// Fails with [`Error::EmptyPassword`] for the empty string, before any
    /// hashing, scoring, or network I/O. Scorer failures propagate
    /// unchanged. A failed breach lookup either degrades to
    /// [`BreachStatus::Unknown`] or propagates, per the configured
    /// [`FailurePolicy`]; strength and crack-time are reported either way
    /// under the degrade policy.
    ///
    /// Dropping the returned future cancels an in-flight lookup.
    #[tracing::instrument(skip_all)]
    pub async fn evaluate(&self, password: &str) -> Result<EvaluationResult, Error> {
        if password.is_empty() {
            return Err(Error::EmptyPassword);
        }

        let strength = self.scorer.score(password)?;
        let breach = self.lookup(password).await?;
        let crack_time = classify_report(&strength);

        Ok(EvaluationResult {
            strength,
            breach,
            crack_time,
        })
    }

    /// Breach status for a password, through the cache.
    ///
    /// For callers that only need the exposure check. Applies the same input
    /// validation and failure policy as [`evaluate`](Self::evaluate).
    pub async fn check_breach(&self, password: &str) -> Result<BreachStatus, Error> {
        if password.is_empty() {
            return Err(Error::EmptyPassword);
        }
        self.lookup(password).await
    }

    async fn lookup(&self, password: &str) -> Result<BreachStatus, Error> {
        let digest = PasswordDigest::of(password);
        let key = digest.as_str().to_owned();

        let outcome = self
            .cache
            .get_or_try_compute(&key, || async { self.client.check(&digest).await })
            .await;

        match outcome {
            Ok(status) => Ok(status),
            Err(err) => match self.policy {
                FailurePolicy::DegradeToUnknown => {
                    tracing::warn!(
                        prefix = digest.prefix(),
                        error = %err,
                        "breach lookup failed, reporting unknown"
                    );
                    Ok(BreachStatus::Unknown)
                }
                FailurePolicy::Fail => Err(Error::Breach(err)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_password_is_rejected_before_any_work() {
        let evaluator = Evaluator::new(EvaluatorConfig::default()).unwrap();

        assert!(matches!(
            evaluator.evaluate("").await,
            Err(Error::EmptyPassword)
        ));
        assert!(matches!(
            evaluator.check_breach("").await,
            Err(Error::EmptyPassword)
        ));
    }

    #[test]
    fn empty_password_error_is_descriptive() {
        assert_eq!(Error::EmptyPassword.to_string(), "password must not be empty");
    }
}
