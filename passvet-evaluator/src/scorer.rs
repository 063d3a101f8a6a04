use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use zxcvbn::Score;
use zxcvbn::time_estimates::CrackTimeSeconds;

use crate::error::Error;

/// Structured strength assessment produced by a [`StrengthScorer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthReport {
    /// Ordinal strength score, 0 (weakest) through 4 (strongest).
    pub score: u8,
    /// Scorer warning about the dominant weakness, when one applies.
    pub warning: Option<String>,
    /// Improvement suggestions, in the scorer's order.
    pub suggestions: Vec<String>,
    /// Estimated seconds to crack, keyed by attack-model identifier.
    pub crack_times_seconds: HashMap<String, f64>,
}

/// Boundary to the external strength-scoring algorithm.
///
/// Implementations must be deterministic for a given password. A scorer
/// failure fails the whole evaluation; the pipeline never degrades it.
pub trait StrengthScorer: Send + Sync {
    fn score(&self, password: &str) -> Result<StrengthReport, Error>;
}

/// [`StrengthScorer`] backed by the `zxcvbn` entropy estimator.
///
/// Exposes all four crack-time scenarios zxcvbn models, under the same keys
/// zxcvbn uses for them.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZxcvbnScorer;

impl StrengthScorer for ZxcvbnScorer {
    fn score(&self, password: &str) -> Result<StrengthReport, Error> {
        let entropy = zxcvbn::zxcvbn(password, &[]);
        let crack_times = entropy.crack_times();

        let mut crack_times_seconds = HashMap::with_capacity(4);
        crack_times_seconds.insert(
            "online_throttling_100_per_hour".to_string(),
            to_seconds(crack_times.online_throttling_100_per_hour()),
        );
        crack_times_seconds.insert(
            "online_no_throttling_10_per_second".to_string(),
            to_seconds(crack_times.online_no_throttling_10_per_second()),
        );
        crack_times_seconds.insert(
            "offline_slow_hashing_1e4_per_second".to_string(),
            to_seconds(crack_times.offline_slow_hashing_1e4_per_second()),
        );
        crack_times_seconds.insert(
            "offline_fast_hashing_1e10_per_second".to_string(),
            to_seconds(crack_times.offline_fast_hashing_1e10_per_second()),
        );

        let (warning, suggestions) = match entropy.feedback() {
            Some(feedback) => (
                feedback.warning().map(|w| w.to_string()),
                feedback
                    .suggestions()
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            ),
            None => (None, Vec::new()),
        };

        Ok(StrengthReport {
            score: ordinal(entropy.score()),
            warning,
            suggestions,
            crack_times_seconds,
        })
    }
}

fn ordinal(score: Score) -> u8 {
    match score {
        Score::Zero => 0,
        Score::One => 1,
        Score::Two => 2,
        Score::Three => 3,
        Score::Four => 4,
        _ => 4,
    }
}

fn to_seconds(estimate: CrackTimeSeconds) -> f64 {
    match estimate {
        CrackTimeSeconds::Integer(secs) => secs as f64,
        CrackTimeSeconds::Float(secs) => secs,
    }
}
