use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scorer::StrengthReport;

/// Attack model used for bucket classification: offline cracking against a
/// slow hash at 10^4 guesses per second.
pub const OFFLINE_SLOW_HASHING_KEY: &str = "offline_slow_hashing_1e4_per_second";

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3_600.0;
const DAY: f64 = 86_400.0;
const YEAR: f64 = 31_536_000.0;

/// Coarse resistance bucket for a crack-time estimate.
///
/// Ordered by increasing resistance. `Unavailable` marks a missing estimate
/// rather than a time value and sorts below every concrete bucket.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CrackTimeBucket {
    Unavailable,
    Instant,
    Minutes,
    Hours,
    Days,
    Centuries,
}

impl fmt::Display for CrackTimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CrackTimeBucket::Unavailable => "unavailable",
            CrackTimeBucket::Instant => "instant",
            CrackTimeBucket::Minutes => "minutes",
            CrackTimeBucket::Hours => "hours",
            CrackTimeBucket::Days => "days",
            CrackTimeBucket::Centuries => "centuries",
        };
        f.write_str(label)
    }
}

/// Buckets a seconds-to-crack estimate.
///
/// Intervals are half-open with the lower bound inclusive: exactly 60
/// seconds is `Minutes`, not `Instant`. `None`, NaN, and negative values
/// classify as `Unavailable`.
pub fn classify(seconds: Option<f64>) -> CrackTimeBucket {
    let Some(secs) = seconds else {
        return CrackTimeBucket::Unavailable;
    };
    if secs.is_nan() || secs < 0.0 {
        return CrackTimeBucket::Unavailable;
    }

    if secs < MINUTE {
        CrackTimeBucket::Instant
    } else if secs < HOUR {
        CrackTimeBucket::Minutes
    } else if secs < DAY {
        CrackTimeBucket::Hours
    } else if secs < YEAR {
        CrackTimeBucket::Days
    } else {
        CrackTimeBucket::Centuries
    }
}

/// Classifies the offline-slow-hashing estimate of a strength report. A
/// report without that attack model yields `Unavailable`.
pub fn classify_report(report: &StrengthReport) -> CrackTimeBucket {
    classify(
        report
            .crack_times_seconds
            .get(OFFLINE_SLOW_HASHING_KEY)
            .copied(),
    )
}
