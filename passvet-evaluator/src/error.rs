#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Rejected before any hashing, scoring, or network I/O.
    #[error("password must not be empty")]
    EmptyPassword,

    /// Breach lookup failed and the configured policy propagates failures.
    #[error("breach lookup failed: {0}")]
    Breach(#[from] passvet_breach_client::Error),

    /// The external strength scorer failed; passed through unchanged.
    #[error("strength scorer failed: {0}")]
    Scorer(#[source] Box<dyn std::error::Error + Send + Sync>),
}
