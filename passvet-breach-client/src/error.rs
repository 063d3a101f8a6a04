#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("range request failed for prefix {prefix}: {source}")]
    HttpRequest {
        prefix: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("range endpoint returned HTTP {status} for prefix {prefix}")]
    HttpStatus { prefix: String, status: u16 },

    #[error("lookup gave up after {attempts} attempts for prefix {prefix}")]
    AttemptsExhausted { prefix: String, attempts: u32 },
}
