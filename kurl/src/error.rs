use thiserror::Error;

/// A unified error type for this library.
#[derive(Debug, Error)]
pub enum KurlError {
    /// A pattern handed to one of the matching helpers did not compile.
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The rendered request could not be parsed as an absolute URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A header name or value was rejected by the `http` crate.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// Parameters could not be serialized into `key=value` pairs.
    #[error("Parameter encoding error: {0}")]
    Encoding(#[from] serde_urlencoded::ser::Error),

    /// Encoded parameters could not be read back into pairs.
    #[error("Parameter decoding error: {0}")]
    Decoding(#[from] serde_urlencoded::de::Error),

    /// An `ensure_*` check did not hold for the rendered URL.
    #[error("Check failed for {url}: expected it to {expectation}")]
    CheckFailed {
        url: String,
        expectation: String,
    },
}

pub type Result<T> = std::result::Result<T, KurlError>;

impl KurlError {
    pub fn invalid_header(msg: impl Into<String>) -> Self {
        KurlError::InvalidHeader(msg.into())
    }

    pub(crate) fn check_failed(url: impl Into<String>, expectation: impl Into<String>) -> Self {
        KurlError::CheckFailed {
            url: url.into(),
            expectation: expectation.into(),
        }
    }
}
