use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum MfError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The data received upstream was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// A return calculation was asked to annualise against a zero or negative
    /// initial investment (zero months or a non-positive monthly amount).
    #[error("initial investment must be positive")]
    ZeroInvestment,

    /// The market-value-to-investment ratio was not positive, so the
    /// fractional-exponent compounding formula is undefined.
    #[error("cannot annualise a non-positive growth ratio")]
    NonPositiveGrowth,
}
