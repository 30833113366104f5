//! Error types for region-dist

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Network Errors ===
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("PD returned {status} for {url}")]
    Api { status: u16, url: String },

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    // === Decoding Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // === Config Errors ===
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // === Shell Errors ===
    #[error("Parse command error: {0}")]
    Command(#[from] shell_words::ParseError),
}

impl Error {
    /// Is this a transient transport failure worth retrying by the caller?
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(e) => e.is_timeout() || e.is_connect(),
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_retryable() {
        let server = Error::Api {
            status: 503,
            url: "http://pd/pd/api/v1/regions".into(),
        };
        assert!(server.is_retryable());

        let client = Error::Api {
            status: 404,
            url: "http://pd/pd/api/v1/regions".into(),
        };
        assert!(!client.is_retryable());
        assert!(!Error::InvalidConfig("x".into()).is_retryable());
    }

    #[test]
    fn test_display() {
        let err = Error::Api {
            status: 500,
            url: "http://pd/x".into(),
        };
        assert_eq!(err.to_string(), "PD returned 500 for http://pd/x");

        let err = Error::from(shell_words::split("region 'print").unwrap_err());
        assert!(err.to_string().starts_with("Parse command error"));
        assert!(!err.is_retryable());
    }
}
