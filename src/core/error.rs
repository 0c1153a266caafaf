use reqwest::StatusCode;
use std::io;
use thiserror::Error;

/// Unified error type for the inference probe
#[derive(Error, Debug)]
pub enum ProbeError {
    /// Transport failures (connect, DNS, timeout, body read)
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// Endpoint answered with a non-2xx status
    #[error("API returned error status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Response parsed but does not have the expected shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid header value: {0}")]
    InvalidHeader(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO-related errors
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl ProbeError {
    pub fn is_transport(&self) -> bool {
        matches!(self, ProbeError::Network { .. })
    }

    pub fn is_status(&self) -> bool {
        matches!(self, ProbeError::Status { .. })
    }
}

impl From<reqwest::Error> for ProbeError {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            "Request timed out".to_string()
        } else if err.is_connect() {
            "Connection failed".to_string()
        } else if err.is_builder() {
            "Failed to build request".to_string()
        } else {
            "Request failed".to_string()
        };
        ProbeError::Network {
            message,
            source: err,
        }
    }
}

impl From<serde_json::Error> for ProbeError {
    fn from(err: serde_json::Error) -> Self {
        ProbeError::Serialization(format!("JSON error: {}", err))
    }
}

impl From<serde_yml::Error> for ProbeError {
    fn from(err: serde_yml::Error) -> Self {
        ProbeError::Serialization(format!("YAML error: {}", err))
    }
}

impl From<reqwest::header::InvalidHeaderValue> for ProbeError {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        ProbeError::InvalidHeader(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_not_transport() {
        let err = ProbeError::Status {
            status: StatusCode::SERVICE_UNAVAILABLE,
            body: "loading".to_string(),
        };
        assert!(err.is_status());
        assert!(!err.is_transport());
        assert_eq!(
            err.to_string(),
            "API returned error status 503 Service Unavailable: loading"
        );
    }

    #[test]
    fn json_errors_become_serialization() {
        let err: ProbeError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, ProbeError::Serialization(_)));
        assert!(!err.is_transport());
    }
}
