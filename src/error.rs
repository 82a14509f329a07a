use thiserror::Error;

/// Malformed input supplied while building a [`RequestDescriptor`](crate::RequestDescriptor).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("request method must not be blank")]
    BlankMethod,
    #[error("origin {origin:?} is not a valid scheme://host value: {reason}")]
    InvalidOrigin { origin: String, reason: String },
    #[error("Access-Control-Request-Method must not be blank")]
    BlankRequestMethod,
}

/// Invalid policy configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("allowed method {0:?} is not a valid HTTP token")]
    InvalidMethod(String),
    #[error("header name {0:?} is not a valid HTTP token")]
    InvalidHeader(String),
    #[error("allowed origin {0:?} must be \"*\" or a scheme://host value")]
    InvalidOrigin(String),
    #[error("allowCredentials value {0:?} is not a boolean")]
    InvalidFlag(String),
    #[error("maxAge value {0:?} is not a non-negative integer")]
    InvalidMaxAge(String),
}
