use crate::response::ResponseParameters;
use std::fmt;

/// Outcome of evaluating one request against a policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    /// Accepted preflight.
    Preflight(ResponseParameters),
    /// Accepted actual (non-preflight) request.
    Actual(ResponseParameters),
    /// Rejected request. The client gets no CORS headers; this is not an error.
    Rejected(RejectionReason),
}

impl CorsDecision {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    pub fn parameters(&self) -> Option<&ResponseParameters> {
        match self {
            Self::Preflight(params) | Self::Actual(params) => Some(params),
            Self::Rejected(_) => None,
        }
    }

    /// Response parameters; empty when rejected.
    pub fn into_parameters(self) -> ResponseParameters {
        match self {
            Self::Preflight(params) | Self::Actual(params) => params,
            Self::Rejected(_) => ResponseParameters::new(),
        }
    }
}

/// Why a request received no CORS headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    MissingOrigin,
    OriginNotAllowed { origin: String },
    InvalidRequestMethod { method: String },
    InvalidRequestHeader { header: String },
    MethodNotAllowed { method: String },
    HeadersNotAllowed { headers: Vec<String> },
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingOrigin => write!(f, "request carries no Origin header"),
            Self::OriginNotAllowed { origin } => {
                write!(f, "origin {origin:?} is not allowed")
            }
            Self::InvalidRequestMethod { method } => write!(
                f,
                "Access-Control-Request-Method {method:?} is not a valid HTTP token"
            ),
            Self::InvalidRequestHeader { header } => write!(
                f,
                "Access-Control-Request-Headers entry {header:?} is not a valid header name"
            ),
            Self::MethodNotAllowed { method } => {
                write!(f, "method {method:?} is not allowed")
            }
            Self::HeadersNotAllowed { headers } => {
                write!(f, "headers [{}] are not allowed", headers.join(", "))
            }
        }
    }
}
