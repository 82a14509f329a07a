use crate::constants::{SIMPLE_HEADERS, SIMPLE_METHODS};
use crate::header_builder::HeaderBuilder;
use crate::logger::{CorsLogger, NoopLogger};
use crate::policy::Policy;
use crate::request::RequestDescriptor;
use crate::response::ResponseParameters;
use crate::result::{CorsDecision, RejectionReason};
use crate::util::{contains_exact, contains_ignore_case, is_http_token, subtract_ignore_case};
use std::fmt;
use std::sync::Arc;

/// Evaluates `request` against `policy` and returns the response parameters.
///
/// An empty result means the request was rejected.
pub fn process(policy: &Policy, request: &RequestDescriptor) -> ResponseParameters {
    Evaluator::new(policy, &NoopLogger)
        .evaluate(request)
        .into_parameters()
}

/// CORS decision engine bound to one policy and an optional logger.
#[derive(Clone)]
pub struct Cors {
    policy: Policy,
    logger: Arc<dyn CorsLogger>,
}

impl fmt::Debug for Cors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cors")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl Cors {
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            logger: Arc::new(NoopLogger),
        }
    }

    /// Routes rejection messages to `logger`. Results are unaffected.
    pub fn with_logger<L>(mut self, logger: L) -> Self
    where
        L: CorsLogger + 'static,
    {
        self.logger = Arc::new(logger);
        self
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    pub fn check(&self, request: &RequestDescriptor) -> CorsDecision {
        Evaluator::new(&self.policy, &*self.logger).evaluate(request)
    }

    pub fn process(&self, request: &RequestDescriptor) -> ResponseParameters {
        self.check(request).into_parameters()
    }
}

struct Evaluator<'a> {
    policy: &'a Policy,
    logger: &'a dyn CorsLogger,
}

impl<'a> Evaluator<'a> {
    fn new(policy: &'a Policy, logger: &'a dyn CorsLogger) -> Self {
        Self { policy, logger }
    }

    fn evaluate(&self, request: &RequestDescriptor) -> CorsDecision {
        let outcome = if request.is_preflight() {
            self.process_preflight(request).map(CorsDecision::Preflight)
        } else {
            self.process_actual(request).map(CorsDecision::Actual)
        };

        outcome.unwrap_or_else(|reason| {
            self.logger.info(&format!("CORS request rejected: {reason}"));
            CorsDecision::Rejected(reason)
        })
    }

    fn process_preflight(
        &self,
        request: &RequestDescriptor,
    ) -> Result<ResponseParameters, RejectionReason> {
        self.check_origin(request)?;

        let request_method = request.request_method();
        if !is_http_token(request_method) {
            return Err(RejectionReason::InvalidRequestMethod {
                method: request_method.to_string(),
            });
        }

        let requested_headers = request.request_headers();
        if let Some(invalid) = requested_headers
            .iter()
            .find(|header| !is_http_token(header))
        {
            return Err(RejectionReason::InvalidRequestHeader {
                header: invalid.clone(),
            });
        }

        let simple_method = is_simple_method(request_method);
        if !simple_method && !contains_exact(self.policy.allow_methods(), request_method) {
            return Err(RejectionReason::MethodNotAllowed {
                method: request_method.to_string(),
            });
        }

        let non_simple_headers = subtract_ignore_case(requested_headers, &SIMPLE_HEADERS);
        let denied: Vec<String> = non_simple_headers
            .iter()
            .filter(|header| !contains_ignore_case(self.policy.allow_headers(), header))
            .map(|header| header.to_string())
            .collect();
        if !denied.is_empty() {
            return Err(RejectionReason::HeadersNotAllowed { headers: denied });
        }

        let builder = HeaderBuilder::new(self.policy);
        let mut params = builder.build_origin_header(request.origin());
        params.extend(builder.build_credentials_header());
        params.extend(builder.build_max_age_header());
        if !simple_method {
            params.extend(builder.build_methods_header());
        }
        if !non_simple_headers.is_empty() {
            params.extend(builder.build_allowed_headers());
        }

        Ok(params)
    }

    fn process_actual(
        &self,
        request: &RequestDescriptor,
    ) -> Result<ResponseParameters, RejectionReason> {
        self.check_origin(request)?;

        let builder = HeaderBuilder::new(self.policy);
        let mut params = builder.build_origin_header(request.origin());
        params.extend(builder.build_credentials_header());
        params.extend(builder.build_exposed_headers());

        Ok(params)
    }

    fn check_origin(&self, request: &RequestDescriptor) -> Result<(), RejectionReason> {
        if !request.has_origin() {
            return Err(RejectionReason::MissingOrigin);
        }
        if !self.policy.allows_origin(request.origin()) {
            return Err(RejectionReason::OriginNotAllowed {
                origin: request.origin().to_string(),
            });
        }
        Ok(())
    }
}

fn is_simple_method(method: &str) -> bool {
    contains_exact(&SIMPLE_METHODS, method)
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
