use crate::constants::header;
use crate::policy::Policy;
use crate::response::ResponseParameters;

pub(crate) struct HeaderBuilder<'a> {
    policy: &'a Policy,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(policy: &'a Policy) -> Self {
        Self { policy }
    }

    /// Echoes the concrete request origin, even under a wildcard policy.
    pub(crate) fn build_origin_header(&self, origin: &str) -> ResponseParameters {
        let mut params = ResponseParameters::new();
        params.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        params
    }

    pub(crate) fn build_credentials_header(&self) -> ResponseParameters {
        let mut params = ResponseParameters::new();
        if self.policy.can_grant_credentials() {
            params.insert(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }
        params
    }

    pub(crate) fn build_max_age_header(&self) -> ResponseParameters {
        let mut params = ResponseParameters::new();
        let max_age = self.policy.max_age();
        if max_age > 0 {
            params.insert(header::MAX_AGE, max_age.to_string());
        }
        params
    }

    pub(crate) fn build_methods_header(&self) -> ResponseParameters {
        let mut params = ResponseParameters::new();
        params.insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            self.policy.allow_methods().to_vec(),
        );
        params
    }

    pub(crate) fn build_allowed_headers(&self) -> ResponseParameters {
        let mut params = ResponseParameters::new();
        params.insert(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            self.policy.allow_headers().to_vec(),
        );
        params
    }

    pub(crate) fn build_exposed_headers(&self) -> ResponseParameters {
        let mut params = ResponseParameters::new();
        let exposed = self.policy.expose_headers();
        if !exposed.is_empty() {
            params.insert(header::ACCESS_CONTROL_EXPOSE_HEADERS, exposed.to_vec());
        }
        params
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
