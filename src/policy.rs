use crate::constants::WILDCARD;
use crate::error::ConfigError;
use crate::request::check_origin;
use crate::util::{contains_exact, is_http_token};

/// Raw policy settings. Validated by [`Policy::new`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyOptions {
    pub allow_methods: Vec<String>,
    pub allow_headers: Vec<String>,
    pub allow_origins: Vec<String>,
    pub allow_credentials: bool,
    pub expose_headers: Vec<String>,
    /// Seconds; `0` disables the max-age directive.
    pub max_age: u64,
}

/// Immutable CORS rules for a protected resource.
///
/// The default policy allows nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Policy {
    options: PolicyOptions,
}

impl Policy {
    pub fn new(options: PolicyOptions) -> Result<Self, ConfigError> {
        options.validate()?;

        if options.allow_credentials && is_wildcard(&options.allow_origins) {
            tracing::warn!(
                "allowCredentials is ignored while allowOrigins is [\"*\"]; credentials are never granted to a wildcard origin"
            );
        }

        Ok(Self { options })
    }

    pub fn allow_methods(&self) -> &[String] {
        &self.options.allow_methods
    }

    pub fn allow_headers(&self) -> &[String] {
        &self.options.allow_headers
    }

    pub fn allow_origins(&self) -> &[String] {
        &self.options.allow_origins
    }

    pub fn allow_credentials(&self) -> bool {
        self.options.allow_credentials
    }

    pub fn expose_headers(&self) -> &[String] {
        &self.options.expose_headers
    }

    pub fn max_age(&self) -> u64 {
        self.options.max_age
    }

    /// True only when the allowed origins are exactly `["*"]`.
    ///
    /// A list that mixes `*` with concrete origins is not a wildcard.
    pub fn allows_any_origin(&self) -> bool {
        is_wildcard(&self.options.allow_origins)
    }

    pub fn allows_origin(&self, origin: &str) -> bool {
        self.allows_any_origin() || contains_exact(&self.options.allow_origins, origin)
    }

    pub fn can_grant_credentials(&self) -> bool {
        self.options.allow_credentials && !self.allows_any_origin()
    }

    pub fn options(&self) -> &PolicyOptions {
        &self.options
    }
}

impl TryFrom<PolicyOptions> for Policy {
    type Error = ConfigError;

    fn try_from(options: PolicyOptions) -> Result<Self, Self::Error> {
        Self::new(options)
    }
}

impl PolicyOptions {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(method) = self
            .allow_methods
            .iter()
            .find(|method| !is_http_token(method))
        {
            return Err(ConfigError::InvalidMethod(method.clone()));
        }

        if let Some(header) = self
            .allow_headers
            .iter()
            .chain(&self.expose_headers)
            .find(|header| !is_http_token(header))
        {
            return Err(ConfigError::InvalidHeader(header.clone()));
        }

        if let Some(origin) = self
            .allow_origins
            .iter()
            .find(|origin| origin.as_str() != WILDCARD && check_origin(origin).is_err())
        {
            return Err(ConfigError::InvalidOrigin(origin.clone()));
        }

        Ok(())
    }
}

fn is_wildcard(origins: &[String]) -> bool {
    matches!(origins, [only] if only == WILDCARD)
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
