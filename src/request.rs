use crate::constants::method;
use crate::error::ValidationError;
use url::Url;

/// The CORS-relevant parts of one inbound HTTP request.
///
/// Empty strings and an empty header list stand for headers the client did not send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    method: String,
    origin: String,
    request_method: String,
    request_headers: Vec<String>,
}

impl RequestDescriptor {
    pub fn new(method: impl Into<String>) -> Result<Self, ValidationError> {
        let mut request = Self {
            method: String::new(),
            origin: String::new(),
            request_method: String::new(),
            request_headers: Vec::new(),
        };
        request.set_method(method)?;
        Ok(request)
    }

    /// Shorthand for a preflight: `OPTIONS` with `Access-Control-Request-Method` set.
    pub fn preflight(
        origin: impl Into<String>,
        request_method: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::new(method::OPTIONS)?
            .with_origin(origin)?
            .with_request_method(request_method)
    }

    pub fn set_method(&mut self, value: impl Into<String>) -> Result<&mut Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::BlankMethod);
        }
        self.method = value;
        Ok(self)
    }

    /// Stores the origin verbatim once it parses as `scheme://host`.
    /// An empty value clears the origin.
    pub fn set_origin(&mut self, value: impl Into<String>) -> Result<&mut Self, ValidationError> {
        let value = value.into();
        if !value.is_empty() {
            check_origin(&value).map_err(|reason| ValidationError::InvalidOrigin {
                origin: value.clone(),
                reason,
            })?;
        }
        self.origin = value;
        Ok(self)
    }

    pub fn set_request_method(
        &mut self,
        value: impl Into<String>,
    ) -> Result<&mut Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::BlankRequestMethod);
        }
        self.request_method = value;
        Ok(self)
    }

    /// Empty names are kept; the engine rejects them as invalid header names.
    pub fn set_request_headers<I, S>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request_headers = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_method(mut self, value: impl Into<String>) -> Result<Self, ValidationError> {
        self.set_method(value)?;
        Ok(self)
    }

    pub fn with_origin(mut self, value: impl Into<String>) -> Result<Self, ValidationError> {
        self.set_origin(value)?;
        Ok(self)
    }

    pub fn with_request_method(
        mut self,
        value: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        self.set_request_method(value)?;
        Ok(self)
    }

    pub fn with_request_headers<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_request_headers(values);
        self
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn request_method(&self) -> &str {
        &self.request_method
    }

    pub fn request_headers(&self) -> &[String] {
        &self.request_headers
    }

    pub fn has_origin(&self) -> bool {
        !self.origin.is_empty()
    }

    pub fn has_request_method(&self) -> bool {
        !self.request_method.is_empty()
    }

    pub fn has_request_headers(&self) -> bool {
        !self.request_headers.is_empty()
    }

    pub fn is_preflight(&self) -> bool {
        self.method == method::OPTIONS && self.has_request_method()
    }
}

/// Succeeds when `value` parses as a URL with both a scheme and a host.
/// The raw text must also carry a literal `scheme://` prefix and no whitespace or
/// control characters.
pub(crate) fn check_origin(value: &str) -> Result<(), String> {
    if value
        .chars()
        .any(|ch| ch.is_whitespace() || ch.is_control())
    {
        return Err("contains whitespace or control characters".to_string());
    }
    let url = Url::parse(value).map_err(|err| err.to_string())?;
    let has_authority = !url.scheme().is_empty()
        && value
            .get(url.scheme().len()..)
            .is_some_and(|rest| rest.starts_with("://"));
    if !has_authority {
        return Err("expected scheme://host".to_string());
    }
    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err("missing host".to_string()),
    }
}

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;
