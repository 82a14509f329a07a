use cors_engine::constants::method;
use cors_engine::{Cors, CorsDecision, Policy, PolicyOptions, RequestDescriptor};

#[derive(Default)]
pub struct CorsBuilder {
    options: PolicyOptions,
}

impl CorsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.allow_origins = origins.into_iter().map(Into::into).collect();
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.allow_methods = methods.into_iter().map(Into::into).collect();
        self
    }

    pub fn allowed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.allow_headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn exposed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.expose_headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.options.allow_credentials = enabled;
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.options.max_age = seconds;
        self
    }

    pub fn policy(self) -> Policy {
        Policy::new(self.options).expect("valid CORS policy")
    }

    pub fn build(self) -> Cors {
        Cors::new(self.policy())
    }
}

pub struct ActualRequestBuilder {
    method: String,
    origin: Option<String>,
}

impl ActualRequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::GET.into(),
            origin: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn descriptor(self) -> RequestDescriptor {
        let mut request = RequestDescriptor::new(self.method).expect("valid method");
        if let Some(origin) = self.origin {
            request.set_origin(origin).expect("valid origin");
        }
        request
    }

    pub fn check(self, cors: &Cors) -> CorsDecision {
        cors.check(&self.descriptor())
    }
}

#[derive(Default)]
pub struct PreflightRequestBuilder {
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Vec<String>,
}

impl PreflightRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request_headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn descriptor(self) -> RequestDescriptor {
        let PreflightRequestBuilder {
            origin,
            request_method,
            request_headers,
        } = self;

        let mut request = RequestDescriptor::new(method::OPTIONS).expect("valid method");
        if let Some(origin) = origin {
            request.set_origin(origin).expect("valid origin");
        }
        request
            .set_request_method(request_method.unwrap_or_else(|| method::GET.into()))
            .expect("valid request method");
        request.set_request_headers(request_headers);
        request
    }

    pub fn check(self, cors: &Cors) -> CorsDecision {
        cors.check(&self.descriptor())
    }
}

pub fn cors() -> CorsBuilder {
    CorsBuilder::new()
}

pub fn actual_request() -> ActualRequestBuilder {
    ActualRequestBuilder::new()
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::new()
}
