pub mod header {
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "access-control-allow-origin";
    pub const ACCESS_CONTROL_ALLOW_METHODS: &str = "access-control-allow-methods";
    pub const ACCESS_CONTROL_ALLOW_HEADERS: &str = "access-control-allow-headers";
    pub const ACCESS_CONTROL_ALLOW_CREDENTIALS: &str = "access-control-allow-credentials";
    pub const ACCESS_CONTROL_EXPOSE_HEADERS: &str = "access-control-expose-headers";
    /// Cacheability directive. Emitted under this key, not `access-control-max-age`.
    pub const MAX_AGE: &str = "max-age";
    pub const ORIGIN: &str = "Origin";
}

pub mod method {
    pub const DELETE: &str = "DELETE";
    pub const GET: &str = "GET";
    pub const HEAD: &str = "HEAD";
    pub const OPTIONS: &str = "OPTIONS";
    pub const PATCH: &str = "PATCH";
    pub const POST: &str = "POST";
    pub const PUT: &str = "PUT";
}

/// Literal allowed-origins entry meaning "any origin".
pub const WILDCARD: &str = "*";

/// Methods that never need to be listed in `allowMethods`. Compared case-sensitively.
pub const SIMPLE_METHODS: [&str; 3] = [method::GET, method::HEAD, method::POST];

/// Request headers exempt from the allow-list check. Compared case-insensitively.
///
/// `Origin` is not a simple header in every revision of the CORS specification, but
/// some browsers always list it on non-simple requests.
pub const SIMPLE_HEADERS: [&str; 4] = [
    "Accept",
    "Accept-Language",
    "Content-Language",
    header::ORIGIN,
];
