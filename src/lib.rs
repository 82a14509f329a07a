//! Pure CORS decision engine.
//!
//! Build a [`Policy`] once, describe each inbound request with a [`RequestDescriptor`],
//! and ask [`process`] (or a [`Cors`] instance with a logger) for the
//! [`ResponseParameters`] to emit. An empty result means no CORS headers.
//!
//! ```
//! use cors_engine::{Policy, PolicyOptions, RequestDescriptor, process};
//!
//! let policy = Policy::new(PolicyOptions {
//!     allow_origins: vec!["http://example.com".into()],
//!     max_age: 3600,
//!     ..PolicyOptions::default()
//! })
//! .unwrap();
//! let request = RequestDescriptor::preflight("http://example.com", "GET").unwrap();
//!
//! let params = process(&policy, &request);
//! assert_eq!(
//!     params.header_pairs(),
//!     vec![
//!         ("access-control-allow-origin", "http://example.com".to_string()),
//!         ("max-age", "3600".to_string()),
//!     ]
//! );
//! ```

mod config;
pub mod constants;
mod cors;
mod error;
mod header_builder;
mod logger;
mod policy;
mod request;
mod response;
mod result;
mod util;

pub use config::{Flag, OneOrMany, PolicyConfig, Seconds};
pub use cors::{Cors, process};
pub use error::{ConfigError, ValidationError};
pub use logger::{CorsLogger, NoopLogger, TracingLogger};
pub use policy::{Policy, PolicyOptions};
pub use request::RequestDescriptor;
pub use response::{ParamValue, ResponseParameters};
pub use result::{CorsDecision, RejectionReason};
pub use util::{equals_exact, equals_ignore_case, is_http_token, normalize_lower};
