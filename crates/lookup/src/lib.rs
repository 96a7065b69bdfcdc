//! Resolves scanned payloads against the check-in service.
//!
//! Every call to `Lookup::resolve` produces a `LookupResult`; failures are
//! values, not errors, so the caller always has something to show.

mod config;
pub use config::*;

mod error;
pub use error::*;

mod http;
pub use http::*;

mod result;
pub use result::*;

/// Resolves one payload. One call, one outcome; nothing is cached.
pub trait Lookup: Send {
    fn resolve(&self, payload: &str) -> LookupResult;
}
