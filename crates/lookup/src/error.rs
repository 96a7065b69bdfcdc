use std::fmt;

/// Raised only while building a client; lookups themselves never fail.
#[derive(Debug)]
pub enum LookupError {
    Client(String),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::Client(msg) => write!(f, "http client error: {msg}"),
        }
    }
}

impl std::error::Error for LookupError {}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        LookupError::Client(err.to_string())
    }
}
