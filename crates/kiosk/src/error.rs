use std::fmt;

#[derive(Debug)]
pub enum KioskError {
    Video(video::VideoError),
    Lookup(lookup::LookupError),
    Config(String),
    Worker(String),
    /// The presentation surface went away; the scan loop stops.
    PresenterClosed,
    Surface(String),
    Io(std::io::Error),
}

impl fmt::Display for KioskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KioskError::Video(err) => write!(f, "video error: {err}"),
            KioskError::Lookup(err) => write!(f, "lookup error: {err}"),
            KioskError::Config(msg) => write!(f, "config error: {msg}"),
            KioskError::Worker(msg) => write!(f, "worker error: {msg}"),
            KioskError::PresenterClosed => write!(f, "presentation surface closed"),
            KioskError::Surface(msg) => write!(f, "surface error: {msg}"),
            KioskError::Io(err) => write!(f, "io error: {err}"),
        }
    }
}

impl std::error::Error for KioskError {}

impl From<video::VideoError> for KioskError {
    fn from(err: video::VideoError) -> Self {
        KioskError::Video(err)
    }
}

impl From<lookup::LookupError> for KioskError {
    fn from(err: lookup::LookupError) -> Self {
        KioskError::Lookup(err)
    }
}

impl From<std::io::Error> for KioskError {
    fn from(err: std::io::Error) -> Self {
        KioskError::Io(err)
    }
}
