use std::fmt;

#[derive(Debug)]
pub enum VideoError {
    /// None of the probed device indices could be opened.
    NoDeviceAvailable { tried: Vec<usize> },
    Device(String),
    /// A frame could not be read or converted; the caller may retry.
    Read(String),
}

impl fmt::Display for VideoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoError::NoDeviceAvailable { tried } => {
                write!(f, "no camera available (tried indices {:?})", tried)
            }
            VideoError::Device(msg) => write!(f, "device error: {msg}"),
            VideoError::Read(msg) => write!(f, "read error: {msg}"),
        }
    }
}

impl std::error::Error for VideoError {}

impl From<std::io::Error> for VideoError {
    fn from(err: std::io::Error) -> Self {
        VideoError::Device(err.to_string())
    }
}

impl From<image::ImageError> for VideoError {
    fn from(err: image::ImageError) -> Self {
        VideoError::Read(err.to_string())
    }
}
