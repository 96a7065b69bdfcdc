//! In-memory frames for the kiosk pipeline.
//!
//! An `Image` is a size, a pixel format and the raw bytes. Camera formats
//! (YUYV, MJPEG) are converted to interleaved RGB8 before anything else
//! looks at them; the scanner works on 8-bit luma.

mod draw;
pub use draw::*;

mod error;
pub use error::*;

mod image;
pub use image::*;

mod jpeg;
pub use jpeg::*;

mod pixelformat;
pub use pixelformat::*;

mod rgb;
pub use rgb::*;

mod u32;
pub use u32::*;
