//! QR code detection on camera frames.
//!
//! `QrScanner` reports every QR symbol it can fully decode in a frame;
//! `annotate` draws their outlines onto a copy for the live preview.

mod annotate;
pub use annotate::*;

mod code;
pub use code::*;

mod scanner;
pub use scanner::*;
