//! Camera frame source for the kiosk.
//!
//! `VideoIn` binds one camera (probing a small range of device indices),
//! hands out RGB8 frames on demand and releases the device when dropped.
//! Backends implement `VideoInDevice`.

mod error;
pub use error::*;

mod videoframe;
pub use videoframe::*;

mod videoin;
pub use videoin::*;
