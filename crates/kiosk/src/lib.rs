//! The kiosk's scan loop and presentation plumbing.
//!
//! A `ScanWorker` owns the camera on a dedicated thread and runs
//! capture, scan, lookup and preview in a loop. It talks to whatever shows
//! things on screen only through a `Presenter`.

mod config;
pub use config::*;

mod error;
pub use error::*;

mod presenter;
pub use presenter::*;

mod scanloop;
pub use scanloop::*;

pub mod surface;
