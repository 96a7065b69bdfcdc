use {
    crate::*,
    base::Vec2,
    image::{Image, PixelFormat},
    std::ops::Range,
};

/// Device indices probed when the caller does not name any.
pub const DEFAULT_PROBE_INDICES: Range<usize> = 0..4;

/// Settings a backend actually negotiated when opening a device.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoInConfig {
    pub index: usize,
    pub size: Vec2<usize>,
    pub format: PixelFormat,
    pub frame_rate: f32,
}

/// A camera backend.
///
/// `open` and `blocking_capture` are always called from the same thread,
/// some drivers care about that.
pub trait VideoInDevice: Send {
    /// Open the device at `index`, returning the settings that were applied.
    fn open(&mut self, index: usize) -> Result<VideoInConfig, VideoError>;
    /// Close the device, if open. Must be safe to call repeatedly.
    fn close(&mut self);
    /// Block until the next raw frame is available.
    fn blocking_capture(&mut self) -> Result<Image, VideoError>;
}

/// An open camera. The device is closed when this is dropped.
pub struct VideoIn {
    device: Box<dyn VideoInDevice>,
    config: VideoInConfig,
    sequence: u64,
}

impl VideoIn {
    /// Bind the camera at `index`.
    pub fn open(mut device: Box<dyn VideoInDevice>, index: usize) -> Result<Self, VideoError> {
        let config = device.open(index)?;
        Ok(Self::bound(device, config))
    }

    /// Bind the first camera in `indices` that opens.
    ///
    /// Indices are tried in order. If none opens the result is
    /// `VideoError::NoDeviceAvailable` and nothing was captured.
    pub fn probe(
        mut device: Box<dyn VideoInDevice>,
        indices: impl IntoIterator<Item = usize>,
    ) -> Result<Self, VideoError> {
        let mut tried = Vec::new();
        for index in indices {
            tried.push(index);
            match device.open(index) {
                Ok(config) => return Ok(Self::bound(device, config)),
                Err(error) => {
                    log::debug!("camera {} unavailable: {}", index, error);
                    device.close();
                }
            }
        }
        log::error!("no camera opened, tried {:?}", tried);
        Err(VideoError::NoDeviceAvailable { tried })
    }

    fn bound(device: Box<dyn VideoInDevice>, config: VideoInConfig) -> Self {
        log::info!(
            "camera {} open: {} {:?} @ {} fps",
            config.index,
            config.size,
            config.format,
            config.frame_rate
        );
        Self {
            device,
            config,
            sequence: 0,
        }
    }

    pub fn config(&self) -> &VideoInConfig {
        &self.config
    }

    pub fn index(&self) -> usize {
        self.config.index
    }

    /// Capture the next frame as RGB8.
    ///
    /// Every failure, including a frame that does not convert, is reported
    /// as `VideoError::Read` so the caller can simply try again.
    pub fn capture(&mut self) -> Result<VideoFrame, VideoError> {
        let raw = self.device.blocking_capture().map_err(|error| match error {
            VideoError::Read(msg) => VideoError::Read(msg),
            other => VideoError::Read(other.to_string()),
        })?;
        let color = raw.to_rgb()?;
        self.sequence += 1;
        Ok(VideoFrame {
            color,
            sequence: self.sequence,
        })
    }

    /// Close and reopen the bound index.
    ///
    /// On failure the device stays closed and later captures fail with
    /// `VideoError::Read` until a reopen succeeds.
    pub fn reopen(&mut self) -> Result<(), VideoError> {
        log::info!("camera {}: reopening", self.config.index);
        self.device.close();
        self.config = self.device.open(self.config.index)?;
        Ok(())
    }
}

impl Drop for VideoIn {
    fn drop(&mut self) {
        log::info!("camera {}: closing", self.config.index);
        self.device.close();
    }
}

/// The camera backend compiled into this build.
pub fn default_device() -> Result<Box<dyn VideoInDevice>, VideoError> {
    #[cfg(feature = "v4l2")]
    {
        Ok(Box::new(v4l2::V4l2::new(v4l2::V4l2Config::default())))
    }
    #[cfg(not(feature = "v4l2"))]
    {
        Err(VideoError::Device(
            "no camera backend compiled in (enable the v4l2 feature)".to_string(),
        ))
    }
}

#[cfg(feature = "v4l2")]
pub mod v4l2;
