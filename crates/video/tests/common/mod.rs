use {
    base::Vec2,
    image::{Image, PixelFormat},
    std::sync::{Arc, Mutex},
    video::{VideoError, VideoInConfig, VideoInDevice},
};

/// What a `MockDevice` was asked to do.
#[derive(Debug, Default)]
pub struct MockLog {
    pub opened: Vec<usize>,
    pub closes: usize,
    pub captures: usize,
}

/// A camera that opens only the listed indices and serves scripted frames.
pub struct MockDevice {
    pub available: Vec<usize>,
    pub frames: Vec<Result<Image, VideoError>>,
    pub log: Arc<Mutex<MockLog>>,
}

impl MockDevice {
    pub fn new(available: Vec<usize>) -> (Self, Arc<Mutex<MockLog>>) {
        let log = Arc::new(Mutex::new(MockLog::default()));
        (
            Self {
                available,
                frames: Vec::new(),
                log: Arc::clone(&log),
            },
            log,
        )
    }

    pub fn with_frames(mut self, frames: Vec<Result<Image, VideoError>>) -> Self {
        self.frames = frames;
        self
    }
}

impl VideoInDevice for MockDevice {
    fn open(&mut self, index: usize) -> Result<VideoInConfig, VideoError> {
        self.log.lock().unwrap().opened.push(index);
        if self.available.contains(&index) {
            Ok(VideoInConfig {
                index,
                size: Vec2::new(4, 2),
                format: PixelFormat::Yuyv,
                frame_rate: 30.0,
            })
        } else {
            Err(VideoError::Device(format!("/dev/video{} not found", index)))
        }
    }

    fn close(&mut self) {
        self.log.lock().unwrap().closes += 1;
    }

    fn blocking_capture(&mut self) -> Result<Image, VideoError> {
        self.log.lock().unwrap().captures += 1;
        if self.frames.is_empty() {
            return Ok(gray_yuyv());
        }
        self.frames.remove(0)
    }
}

pub fn gray_yuyv() -> Image {
    Image::new(Vec2::new(4, 2), vec![128; 16], PixelFormat::Yuyv)
}
