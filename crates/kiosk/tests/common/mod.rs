#![allow(dead_code)]

use {
    base::Vec2,
    image::{Image, PixelFormat},
    kiosk::{KioskError, Presenter, PresenterEvent},
    lookup::{Lookup, LookupResult},
    scan::{DecodedCode, Scanner},
    std::{
        collections::VecDeque,
        sync::{Arc, Mutex},
    },
    video::{VideoError, VideoInConfig, VideoInDevice},
};

pub const FRAME_SIZE: Vec2<usize> = Vec2 { x: 16, y: 8 };

#[derive(Debug, Default)]
pub struct MockLog {
    pub opened: Vec<usize>,
    pub closes: usize,
    pub captures: usize,
}

/// A camera that opens only the listed indices. Scripted results are
/// served first, then gray frames forever.
pub struct MockDevice {
    available: Vec<usize>,
    script: VecDeque<Result<Image, VideoError>>,
    log: Arc<Mutex<MockLog>>,
}

impl MockDevice {
    pub fn new(available: Vec<usize>) -> (Self, Arc<Mutex<MockLog>>) {
        let log = Arc::new(Mutex::new(MockLog::default()));
        (
            Self {
                available,
                script: VecDeque::new(),
                log: Arc::clone(&log),
            },
            log,
        )
    }

    pub fn with_script(mut self, script: Vec<Result<Image, VideoError>>) -> Self {
        self.script = script.into();
        self
    }
}

impl VideoInDevice for MockDevice {
    fn open(&mut self, index: usize) -> Result<VideoInConfig, VideoError> {
        self.log.lock().unwrap().opened.push(index);
        if self.available.contains(&index) {
            Ok(VideoInConfig {
                index,
                size: FRAME_SIZE,
                format: PixelFormat::Rgb8,
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
        self.script.pop_front().unwrap_or_else(|| Ok(gray_frame()))
    }
}

pub fn gray_frame() -> Image {
    Image::filled(FRAME_SIZE, [128, 128, 128])
}

pub fn read_error() -> Result<Image, VideoError> {
    Err(VideoError::Read("select timeout".to_string()))
}

pub fn quad_code(payload: &str) -> DecodedCode {
    DecodedCode::new(
        payload,
        vec![
            Vec2::new(2, 1),
            Vec2::new(12, 1),
            Vec2::new(12, 6),
            Vec2::new(2, 6),
        ],
    )
}

/// Returns the scripted codes per frame, then nothing.
pub struct FakeScanner {
    frames: Mutex<VecDeque<Vec<DecodedCode>>>,
}

impl FakeScanner {
    pub fn new(frames: Vec<Vec<DecodedCode>>) -> Self {
        Self {
            frames: Mutex::new(frames.into()),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

impl Scanner for FakeScanner {
    fn scan(&self, _image: &Image) -> Vec<DecodedCode> {
        self.frames.lock().unwrap().pop_front().unwrap_or_default()
    }
}

/// Greets every payload by name and records what it was asked.
#[derive(Clone, Default)]
pub struct FakeLookup {
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl Lookup for FakeLookup {
    fn resolve(&self, payload: &str) -> LookupResult {
        self.calls.lock().unwrap().push(payload.to_string());
        if payload.starts_with("BAD") {
            return LookupResult::non_ok_status("HTTP 404 Not Found");
        }
        LookupResult::Success {
            display_name: format!("Alumno {}", payload),
            program_name: "Mecatrónica".to_string(),
        }
    }
}

/// Records every event; fails with `PresenterClosed` once `limit` events
/// have been accepted.
#[derive(Clone, Default)]
pub struct RecordingPresenter {
    pub events: Arc<Mutex<Vec<PresenterEvent>>>,
    pub limit: Option<usize>,
}

impl RecordingPresenter {
    pub fn closing_after(limit: usize) -> Self {
        Self {
            events: Arc::default(),
            limit: Some(limit),
        }
    }

    fn record(&mut self, event: PresenterEvent) -> Result<(), KioskError> {
        let mut events = self.events.lock().unwrap();
        if self.limit.is_some_and(|limit| events.len() >= limit) {
            return Err(KioskError::PresenterClosed);
        }
        events.push(event);
        Ok(())
    }

    pub fn messages(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|event| match event {
                PresenterEvent::Message(text) => Some(text.clone()),
                PresenterEvent::Preview(_) => None,
            })
            .collect()
    }

    pub fn previews(&self) -> usize {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|event| matches!(event, PresenterEvent::Preview(_)))
            .count()
    }
}

impl Presenter for RecordingPresenter {
    fn update_preview(&mut self, jpeg: Vec<u8>) -> Result<(), KioskError> {
        self.record(PresenterEvent::Preview(jpeg))
    }

    fn show_message(&mut self, text: String) -> Result<(), KioskError> {
        self.record(PresenterEvent::Message(text))
    }
}
