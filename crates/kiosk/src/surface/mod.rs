//! Presentation surfaces that drain the worker's `PresenterEvent`s.

use {
    base::Vec2,
    image::{Image, ImageError, draw_polygon},
    std::{
        collections::VecDeque,
        time::{Duration, Instant},
    },
};

pub mod headless;

#[cfg(feature = "window")]
pub mod window;

/// What a surface received before its channel closed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceStats {
    pub previews: usize,
    pub messages: usize,
}

/// Messages waiting to be shown, one at a time, each for `dismiss_after`.
///
/// Time is passed in by the caller so the board never sleeps.
pub struct MessageBoard {
    queue: VecDeque<String>,
    current: Option<(String, Instant)>,
    dismiss_after: Duration,
}

impl MessageBoard {
    pub fn new(dismiss_after: Duration) -> Self {
        Self {
            queue: VecDeque::new(),
            current: None,
            dismiss_after,
        }
    }

    pub fn push(&mut self, text: String) {
        self.queue.push_back(text);
    }

    /// Number of messages not yet shown.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// The message on screen at `now`, if any.
    pub fn current(&mut self, now: Instant) -> Option<&str> {
        if let Some((_, shown_at)) = &self.current {
            if now.saturating_duration_since(*shown_at) >= self.dismiss_after {
                self.current = None;
            }
        }
        if self.current.is_none() {
            if let Some(text) = self.queue.pop_front() {
                self.current = Some((text, now));
            }
        }
        self.current.as_ref().map(|(text, _)| text.as_str())
    }
}

pub const HIGHLIGHT_COLOR: [u8; 3] = [255, 196, 0];
pub const HIGHLIGHT_THICKNESS: u32 = 12;

/// Draw a thick border around an RGB8 frame, marking that a message is up.
pub fn highlight(image: &mut Image) -> Result<(), ImageError> {
    if image.size.x == 0 || image.size.y == 0 {
        return Ok(());
    }
    // the brush reaches `near` pixels up/left of its center and `far` down/right
    let near = (HIGHLIGHT_THICKNESS / 2) as i32;
    let far = HIGHLIGHT_THICKNESS as i32 - 1 - near;
    let right = image.size.x as i32 - 1 - far;
    let bottom = image.size.y as i32 - 1 - far;
    draw_polygon(
        image,
        &[
            Vec2::new(near, near),
            Vec2::new(right, near),
            Vec2::new(right, bottom),
            Vec2::new(near, bottom),
        ],
        HIGHLIGHT_COLOR,
        HIGHLIGHT_THICKNESS,
    )
}
