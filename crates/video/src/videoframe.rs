use image::Image;

#[derive(Debug, Clone)]
pub struct VideoFrame {
    /// Always interleaved RGB8.
    pub color: Image,
    /// Counts successful captures since the device was bound, starting at 1.
    pub sequence: u64,
}
