use {crate::*, base::Vec2};

#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub size: Vec2<usize>,
    pub data: Vec<u8>,
    pub format: PixelFormat,
}

impl Image {
    pub fn new(size: Vec2<usize>, data: Vec<u8>, format: PixelFormat) -> Self {
        Self { size, data, format }
    }

    /// A solid RGB8 image.
    pub fn filled(size: Vec2<usize>, color: [u8; 3]) -> Self {
        let data = color
            .iter()
            .copied()
            .cycle()
            .take(size.area() * 3)
            .collect();
        Self::new(size, data, PixelFormat::Rgb8)
    }

    /// Verify that the buffer length matches size and format.
    ///
    /// Compressed formats are only checked for being non-empty.
    pub fn check(&self) -> Result<(), ImageError> {
        match self.format.bytes_per_pixel() {
            Some(bpp) => {
                let expected = self.size.area() * bpp;
                if self.data.len() != expected {
                    return Err(ImageError::Format(format!(
                        "{:?} image of {} needs {} bytes, got {}",
                        self.format,
                        self.size,
                        expected,
                        self.data.len()
                    )));
                }
            }
            None => {
                if self.data.is_empty() {
                    return Err(ImageError::Format(format!(
                        "empty {:?} image",
                        self.format
                    )));
                }
            }
        }
        Ok(())
    }

    /// Pixel bytes at `point` for uncompressed formats.
    pub fn pixel(&self, point: Vec2<usize>) -> Option<&[u8]> {
        let bpp = self.format.bytes_per_pixel()?;
        if point.x >= self.size.x || point.y >= self.size.y {
            return None;
        }
        let offset = (point.y * self.size.x + point.x) * bpp;
        self.data.get(offset..offset + bpp)
    }

    /// Convert to interleaved RGB8, copying if already RGB8.
    pub fn to_rgb(&self) -> Result<Image, ImageError> {
        self.check()?;
        match self.format {
            PixelFormat::Rgb8 => Ok(self.clone()),
            PixelFormat::Luma8 => Ok(Image::new(
                self.size,
                self.data.iter().flat_map(|&y| [y, y, y]).collect(),
                PixelFormat::Rgb8,
            )),
            PixelFormat::Yuyv => Ok(Image::new(
                self.size,
                yuyv_to_rgb(self.size, &self.data)?,
                PixelFormat::Rgb8,
            )),
            PixelFormat::Jpeg => jpeg_to_rgb(self),
        }
    }

    /// Convert to 8-bit luma.
    pub fn to_luma(&self) -> Result<Image, ImageError> {
        self.check()?;
        match self.format {
            PixelFormat::Luma8 => Ok(self.clone()),
            PixelFormat::Rgb8 => Ok(Image::new(
                self.size,
                rgb_to_luma(&self.data),
                PixelFormat::Luma8,
            )),
            // Y already sits at every even byte of a YUYV buffer
            PixelFormat::Yuyv => Ok(Image::new(
                self.size,
                self.data.iter().step_by(2).copied().collect(),
                PixelFormat::Luma8,
            )),
            PixelFormat::Jpeg => jpeg_to_rgb(self)?.to_luma(),
        }
    }
}
