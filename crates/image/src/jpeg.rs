use {
    crate::*,
    base::Vec2,
    crates_image::{ExtendedColorType, ImageEncoder, codecs::jpeg::JpegEncoder},
};

/// Encode an image as JPEG.
///
/// RGB8 and luma images are encoded directly; YUYV is converted to RGB8
/// first; JPEG input is returned unchanged.
pub fn encode_jpeg(image: &Image, quality: u8) -> Result<Vec<u8>, ImageError> {
    image.check()?;
    let (data, color_type) = match image.format {
        PixelFormat::Rgb8 => (image.data.as_slice(), ExtendedColorType::Rgb8),
        PixelFormat::Luma8 => (image.data.as_slice(), ExtendedColorType::L8),
        PixelFormat::Yuyv => return encode_jpeg(&image.to_rgb()?, quality),
        PixelFormat::Jpeg => return Ok(image.data.clone()),
    };

    let mut buffer = Vec::new();
    JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100))
        .write_image(
            data,
            image.size.x as u32,
            image.size.y as u32,
            color_type,
        )
        .map_err(|e| ImageError::Encode(e.to_string()))?;
    Ok(buffer)
}

/// Decode JPEG bytes into an RGB8 image.
pub fn decode_jpeg(data: &[u8]) -> Result<Image, ImageError> {
    let decoded = crates_image::load_from_memory_with_format(data, crates_image::ImageFormat::Jpeg)
        .map_err(|e| ImageError::Decode(format!("Failed to decode JPEG: {}", e)))?;
    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok(Image::new(
        Vec2::new(width as usize, height as usize),
        rgb.into_raw(),
        PixelFormat::Rgb8,
    ))
}
