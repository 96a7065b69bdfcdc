use {crate::*, base::Vec2};

pub fn yuyv_to_rgb(size: Vec2<usize>, data: &[u8]) -> Result<Vec<u8>, ImageError> {
    let pixel_count = size.area();
    if size.x % 2 != 0 || data.len() < pixel_count * 2 {
        return Err(ImageError::Decode(format!(
            "YUYV frame of {} needs an even width and {} bytes, got {}",
            size,
            pixel_count * 2,
            data.len()
        )));
    }

    let mut rgb = Vec::with_capacity(pixel_count * 3);
    for chunk in data[..pixel_count * 2].chunks_exact(4) {
        let (r0, g0, b0) = yuv_to_rgb(chunk[0], chunk[1], chunk[3]);
        let (r1, g1, b1) = yuv_to_rgb(chunk[2], chunk[1], chunk[3]);
        rgb.extend_from_slice(&[r0, g0, b0, r1, g1, b1]);
    }
    Ok(rgb)
}

pub fn rgb_to_luma(data: &[u8]) -> Vec<u8> {
    data.chunks_exact(3)
        .map(|c| rgb_to_y(c[0], c[1], c[2]))
        .collect()
}

pub fn jpeg_to_rgb(image: &Image) -> Result<Image, ImageError> {
    image.format.ensure_format(PixelFormat::Jpeg)?;
    decode_jpeg(&image.data)
}
