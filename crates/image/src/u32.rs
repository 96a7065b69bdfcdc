use crate::*;

fn pack_u32(r: u8, g: u8, b: u8) -> u32 {
    0xFF00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Pack an image into 0xAARRGGBB words, the layout framebuffer windows expect.
pub fn image_to_u32(image: &Image) -> Result<Vec<u32>, ImageError> {
    let rgb = image.to_rgb()?;
    Ok(rgb
        .data
        .chunks_exact(3)
        .map(|c| pack_u32(c[0], c[1], c[2]))
        .collect())
}
