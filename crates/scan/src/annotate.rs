use {
    crate::*,
    image::{Image, ImageError, draw_polygon},
};

pub const ANNOTATION_COLOR: [u8; 3] = [0, 255, 0];
pub const ANNOTATION_THICKNESS: u32 = 2;

/// Return an RGB8 copy of `image` with a closed outline around every code
/// that has a four-point outline. Codes with partial outlines are left
/// undrawn. `image` itself is untouched.
pub fn annotate(image: &Image, codes: &[DecodedCode]) -> Result<Image, ImageError> {
    let mut annotated = image.to_rgb()?;
    for code in codes.iter().filter(|code| code.is_quad()) {
        draw_polygon(
            &mut annotated,
            &code.bounds,
            ANNOTATION_COLOR,
            ANNOTATION_THICKNESS,
        )?;
    }
    Ok(annotated)
}
