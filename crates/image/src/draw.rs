use {crate::*, base::Vec2};

/// Draw a straight line into an RGB8 image.
///
/// `thickness` is the side of the square brush stamped at every step.
/// Parts of the line outside the image are clipped.
pub fn draw_line(
    image: &mut Image,
    from: Vec2<i32>,
    to: Vec2<i32>,
    color: [u8; 3],
    thickness: u32,
) -> Result<(), ImageError> {
    image.format.ensure_format(PixelFormat::Rgb8)?;
    image.check()?;

    // Bresenham
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };
    let mut error = dx + dy;
    let mut p = from;
    loop {
        stamp(image, p, color, thickness);
        if p == to {
            break;
        }
        let e2 = 2 * error;
        if e2 >= dy {
            error += dy;
            p.x += sx;
        }
        if e2 <= dx {
            error += dx;
            p.y += sy;
        }
    }
    Ok(())
}

/// Draw a closed polygon outline through `points` into an RGB8 image.
pub fn draw_polygon(
    image: &mut Image,
    points: &[Vec2<i32>],
    color: [u8; 3],
    thickness: u32,
) -> Result<(), ImageError> {
    for (i, &from) in points.iter().enumerate() {
        let to = points[(i + 1) % points.len()];
        draw_line(image, from, to, color, thickness)?;
    }
    Ok(())
}

fn stamp(image: &mut Image, center: Vec2<i32>, color: [u8; 3], thickness: u32) {
    let thickness = thickness.max(1) as i32;
    let start = -(thickness / 2);
    for oy in start..start + thickness {
        for ox in start..start + thickness {
            let p = Vec2::new(center.x + ox, center.y + oy);
            if image.size.contains(p) {
                let offset = (p.y as usize * image.size.x + p.x as usize) * 3;
                image.data[offset..offset + 3].copy_from_slice(&color);
            }
        }
    }
}
