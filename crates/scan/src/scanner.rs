use {
    crate::*,
    base::Vec2,
    image::{Image, PixelFormat},
    std::borrow::Cow,
};

/// Finds codes in a frame. Implementations must not modify the frame.
pub trait Scanner: Send {
    fn scan(&self, image: &Image) -> Vec<DecodedCode>;
}

/// Scanner for QR symbols only; other barcode types are never recognized.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrScanner;

impl QrScanner {
    pub fn new() -> Self {
        Self
    }
}

impl Scanner for QrScanner {
    fn scan(&self, image: &Image) -> Vec<DecodedCode> {
        let luma = match image.format {
            PixelFormat::Luma8 => image.check().map(|_| Cow::Borrowed(image)),
            _ => image.to_luma().map(Cow::Owned),
        };
        let luma = match luma {
            Ok(luma) => luma,
            Err(error) => {
                log::warn!("scan: unusable frame: {}", error);
                return Vec::new();
            }
        };

        let width = luma.size.x;
        let data = &luma.data;
        let mut prepared =
            rqrr::PreparedImage::prepare_from_greyscale(width, luma.size.y, |x, y| {
                data[y * width + x]
            });

        let mut codes = Vec::new();
        for grid in prepared.detect_grids() {
            match grid.decode() {
                Ok((_meta, payload)) => {
                    let bounds = grid
                        .bounds
                        .iter()
                        .map(|p| Vec2::new(p.x, p.y))
                        .collect();
                    log::debug!("scan: decoded {:?}", payload);
                    codes.push(DecodedCode::new(payload, bounds));
                }
                // a symbol that does not decode cleanly is never reported
                Err(error) => log::debug!("scan: skipping undecodable symbol: {}", error),
            }
        }
        codes
    }
}
