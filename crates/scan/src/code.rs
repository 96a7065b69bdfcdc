use base::Vec2;

/// One fully decoded QR symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedCode {
    /// The symbol's text, exactly as encoded.
    pub payload: String,
    /// Outline in image coordinates, in detector order. Usually four
    /// corners; fewer when the detector only located part of the symbol.
    pub bounds: Vec<Vec2<i32>>,
}

impl DecodedCode {
    pub fn new(payload: impl Into<String>, bounds: Vec<Vec2<i32>>) -> Self {
        Self {
            payload: payload.into(),
            bounds,
        }
    }

    /// Whether the outline is a full quadrilateral.
    pub fn is_quad(&self) -> bool {
        self.bounds.len() == 4
    }
}
