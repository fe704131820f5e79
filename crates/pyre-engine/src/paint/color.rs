/// Straight-alpha RGBA color.
///
/// Channels are nominally in `[0, 1]` but are NOT clamped here: out-of-range
/// values are passed through to the graphics backend, which clamps per its
/// own semantics. The fire shader blends with straight alpha
/// (`SrcAlpha` / `OneMinusSrcAlpha`), so no premultiplication happens on the
/// CPU side.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn black() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 1.0 }
    }

    /// Creates a color from `0`–`255` channel values with alpha 1.
    ///
    /// Control-panel color triples use the byte range; the shader wants
    /// normalized floats. Inputs outside the byte range divide through
    /// unchanged (permissive by design of the control surface).
    #[inline]
    pub fn from_u8_triple(rgb: [f32; 3]) -> Self {
        Self {
            r: rgb[0] / 255.0,
            g: rgb[1] / 255.0,
            b: rgb[2] / 255.0,
            a: 1.0,
        }
    }

    /// Returns the color as a `vec4`-shaped array for uniform upload.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u8_triple_normalizes() {
        let c = Color::from_u8_triple([225.0, 150.0, 85.0]);
        assert!((c.r - 225.0 / 255.0).abs() < 1e-6);
        assert!((c.g - 150.0 / 255.0).abs() < 1e-6);
        assert!((c.b - 85.0 / 255.0).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn out_of_range_passes_through() {
        let c = Color::from_u8_triple([510.0, -255.0, 0.0]);
        assert!((c.r - 2.0).abs() < 1e-6);
        assert!((c.g + 1.0).abs() < 1e-6);
    }

    #[test]
    fn to_array_round_trips_channels() {
        let c = Color::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(c.to_array(), [0.1, 0.2, 0.3, 0.4]);
    }
}
