/// Drawable surface size in physical pixels.
///
/// The camera derives its aspect ratio from this; renderers use it to size
/// the depth buffer to the swapchain.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Width / height. Callers should check [`is_valid`](Self::is_valid)
    /// first; a zero-height viewport yields a non-finite ratio.
    #[inline]
    pub fn aspect_ratio(self) -> f32 {
        self.width / self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_ratio_of_800_by_600() {
        let vp = Viewport::new(800.0, 600.0);
        assert!(vp.is_valid());
        assert!((vp.aspect_ratio() - 800.0 / 600.0).abs() < 1e-6);
    }

    #[test]
    fn zero_size_is_invalid() {
        assert!(!Viewport::new(0.0, 600.0).is_valid());
        assert!(!Viewport::new(800.0, 0.0).is_valid());
    }
}
