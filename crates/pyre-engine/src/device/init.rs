/// Initialization parameters for the GPU layer.
///
/// Kept minimal: the demo needs a surface format choice and a present mode,
/// nothing else. Add flags only when a concrete backend requirement exists.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when available.
    pub prefer_srgb: bool,

    /// Present mode (swap behavior). FIFO is broadly supported and ties the
    /// frame cadence to the display refresh, which is what drives the
    /// animation loop.
    pub present_mode: wgpu::PresentMode,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
        }
    }
}
