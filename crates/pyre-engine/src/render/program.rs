use glam::Mat4;

use super::uniforms::{UniformLayout, UniformSet};
use super::RenderCtx;

/// A compiled shader pair plus its uniform block.
///
/// The WGSL source carries both entry points (`vs_main` / `fs_main`).
/// Uniform values are staged CPU-side through the typed setters and uploaded
/// in one `write_buffer` per frame by [`upload`](Self::upload). GPU objects
/// are created lazily on first use; WGSL validation failure at module
/// creation is fatal for the program and surfaces naga's diagnostic through
/// wgpu's error reporting.
pub struct ShaderProgram {
    label: &'static str,
    source: &'static str,
    uniforms: UniformSet,

    module: Option<wgpu::ShaderModule>,
    bind_group_layout: Option<wgpu::BindGroupLayout>,
    ubo: Option<wgpu::Buffer>,
    bind_group: Option<wgpu::BindGroup>,
}

impl ShaderProgram {
    pub fn new(label: &'static str, source: &'static str, layout: UniformLayout) -> Self {
        Self {
            label,
            source,
            uniforms: UniformSet::new(layout),
            module: None,
            bind_group_layout: None,
            ubo: None,
            bind_group: None,
        }
    }

    // ── uniform setters ───────────────────────────────────────────────────

    pub fn set_float(&mut self, name: &str, value: f32) {
        self.uniforms.set_float(name, value);
    }

    pub fn set_vec4(&mut self, name: &str, value: [f32; 4]) {
        self.uniforms.set_vec4(name, value);
    }

    pub fn set_mat4(&mut self, name: &str, value: Mat4) {
        self.uniforms.set_mat4(name, value);
    }

    pub fn set_time(&mut self, value: f32) {
        self.uniforms.set_time(value);
    }

    // ── GPU plumbing ──────────────────────────────────────────────────────

    /// Creates module, uniform buffer, and bind group on first use.
    pub fn ensure(&mut self, ctx: &RenderCtx<'_>) {
        if self.module.is_some() && self.bind_group.is_some() {
            return;
        }

        let module = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(self.label),
            source: wgpu::ShaderSource::Wgsl(self.source.into()),
        });

        let block_size = self.uniforms.layout().size() as u64;
        let bind_group_layout =
            ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some(self.label),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: std::num::NonZeroU64::new(block_size),
                    },
                    count: None,
                }],
            });

        let ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(self.label),
            size: block_size,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(self.label),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.as_entire_binding(),
            }],
        });

        self.module = Some(module);
        self.bind_group_layout = Some(bind_group_layout);
        self.ubo = Some(ubo);
        self.bind_group = Some(bind_group);
    }

    /// Uploads the staged uniform block.
    pub fn upload(&self, ctx: &RenderCtx<'_>) {
        let Some(ubo) = self.ubo.as_ref() else { return };
        ctx.queue.write_buffer(ubo, 0, self.uniforms.as_bytes());
    }

    pub fn module(&self) -> Option<&wgpu::ShaderModule> {
        self.module.as_ref()
    }

    pub fn bind_group_layout(&self) -> Option<&wgpu::BindGroupLayout> {
        self.bind_group_layout.as_ref()
    }

    pub fn bind_group(&self) -> Option<&wgpu::BindGroup> {
        self.bind_group.as_ref()
    }
}

/// Builds the fire surface program with its uniform block declared in the
/// same field order as the WGSL struct in `shaders/fire.wgsl`.
pub fn fire_program() -> ShaderProgram {
    let layout = UniformLayout::builder()
        .mat4("u_ViewProj")
        .vec4("u_Color")
        .vec4("u_InnerCol")
        .vec4("u_OuterCol")
        .float("u_Time")
        .float("u_Freq")
        .float("u_Speed")
        .float("u_Detail")
        .float("u_VoronoiScale")
        .build();

    ShaderProgram::new("pyre fire shader", include_str!("shaders/fire.wgsl"), layout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fire_layout_matches_wgsl_struct() {
        let program = fire_program();
        let layout = program.uniforms.layout();
        assert_eq!(layout.offset_of("u_ViewProj"), Some(0));
        assert_eq!(layout.offset_of("u_Color"), Some(64));
        assert_eq!(layout.offset_of("u_InnerCol"), Some(80));
        assert_eq!(layout.offset_of("u_OuterCol"), Some(96));
        assert_eq!(layout.offset_of("u_Time"), Some(112));
        assert_eq!(layout.offset_of("u_Freq"), Some(116));
        assert_eq!(layout.offset_of("u_Speed"), Some(120));
        assert_eq!(layout.offset_of("u_Detail"), Some(124));
        assert_eq!(layout.offset_of("u_VoronoiScale"), Some(128));
        // 132 rounded up to 16 — matches WGSL struct size.
        assert_eq!(layout.size(), 144);
    }

    #[test]
    fn setters_tolerate_omitted_uniforms() {
        let mut program = fire_program();
        program.set_float("u_NotDeclared", 1.0);
        program.set_time(3.0);
    }
}
