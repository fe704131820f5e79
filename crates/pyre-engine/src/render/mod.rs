//! GPU rendering subsystem.
//!
//! The renderer consumes CPU meshes uploaded as [`GpuMesh`] and issues draw
//! calls via wgpu. Uniform values flow through a name-keyed staging block
//! ([`UniformSet`]) owned by the [`ShaderProgram`], so frame code writes
//! `set_float("u_Freq", ..)` without knowing buffer offsets.

mod ctx;
mod mesh;
mod mesh_renderer;
mod program;
mod uniforms;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::{GpuMesh, Vertex};
pub use mesh_renderer::MeshRenderer;
pub use program::{fire_program, ShaderProgram};
pub use uniforms::{UniformKind, UniformLayout, UniformSet, TIME_UNIFORM};
