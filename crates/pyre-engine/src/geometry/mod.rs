//! CPU-side mesh building.
//!
//! Builders produce plain vertex/index data; uploading to the GPU is the
//! renderer's job (`render::GpuMesh`). All builders emit counter-clockwise
//! front faces and per-vertex normals.

mod error;
mod icosphere;
mod mesh;
mod primitives;

pub use error::GeometryError;
pub use icosphere::{icosphere, MAX_SUBDIVISION_LEVEL};
pub use mesh::Mesh;
pub use primitives::{cube, square};
