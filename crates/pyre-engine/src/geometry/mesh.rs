/// Triangle mesh in CPU memory.
///
/// Invariants (upheld by the builders in this module):
/// - `positions.len() == normals.len()`
/// - every index is within bounds of `positions`
/// - `indices.len()` is a multiple of 3, counter-clockwise front faces
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new(positions: Vec<[f32; 3]>, normals: Vec<[f32; 3]>, indices: Vec<u32>) -> Self {
        debug_assert_eq!(positions.len(), normals.len());
        debug_assert_eq!(indices.len() % 3, 0);
        Self { positions, normals, indices }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Checks the index-bounds invariant. Intended for tests and debug
    /// validation of new builders.
    pub fn indices_in_bounds(&self) -> bool {
        let n = self.positions.len() as u32;
        self.indices.iter().all(|&i| i < n)
    }
}
