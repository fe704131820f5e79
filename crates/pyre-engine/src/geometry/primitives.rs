use glam::Vec3;

use super::Mesh;

/// Unit square in the XY plane, facing +Z.
pub fn square(center: Vec3) -> Mesh {
    let c = center;
    let positions = vec![
        [c.x - 0.5, c.y - 0.5, c.z],
        [c.x + 0.5, c.y - 0.5, c.z],
        [c.x + 0.5, c.y + 0.5, c.z],
        [c.x - 0.5, c.y + 0.5, c.z],
    ];
    let normals = vec![[0.0, 0.0, 1.0]; 4];
    let indices = vec![0, 1, 2, 0, 2, 3];

    Mesh::new(positions, normals, indices)
}

/// Unit cube with per-face normals (24 vertices, 12 triangles).
pub fn cube(center: Vec3) -> Mesh {
    // One entry per face: (normal, four corners CCW from outside).
    let faces: [(Vec3, [Vec3; 4]); 6] = [
        (
            Vec3::X,
            [
                Vec3::new(0.5, -0.5, 0.5),
                Vec3::new(0.5, -0.5, -0.5),
                Vec3::new(0.5, 0.5, -0.5),
                Vec3::new(0.5, 0.5, 0.5),
            ],
        ),
        (
            Vec3::NEG_X,
            [
                Vec3::new(-0.5, -0.5, -0.5),
                Vec3::new(-0.5, -0.5, 0.5),
                Vec3::new(-0.5, 0.5, 0.5),
                Vec3::new(-0.5, 0.5, -0.5),
            ],
        ),
        (
            Vec3::Y,
            [
                Vec3::new(-0.5, 0.5, 0.5),
                Vec3::new(0.5, 0.5, 0.5),
                Vec3::new(0.5, 0.5, -0.5),
                Vec3::new(-0.5, 0.5, -0.5),
            ],
        ),
        (
            Vec3::NEG_Y,
            [
                Vec3::new(-0.5, -0.5, -0.5),
                Vec3::new(0.5, -0.5, -0.5),
                Vec3::new(0.5, -0.5, 0.5),
                Vec3::new(-0.5, -0.5, 0.5),
            ],
        ),
        (
            Vec3::Z,
            [
                Vec3::new(-0.5, -0.5, 0.5),
                Vec3::new(0.5, -0.5, 0.5),
                Vec3::new(0.5, 0.5, 0.5),
                Vec3::new(-0.5, 0.5, 0.5),
            ],
        ),
        (
            Vec3::NEG_Z,
            [
                Vec3::new(0.5, -0.5, -0.5),
                Vec3::new(-0.5, -0.5, -0.5),
                Vec3::new(-0.5, 0.5, -0.5),
                Vec3::new(0.5, 0.5, -0.5),
            ],
        ),
    ];

    let mut positions = Vec::with_capacity(24);
    let mut normals = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);

    for (normal, corners) in faces {
        let base = positions.len() as u32;
        for corner in corners {
            positions.push((center + corner).to_array());
            normals.push(normal.to_array());
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    Mesh::new(positions, normals, indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_is_two_triangles() {
        let mesh = square(Vec3::ZERO);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert!(mesh.indices_in_bounds());
    }

    #[test]
    fn cube_has_per_face_normals() {
        let mesh = cube(Vec3::ZERO);
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.triangle_count(), 12);
        assert!(mesh.indices_in_bounds());
    }

    #[test]
    fn cube_faces_wind_outward() {
        let mesh = cube(Vec3::ZERO);
        for tri in mesh.indices.chunks_exact(3) {
            let a = Vec3::from_array(mesh.positions[tri[0] as usize]);
            let b = Vec3::from_array(mesh.positions[tri[1] as usize]);
            let c = Vec3::from_array(mesh.positions[tri[2] as usize]);
            let face_normal = (b - a).cross(c - a);
            let declared = Vec3::from_array(mesh.normals[tri[0] as usize]);
            assert!(face_normal.dot(declared) > 0.0);
        }
    }

    #[test]
    fn square_is_centered() {
        let mesh = square(Vec3::new(2.0, 3.0, -1.0));
        let sum: Vec3 = mesh
            .positions
            .iter()
            .map(|p| Vec3::from_array(*p))
            .sum();
        let centroid = sum / mesh.vertex_count() as f32;
        assert!((centroid - Vec3::new(2.0, 3.0, -1.0)).length() < 1e-6);
    }
}
