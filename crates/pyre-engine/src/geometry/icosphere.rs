use std::collections::HashMap;

use glam::Vec3;

use super::{GeometryError, Mesh};

/// Maximum supported subdivision level.
///
/// Level 8 is the top of the control-panel slider and already produces
/// 20 · 4⁸ = 1,310,720 triangles; levels beyond that quadruple geometry for
/// no visible gain.
pub const MAX_SUBDIVISION_LEVEL: u32 = 8;

// Golden ratio; the 12 icosahedron vertices are the cyclic permutations of
// (±1, ±φ, 0), normalized onto the unit sphere.
const PHI: f32 = 1.618_034;

const BASE_VERTICES: [[f32; 3]; 12] = [
    [-1.0, PHI, 0.0],
    [1.0, PHI, 0.0],
    [-1.0, -PHI, 0.0],
    [1.0, -PHI, 0.0],
    [0.0, -1.0, PHI],
    [0.0, 1.0, PHI],
    [0.0, -1.0, -PHI],
    [0.0, 1.0, -PHI],
    [PHI, 0.0, -1.0],
    [PHI, 0.0, 1.0],
    [-PHI, 0.0, -1.0],
    [-PHI, 0.0, 1.0],
];

// 20 faces, counter-clockwise when viewed from outside.
const BASE_FACES: [[u32; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Builds a sphere approximation by recursively subdividing an icosahedron.
///
/// Each subdivision pass replaces every triangle (A, B, C) with four
/// triangles through the re-projected edge midpoints. Midpoints shared by
/// adjacent triangles are deduplicated, so level N yields exactly
/// `10 · 4^N + 2` vertices and `20 · 4^N` triangles, every vertex at
/// distance `radius` from `center`.
///
/// Level 0 returns the base icosahedron. Levels above
/// [`MAX_SUBDIVISION_LEVEL`] and non-finite or non-positive radii are
/// rejected; no partial mesh is returned.
pub fn icosphere(center: Vec3, radius: f32, level: u32) -> Result<Mesh, GeometryError> {
    if !(radius.is_finite() && radius > 0.0) {
        return Err(GeometryError::InvalidRadius { radius });
    }
    if level > MAX_SUBDIVISION_LEVEL {
        return Err(GeometryError::LevelOutOfRange { level, max: MAX_SUBDIVISION_LEVEL });
    }

    let mut positions: Vec<Vec3> = BASE_VERTICES
        .iter()
        .map(|v| center + Vec3::from_array(*v).normalize() * radius)
        .collect();
    let mut faces: Vec<[u32; 3]> = BASE_FACES.to_vec();

    for _ in 0..level {
        // Midpoints are shared between the two triangles of each edge; the
        // cache is keyed by the unordered vertex-index pair.
        let mut midpoints: HashMap<(u32, u32), u32> = HashMap::new();
        let mut next = Vec::with_capacity(faces.len() * 4);

        for [a, b, c] in faces {
            let ab = midpoint(&mut positions, &mut midpoints, center, radius, a, b);
            let bc = midpoint(&mut positions, &mut midpoints, center, radius, b, c);
            let ca = midpoint(&mut positions, &mut midpoints, center, radius, c, a);

            next.push([a, ab, ca]);
            next.push([ab, b, bc]);
            next.push([ca, bc, c]);
            next.push([ab, bc, ca]);
        }

        faces = next;
    }

    let normals = positions
        .iter()
        .map(|p| (*p - center).normalize().to_array())
        .collect();
    let positions = positions.iter().map(|p| p.to_array()).collect();
    let indices = faces.iter().flatten().copied().collect();

    Ok(Mesh::new(positions, normals, indices))
}

/// Returns the index of the midpoint of edge (i, j), re-projected onto the
/// sphere, inserting a new vertex on first sight of the edge.
fn midpoint(
    positions: &mut Vec<Vec3>,
    cache: &mut HashMap<(u32, u32), u32>,
    center: Vec3,
    radius: f32,
    i: u32,
    j: u32,
) -> u32 {
    let key = if i < j { (i, j) } else { (j, i) };
    if let Some(&idx) = cache.get(&key) {
        return idx;
    }

    let mid = (positions[i as usize] + positions[j as usize]) * 0.5;
    let projected = center + (mid - center).normalize() * radius;

    let idx = positions.len() as u32;
    positions.push(projected);
    cache.insert(key, idx);
    idx
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn unit_sphere(level: u32) -> Mesh {
        icosphere(Vec3::ZERO, 1.0, level).expect("valid arguments")
    }

    // ── counts ────────────────────────────────────────────────────────────

    #[test]
    fn triangle_count_matches_closed_form() {
        for level in 0..=6u32 {
            let mesh = unit_sphere(level);
            assert_eq!(
                mesh.triangle_count(),
                20 * 4usize.pow(level),
                "level {level}"
            );
        }
    }

    #[test]
    fn vertex_count_matches_closed_form() {
        for level in 0..=6u32 {
            let mesh = unit_sphere(level);
            assert_eq!(
                mesh.vertex_count(),
                10 * 4usize.pow(level) + 2,
                "level {level}"
            );
        }
    }

    #[test]
    fn level_zero_is_base_icosahedron() {
        let mesh = unit_sphere(0);
        assert_eq!(mesh.vertex_count(), 12);
        assert_eq!(mesh.triangle_count(), 20);
    }

    // ── sphere invariant ──────────────────────────────────────────────────

    #[test]
    fn every_vertex_lies_on_the_sphere() {
        let center = Vec3::new(1.5, -2.0, 0.25);
        let radius = 3.0;
        for level in 0..=4u32 {
            let mesh = icosphere(center, radius, level).expect("valid arguments");
            for p in &mesh.positions {
                let d = (Vec3::from_array(*p) - center).length();
                assert!((d - radius).abs() < EPS, "level {level}: |p - c| = {d}");
            }
        }
    }

    #[test]
    fn normals_are_unit_outward_radials() {
        let center = Vec3::new(0.0, 2.0, 0.0);
        let mesh = icosphere(center, 2.0, 2).expect("valid arguments");
        for (p, n) in mesh.positions.iter().zip(&mesh.normals) {
            let n = Vec3::from_array(*n);
            let outward = (Vec3::from_array(*p) - center).normalize();
            assert!((n.length() - 1.0).abs() < EPS);
            assert!(n.dot(outward) > 1.0 - EPS);
        }
    }

    // ── topology ──────────────────────────────────────────────────────────

    #[test]
    fn indices_are_in_bounds() {
        for level in 0..=4u32 {
            assert!(unit_sphere(level).indices_in_bounds(), "level {level}");
        }
    }

    #[test]
    fn winding_is_counter_clockwise_from_outside() {
        let mesh = unit_sphere(3);
        for tri in mesh.indices.chunks_exact(3) {
            let a = Vec3::from_array(mesh.positions[tri[0] as usize]);
            let b = Vec3::from_array(mesh.positions[tri[1] as usize]);
            let c = Vec3::from_array(mesh.positions[tri[2] as usize]);
            let face_normal = (b - a).cross(c - a);
            let outward = (a + b + c) / 3.0;
            assert!(face_normal.dot(outward) > 0.0);
        }
    }

    #[test]
    fn identical_arguments_yield_identical_counts() {
        let a = icosphere(Vec3::ZERO, 1.0, 5).expect("valid arguments");
        let b = icosphere(Vec3::ZERO, 1.0, 5).expect("valid arguments");
        assert_eq!(a.vertex_count(), b.vertex_count());
        assert_eq!(a.indices.len(), b.indices.len());
    }

    // ── argument validation ───────────────────────────────────────────────

    #[test]
    fn rejects_excessive_level() {
        let err = icosphere(Vec3::ZERO, 1.0, MAX_SUBDIVISION_LEVEL + 1).unwrap_err();
        assert!(matches!(err, GeometryError::LevelOutOfRange { .. }));
    }

    #[test]
    fn rejects_bad_radius() {
        assert!(matches!(
            icosphere(Vec3::ZERO, 0.0, 1),
            Err(GeometryError::InvalidRadius { .. })
        ));
        assert!(matches!(
            icosphere(Vec3::ZERO, f32::NAN, 1),
            Err(GeometryError::InvalidRadius { .. })
        ));
        assert!(matches!(
            icosphere(Vec3::ZERO, -1.0, 1),
            Err(GeometryError::InvalidRadius { .. })
        ));
    }
}
