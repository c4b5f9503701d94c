use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::render_asset::RenderAssetUsages;

// Corner offsets of the small octahedron drawn for each particle.
const SPRITE_CORNERS: [Vec3; 6] = [
    Vec3::X,
    Vec3::NEG_X,
    Vec3::Y,
    Vec3::NEG_Y,
    Vec3::Z,
    Vec3::NEG_Z,
];

const SPRITE_FACES: [[u32; 3]; 8] = [
    [0, 2, 4],
    [2, 1, 4],
    [1, 3, 4],
    [3, 0, 4],
    [2, 0, 5],
    [1, 2, 5],
    [3, 1, 5],
    [0, 3, 5],
];

/// One mesh holding every particle as a tiny octahedron of the given diameter.
/// Built once per cloud; per-frame changes go through the transform and material only.
pub fn point_cloud_mesh(points: &[Vec3], size: f32) -> Mesh {
    let half = size * 0.5;
    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(points.len() * SPRITE_CORNERS.len());
    let mut normals: Vec<[f32; 3]> = Vec::with_capacity(points.len() * SPRITE_CORNERS.len());
    let mut indices: Vec<u32> = Vec::with_capacity(points.len() * SPRITE_FACES.len() * 3);

    for (i, point) in points.iter().enumerate() {
        let base = (i * SPRITE_CORNERS.len()) as u32;
        for corner in SPRITE_CORNERS {
            positions.push((*point + corner * half).to_array());
            normals.push(corner.to_array());
        }
        for face in SPRITE_FACES {
            indices.extend(face.iter().map(|v| base + v));
        }
    }

    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());
    mesh.insert_indices(Indices::U32(indices));
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh
}

// Regular dodecahedron: 20 vertices, 12 pentagonal faces as fans of three triangles.
const DODECAHEDRON_FACES: [[usize; 5]; 12] = [
    [3, 11, 7, 15, 13],
    [7, 19, 17, 6, 15],
    [17, 4, 8, 10, 6],
    [8, 0, 16, 2, 10],
    [0, 12, 1, 18, 16],
    [6, 10, 2, 13, 15],
    [2, 16, 18, 3, 13],
    [18, 1, 9, 11, 3],
    [4, 14, 12, 0, 8],
    [11, 9, 5, 19, 7],
    [19, 5, 14, 4, 17],
    [1, 12, 14, 5, 9],
];

fn dodecahedron_vertices() -> [Vec3; 20] {
    let t = (1.0 + 5f32.sqrt()) / 2.0;
    let r = 1.0 / t;
    [
        Vec3::new(-1.0, -1.0, -1.0),
        Vec3::new(-1.0, -1.0, 1.0),
        Vec3::new(-1.0, 1.0, -1.0),
        Vec3::new(-1.0, 1.0, 1.0),
        Vec3::new(1.0, -1.0, -1.0),
        Vec3::new(1.0, -1.0, 1.0),
        Vec3::new(1.0, 1.0, -1.0),
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(0.0, -r, -t),
        Vec3::new(0.0, -r, t),
        Vec3::new(0.0, r, -t),
        Vec3::new(0.0, r, t),
        Vec3::new(-r, -t, 0.0),
        Vec3::new(-r, t, 0.0),
        Vec3::new(r, -t, 0.0),
        Vec3::new(r, t, 0.0),
        Vec3::new(-t, 0.0, -r),
        Vec3::new(t, 0.0, -r),
        Vec3::new(-t, 0.0, r),
        Vec3::new(t, 0.0, r),
    ]
}

/// Flat-shaded dodecahedron whose vertices lie on a sphere of `radius`.
pub fn dodecahedron_mesh(radius: f32) -> Mesh {
    let vertices = dodecahedron_vertices().map(|v| v.normalize() * radius);

    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(DODECAHEDRON_FACES.len() * 9);
    let mut normals: Vec<[f32; 3]> = Vec::with_capacity(DODECAHEDRON_FACES.len() * 9);
    let mut uvs: Vec<[f32; 2]> = Vec::with_capacity(DODECAHEDRON_FACES.len() * 9);

    for face in DODECAHEDRON_FACES {
        let corners = face.map(|i| vertices[i]);
        let centroid = corners.iter().copied().sum::<Vec3>() / 5.0;
        let mut normal = (corners[1] - corners[0]).cross(corners[2] - corners[0]).normalize_or_zero();
        let outward = normal.dot(centroid) >= 0.0;
        if !outward {
            normal = -normal;
        }

        for k in 1..4 {
            let mut tri = [corners[0], corners[k], corners[k + 1]];
            if !outward {
                tri.swap(1, 2);
            }
            for v in tri {
                positions.push(v.to_array());
                normals.push(normal.to_array());
                // spherical projection, good enough for an untextured solid
                let dir = v.normalize_or_zero();
                uvs.push([0.5 + dir.z.atan2(dir.x) / std::f32::consts::TAU, 0.5 - dir.y.asin() / std::f32::consts::PI]);
            }
        }
    }

    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::render::mesh::VertexAttributeValues;

    fn positions(mesh: &Mesh) -> Vec<Vec3> {
        match mesh.attribute(Mesh::ATTRIBUTE_POSITION) {
            Some(VertexAttributeValues::Float32x3(values)) => values.iter().map(|v| Vec3::from_array(*v)).collect(),
            _ => panic!("mesh has no positions"),
        }
    }

    #[test]
    fn dodecahedron_has_outward_triangles_on_the_sphere() {
        let mesh = dodecahedron_mesh(2.0);
        let positions = positions(&mesh);
        assert_eq!(positions.len(), 12 * 3 * 3);

        for tri in positions.chunks(3) {
            for v in tri {
                assert!((v.length() - 2.0).abs() < 1e-4);
            }
            let normal = (tri[1] - tri[0]).cross(tri[2] - tri[0]);
            let centroid = (tri[0] + tri[1] + tri[2]) / 3.0;
            assert!(normal.dot(centroid) > 0.0, "inward-facing triangle {:?}", tri);
        }
    }

    #[test]
    fn faces_use_every_vertex_three_times() {
        let mut uses = [0; 20];
        for face in DODECAHEDRON_FACES {
            for i in face {
                uses[i] += 1;
            }
        }
        assert!(uses.iter().all(|&n| n == 3));
    }

    #[test]
    fn point_cloud_mesh_sizes_match_count() {
        let points = vec![Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0), Vec3::splat(-4.0)];
        let mesh = point_cloud_mesh(&points, 0.15);
        assert_eq!(mesh.count_vertices(), 18);
        assert_eq!(mesh.indices().map(|i| i.len()), Some(72));

        let positions = positions(&mesh);
        for (i, point) in points.iter().enumerate() {
            for corner in &positions[i * 6..i * 6 + 6] {
                assert!(((*corner - *point).length() - 0.075).abs() < 1e-5);
            }
        }
    }
}
