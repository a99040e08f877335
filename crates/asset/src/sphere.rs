//! UV sphere used as skybox geometry.

use std::f32::consts::PI;

use crate::mesh::Vertex;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SphereMesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

/// Latitude/longitude sphere centered at the origin with outward normals.
/// `u` runs around the equator, `v` from the north pole (0) to the south pole (1).
///
/// Returns `None` for fewer than 3 slices or 2 stacks.
pub fn uv_sphere(slices: u32, stacks: u32, radius: f32) -> Option<SphereMesh> {
    if slices < 3 || stacks < 2 {
        return None;
    }

    let mut vertices = Vec::with_capacity(((slices + 1) * (stacks + 1)) as usize);
    for i in 0..=stacks {
        let v = i as f32 / stacks as f32;
        let phi = PI * v;
        for j in 0..=slices {
            let u = j as f32 / slices as f32;
            let theta = 2.0 * PI * u;
            let normal = [phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin()];
            let position = normal.map(|c| c * radius);
            vertices.push(Vertex::new(position, normal, [u, v]));
        }
    }

    let ring = slices + 1;
    let mut indices = Vec::with_capacity((slices * stacks * 6) as usize);
    for i in 0..stacks {
        for j in 0..slices {
            let a = i * ring + j;
            let b = a + ring;
            indices.extend([a, b, a + 1, a + 1, b, b + 1]);
        }
    }

    Some(SphereMesh { vertices, indices })
}
