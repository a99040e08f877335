//! CPU-side mesh representation used by loaders.

use std::fmt;

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::material::Material;

/// Vertex with position/normal/uv. Values are in object space.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    pub fn new(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        Vec3::from(self.position)
    }
}

/// Triangle list drawn with a single material.
#[derive(Clone, Debug, PartialEq)]
pub struct Submesh {
    material: usize,
    pub indices: Vec<u32>,
}

impl Submesh {
    pub(crate) fn new(material: usize) -> Self {
        Self {
            material,
            indices: Vec::new(),
        }
    }

    /// Index of this submesh's material in [`Mesh::materials`].
    #[inline]
    pub fn material_index(&self) -> usize {
        self.material
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Shared vertex buffer split into per-material submeshes.
///
/// Every `newmtl` of a loaded library appends one material and one submesh,
/// so the two lists always have the same length.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    submeshes: Vec<Submesh>,
    materials: Vec<Material>,
    /// Bounding-box center before normalization.
    pub center: Vec3,
    /// Bounding-box size before normalization.
    pub extent: Vec3,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a material together with its (empty) submesh.
    pub fn add_material(&mut self, material: Material) -> usize {
        let index = self.materials.len();
        self.materials.push(material);
        self.submeshes.push(Submesh::new(index));
        index
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub(crate) fn material_mut(&mut self, index: usize) -> Option<&mut Material> {
        self.materials.get_mut(index)
    }

    pub fn submeshes(&self) -> &[Submesh] {
        &self.submeshes
    }

    pub(crate) fn submesh_mut(&mut self, index: usize) -> Option<&mut Submesh> {
        self.submeshes.get_mut(index)
    }

    pub fn material(&self, submesh: &Submesh) -> &Material {
        &self.materials[submesh.material]
    }

    /// First submesh whose material carries `name`.
    pub fn find_submesh(&self, name: &str) -> Option<usize> {
        self.submeshes
            .iter()
            .position(|s| self.materials[s.material].name == name)
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.submeshes.iter().map(Submesh::triangle_count).sum()
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn info(&self) -> MeshInfo<'_> {
        MeshInfo { mesh: self }
    }
}

/// Human-readable summary of a loaded mesh.
pub struct MeshInfo<'a> {
    mesh: &'a Mesh,
}

impl fmt::Display for MeshInfo<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mesh = self.mesh;
        writeln!(f, "# Vertices: {}", mesh.vertex_count())?;
        writeln!(f, "# Triangles: {}", mesh.triangle_count())?;
        writeln!(f, "Total {} submeshes loaded", mesh.submeshes.len())?;
        for (i, submesh) in mesh.submeshes.iter().enumerate() {
            writeln!(
                f,
                "SubMesh {} with material: {}",
                i,
                mesh.material(submesh).name
            )?;
            writeln!(
                f,
                "Num. triangles in the subMesh: {}",
                submesh.triangle_count()
            )?;
        }
        let (c, e) = (mesh.center, mesh.extent);
        writeln!(f, "Model Center: {}, {}, {}", c.x, c.y, c.z)?;
        write!(f, "Model Extent: {} x {} x {}", e.x, e.y, e.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn materials_and_submeshes_stay_paired() {
        let mut mesh = Mesh::new();
        let a = mesh.add_material(Material::named("A"));
        let b = mesh.add_material(Material::named("B"));
        assert_eq!((a, b), (0, 1));
        assert_eq!(mesh.submeshes().len(), 2);
        assert_eq!(mesh.material(&mesh.submeshes()[1]).name, "B");
        assert_eq!(mesh.find_submesh("B"), Some(1));
        assert_eq!(mesh.find_submesh("C"), None);
    }

    #[test]
    fn find_submesh_returns_first_duplicate() {
        let mut mesh = Mesh::new();
        mesh.add_material(Material::named("dup"));
        mesh.add_material(Material::named("dup"));
        assert_eq!(mesh.find_submesh("dup"), Some(0));
    }

    #[test]
    fn byte_views_match_buffer_sizes() {
        let mut mesh = Mesh::new();
        mesh.vertices.push(Vertex::default());
        mesh.vertices.push(Vertex::default());
        let idx = mesh.add_material(Material::named("m"));
        mesh.submesh_mut(idx).unwrap().indices.extend([0, 1, 1]);
        assert_eq!(mesh.vertex_bytes().len(), 2 * 32);
        assert_eq!(mesh.submeshes()[0].index_bytes().len(), 12);
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn info_lists_submeshes() {
        let mut mesh = Mesh::new();
        mesh.add_material(Material::named("Body"));
        let text = mesh.info().to_string();
        assert!(text.contains("# Vertices: 0"));
        assert!(text.contains("SubMesh 0 with material: Body"));
        assert!(text.ends_with("Model Extent: 0 x 0 x 0"));
    }
}
