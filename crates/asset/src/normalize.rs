//! Recenters a mesh on the origin and scales its longest side to 1.

use glam::Vec3;

use crate::{
    error::{LoadError, LoadResult},
    mesh::Mesh,
};

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    /// `None` for an empty iterator.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Self { min: first, max: first }, |b, p| Self {
            min: b.min.min(p),
            max: b.max.max(p),
        }))
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

/// Moves the bounding-box center to the origin and divides every position by
/// the longest box side, keeping the aspect ratio. Stores the original
/// center and size on the mesh.
///
/// A mesh collapsed to a single point is only recentered.
pub fn normalize(mesh: &mut Mesh) -> LoadResult<()> {
    let bounds = Bounds::from_points(mesh.vertices.iter().map(|v| v.position()))
        .ok_or(LoadError::EmptyMesh)?;
    let center = bounds.center();
    let size = bounds.size();
    let max_length = size.max_element();

    let divisor = if max_length > 0.0 {
        max_length
    } else {
        log::warn!("Mesh has zero extent; skipping scale during normalization");
        1.0
    };

    for vertex in &mut mesh.vertices {
        vertex.position = ((vertex.position() - center) / divisor).into();
    }
    mesh.center = center;
    mesh.extent = size;
    Ok(())
}
