//! Phong materials read from `.mtl` libraries.

use std::{path::PathBuf, sync::Arc};

use glam::Vec3;

use crate::texture::TextureData;

/// Image referenced by a material. Pixels are absent when decoding was
/// disabled or failed.
#[derive(Debug)]
pub struct Texture {
    pub path: PathBuf,
    pub data: Option<TextureData>,
}

impl Texture {
    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.data.is_some()
    }
}

#[derive(Clone, Debug, Default)]
pub struct Material {
    pub name: String,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub shininess: f32,
    pub diffuse_texture: Option<Arc<Texture>>,
}

impl Material {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl PartialEq for Material {
    fn eq(&self, other: &Self) -> bool {
        let same_texture = match (&self.diffuse_texture, &other.diffuse_texture) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b) || a.path == b.path,
            (None, None) => true,
            _ => false,
        };
        self.name == other.name
            && self.ambient == other.ambient
            && self.diffuse == other.diffuse
            && self.specular == other.specular
            && self.shininess == other.shininess
            && same_texture
    }
}
