//! Panorama mapped onto the inside of a large sphere that turns slowly.

use std::path::Path;

use asset::{TextureData, sphere::{self, SphereMesh}};

use crate::error::{SceneError, SceneResult};

#[derive(Clone, Debug)]
pub struct Skybox {
    pub texture: TextureData,
    pub sphere: SphereMesh,
}

impl Skybox {
    pub fn load(path: impl AsRef<Path>, slices: u32, stacks: u32, radius: f32) -> SceneResult<Self> {
        let sphere = sphere::uv_sphere(slices, stacks, radius)
            .ok_or(SceneError::SkyboxGeometry { slices, stacks })?;
        let texture = TextureData::load(path)?;
        Ok(Self { texture, sphere })
    }
}
