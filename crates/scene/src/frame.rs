//! Per-frame data handed to the renderer: matrices, light uniforms and one
//! draw per non-empty submesh.

use std::sync::Arc;

use asset::Texture;
use glam::{Mat4, Vec3, Vec4};

use crate::input::PolygonMode;

/// Material parameters and index range of one submesh draw.
#[derive(Clone, Debug)]
pub struct DrawItem {
    pub submesh: usize,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub shininess: f32,
    pub diffuse_texture: Option<Arc<Texture>>,
    pub index_count: usize,
}

#[derive(Clone, Debug)]
pub struct ObjectDraw {
    pub world: Mat4,
    pub normal_matrix: Mat4,
    pub mvp: Mat4,
    pub draws: Vec<DrawItem>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightUniforms {
    pub camera_position: Vec3,
    pub dir_light_direction: Vec3,
    pub dir_light_radiance: Vec3,
    pub point_light_position: Vec3,
    pub point_light_intensity: Vec3,
    pub spot_light_position: Vec3,
    pub spot_light_direction: Vec3,
    pub spot_light_intensity: Vec3,
    /// Cosine of the outer cone angle.
    pub spot_cos_total_width: f32,
    /// Cosine of the angle where falloff begins.
    pub spot_cos_falloff_start: f32,
    pub ambient_light: Vec3,
}

/// Small marker drawn at a light position in a flat colour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gizmo {
    pub mvp: Mat4,
    pub color: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkyboxDraw {
    pub rotation_deg: f32,
    /// Projection * view without translation * yaw.
    pub mvp: Mat4,
}

#[derive(Clone, Debug)]
pub struct FrameData {
    pub clear_color: Vec4,
    pub polygon_mode: PolygonMode,
    pub object: Option<ObjectDraw>,
    pub lights: LightUniforms,
    pub gizmos: Vec<Gizmo>,
    pub skybox: Option<SkyboxDraw>,
}
