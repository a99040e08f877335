//! Tunables of the viewer. Defaults reproduce the classic demo setup.

use glam::{Vec3, Vec4};

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub width: u32,
    pub height: u32,
    pub clear_color: Vec4,

    pub fov_y_deg: f32,
    pub z_near: f32,
    pub z_far: f32,
    pub camera_eye: Vec3,
    pub camera_target: Vec3,
    pub camera_up: Vec3,

    /// Uniform scale applied to the (normalized) model.
    pub object_scale: f32,
    /// Degrees added to the model and skybox yaw every frame.
    pub rotation_step_deg: f32,
    pub initial_rotation_deg: f32,

    pub light_move_step: f32,
    pub dir_light_direction: Vec3,
    pub dir_light_radiance: Vec3,
    pub point_light_position: Vec3,
    pub point_light_intensity: Vec3,
    pub spot_light_position: Vec3,
    pub spot_light_direction: Vec3,
    pub spot_light_intensity: Vec3,
    pub spot_cutoff_start_deg: f32,
    pub spot_total_width_deg: f32,
    pub ambient_light: Vec3,

    pub skybox_slices: u32,
    pub skybox_stacks: u32,
    pub skybox_radius: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            clear_color: Vec4::new(0.44, 0.57, 0.75, 1.0),

            fov_y_deg: 30.0,
            z_near: 0.1,
            z_far: 1000.0,
            camera_eye: Vec3::new(0.0, 1.0, 5.0),
            camera_target: Vec3::ZERO,
            camera_up: Vec3::Y,

            object_scale: 1.5,
            rotation_step_deg: 0.02,
            initial_rotation_deg: 30.0,

            light_move_step: 0.2,
            dir_light_direction: Vec3::new(0.0, 0.0, -1.0),
            dir_light_radiance: Vec3::splat(0.6),
            point_light_position: Vec3::new(0.8, 0.0, 0.8),
            point_light_intensity: Vec3::new(0.5, 0.1, 0.1),
            spot_light_position: Vec3::new(0.0, 1.0, 0.0),
            spot_light_direction: Vec3::new(0.0, -1.0, 0.0),
            spot_light_intensity: Vec3::new(0.25, 0.25, 0.1),
            spot_cutoff_start_deg: 30.0,
            spot_total_width_deg: 45.0,
            ambient_light: Vec3::splat(0.2),

            skybox_slices: 36,
            skybox_stacks: 18,
            skybox_radius: 50.0,
        }
    }
}

impl SceneConfig {
    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width.max(1) as f32 / self.height.max(1) as f32
    }
}
