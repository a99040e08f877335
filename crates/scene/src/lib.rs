//! Scene context of the viewer: the loaded model, camera, lights and skybox,
//! plus the input and per-frame logic that drives them.

pub mod config;
pub mod error;
pub mod frame;
pub mod input;
pub mod skybox;

use std::path::{Path, PathBuf};

use asset::{LoadOptions, LoadWarning, Mesh, load_obj_from_path};
use corelib::{
    Mat3, Mat4,
    camera::Camera,
    light::{DirectionalLight, PointLight, SpotLight},
    transform::Transform,
};

pub use config::SceneConfig;
pub use error::{SceneError, SceneResult};
pub use frame::{DrawItem, FrameData, Gizmo, LightUniforms, ObjectDraw, SkyboxDraw};
pub use input::{Control, Key, PolygonMode};
pub use skybox::Skybox;

/// A loaded model placed in the scene.
#[derive(Debug)]
pub struct SceneObject {
    pub mesh: Mesh,
    pub source: PathBuf,
}

pub struct SceneContext {
    config: SceneConfig,
    camera: Camera,
    dir_light: DirectionalLight,
    point_light: PointLight,
    spot_light: SpotLight,
    object: Option<SceneObject>,
    skybox: Option<Skybox>,
    polygon_mode: PolygonMode,
    object_rotation_deg: f32,
    skybox_rotation_deg: f32,
}

impl SceneContext {
    /// Camera and lights from `config`; no model and no skybox yet.
    pub fn new(config: SceneConfig) -> SceneResult<Self> {
        let mut camera = Camera::new_perspective(
            config.camera_eye,
            config.camera_target,
            config.camera_up,
            config.fov_y_deg.to_radians(),
            config.z_near,
            config.z_far,
            1.0,
        );
        camera.update_projection(config.fov_y_deg, config.aspect(), config.z_near, config.z_far)?;

        let spot_light = SpotLight::new(
            config.spot_light_position,
            config.spot_light_intensity,
            config.spot_light_direction,
            config.spot_cutoff_start_deg,
            config.spot_total_width_deg,
        )?;

        Ok(Self {
            dir_light: DirectionalLight::new(config.dir_light_direction, config.dir_light_radiance),
            point_light: PointLight::new(config.point_light_position, config.point_light_intensity),
            spot_light,
            camera,
            object: None,
            skybox: None,
            polygon_mode: PolygonMode::Fill,
            object_rotation_deg: config.initial_rotation_deg,
            skybox_rotation_deg: config.initial_rotation_deg,
            config,
        })
    }

    /// Replace the current model. On error the previous model stays in place.
    pub fn load_model(
        &mut self,
        path: impl AsRef<Path>,
        options: &LoadOptions,
    ) -> SceneResult<Vec<LoadWarning>> {
        let path = path.as_ref();
        let load = load_obj_from_path(path, options)?;
        log::info!("Model {}\n{}", path.display(), load.mesh.info());

        if let Some(old) = self.object.replace(SceneObject {
            mesh: load.mesh,
            source: path.to_path_buf(),
        }) {
            log::debug!("Released model {}", old.source.display());
        }
        Ok(load.warnings)
    }

    /// Replace the skybox panorama. On error the previous skybox stays in place.
    pub fn set_skybox(&mut self, path: impl AsRef<Path>) -> SceneResult<()> {
        let skybox = Skybox::load(
            path,
            self.config.skybox_slices,
            self.config.skybox_stacks,
            self.config.skybox_radius,
        )?;
        self.skybox = Some(skybox);
        Ok(())
    }

    pub fn handle_key(&mut self, key: Key) -> Control {
        let step = self.config.light_move_step;
        match key {
            Key::F1 => self.polygon_mode = PolygonMode::Point,
            Key::F2 => self.polygon_mode = PolygonMode::Line,
            Key::F3 => self.polygon_mode = PolygonMode::Fill,
            Key::Left => self.point_light.move_left(step),
            Key::Right => self.point_light.move_right(step),
            Key::Up => self.point_light.move_up(step),
            Key::Down => self.point_light.move_down(step),
            Key::Char('a') => self.spot_light.move_left(step),
            Key::Char('d') => self.spot_light.move_right(step),
            Key::Char('w') => self.spot_light.move_up(step),
            Key::Char('s') => self.spot_light.move_down(step),
            Key::Escape => return Control::Exit,
            Key::Char(_) => {}
        }
        Control::Continue
    }

    /// Window resize. Zero-sized dimensions are treated as 1.
    pub fn resize(&mut self, width: u32, height: u32) -> SceneResult<()> {
        self.config.width = width.max(1);
        self.config.height = height.max(1);
        let cfg = &self.config;
        self.camera
            .update_projection(cfg.fov_y_deg, cfg.aspect(), cfg.z_near, cfg.z_far)?;
        Ok(())
    }

    /// Step the animation by one frame and collect what the renderer needs.
    pub fn advance_frame(&mut self) -> FrameData {
        let step = self.config.rotation_step_deg;
        let view = self.camera.view();
        let proj = self.camera.proj();

        let object = match &self.object {
            Some(object) => {
                self.object_rotation_deg += step;
                let transform = Transform::from_scale_yaw(
                    self.config.object_scale,
                    self.object_rotation_deg.to_radians(),
                );
                let world = transform.matrix();
                Some(ObjectDraw {
                    world,
                    normal_matrix: transform.normal_matrix(),
                    mvp: proj * view * world,
                    draws: draw_items(&object.mesh),
                })
            }
            None => None,
        };

        let gizmos: Vec<Gizmo> = [
            (self.point_light.position, self.point_light.visual_color()),
            (self.spot_light.position(), self.spot_light.visual_color()),
        ]
        .into_iter()
        .map(|(position, color)| Gizmo {
            mvp: proj * view * Transform::from_translation(position).matrix(),
            color,
        })
        .collect();

        let skybox = if self.skybox.is_some() {
            self.skybox_rotation_deg += step;
            let rotation = Mat4::from_rotation_y(self.skybox_rotation_deg.to_radians());
            let view_rotation = Mat4::from_mat3(Mat3::from_mat4(view));
            Some(SkyboxDraw {
                rotation_deg: self.skybox_rotation_deg,
                mvp: proj * view_rotation * rotation,
            })
        } else {
            None
        };

        FrameData {
            clear_color: self.config.clear_color,
            polygon_mode: self.polygon_mode,
            object,
            lights: self.light_uniforms(),
            gizmos,
            skybox,
        }
    }

    fn light_uniforms(&self) -> LightUniforms {
        LightUniforms {
            camera_position: self.camera.eye,
            dir_light_direction: self.dir_light.direction,
            dir_light_radiance: self.dir_light.radiance,
            point_light_position: self.point_light.position,
            point_light_intensity: self.point_light.intensity,
            spot_light_position: self.spot_light.position(),
            spot_light_direction: self.spot_light.direction,
            spot_light_intensity: self.spot_light.intensity(),
            spot_cos_total_width: self.spot_light.cos_total_width(),
            spot_cos_falloff_start: self.spot_light.cos_falloff_start(),
            ambient_light: self.config.ambient_light,
        }
    }

    pub fn object(&self) -> Option<&SceneObject> {
        self.object.as_ref()
    }

    pub fn skybox(&self) -> Option<&Skybox> {
        self.skybox.as_ref()
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn point_light(&self) -> &PointLight {
        &self.point_light
    }

    pub fn spot_light(&self) -> &SpotLight {
        &self.spot_light
    }

    pub fn polygon_mode(&self) -> PolygonMode {
        self.polygon_mode
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }
}

fn draw_items(mesh: &Mesh) -> Vec<DrawItem> {
    mesh.submeshes()
        .iter()
        .enumerate()
        .filter(|(_, submesh)| !submesh.is_empty())
        .map(|(i, submesh)| {
            let material = mesh.material(submesh);
            DrawItem {
                submesh: i,
                ambient: material.ambient,
                diffuse: material.diffuse,
                specular: material.specular,
                shininess: material.shininess,
                diffuse_texture: material.diffuse_texture.clone(),
                index_count: submesh.indices.len(),
            }
        })
        .collect()
}
