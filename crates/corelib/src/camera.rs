use crate::{CoreError, CoreResult, Mat4, Vec3};

/// Simple perspective camera (right-handed).
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov_y_rad: f32,
    pub z_near: f32,
    pub z_far: f32,
    pub aspect: f32,
}

impl Camera {
    #[allow(clippy::too_many_arguments)]
    pub fn new_perspective(
        eye: Vec3,
        target: Vec3,
        up: Vec3,
        fov_y_rad: f32,
        z_near: f32,
        z_far: f32,
        aspect: f32,
    ) -> Self {
        Self {
            eye,
            target,
            up,
            fov_y_rad,
            z_near,
            z_far,
            aspect,
        }
    }

    /// Field of view is given in degrees.
    pub fn update_projection(
        &mut self,
        fov_y_deg: f32,
        aspect: f32,
        z_near: f32,
        z_far: f32,
    ) -> CoreResult<()> {
        if !(aspect.is_finite() && aspect > 0.0) {
            return Err(CoreError::InvalidAspect(aspect));
        }
        self.fov_y_rad = fov_y_deg.to_radians();
        self.aspect = aspect;
        self.z_near = z_near;
        self.z_far = z_far;
        Ok(())
    }

    #[inline]
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// OpenGL-style projection (z in [-1,1]).
    #[inline]
    pub fn proj(&self) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.fov_y_rad,
            self.aspect.max(1e-6),
            self.z_near,
            self.z_far,
        )
    }

    #[inline]
    pub fn proj_view(&self) -> Mat4 {
        self.proj() * self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera::new_perspective(Vec3::new(0.0, 1.0, 5.0), Vec3::ZERO, Vec3::Y, 0.5, 0.1, 1000.0, 1.0)
    }

    #[test]
    fn update_projection_rejects_zero_aspect() {
        let mut cam = camera();
        assert_eq!(
            cam.update_projection(30.0, 0.0, 0.1, 1000.0),
            Err(CoreError::InvalidAspect(0.0))
        );
        assert_eq!(cam.aspect, 1.0);
    }

    #[test]
    fn update_projection_takes_degrees() {
        let mut cam = camera();
        cam.update_projection(30.0, 2.0, 0.1, 100.0).unwrap();
        assert!((cam.fov_y_rad - 30f32.to_radians()).abs() < 1e-6);
        assert_eq!(cam.aspect, 2.0);
        assert_eq!(cam.z_far, 100.0);
    }

    #[test]
    fn target_projects_to_screen_center() {
        let cam = camera();
        let clip = cam.proj_view() * Vec3::ZERO.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-6);
        assert!(ndc.y.abs() < 1e-6);
    }
}
