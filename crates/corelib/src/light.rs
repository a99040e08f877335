//! Light sources of the Phong pipeline. Plain data plus the keyboard nudges
//! the viewer applies to them.

use crate::{CoreError, CoreResult, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub direction: Vec3,
    pub radiance: Vec3,
}

impl DirectionalLight {
    pub fn new(direction: Vec3, radiance: Vec3) -> Self {
        Self {
            direction,
            radiance,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub intensity: Vec3,
}

impl PointLight {
    pub fn new(position: Vec3, intensity: Vec3) -> Self {
        Self {
            position,
            intensity,
        }
    }

    pub fn move_left(&mut self, step: f32) {
        self.position.x -= step;
    }

    pub fn move_right(&mut self, step: f32) {
        self.position.x += step;
    }

    pub fn move_up(&mut self, step: f32) {
        self.position.y += step;
    }

    pub fn move_down(&mut self, step: f32) {
        self.position.y -= step;
    }

    /// Colour used to draw the light gizmo.
    pub fn visual_color(&self) -> Vec3 {
        visual_color(self.intensity)
    }
}

/// Point light restricted to a cone with a smooth falloff band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpotLight {
    pub light: PointLight,
    pub direction: Vec3,
    pub cutoff_start_deg: f32,
    pub total_width_deg: f32,
}

impl SpotLight {
    pub fn new(
        position: Vec3,
        intensity: Vec3,
        direction: Vec3,
        cutoff_start_deg: f32,
        total_width_deg: f32,
    ) -> CoreResult<Self> {
        if !(0.0..=total_width_deg).contains(&cutoff_start_deg) || total_width_deg >= 90.0 {
            return Err(CoreError::InvalidSpotCone {
                start_deg: cutoff_start_deg,
                width_deg: total_width_deg,
            });
        }
        Ok(Self {
            light: PointLight::new(position, intensity),
            direction: direction.normalize_or_zero(),
            cutoff_start_deg,
            total_width_deg,
        })
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.light.position
    }

    #[inline]
    pub fn intensity(&self) -> Vec3 {
        self.light.intensity
    }

    pub fn move_left(&mut self, step: f32) {
        self.light.move_left(step);
    }

    pub fn move_right(&mut self, step: f32) {
        self.light.move_right(step);
    }

    pub fn move_up(&mut self, step: f32) {
        self.light.move_up(step);
    }

    pub fn move_down(&mut self, step: f32) {
        self.light.move_down(step);
    }

    /// Cosine of the inner angle; full intensity inside it.
    pub fn cos_falloff_start(&self) -> f32 {
        self.cutoff_start_deg.to_radians().cos()
    }

    /// Cosine of the outer angle; no light beyond it.
    pub fn cos_total_width(&self) -> f32 {
        self.total_width_deg.to_radians().cos()
    }

    /// Attenuation factor in [0,1] for a point, ignoring distance.
    pub fn cone_factor(&self, point: Vec3) -> f32 {
        let to_point = (point - self.position()).normalize_or_zero();
        let cos_theta = to_point.dot(self.direction);
        let (inner, outer) = (self.cos_falloff_start(), self.cos_total_width());
        if cos_theta >= inner {
            1.0
        } else if cos_theta <= outer {
            0.0
        } else {
            (cos_theta - outer) / (inner - outer)
        }
    }

    pub fn visual_color(&self) -> Vec3 {
        self.light.visual_color()
    }
}

fn visual_color(intensity: Vec3) -> Vec3 {
    let c = intensity.normalize_or_zero();
    if c == Vec3::ZERO { Vec3::ONE } else { c }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spot() -> SpotLight {
        SpotLight::new(
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.25, 0.25, 0.1),
            Vec3::new(0.0, -1.0, 0.0),
            30.0,
            45.0,
        )
        .unwrap()
    }

    #[test]
    fn point_light_moves_on_screen_axes() {
        let mut light = PointLight::new(Vec3::new(0.8, 0.0, 0.8), Vec3::ONE);
        light.move_left(0.2);
        light.move_up(0.2);
        assert!((light.position.x - 0.6).abs() < 1e-6);
        assert!((light.position.y - 0.2).abs() < 1e-6);
        light.move_right(0.2);
        light.move_down(0.2);
        assert!((light.position.x - 0.8).abs() < 1e-6);
        assert!(light.position.y.abs() < 1e-6);
        assert!((light.position.z - 0.8).abs() < 1e-6);
    }

    #[test]
    fn spot_cone_rejects_inverted_angles() {
        let err = SpotLight::new(Vec3::ZERO, Vec3::ONE, Vec3::NEG_Y, 50.0, 45.0).unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidSpotCone {
                start_deg: 50.0,
                width_deg: 45.0
            }
        );
        assert!(SpotLight::new(Vec3::ZERO, Vec3::ONE, Vec3::NEG_Y, 10.0, 90.0).is_err());
    }

    #[test]
    fn spot_cone_factor_bands() {
        let s = spot();
        assert_eq!(s.cone_factor(Vec3::ZERO), 1.0);
        // 60 degrees off axis is outside the 45 degree cone.
        let far = Vec3::new(60f32.to_radians().tan(), 0.0, 0.0);
        assert_eq!(s.cone_factor(far), 0.0);
        let mid = Vec3::new(37.5f32.to_radians().tan(), 0.0, 0.0);
        let f = s.cone_factor(mid);
        assert!(f > 0.0 && f < 1.0);
    }

    #[test]
    fn gizmo_color_is_normalized_intensity() {
        let c = spot().visual_color();
        assert!((c.length() - 1.0).abs() < 1e-6);
        let dark = PointLight::new(Vec3::ZERO, Vec3::ZERO);
        assert_eq!(dark.visual_color(), Vec3::ONE);
    }
}
