//! Core types: math re-exports, Transform, Camera, lights.

pub use glam::{EulerRot, Mat3, Mat4, Quat, Vec2, Vec3, Vec4, vec3};

pub mod camera;
pub mod error;
pub mod light;
pub mod transform;

pub use error::{CoreError, CoreResult};
