//! Errors raised when building scene primitives.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("Invalid spot light cone: falloff start {start_deg} deg, total width {width_deg} deg")]
    InvalidSpotCone { start_deg: f32, width_deg: f32 },
    #[error("Invalid aspect ratio: {0}")]
    InvalidAspect(f32),
}

pub type CoreResult<T> = Result<T, CoreError>;
