use asset::LoadError;
use corelib::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Skybox needs at least 3 slices and 2 stacks, got {slices}x{stacks}")]
    SkyboxGeometry { slices: u32, stacks: u32 },
}

pub type SceneResult<T> = Result<T, SceneError>;
