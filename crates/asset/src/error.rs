//! Load errors and recoverable warnings for OBJ/MTL/texture loading.

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// Which attribute list a face corner indexes into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttributeKind {
    Position,
    TexCoord,
    Normal,
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AttributeKind::Position => "position",
            AttributeKind::TexCoord => "texture coordinate",
            AttributeKind::Normal => "normal",
        })
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to open {}: {source}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}:{line}: {message}", path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        message: String,
    },
    #[error("{}:{line}: {kind} index {index} out of range (have {len})", path.display())]
    IndexOutOfRange {
        path: PathBuf,
        line: usize,
        kind: AttributeKind,
        index: usize,
        len: usize,
    },
    #[error("{}:{line}: material '{name}' is not declared by any loaded library", path.display())]
    UnresolvedMaterial {
        path: PathBuf,
        line: usize,
        name: String,
    },
    #[error("Mesh has more vertices than 32-bit indices can address")]
    TooManyVertices,
    #[error("Cannot normalize a mesh without vertices")]
    EmptyMesh,
    #[error("Texture {} has {width}x{height} pixels that do not fit RGBA8 storage", path.display())]
    InvalidTexture {
        path: PathBuf,
        width: u32,
        height: u32,
    },
    #[error("Failed to decode texture {}: {source}", path.display())]
    Texture {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type LoadResult<T> = Result<T, LoadError>;

/// Data the loader dropped without failing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadWarning {
    /// `usemtl` named a material no loaded library declared.
    UnresolvedMaterial {
        line: usize,
        name: String,
        dropped_triangles: usize,
    },
    /// Faces appeared before any `usemtl`.
    NoActiveMaterial {
        line: usize,
        dropped_triangles: usize,
    },
}

impl LoadWarning {
    pub fn dropped_triangles(&self) -> usize {
        match self {
            LoadWarning::UnresolvedMaterial {
                dropped_triangles, ..
            }
            | LoadWarning::NoActiveMaterial {
                dropped_triangles, ..
            } => *dropped_triangles,
        }
    }

    pub(crate) fn add_dropped(&mut self, count: usize) {
        match self {
            LoadWarning::UnresolvedMaterial {
                dropped_triangles, ..
            }
            | LoadWarning::NoActiveMaterial {
                dropped_triangles, ..
            } => *dropped_triangles += count,
        }
    }
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::UnresolvedMaterial {
                line,
                name,
                dropped_triangles,
            } => write!(
                f,
                "line {line}: unknown material '{name}', dropped {dropped_triangles} triangle(s)"
            ),
            LoadWarning::NoActiveMaterial {
                line,
                dropped_triangles,
            } => write!(
                f,
                "line {line}: faces without material, dropped {dropped_triangles} triangle(s)"
            ),
        }
    }
}
