//! Texture loading and data structures.
//! Decodes PNG images to RGBA8 and shares them between materials.

use std::{
    collections::HashMap,
    io,
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    error::{LoadError, LoadResult},
    material::Texture,
};

/// Texture data in CPU-friendly format before GPU upload.
#[derive(Clone, Debug)]
pub struct TextureData {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub format: TextureFormat,
}

/// Supported texture formats.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TextureFormat {
    Rgba8,
}

impl TextureData {
    /// Create a new texture with given dimensions and RGBA8 format.
    /// `None` if `data` does not hold exactly `width * height` pixels.
    pub fn new_rgba8(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        let expected = rgba8_len(width, height)?;
        if data.len() != expected {
            return None;
        }
        Some(Self {
            data,
            width,
            height,
            format: TextureFormat::Rgba8,
        })
    }

    /// Load and decode an image file to RGBA8.
    pub fn load<P: AsRef<Path>>(path: P) -> LoadResult<Self> {
        let path = path.as_ref();
        log::info!("Loading texture from {:?}", path);

        let img = image::open(path).map_err(|e| match e {
            image::ImageError::IoError(source) if source.kind() == io::ErrorKind::NotFound => {
                LoadError::FileNotFound {
                    path: path.to_path_buf(),
                    source,
                }
            }
            source => LoadError::Texture {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        let data = rgba.into_raw();

        log::info!("Loaded texture {}x{} with {} bytes", width, height, data.len());

        Self::new_rgba8(width, height, data).ok_or_else(|| LoadError::InvalidTexture {
            path: path.to_path_buf(),
            width,
            height,
        })
    }

    /// Get the number of bytes per pixel for the format.
    pub fn bytes_per_pixel(&self) -> u32 {
        match self.format {
            TextureFormat::Rgba8 => 4,
        }
    }

    /// Check if the texture data is valid.
    pub fn is_valid(&self) -> bool {
        rgba8_len(self.width, self.height) == Some(self.data.len())
            && self.width > 0
            && self.height > 0
    }
}

fn rgba8_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(4)
}

/// One shared [`Texture`] per resolved path for the duration of a load.
#[derive(Debug, Default)]
pub struct TextureCache {
    decode: bool,
    entries: HashMap<PathBuf, Arc<Texture>>,
}

impl TextureCache {
    /// With `decode` off only paths are recorded.
    pub fn new(decode: bool) -> Self {
        Self {
            decode,
            entries: HashMap::new(),
        }
    }

    pub fn get_or_load(&mut self, path: &Path) -> Arc<Texture> {
        if let Some(texture) = self.entries.get(path) {
            return Arc::clone(texture);
        }

        let data = if self.decode {
            match TextureData::load(path) {
                Ok(data) => Some(data),
                Err(err) => {
                    log::warn!("{err}; material keeps an empty texture");
                    None
                }
            }
        } else {
            None
        };

        let texture = Arc::new(Texture {
            path: path.to_path_buf(),
            data,
        });
        self.entries.insert(path.to_path_buf(), Arc::clone(&texture));
        texture
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
