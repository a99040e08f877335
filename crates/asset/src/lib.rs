//! Asset loading/parsers (meshes, materials, textures).
//! OBJ meshes with MTL material libraries, normalized to the unit box,
//! plus RGBA8 texture decoding and skybox sphere geometry.

pub mod error;
pub mod material;
pub mod mesh;
pub mod mtl;
pub mod normalize;
pub mod obj;
mod parse;
pub mod sphere;
pub mod texture;

pub use error::{AttributeKind, LoadError, LoadResult, LoadWarning};
pub use material::{Material, Texture};
pub use mesh::{Mesh, MeshInfo, Submesh, Vertex};
pub use obj::{LoadOptions, ObjLoad, load_obj_from_path, load_obj_from_reader, load_obj_from_str};
pub use texture::{TextureCache, TextureData};
