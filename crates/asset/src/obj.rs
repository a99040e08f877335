//! OBJ reader supporting positions, normals, texture coordinates, materials
//! and polygonal faces.

use std::{
    io::{self, BufRead},
    path::Path,
};

use glam::{Vec2, Vec3};

use crate::{
    error::{AttributeKind, LoadError, LoadResult, LoadWarning},
    mesh::{Mesh, Vertex},
    mtl, normalize,
    parse::{self, Line},
    texture::TextureCache,
};

/// Knobs for a single load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadOptions {
    /// Recenter and rescale to the unit box after parsing.
    pub normalize: bool,
    /// Decode `map_Kd` images instead of only recording their paths.
    pub load_textures: bool,
    /// Fail on `usemtl` naming an undeclared material instead of dropping faces.
    pub strict_materials: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            normalize: true,
            load_textures: true,
            strict_materials: false,
        }
    }
}

impl LoadOptions {
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn with_textures(mut self, load_textures: bool) -> Self {
        self.load_textures = load_textures;
        self
    }

    pub fn with_strict_materials(mut self, strict: bool) -> Self {
        self.strict_materials = strict;
        self
    }
}

/// A parsed mesh and whatever the loader had to drop on the way.
#[derive(Debug)]
pub struct ObjLoad {
    pub mesh: Mesh,
    pub warnings: Vec<LoadWarning>,
}

impl ObjLoad {
    pub fn dropped_triangles(&self) -> usize {
        self.warnings.iter().map(LoadWarning::dropped_triangles).sum()
    }
}

/// Load an OBJ mesh from a file path. `mtllib` entries resolve next to it.
pub fn load_obj_from_path(path: impl AsRef<Path>, options: &LoadOptions) -> LoadResult<ObjLoad> {
    let path = path.as_ref();
    log::info!("Loading OBJ {}", path.display());
    let reader = parse::open(path)?;
    load_obj_from_reader(reader, path, options)
}

/// Load an OBJ mesh from a [`BufRead`]. `path` labels errors and anchors `mtllib`.
pub fn load_obj_from_reader<R: BufRead>(
    reader: R,
    path: &Path,
    options: &LoadOptions,
) -> LoadResult<ObjLoad> {
    let mut parser = ObjParser::new(path, options);
    for (line_no, text) in reader.lines().enumerate() {
        let line = Line {
            path,
            number: line_no + 1,
        };
        let text = text.map_err(|e| line.read_error(e))?;
        parser.line(line, &text)?;
    }
    parser.finish()
}

/// Convenience helper to parse an OBJ string literal. Libraries resolve
/// against the working directory.
pub fn load_obj_from_str(contents: &str, options: &LoadOptions) -> LoadResult<ObjLoad> {
    load_obj_from_reader(io::Cursor::new(contents), Path::new("<string>"), options)
}

struct ObjParser<'a> {
    path: &'a Path,
    options: &'a LoadOptions,
    positions: Vec<Vec3>,
    texcoords: Vec<Vec2>,
    normals: Vec<Vec3>,
    mesh: Mesh,
    textures: TextureCache,
    /// Submesh receiving face indices.
    active: Option<usize>,
    /// Warning collecting faces while `active` is `None`.
    dropping: Option<usize>,
    warnings: Vec<LoadWarning>,
}

impl<'a> ObjParser<'a> {
    fn new(path: &'a Path, options: &'a LoadOptions) -> Self {
        Self {
            path,
            options,
            positions: Vec::new(),
            texcoords: Vec::new(),
            normals: Vec::new(),
            mesh: Mesh::new(),
            textures: TextureCache::new(options.load_textures),
            active: None,
            dropping: None,
            warnings: Vec::new(),
        }
    }

    fn line(&mut self, line: Line<'_>, text: &str) -> LoadResult<()> {
        let Some((tag, mut parts)) = parse::directive(text) else {
            return Ok(());
        };

        match tag {
            "v" => self.positions.push(line.vec3(&mut parts, "position")?),
            "vt" => self.texcoords.push(line.vec2(&mut parts, "texture coordinate")?),
            "vn" => self.normals.push(line.vec3(&mut parts, "normal")?),
            "f" => self.face(line, parts)?,
            "usemtl" => self.use_material(line, line.word(parts.next(), "usemtl")?)?,
            "mtllib" => {
                let path = self.path;
                let base_dir = path.parent().unwrap_or(Path::new(""));
                let mut loaded = 0;
                for name in parts {
                    mtl::load_mtl_from_path(base_dir.join(name), &mut self.mesh, &mut self.textures)?;
                    loaded += 1;
                }
                if loaded == 0 {
                    return Err(line.malformed("'mtllib' needs a file name"));
                }
            }
            _ => {
                // Ignore other directives (o/g/s/etc.)
            }
        }
        Ok(())
    }

    fn face<'t>(&mut self, line: Line<'_>, corners: impl Iterator<Item = &'t str>) -> LoadResult<()> {
        let first = self.mesh.vertices.len();
        for token in corners {
            let vertex = self.corner(line, token)?;
            self.mesh.vertices.push(vertex);
        }
        let count = self.mesh.vertices.len() - first;
        if count < 3 {
            return Err(line.malformed(format!("face has {count} corner(s), need at least 3")));
        }
        if u32::try_from(self.mesh.vertices.len()).is_err() {
            return Err(LoadError::TooManyVertices);
        }

        let first = first as u32;
        let triangles = count - 2;
        match self.active {
            Some(index) => {
                if let Some(submesh) = self.mesh.submesh_mut(index) {
                    // Fan around the first corner.
                    for k in 1..=triangles as u32 {
                        submesh.indices.extend([first, first + k, first + k + 1]);
                    }
                }
            }
            None => self.drop_triangles(line, triangles),
        }
        Ok(())
    }

    fn corner(&self, line: Line<'_>, token: &str) -> LoadResult<Vertex> {
        let mut fields = token.split('/');
        let (Some(p), Some(t), Some(n), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(line.malformed(format!("face corner '{token}' is not p/t/n")));
        };

        let position = lookup(&self.positions, p, AttributeKind::Position, line, token)?;
        let uv = lookup(&self.texcoords, t, AttributeKind::TexCoord, line, token)?;
        let normal = lookup(&self.normals, n, AttributeKind::Normal, line, token)?;
        Ok(Vertex::new(position.into(), normal.into(), uv.into()))
    }

    fn use_material(&mut self, line: Line<'_>, name: &str) -> LoadResult<()> {
        if let Some(index) = self.mesh.find_submesh(name) {
            self.active = Some(index);
            self.dropping = None;
            return Ok(());
        }

        if self.options.strict_materials {
            return Err(LoadError::UnresolvedMaterial {
                path: line.path_buf(),
                line: line.number,
                name: name.to_owned(),
            });
        }

        log::warn!(
            "{}:{}: material '{}' not declared, its faces are dropped",
            self.path.display(),
            line.number,
            name
        );
        self.active = None;
        self.warnings.push(LoadWarning::UnresolvedMaterial {
            line: line.number,
            name: name.to_owned(),
            dropped_triangles: 0,
        });
        self.dropping = Some(self.warnings.len() - 1);
        Ok(())
    }

    fn drop_triangles(&mut self, line: Line<'_>, count: usize) {
        let index = match self.dropping {
            Some(index) => index,
            None => {
                log::warn!(
                    "{}:{}: faces before any usemtl are dropped",
                    self.path.display(),
                    line.number
                );
                self.warnings.push(LoadWarning::NoActiveMaterial {
                    line: line.number,
                    dropped_triangles: 0,
                });
                let index = self.warnings.len() - 1;
                self.dropping = Some(index);
                index
            }
        };
        self.warnings[index].add_dropped(count);
    }

    fn finish(self) -> LoadResult<ObjLoad> {
        let mut mesh = self.mesh;
        if self.options.normalize {
            normalize::normalize(&mut mesh)?;
        }

        log::info!(
            "Loaded {}: {} vertices, {} triangles, {} submeshes, {} texture(s)",
            self.path.display(),
            mesh.vertex_count(),
            mesh.triangle_count(),
            mesh.submeshes().len(),
            self.textures.len()
        );
        for warning in &self.warnings {
            log::warn!("{}: {}", self.path.display(), warning);
        }

        Ok(ObjLoad {
            mesh,
            warnings: self.warnings,
        })
    }
}

fn lookup<T: Copy>(
    list: &[T],
    field: &str,
    kind: AttributeKind,
    line: Line<'_>,
    token: &str,
) -> LoadResult<T> {
    let index: usize = field
        .parse()
        .map_err(|_| line.malformed(format!("invalid {kind} index '{field}' in '{token}'")))?;
    index
        .checked_sub(1)
        .and_then(|i| list.get(i))
        .copied()
        .ok_or_else(|| LoadError::IndexOutOfRange {
            path: line.path_buf(),
            line: line.number,
            kind,
            index,
            len: list.len(),
        })
}
