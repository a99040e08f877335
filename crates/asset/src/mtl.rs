//! Reader for `.mtl` material libraries (`newmtl`, `Ka`, `Kd`, `Ks`, `Ns`, `map_Kd`).
//!
//! Materials are appended to a caller-owned [`Mesh`]; each `newmtl` also
//! opens an empty submesh for it.

use std::{
    io::{self, BufRead},
    path::Path,
};

use crate::{
    error::LoadResult,
    material::Material,
    mesh::Mesh,
    parse::{self, Line},
    texture::TextureCache,
};

/// Load a material library from disk into `mesh`. Returns how many materials it declared.
pub fn load_mtl_from_path(
    path: impl AsRef<Path>,
    mesh: &mut Mesh,
    textures: &mut TextureCache,
) -> LoadResult<usize> {
    let path = path.as_ref();
    log::info!("Loading material library {}", path.display());
    let reader = parse::open(path)?;
    parse_mtl(reader, path, mesh, textures)
}

/// Parse a material library held in memory. `path` locates textures and labels errors.
pub fn parse_mtl_from_str(
    contents: &str,
    path: impl AsRef<Path>,
    mesh: &mut Mesh,
    textures: &mut TextureCache,
) -> LoadResult<usize> {
    parse_mtl(io::Cursor::new(contents), path.as_ref(), mesh, textures)
}

pub fn parse_mtl<R: BufRead>(
    reader: R,
    path: &Path,
    mesh: &mut Mesh,
    textures: &mut TextureCache,
) -> LoadResult<usize> {
    let base_dir = path.parent().unwrap_or(Path::new(""));
    let mut current: Option<usize> = None;
    let mut declared = 0;

    for (line_no, text) in reader.lines().enumerate() {
        let line = Line {
            path,
            number: line_no + 1,
        };
        let text = text.map_err(|e| line.read_error(e))?;
        let Some((tag, mut parts)) = parse::directive(&text) else {
            continue;
        };

        if tag == "newmtl" {
            let name = line.word(parts.next(), "newmtl")?;
            current = Some(mesh.add_material(Material::named(name)));
            declared += 1;
            continue;
        }

        let material = match current {
            Some(index) => mesh.material_mut(index),
            None => None,
        };
        let Some(material) = material else {
            if matches!(tag, "Ka" | "Kd" | "Ks" | "Ns" | "map_Kd") {
                log::debug!("{}:{}: '{}' before any newmtl, ignored", path.display(), line.number, tag);
            }
            continue;
        };

        match tag {
            "Ka" => material.ambient = line.vec3(&mut parts, "ambient")?,
            "Kd" => material.diffuse = line.vec3(&mut parts, "diffuse")?,
            "Ks" => material.specular = line.vec3(&mut parts, "specular")?,
            "Ns" => material.shininess = line.f32(parts.next(), "shininess")?,
            "map_Kd" => {
                let file = line.word(parts.next(), "map_Kd")?;
                material.diffuse_texture = Some(textures.get_or_load(&base_dir.join(file)));
            }
            _ => {
                // illum, Ni, d, Ke, other maps...
            }
        }
    }

    log::debug!("{}: {} material(s)", path.display(), declared);
    Ok(declared)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use glam::Vec3;

    use super::*;
    use crate::error::LoadError;

    fn parse(src: &str) -> LoadResult<Mesh> {
        let mut mesh = Mesh::new();
        let mut textures = TextureCache::new(false);
        parse_mtl_from_str(src, "models/lib/scene.mtl", &mut mesh, &mut textures)?;
        Ok(mesh)
    }

    #[test]
    fn unset_properties_keep_defaults() {
        let mesh = parse(
            r#"
            newmtl A
            Kd 1 0 0
            newmtl B
            Ns 12.5
        "#,
        )
        .unwrap();
        let m = mesh.materials();
        assert_eq!(m.len(), 2);
        assert_eq!(m[0].name, "A");
        assert_eq!(m[0].diffuse, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(m[1].diffuse, Vec3::ZERO);
        assert_eq!(m[1].ambient, Vec3::ZERO);
        assert_eq!(m[1].shininess, 12.5);
        assert!(m[1].diffuse_texture.is_none());
    }

    #[test]
    fn every_newmtl_opens_an_empty_submesh() {
        let mesh = parse("newmtl A\nnewmtl B\nnewmtl C\n").unwrap();
        assert_eq!(mesh.submeshes().len(), 3);
        assert!(mesh.submeshes().iter().all(|s| s.is_empty()));
        assert_eq!(mesh.material(&mesh.submeshes()[2]).name, "C");
    }

    #[test]
    fn properties_before_newmtl_are_ignored() {
        let mesh = parse("Kd 1 1 1\nNs 4\nmap_Kd a.png\nnewmtl A\n").unwrap();
        assert_eq!(mesh.materials()[0].diffuse, Vec3::ZERO);
        assert!(mesh.materials()[0].diffuse_texture.is_none());
    }

    #[test]
    fn texture_path_is_relative_to_library() {
        let mesh = parse("newmtl A\nmap_Kd tex/a.png\nnewmtl B\nmap_Kd tex/a.png\n").unwrap();
        let a = mesh.materials()[0].diffuse_texture.as_ref().unwrap();
        let b = mesh.materials()[1].diffuse_texture.as_ref().unwrap();
        assert_eq!(a.path, Path::new("models/lib/tex/a.png"));
        assert!(Arc::ptr_eq(a, b));
    }

    #[test]
    fn full_phong_block() {
        let mesh = parse(
            "newmtl Body\nKa 0.1 0.2 0.3\nKd 0.4 0.5 0.6\nKs 0.7 0.8 0.9\nNs 32\nillum 2\n",
        )
        .unwrap();
        let m = &mesh.materials()[0];
        assert_eq!(m.ambient, Vec3::new(0.1, 0.2, 0.3));
        assert_eq!(m.diffuse, Vec3::new(0.4, 0.5, 0.6));
        assert_eq!(m.specular, Vec3::new(0.7, 0.8, 0.9));
        assert_eq!(m.shininess, 32.0);
    }

    #[test]
    fn short_color_is_malformed_with_line() {
        let err = parse("newmtl A\n\nKs 1 1\n").unwrap_err();
        match err {
            LoadError::Malformed { line, message, .. } => {
                assert_eq!(line, 3);
                assert_eq!(message, "missing specular z");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn newmtl_without_name_is_malformed() {
        assert!(matches!(parse("newmtl\n"), Err(LoadError::Malformed { line: 1, .. })));
    }

    #[test]
    fn missing_library_is_file_not_found() {
        let mut mesh = Mesh::new();
        let mut textures = TextureCache::new(false);
        let err = load_mtl_from_path("no/such/lib.mtl", &mut mesh, &mut textures).unwrap_err();
        assert!(matches!(err, LoadError::FileNotFound { .. }));
    }
}
