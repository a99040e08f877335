use std::path::{Path, PathBuf};

use asset::{LoadError, LoadOptions, LoadWarning, Mesh, load_obj_from_path};
use glam::Vec3;

fn model(rel: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets").join(rel)
}

fn assert_index_invariants(mesh: &Mesh) {
    let total: usize = mesh.submeshes().iter().map(|s| s.indices.len()).sum();
    assert_eq!(mesh.triangle_count() * 3, total);
    let n = mesh.vertex_count() as u32;
    for submesh in mesh.submeshes() {
        assert!(submesh.indices.iter().all(|&i| i < n));
    }
}

fn close(a: [f32; 3], b: [f32; 3]) -> bool {
    a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-6)
}

#[test]
fn textured_cube_loads_with_submeshes_per_material() {
    let load = load_obj_from_path(model("texcube/TexCube.obj"), &LoadOptions::default()).unwrap();
    let mesh = &load.mesh;
    assert!(load.warnings.is_empty());
    assert_index_invariants(mesh);

    assert_eq!(mesh.vertex_count(), 24);
    assert_eq!(mesh.triangle_count(), 12);

    let names: Vec<_> = mesh.materials().iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["Wood", "Metal", "Unused"]);
    let tris: Vec<_> = mesh.submeshes().iter().map(|s| s.triangle_count()).collect();
    assert_eq!(tris, [8, 4, 0]);

    let metal = &mesh.materials()[1];
    assert_eq!(metal.shininess, 96.0);
    assert_eq!(metal.specular, Vec3::splat(0.9));
    assert!(metal.diffuse_texture.is_none());
}

#[test]
fn textured_cube_decodes_its_diffuse_map() {
    let load = load_obj_from_path(model("texcube/TexCube.obj"), &LoadOptions::default()).unwrap();
    let texture = load.mesh.materials()[0].diffuse_texture.as_ref().unwrap();
    assert_eq!(texture.path, model("texcube/textures/checker.png"));
    let data = texture.data.as_ref().expect("checker.png decodes");
    assert_eq!((data.width, data.height), (2, 2));
    assert!(data.is_valid());
    assert_eq!(&data.data[..4], &[255, 255, 255, 255]);
}

#[test]
fn textured_cube_is_normalized() {
    let load = load_obj_from_path(model("texcube/TexCube.obj"), &LoadOptions::default()).unwrap();
    let mesh = &load.mesh;
    assert_eq!(mesh.center, Vec3::new(1.0, 2.0, 1.0));
    assert_eq!(mesh.extent, Vec3::new(2.0, 4.0, 2.0));
    // Second face, third corner is the (2,4,2) corner.
    assert!(close(mesh.vertices[6].position, [0.25, 0.5, 0.25]));
    for v in &mesh.vertices {
        assert!(v.position.iter().all(|c| c.abs() <= 0.5 + 1e-6));
    }
}

#[test]
fn raw_load_keeps_file_coordinates() {
    let options = LoadOptions::default().with_normalize(false).with_textures(false);
    let load = load_obj_from_path(model("texcube/TexCube.obj"), &options).unwrap();
    assert_eq!(load.mesh.vertices[6].position, [2.0, 4.0, 2.0]);
    assert_eq!(load.mesh.center, Vec3::ZERO);
    let texture = load.mesh.materials()[0].diffuse_texture.as_ref().unwrap();
    assert!(!texture.is_loaded());
}

#[test]
fn usemtl_before_mtllib_drops_faces_and_warns() {
    let load = load_obj_from_path(model("late_mtllib/Quad.obj"), &LoadOptions::default()).unwrap();
    assert_index_invariants(&load.mesh);
    assert_eq!(load.mesh.vertex_count(), 7);
    assert_eq!(load.mesh.triangle_count(), 1);
    assert_eq!(load.mesh.submeshes()[0].indices, vec![4, 5, 6]);
    assert_eq!(
        load.warnings,
        vec![LoadWarning::UnresolvedMaterial {
            line: 8,
            name: "Paint".into(),
            dropped_triangles: 2,
        }]
    );
    // Missing texture file does not fail the load.
    let texture = load.mesh.materials()[0].diffuse_texture.as_ref().unwrap();
    assert!(!texture.is_loaded());
}

#[test]
fn strict_materials_fail_fast() {
    let options = LoadOptions::default().with_strict_materials(true);
    let err = load_obj_from_path(model("late_mtllib/Quad.obj"), &options).unwrap_err();
    assert!(matches!(err, LoadError::UnresolvedMaterial { line: 8, .. }));
}

#[test]
fn missing_library_fails_the_load() {
    let err = load_obj_from_path(model("late_mtllib/NoLibrary.obj"), &LoadOptions::default())
        .unwrap_err();
    match err {
        LoadError::FileNotFound { path, .. } => {
            assert_eq!(path, model("late_mtllib/DoesNotExist.mtl"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn mtllib_loads_every_listed_library_in_order() {
    let options = LoadOptions::default().with_normalize(false);
    let load = load_obj_from_path(model("two_libs/Pair.obj"), &options).unwrap();
    let mesh = &load.mesh;
    assert!(load.warnings.is_empty());
    assert_index_invariants(mesh);

    let names: Vec<_> = mesh.materials().iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["Shared", "OnlyFirst", "Shared", "OnlySecond"]);
    assert_eq!(mesh.submeshes().len(), 4);

    // The first library's "Shared" wins.
    let tris: Vec<_> = mesh.submeshes().iter().map(|s| s.triangle_count()).collect();
    assert_eq!(tris, [1, 0, 0, 1]);
    assert_eq!(mesh.material(&mesh.submeshes()[0]).diffuse, Vec3::X);
    assert_eq!(mesh.submeshes()[3].indices, vec![3, 4, 5]);
}
