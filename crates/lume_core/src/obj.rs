//! OBJ mesh import.
//!
//! Only positions and index triples are taken from the file; per-face
//! normals are always recomputed by `MeshData` so that face winding and
//! degenerate-face handling stay consistent with the rest of the crate.

use std::path::Path;

use lume_math::Vec3;

use crate::mesh::{MeshData, MeshError};

/// Load the first model of an OBJ file as mesh data.
///
/// Faces are triangulated on load. Normals and UVs in the file are
/// ignored; the mesh derives its own per-face normals.
pub fn load_obj<P: AsRef<Path>>(path: P) -> Result<MeshData, MeshError> {
    let (models, _materials) = tobj::load_obj(
        path.as_ref(),
        &tobj::LoadOptions {
            single_index: true,
            triangulate: true,
            ..Default::default()
        },
    )?;

    let model = models.first().ok_or(MeshError::NoGeometry)?;
    let mesh = &model.mesh;

    let positions: Vec<Vec3> = mesh
        .positions
        .chunks_exact(3)
        .map(|p| Vec3::new(p[0], p[1], p[2]))
        .collect();

    log::info!(
        "Loaded OBJ {:?}: {} vertices, {} indices",
        path.as_ref(),
        positions.len(),
        mesh.indices.len()
    );

    MeshData::new(positions, mesh.indices.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp_obj(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_simple_obj() {
        let path = write_temp_obj(
            "lume_core_quad.obj",
            "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3\nf 1 3 4\n",
        );

        let mesh = load_obj(&path).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.face_normals.len(), 2);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_obj("definitely/not/a/real/path.obj");
        assert!(result.is_err());
    }
}
