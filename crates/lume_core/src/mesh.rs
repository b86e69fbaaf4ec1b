//! Base-space mesh data for triangle mesh rendering.
//!
//! Positions and index triples live here untransformed; the renderer
//! derives world-space buffers from this data plus an instance transform.

use lume_math::{Aabb, Vec3};
use thiserror::Error;

/// Errors raised while building or importing mesh data.
///
/// All shape validation happens here, at build time. Hit tests assume
/// valid index triples and never re-check per ray.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("OBJ load error: {0}")]
    Obj(#[from] tobj::LoadError),

    #[error("No geometry found in file")]
    NoGeometry,

    #[error("Index count {0} is not divisible into triples")]
    IndexCount(usize),

    #[error("Index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },
}

/// Triangle mesh data in base (model) space.
///
/// Index triples wind counter-clockwise. Face normals are precomputed,
/// one per triple, with degenerate faces resolved to a safe default.
#[derive(Clone, Debug)]
pub struct MeshData {
    /// Vertex positions (one Vec3 per vertex)
    pub positions: Vec<Vec3>,

    /// Per-face normals (one per index triple, unit length)
    pub face_normals: Vec<Vec3>,

    /// Triangle indices (every 3 indices form a triangle, CCW)
    pub indices: Vec<u32>,

    /// Axis-aligned bounding box of the base-space positions
    pub bounds: Aabb,
}

impl MeshData {
    /// Build mesh data from positions and index triples.
    ///
    /// Validates the index buffer and precomputes per-face normals.
    /// Zero-area faces get a default +Y normal instead of a NaN.
    pub fn new(positions: Vec<Vec3>, indices: Vec<u32>) -> Result<Self, MeshError> {
        if indices.len() % 3 != 0 {
            return Err(MeshError::IndexCount(indices.len()));
        }
        for &index in &indices {
            if index as usize >= positions.len() {
                return Err(MeshError::IndexOutOfRange {
                    index,
                    vertex_count: positions.len(),
                });
            }
        }

        let face_normals = compute_face_normals(&positions, &indices);
        let bounds = Aabb::from_point_cloud(&positions);

        Ok(Self {
            positions,
            face_normals,
            indices,
            bounds,
        })
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the mesh center (center of bounding box).
    pub fn center(&self) -> Vec3 {
        self.bounds.centroid()
    }
}

/// Compute per-face normals from CCW index triples.
///
/// A degenerate face (colinear or duplicated vertices) would normalize
/// to NaN; those are replaced with +Y and reported at debug level.
fn compute_face_normals(positions: &[Vec3], indices: &[u32]) -> Vec<Vec3> {
    let mut normals = Vec::with_capacity(indices.len() / 3);
    let mut degenerate = 0usize;

    for face in indices.chunks_exact(3) {
        let p0 = positions[face[0] as usize];
        let p1 = positions[face[1] as usize];
        let p2 = positions[face[2] as usize];

        let edge1 = p1 - p0;
        let edge2 = p2 - p0;
        let cross = edge1.cross(edge2);

        let len = cross.length();
        if len > 1e-12 && len.is_finite() {
            normals.push(cross / len);
        } else {
            degenerate += 1;
            normals.push(Vec3::Y);
        }
    }

    if degenerate > 0 {
        log::debug!(
            "Replaced {} degenerate face normal(s) with default +Y",
            degenerate
        );
    }

    normals
}
