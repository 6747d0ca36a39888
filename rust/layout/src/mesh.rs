// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mesh realization of box primitives
//!
//! The layout core stays engine-agnostic: anything that can realize a
//! primitive sequence implements [`PrimitiveConsumer`]. The built-in
//! [`MeshCollector`] realizes primitives as triangle meshes grouped per
//! kind, so a renderer can apply one material per kind.

use rustc_hash::FxHashMap;

use crate::types::{Primitive, PrimitiveKind};

/// Triangle mesh
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions (x, y, z)
    pub positions: Vec<f32>,
    /// Vertex normals (nx, ny, nz)
    pub normals: Vec<f32>,
    /// Triangle indices (i0, i1, i2)
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Append another mesh, rebasing its indices
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertex_count() as u32;
        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);
        self.indices.extend(other.indices.iter().map(|i| i + offset));
    }
}

/// Realize a primitive as a 24-vertex, 12-triangle box mesh.
///
/// Per-face normals, counter-clockwise winding viewed from outside.
pub fn box_mesh(primitive: &Primitive) -> Mesh {
    let min = primitive.min_corner();
    let max = primitive.max_corner();
    let (x0, y0, z0) = (min.x as f32, min.y as f32, min.z as f32);
    let (x1, y1, z1) = (max.x as f32, max.y as f32, max.z as f32);

    // Four corners per face, CCW viewed from outside
    let faces: [([[f32; 3]; 4], [f32; 3]); 6] = [
        // +X
        (
            [[x1, y0, z1], [x1, y0, z0], [x1, y1, z0], [x1, y1, z1]],
            [1.0, 0.0, 0.0],
        ),
        // -X
        (
            [[x0, y0, z0], [x0, y0, z1], [x0, y1, z1], [x0, y1, z0]],
            [-1.0, 0.0, 0.0],
        ),
        // +Y (top)
        (
            [[x0, y1, z1], [x1, y1, z1], [x1, y1, z0], [x0, y1, z0]],
            [0.0, 1.0, 0.0],
        ),
        // -Y (bottom)
        (
            [[x0, y0, z0], [x1, y0, z0], [x1, y0, z1], [x0, y0, z1]],
            [0.0, -1.0, 0.0],
        ),
        // +Z
        (
            [[x0, y0, z1], [x1, y0, z1], [x1, y1, z1], [x0, y1, z1]],
            [0.0, 0.0, 1.0],
        ),
        // -Z
        (
            [[x1, y0, z0], [x0, y0, z0], [x0, y1, z0], [x1, y1, z0]],
            [0.0, 0.0, -1.0],
        ),
    ];

    let mut mesh = Mesh {
        positions: Vec::with_capacity(24 * 3),
        normals: Vec::with_capacity(24 * 3),
        indices: Vec::with_capacity(12 * 3),
    };

    for (corners, normal) in &faces {
        let base = mesh.vertex_count() as u32;
        for corner in corners {
            mesh.positions.extend_from_slice(corner);
            mesh.normals.extend_from_slice(normal);
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    mesh
}

/// Capability to realize a primitive sequence as renderable objects.
///
/// The layout core emits primitives; the rendering side of the seam
/// decides how boxes become meshes, scene nodes or draw calls.
pub trait PrimitiveConsumer {
    fn consume(&mut self, primitive: &Primitive);

    fn consume_all<'a, I>(&mut self, primitives: I)
    where
        I: IntoIterator<Item = &'a Primitive>,
    {
        for primitive in primitives {
            self.consume(primitive);
        }
    }
}

/// Collects primitives into one merged mesh per kind
#[derive(Debug, Default)]
pub struct MeshCollector {
    meshes: FxHashMap<PrimitiveKind, Mesh>,
    primitive_count: usize,
}

impl MeshCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merged mesh for a kind, if any primitive of that kind was consumed
    pub fn mesh(&self, kind: PrimitiveKind) -> Option<&Mesh> {
        self.meshes.get(&kind)
    }

    /// Number of primitives consumed
    pub fn primitive_count(&self) -> usize {
        self.primitive_count
    }

    /// Kinds with geometry, in the stable `PrimitiveKind::ALL` order
    pub fn kinds(&self) -> impl Iterator<Item = PrimitiveKind> + '_ {
        PrimitiveKind::ALL
            .into_iter()
            .filter(|kind| self.meshes.contains_key(kind))
    }
}

impl PrimitiveConsumer for MeshCollector {
    fn consume(&mut self, primitive: &Primitive) {
        let mesh = box_mesh(primitive);
        self.meshes
            .entry(primitive.kind)
            .or_default()
            .merge(&mesh);
        self.primitive_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point3D;
    use approx::assert_relative_eq;

    fn unit_box() -> Primitive {
        Primitive::new(
            "unit",
            PrimitiveKind::WallSegment,
            2.0,
            4.0,
            6.0,
            Point3D::new(0.0, 2.0, 0.0),
        )
    }

    #[test]
    fn test_box_mesh_counts() {
        let mesh = box_mesh(&unit_box());
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.triangle_count(), 12);
        assert_eq!(mesh.positions.len(), mesh.normals.len());
    }

    #[test]
    fn test_box_mesh_extents() {
        let mesh = box_mesh(&unit_box());
        let (mut min, mut max) = ([f32::MAX; 3], [f32::MIN; 3]);
        for v in mesh.positions.chunks_exact(3) {
            for axis in 0..3 {
                min[axis] = min[axis].min(v[axis]);
                max[axis] = max[axis].max(v[axis]);
            }
        }
        assert_relative_eq!(max[0] - min[0], 2.0);
        assert_relative_eq!(max[1] - min[1], 4.0);
        assert_relative_eq!(max[2] - min[2], 6.0);
        assert_relative_eq!(min[1], 0.0);
    }

    #[test]
    fn test_box_mesh_normals_unit_length() {
        let mesh = box_mesh(&unit_box());
        for n in mesh.normals.chunks_exact(3) {
            let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert_relative_eq!(len, 1.0);
        }
    }

    #[test]
    fn test_merge_rebases_indices() {
        let mut mesh = box_mesh(&unit_box());
        mesh.merge(&box_mesh(&unit_box()));
        assert_eq!(mesh.vertex_count(), 48);
        assert_eq!(mesh.triangle_count(), 24);
        assert_eq!(*mesh.indices.iter().max().unwrap(), 47);
    }

    #[test]
    fn test_collector_groups_by_kind() {
        let mut collector = MeshCollector::new();
        collector.consume(&unit_box());
        collector.consume(&Primitive::new(
            "slab",
            PrimitiveKind::FloorSlab,
            10.0,
            0.2,
            10.0,
            Point3D::new(0.0, 0.0, 0.0),
        ));
        collector.consume(&unit_box());

        assert_eq!(collector.primitive_count(), 3);
        let walls = collector.mesh(PrimitiveKind::WallSegment).unwrap();
        assert_eq!(walls.triangle_count(), 24);
        let slabs = collector.mesh(PrimitiveKind::FloorSlab).unwrap();
        assert_eq!(slabs.triangle_count(), 12);
        assert!(collector.mesh(PrimitiveKind::PoolBasin).is_none());

        let kinds: Vec<_> = collector.kinds().collect();
        assert_eq!(
            kinds,
            vec![PrimitiveKind::WallSegment, PrimitiveKind::FloorSlab]
        );
    }
}
