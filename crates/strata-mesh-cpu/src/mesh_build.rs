use strata_geom::Vec3;

/// Flat mesh buffers in GPU-upload layout: `positions`/`normals` hold one
/// 3-tuple per vertex, `uvs` one 2-tuple, `indices` two triangles per quad.
/// The three vertex buffers stay in lockstep by construction.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct MeshData {
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
    pub uvs: Vec<f32>,
    pub indices: Vec<u32>,
}

impl MeshData {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    #[inline]
    pub fn quad_count(&self) -> usize {
        self.indices.len() / 6
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Pre-reserve capacity for approximately `n_quads` quads worth of data.
    pub fn reserve_quads(&mut self, n_quads: usize) {
        self.positions.reserve(n_quads * 4 * 3);
        self.normals.reserve(n_quads * 4 * 3);
        self.uvs.reserve(n_quads * 4 * 2);
        self.indices.reserve(n_quads * 6);
    }

    /// Appends one quad: four vertices sharing `normal`, explicit per-vertex
    /// UVs, and triangles `(0,1,2)` `(0,2,3)` relative to the new vertices.
    /// Callers supply corners already wound counter-clockwise seen from
    /// outside the face.
    pub fn add_quad(&mut self, corners: [Vec3; 4], normal: Vec3, uvs: [(f32, f32); 4]) {
        let base = (self.positions.len() / 3) as u32;
        let n = normal.to_array();
        for i in 0..4 {
            self.positions.extend_from_slice(&corners[i].to_array());
            self.normals.extend_from_slice(&n);
            self.uvs.extend_from_slice(&[uvs[i].0, uvs[i].1]);
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}
