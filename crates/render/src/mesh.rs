use blake3::Hasher;

/// Hash of the combined vertex/index buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHash(pub [u8; 32]);

impl MeshHash {
    /// Lower-case hex rendering used in metrics.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|byte| format!("{byte:02x}")).collect()
    }
}

/// Packed vertex layout produced by the mesher.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    /// Position in world coordinates.
    pub position: [f32; 3],
    /// Texture coordinates on the terrain sheet.
    pub uv: [f32; 2],
}

/// Output mesh buffers for one cache slot.
#[derive(Debug, Clone)]
pub struct MeshBuffers {
    /// Vertex buffer in emission order.
    pub vertices: Vec<MeshVertex>,
    /// Index buffer (triangle list).
    pub indices: Vec<u32>,
    /// Stable hash of the vertex + index buffers for cache comparisons.
    pub hash: MeshHash,
}

impl MeshBuffers {
    /// Construct an empty mesh (useful for initialization).
    pub fn empty() -> Self {
        MeshBuilder::new().finish()
    }

    /// Number of triangles in the index buffer.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of quads, counting each pair of triangles as one.
    pub fn quad_count(&self) -> usize {
        self.triangle_count() / 2
    }

    /// True when nothing was emitted.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Accumulates triangle strips and expands them into an indexed triangle list.
#[derive(Debug)]
pub(crate) struct MeshBuilder {
    vertices: Vec<MeshVertex>,
    indices: Vec<u32>,
}

impl MeshBuilder {
    pub(crate) fn new() -> Self {
        Self {
            vertices: Vec::with_capacity(1024),
            indices: Vec::with_capacity(1024 * 6 / 4),
        }
    }

    /// Append a triangle strip, preserving the winding of every triangle.
    pub(crate) fn push_strip(&mut self, strip: &[MeshVertex]) {
        if strip.len() < 3 {
            return;
        }
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(strip);
        for i in 0..strip.len() as u32 - 2 {
            let (a, b) = if i % 2 == 0 { (i, i + 1) } else { (i + 1, i) };
            self.indices
                .extend_from_slice(&[base + a, base + b, base + i + 2]);
        }
    }

    pub(crate) fn finish(self) -> MeshBuffers {
        let MeshBuilder { vertices, indices } = self;
        let mut hasher = Hasher::new();
        hasher.update(bytemuck::cast_slice(&vertices));
        hasher.update(bytemuck::cast_slice(&indices));
        MeshBuffers {
            vertices,
            indices,
            hash: MeshHash(*hasher.finalize().as_bytes()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertex(x: f32) -> MeshVertex {
        MeshVertex {
            position: [x, 0.0, 0.0],
            uv: [0.0, 0.0],
        }
    }

    #[test]
    fn strips_expand_with_alternating_winding() {
        let mut builder = MeshBuilder::new();
        builder.push_strip(&[vertex(0.0), vertex(1.0), vertex(2.0), vertex(3.0)]);
        builder.push_strip(&[vertex(4.0), vertex(5.0), vertex(6.0), vertex(7.0), vertex(8.0), vertex(9.0)]);
        let mesh = builder.finish();
        assert_eq!(mesh.vertices.len(), 10);
        assert_eq!(&mesh.indices[..6], &[0, 1, 2, 2, 1, 3]);
        assert_eq!(&mesh.indices[6..9], &[4, 5, 6]);
        assert_eq!(mesh.triangle_count(), 6);
        assert_eq!(mesh.quad_count(), 3);
    }

    #[test]
    fn degenerate_strips_are_ignored() {
        let mut builder = MeshBuilder::new();
        builder.push_strip(&[vertex(0.0), vertex(1.0)]);
        let mesh = builder.finish();
        assert!(mesh.is_empty());
        assert!(mesh.vertices.is_empty());
        assert_eq!(mesh.hash, MeshBuffers::empty().hash);
    }

    #[test]
    fn hash_tracks_content() {
        let mut a = MeshBuilder::new();
        a.push_strip(&[vertex(0.0), vertex(1.0), vertex(2.0)]);
        let mut b = MeshBuilder::new();
        b.push_strip(&[vertex(0.0), vertex(1.0), vertex(2.5)]);
        assert_ne!(a.finish().hash, b.finish().hash);
        assert_eq!(MeshHash([0xab; 32]).to_hex().len(), 64);
    }
}
