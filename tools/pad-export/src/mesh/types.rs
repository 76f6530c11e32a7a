//! Types for mesh conversion

/// A parsed vertex position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A triangular face, holding 1-based indices into the vertex list
///
/// Indices stay 1-based as parsed; the serializer decrements them when
/// writing the wire stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    pub v0: u32,
    pub v1: u32,
    pub v2: u32,
}

/// A texture coordinate
///
/// `v` is stored origin-flipped (`1.0 - source`): OBJ uses a bottom-left
/// texture origin, the renderer samples from the top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvCoord {
    pub u: f64,
    pub v: f64,
}

/// Per-face texture-coordinate indices (1-based, into the uv-coord list)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UvFace {
    pub vt0: u32,
    pub vt1: u32,
    pub vt2: u32,
}

/// Result of parsing one OBJ source
///
/// All sequences are in encounter order, which is semantically significant:
/// faces reference vertices (and uv-faces reference uv-coords) by that
/// order. `uv_faces` is populated iff every face statement carried a
/// texture-coordinate component; the parser rejects mixed meshes. Built once
/// per run and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct ObjMesh {
    /// Vertex positions
    pub vertices: Vec<Vertex>,
    /// Triangular faces (1-based vertex indices)
    pub faces: Vec<Face>,
    /// Per-face uv indices, empty for unmapped meshes
    pub uv_faces: Vec<UvFace>,
    /// Texture coordinates, empty for unmapped meshes
    pub uv_coords: Vec<UvCoord>,
}

impl ObjMesh {
    /// Whether the mesh carries texture-coordinate data
    pub fn has_uvs(&self) -> bool {
        !self.uv_faces.is_empty()
    }
}
