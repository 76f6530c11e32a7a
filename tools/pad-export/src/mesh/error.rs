//! Parse errors for the OBJ front end

use thiserror::Error;

/// Errors raised while parsing an OBJ source
///
/// Every variant is fatal for the whole parse; the converter never skips a
/// malformed line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ObjParseError {
    /// A coordinate token failed to parse as a float
    #[error("line {line}: invalid float literal \"{token}\"")]
    InvalidFloat { line: usize, token: String },

    /// An index token failed to parse as a positive integer
    #[error("line {line}: invalid index \"{token}\" (indices are 1-based)")]
    InvalidIndex { line: usize, token: String },

    /// A `v` statement without exactly three coordinates
    #[error("line {line}: vertex statement has {got} coordinates, expected 3")]
    VertexArity { line: usize, got: usize },

    /// A `vt` statement without exactly two values
    #[error("line {line}: texture-coordinate statement has {got} values, expected 2")]
    UvArity { line: usize, got: usize },

    /// A face statement without exactly three vertices
    ///
    /// Only triangulated meshes are supported; larger polygons must be
    /// triangulated before export.
    #[error("line {line}: face statement has {got} vertices, expected 3")]
    FaceArity { line: usize, got: usize },

    /// Some face vertices carry a texture-coordinate index and some do not
    #[error("line {line}: mixed texture mapping (all faces must agree on uv indices)")]
    MixedUvMapping { line: usize },

    /// The source contained no vertex statements
    #[error("no vertices found in OBJ source")]
    NoVertices,
}
