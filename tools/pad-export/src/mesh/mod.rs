//! Mesh converter (OBJ -> .pcobj)

mod error;
mod obj;
mod types;

// Re-export public API
pub use error::ObjParseError;
pub use obj::{convert_obj, parse_obj};
pub use types::{Face, ObjMesh, UvCoord, UvFace, Vertex};
