//! Binary format definitions for PCObj asset files

pub mod mesh;

pub use mesh::PcObjMeshHeader;
