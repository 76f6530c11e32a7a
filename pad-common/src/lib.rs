//! pad-common - Shared types for padforge asset tools
//!
//! Binary format definitions and the dual-endian output path used by the
//! export pipeline. The calculator consumes the big-endian files; host-side
//! preview tools read the little-endian mirror.

pub mod dual;
pub mod formats;

pub use dual::DualEndianWriter;
pub use formats::mesh::PcObjMeshHeader;

/// Extension for the calculator (big-endian) mesh output
pub const MESH_EXT_CALC: &str = "calc.pcobj";

/// Extension for the host (little-endian) mesh output
pub const MESH_EXT_HOST: &str = "host.pcobj";
