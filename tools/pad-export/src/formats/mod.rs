//! Binary serialization for PCObj mesh files
//!
//! See `pad_common::formats::mesh` for the layout. The field order here is
//! the format contract consumed by the calculator renderer and must not be
//! reordered or padded.

use anyhow::{Context, Result};
use pad_common::{DualEndianWriter, PcObjMeshHeader};
use pad_fix16::encode_fix16;
use std::io::Write;

use crate::mesh::ObjMesh;

/// Write a complete PCObj mesh to both endian sinks
///
/// Emits, in order: the four counts, Q16.16 vertex coordinates, 0-based
/// face indices, 0-based uv-face indices, Q16.16 uv coordinates. Every word
/// goes through the dual writer's single emission point, so the calculator
/// and host files stay in lock-step even when a write fails partway.
pub fn write_pcobj_mesh<B: Write, L: Write>(
    w: &mut DualEndianWriter<B, L>,
    mesh: &ObjMesh,
) -> Result<()> {
    let header = PcObjMeshHeader::new(
        mesh.vertices.len() as u32,
        mesh.faces.len() as u32,
        mesh.uv_faces.len() as u32,
        mesh.uv_coords.len() as u32,
    );
    header.write_to(w)?;

    for (i, v) in mesh.vertices.iter().enumerate() {
        for value in [v.x, v.y, v.z] {
            let raw =
                encode_fix16(value).with_context(|| format!("vertex {} out of Q16.16 range", i))?;
            w.write_u32(raw)?;
        }
    }

    for f in &mesh.faces {
        // 1-based in the source, 0-based on the wire.
        w.write_u32(f.v0 - 1)?;
        w.write_u32(f.v1 - 1)?;
        w.write_u32(f.v2 - 1)?;
    }

    for uf in &mesh.uv_faces {
        w.write_u32(uf.vt0 - 1)?;
        w.write_u32(uf.vt1 - 1)?;
        w.write_u32(uf.vt2 - 1)?;
    }

    for (i, uv) in mesh.uv_coords.iter().enumerate() {
        for value in [uv.u, uv.v] {
            let raw = encode_fix16(value)
                .with_context(|| format!("uv coordinate {} out of Q16.16 range", i))?;
            w.write_u32(raw)?;
        }
    }

    Ok(())
}
