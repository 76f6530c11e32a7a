//! OBJ mesh conversion

use super::error::ObjParseError;
use super::types::{Face, ObjMesh, UvCoord, UvFace, Vertex};
use anyhow::{Context, Result};
use std::fs;
use std::io::BufWriter;
use std::path::Path;

use crate::formats::write_pcobj_mesh;
use pad_common::DualEndianWriter;

/// Convert an OBJ file to a pair of PCObj outputs
///
/// `calc_out` receives the big-endian stream for the calculator, `host_out`
/// the little-endian mirror. Parsing finishes before either output file is
/// created, so a malformed source never leaves files behind; if emission
/// itself fails, both outputs are deleted before the error propagates.
pub fn convert_obj(input: &Path, calc_out: &Path, host_out: &Path) -> Result<()> {
    let source = fs::read_to_string(input)
        .with_context(|| format!("Failed to read OBJ: {:?}", input))?;

    let mesh =
        parse_obj(&source).with_context(|| format!("Failed to parse OBJ: {:?}", input))?;

    if let Err(e) = write_outputs(&mesh, calc_out, host_out) {
        // Neither half of a failed pair is usable.
        let _ = fs::remove_file(calc_out);
        let _ = fs::remove_file(host_out);
        return Err(e);
    }

    tracing::info!(
        "Converted OBJ mesh: {} vertices, {} faces, {} uv coords -> {:?} + {:?}",
        mesh.vertices.len(),
        mesh.faces.len(),
        mesh.uv_coords.len(),
        calc_out,
        host_out
    );

    Ok(())
}

fn write_outputs(mesh: &ObjMesh, calc_out: &Path, host_out: &Path) -> Result<()> {
    let calc = fs::File::create(calc_out)
        .with_context(|| format!("Failed to create output: {:?}", calc_out))?;
    let host = fs::File::create(host_out)
        .with_context(|| format!("Failed to create output: {:?}", host_out))?;

    let mut writer = DualEndianWriter::new(BufWriter::new(calc), BufWriter::new(host));
    write_pcobj_mesh(&mut writer, mesh)?;
    writer.flush()?;
    Ok(())
}

/// Parse OBJ source text into an in-memory mesh record
///
/// Single forward pass over the materialized input. Unrecognized directives
/// (comments, `vn`, `o`, `usemtl`, ...) are ignored; a malformed recognized
/// statement fails the whole parse.
pub fn parse_obj(source: &str) -> Result<ObjMesh, ObjParseError> {
    let mut mesh = ObjMesh::default();
    // None until the first face decides whether this mesh is uv-mapped.
    let mut uv_mapped: Option<bool> = None;

    for (idx, raw_line) in source.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix("v ") {
            mesh.vertices.push(parse_vertex(rest, line_no)?);
        } else if let Some(rest) = line.strip_prefix("vt") {
            mesh.uv_coords.push(parse_uv(rest, line_no)?);
        } else if let Some(rest) = line.strip_prefix("f ") {
            let (face, uv_face) = parse_face(rest, line_no)?;

            let has_uv = uv_face.is_some();
            match uv_mapped {
                None => uv_mapped = Some(has_uv),
                Some(expected) if expected != has_uv => {
                    return Err(ObjParseError::MixedUvMapping { line: line_no });
                }
                Some(_) => {}
            }

            mesh.faces.push(face);
            if let Some(uv_face) = uv_face {
                mesh.uv_faces.push(uv_face);
            }
        }
    }

    if mesh.vertices.is_empty() {
        return Err(ObjParseError::NoVertices);
    }

    Ok(mesh)
}

fn parse_vertex(rest: &str, line: usize) -> Result<Vertex, ObjParseError> {
    let tokens: Vec<&str> = rest.split_whitespace().collect();
    if tokens.len() != 3 {
        return Err(ObjParseError::VertexArity {
            line,
            got: tokens.len(),
        });
    }
    Ok(Vertex {
        x: parse_float(tokens[0], line)?,
        y: parse_float(tokens[1], line)?,
        z: parse_float(tokens[2], line)?,
    })
}

fn parse_uv(rest: &str, line: usize) -> Result<UvCoord, ObjParseError> {
    let tokens: Vec<&str> = rest.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err(ObjParseError::UvArity {
            line,
            got: tokens.len(),
        });
    }
    // OBJ uses a bottom-left texture origin, the renderer a top-left one.
    Ok(UvCoord {
        u: parse_float(tokens[0], line)?,
        v: 1.0 - parse_float(tokens[1], line)?,
    })
}

fn parse_face(rest: &str, line: usize) -> Result<(Face, Option<UvFace>), ObjParseError> {
    let tokens: Vec<&str> = rest.split_whitespace().collect();
    if tokens.len() != 3 {
        return Err(ObjParseError::FaceArity {
            line,
            got: tokens.len(),
        });
    }

    let mut verts = [0u32; 3];
    let mut uvs = [None; 3];
    for (i, token) in tokens.iter().enumerate() {
        let (vi, vti) = parse_face_vertex(token, line)?;
        verts[i] = vi;
        uvs[i] = vti;
    }

    let face = Face {
        v0: verts[0],
        v1: verts[1],
        v2: verts[2],
    };
    let uv_face = match uvs {
        [Some(vt0), Some(vt1), Some(vt2)] => Some(UvFace { vt0, vt1, vt2 }),
        [None, None, None] => None,
        _ => return Err(ObjParseError::MixedUvMapping { line }),
    };

    Ok((face, uv_face))
}

/// Parse one face-vertex reference: "v", "v/vt", "v/vt/vn", or "v//vn"
///
/// The normal index, if present, must still parse; it is then discarded.
fn parse_face_vertex(token: &str, line: usize) -> Result<(u32, Option<u32>), ObjParseError> {
    let mut fields = token.split('/');

    let vi = parse_index(fields.next().unwrap_or(""), line)?;

    let vti = match fields.next() {
        Some("") | None => None,
        Some(field) => Some(parse_index(field, line)?),
    };

    if let Some(field) = fields.next() {
        if !field.is_empty() {
            parse_index(field, line)?;
        }
    }

    Ok((vi, vti))
}

fn parse_float(token: &str, line: usize) -> Result<f64, ObjParseError> {
    token.parse().map_err(|_| ObjParseError::InvalidFloat {
        line,
        token: token.to_string(),
    })
}

fn parse_index(token: &str, line: usize) -> Result<u32, ObjParseError> {
    match token.parse::<u32>() {
        Ok(idx) if idx >= 1 => Ok(idx),
        _ => Err(ObjParseError::InvalidIndex {
            line,
            token: token.to_string(),
        }),
    }
}
