//! Integration tests for pad-export
//!
//! Tests the full pipeline: write an OBJ source -> convert -> verify both
//! binary outputs.

use byteorder::{BigEndian, LittleEndian};
use pad_common::PcObjMeshHeader;
use std::path::Path;
use tempfile::tempdir;

/// Test OBJ -> PCObj conversion of a single triangle, byte for byte
#[test]
fn test_triangle_obj_exact_bytes() {
    let dir = tempdir().expect("Failed to create temp dir");
    let obj_path = dir.path().join("triangle.obj");
    let calc_path = dir.path().join("triangle.calc.pcobj");
    let host_path = dir.path().join("triangle.host.pcobj");

    std::fs::write(
        &obj_path,
        "v 0.0 0.0 0.0\nv 1.0 0.0 0.0\nv 0.0 1.0 0.0\nf 1 2 3\n",
    )
    .expect("Failed to write OBJ");

    pad_export_convert_mesh(&obj_path, &calc_path, &host_path);
    assert!(calc_path.exists(), "Calculator file should exist");
    assert!(host_path.exists(), "Host file should exist");

    let calc = std::fs::read(&calc_path).expect("Failed to read calculator file");
    let host = std::fs::read(&host_path).expect("Failed to read host file");

    let words: Vec<u32> = vec![
        3, 1, 0, 0, // counts
        0x0000_0000, 0x0000_0000, 0x0000_0000, // v1
        0x0001_0000, 0x0000_0000, 0x0000_0000, // v2
        0x0000_0000, 0x0001_0000, 0x0000_0000, // v3
        0, 1, 2, // face, zero-based
    ];
    let expected_calc: Vec<u8> = words.iter().flat_map(|w| w.to_be_bytes()).collect();
    let expected_host: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
    assert_eq!(calc, expected_calc);
    assert_eq!(host, expected_host);

    // Header readback in each file's byte order.
    let calc_header = PcObjMeshHeader::from_bytes::<BigEndian>(&calc).unwrap();
    assert_eq!(calc_header.vertex_count, 3);
    assert_eq!(calc_header.face_count, 1);
    assert_eq!(calc_header.uv_face_count, 0);
    assert_eq!(calc_header.uv_coord_count, 0);

    let host_header = PcObjMeshHeader::from_bytes::<LittleEndian>(&host).unwrap();
    assert_eq!(host_header.vertex_count, 3);
    assert_eq!(host_header.face_count, 1);
}

/// Test a fully uv-mapped mesh
#[test]
fn test_uv_mapped_obj() {
    let dir = tempdir().expect("Failed to create temp dir");
    let obj_path = dir.path().join("quad.obj");
    let calc_path = dir.path().join("quad.calc.pcobj");
    let host_path = dir.path().join("quad.host.pcobj");

    std::fs::write(
        &obj_path,
        "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\n\
         vt 0 0\nvt 1 0\nvt 1 1\nvt 0 1\n\
         f 1/1 2/2 3/3\n\
         f 1/1 3/3 4/4\n",
    )
    .expect("Failed to write OBJ");

    pad_export_convert_mesh(&obj_path, &calc_path, &host_path);

    let calc = std::fs::read(&calc_path).expect("Failed to read calculator file");
    let header = PcObjMeshHeader::from_bytes::<BigEndian>(&calc).unwrap();

    assert_eq!(header.vertex_count, 4);
    assert_eq!(header.face_count, 2);
    // Fully uv-mapped: one uv-face per face.
    assert_eq!(header.uv_face_count, 2);
    assert_eq!(header.uv_coord_count, 4);

    let expected_len = PcObjMeshHeader::SIZE
        + (header.vertex_count as usize * 3
            + header.face_count as usize * 3
            + header.uv_face_count as usize * 3
            + header.uv_coord_count as usize * 2)
            * 4;
    assert_eq!(calc.len(), expected_len);
}

/// The two outputs must differ only in byte order
#[test]
fn test_outputs_are_byte_mirrors() {
    let dir = tempdir().expect("Failed to create temp dir");
    let obj_path = dir.path().join("mesh.obj");
    let calc_path = dir.path().join("mesh.calc.pcobj");
    let host_path = dir.path().join("mesh.host.pcobj");

    std::fs::write(
        &obj_path,
        "v -1.5 0.25 3.75\nv 1.0 -2.0 0.5\nv 0.125 1.0 -0.625\nf 1 2 3\nf 3 2 1\n",
    )
    .expect("Failed to write OBJ");

    pad_export_convert_mesh(&obj_path, &calc_path, &host_path);

    let calc = std::fs::read(&calc_path).expect("Failed to read calculator file");
    let host = std::fs::read(&host_path).expect("Failed to read host file");

    assert_eq!(calc.len(), host.len());
    assert_eq!(calc.len() % 4, 0);
    for (offset, (calc_word, host_word)) in calc.chunks(4).zip(host.chunks(4)).enumerate() {
        let mut reversed = calc_word.to_vec();
        reversed.reverse();
        assert_eq!(
            reversed, host_word,
            "byte mirror violated at word {}",
            offset
        );
    }
}

/// Malformed input must fail without leaving output files behind
#[test]
fn test_malformed_obj_leaves_no_outputs() {
    let dir = tempdir().expect("Failed to create temp dir");
    let obj_path = dir.path().join("bad.obj");
    let calc_path = dir.path().join("bad.calc.pcobj");
    let host_path = dir.path().join("bad.host.pcobj");

    // Two-vertex face: a structural error, not a skippable line.
    std::fs::write(&obj_path, "v 0 0 0\nv 1 0 0\nf 1 2\n").expect("Failed to write OBJ");

    let status = std::process::Command::new(env!("CARGO_BIN_EXE_pad-export"))
        .args([
            "mesh",
            obj_path.to_str().unwrap(),
            "--calc",
            calc_path.to_str().unwrap(),
            "--host",
            host_path.to_str().unwrap(),
        ])
        .status()
        .expect("Failed to run pad-export");

    assert!(!status.success(), "conversion should fail");
    assert!(!calc_path.exists(), "no calculator file should be left");
    assert!(!host_path.exists(), "no host file should be left");
}

// Helper to run the pad-export mesh command
fn pad_export_convert_mesh(input: &Path, calc: &Path, host: &Path) {
    let status = std::process::Command::new(env!("CARGO_BIN_EXE_pad-export"))
        .args([
            "mesh",
            input.to_str().unwrap(),
            "--calc",
            calc.to_str().unwrap(),
            "--host",
            host.to_str().unwrap(),
        ])
        .status()
        .expect("Failed to run pad-export");
    assert!(status.success(), "pad-export mesh command failed");
}
