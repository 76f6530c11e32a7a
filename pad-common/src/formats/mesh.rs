//! PCObj mesh binary format (.pcobj)
//!
//! Fixed-point triangle mesh format for the ClassPad renderer.
//! POD format - no magic bytes.
//!
//! # Layout
//! ```text
//! 0x00: vertex_count u32
//! 0x04: face_count u32
//! 0x08: uv_face_count u32
//! 0x0C: uv_coord_count u32
//! 0x10: vertex_data (vertex_count * 3 * 4 bytes, Q16.16 x,y,z)
//! var:  face_data (face_count * 3 * 4 bytes, 0-based vertex indices)
//! var:  uv_face_data (uv_face_count * 3 * 4 bytes, 0-based uv indices)
//! var:  uv_coord_data (uv_coord_count * 2 * 4 bytes, Q16.16 u,v)
//! ```
//!
//! Every field is one 32-bit word; there is no variable-length encoding
//! anywhere in the format. The same logical stream is written once per byte
//! order (big-endian for the calculator, little-endian for the host).

use crate::dual::DualEndianWriter;
use byteorder::ByteOrder;
use std::io::{self, Write};

/// PCObj mesh header (16 bytes)
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct PcObjMeshHeader {
    pub vertex_count: u32,
    pub face_count: u32,
    pub uv_face_count: u32,
    pub uv_coord_count: u32,
}

impl PcObjMeshHeader {
    pub const SIZE: usize = 16;

    pub fn new(vertex_count: u32, face_count: u32, uv_face_count: u32, uv_coord_count: u32) -> Self {
        Self {
            vertex_count,
            face_count,
            uv_face_count,
            uv_coord_count,
        }
    }

    /// Write the four counts through the dual writer
    pub fn write_to<B: Write, L: Write>(
        &self,
        w: &mut DualEndianWriter<B, L>,
    ) -> io::Result<()> {
        w.write_u32(self.vertex_count)?;
        w.write_u32(self.face_count)?;
        w.write_u32(self.uv_face_count)?;
        w.write_u32(self.uv_coord_count)?;
        Ok(())
    }

    /// Read header from bytes in the given byte order
    pub fn from_bytes<E: ByteOrder>(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        Some(Self {
            vertex_count: E::read_u32(&bytes[0..4]),
            face_count: E::read_u32(&bytes[4..8]),
            uv_face_count: E::read_u32(&bytes[8..12]),
            uv_coord_count: E::read_u32(&bytes[12..16]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::{BigEndian, LittleEndian};

    #[test]
    fn test_write_and_read_back() {
        let header = PcObjMeshHeader::new(3, 1, 0, 0);

        let mut writer = DualEndianWriter::new(Vec::new(), Vec::new());
        header.write_to(&mut writer).unwrap();
        let (be, le) = writer.into_inner();

        assert_eq!(be.len(), PcObjMeshHeader::SIZE);
        assert_eq!(le.len(), PcObjMeshHeader::SIZE);

        let from_be = PcObjMeshHeader::from_bytes::<BigEndian>(&be).unwrap();
        assert_eq!(from_be.vertex_count, 3);
        assert_eq!(from_be.face_count, 1);
        assert_eq!(from_be.uv_face_count, 0);
        assert_eq!(from_be.uv_coord_count, 0);

        let from_le = PcObjMeshHeader::from_bytes::<LittleEndian>(&le).unwrap();
        assert_eq!(from_le.vertex_count, 3);
        assert_eq!(from_le.face_count, 1);
        assert_eq!(from_le.uv_face_count, 0);
        assert_eq!(from_le.uv_coord_count, 0);
    }

    #[test]
    fn test_from_bytes_rejects_short_input() {
        assert!(PcObjMeshHeader::from_bytes::<BigEndian>(&[0u8; 15]).is_none());
    }
}
