//! Dual-endian binary output
//!
//! The calculator wants big-endian words and the host wants little-endian,
//! but both files must carry the same value stream. All emission goes
//! through a single write point that feeds both sinks in lock-step, so the
//! two outputs can never diverge in anything but byte order.

use byteorder::{BigEndian, LittleEndian, WriteBytesExt};
use std::io::{self, Write};

/// Writer that mirrors every 32-bit value to a big-endian and a
/// little-endian sink
pub struct DualEndianWriter<B: Write, L: Write> {
    be: B,
    le: L,
}

impl<B: Write, L: Write> DualEndianWriter<B, L> {
    /// Create a new dual writer from the two open sinks
    pub fn new(be: B, le: L) -> Self {
        Self { be, le }
    }

    /// Write one unsigned 32-bit value to both sinks
    ///
    /// A failure on either sink leaves at most this value missing from the
    /// other; the streams never reorder.
    pub fn write_u32(&mut self, value: u32) -> io::Result<()> {
        self.be.write_u32::<BigEndian>(value)?;
        self.le.write_u32::<LittleEndian>(value)?;
        Ok(())
    }

    /// Flush both sinks
    pub fn flush(&mut self) -> io::Result<()> {
        self.be.flush()?;
        self.le.flush()
    }

    /// Consume the writer and return the inner sinks
    pub fn into_inner(self) -> (B, L) {
        (self.be, self.le)
    }
}
