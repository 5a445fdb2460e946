//! Byte order detection for TIFF headers
//!
//! Implements the Strategy pattern for reading header fields in either
//! little-endian ("II") or big-endian ("MM") order.

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use std::io::{Read, Result};

use crate::validation::constants::signatures;
use crate::validation::errors::{GuardError, GuardResult};

/// Represents the byte order of a TIFF file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Little-endian byte order (II)
    LittleEndian,
    /// Big-endian byte order (MM)
    BigEndian,
}

impl ByteOrder {
    /// Detects the byte order from the two-byte marker
    pub fn detect(reader: &mut dyn Read) -> GuardResult<Self> {
        let marker = reader.read_u16::<LittleEndian>()?;
        match marker {
            signatures::LITTLE_ENDIAN_MARKER => Ok(ByteOrder::LittleEndian),
            signatures::BIG_ENDIAN_MARKER => Ok(ByteOrder::BigEndian),
            _ => Err(GuardError::InvalidByteOrder(marker)),
        }
    }

    /// Classifies a TIFF header: marker followed by version 42
    ///
    /// Fails on fewer than four bytes, an unknown marker, or any other
    /// version (BigTIFF's 43 included).
    pub fn from_header(header: &[u8]) -> GuardResult<Self> {
        let mut reader = header;
        let byte_order = Self::detect(&mut reader)?;
        let version = byte_order.create_handler().read_u16(&mut reader)?;
        if version != signatures::TIFF_VERSION {
            return Err(GuardError::UnsupportedVersion(version));
        }
        Ok(byte_order)
    }

    /// Returns a string representation of this byte order
    pub fn name(&self) -> &'static str {
        match self {
            ByteOrder::LittleEndian => "Little Endian (II)",
            ByteOrder::BigEndian => "Big Endian (MM)",
        }
    }

    /// Creates the appropriate handler for this byte order
    pub fn create_handler(&self) -> Box<dyn ByteOrderHandler> {
        match self {
            ByteOrder::LittleEndian => Box::new(LittleEndianHandler),
            ByteOrder::BigEndian => Box::new(BigEndianHandler),
        }
    }
}

/// Trait for byte order handling strategies
pub trait ByteOrderHandler: Send + Sync {
    /// Read a u16 value
    fn read_u16(&self, reader: &mut dyn Read) -> Result<u16>;

    /// Read a u32 value
    fn read_u32(&self, reader: &mut dyn Read) -> Result<u32>;
}

/// Little-endian byte order handler
pub struct LittleEndianHandler;

impl ByteOrderHandler for LittleEndianHandler {
    fn read_u16(&self, reader: &mut dyn Read) -> Result<u16> {
        reader.read_u16::<LittleEndian>()
    }

    fn read_u32(&self, reader: &mut dyn Read) -> Result<u32> {
        reader.read_u32::<LittleEndian>()
    }
}

/// Big-endian byte order handler
pub struct BigEndianHandler;

impl ByteOrderHandler for BigEndianHandler {
    fn read_u16(&self, reader: &mut dyn Read) -> Result<u16> {
        reader.read_u16::<BigEndian>()
    }

    fn read_u32(&self, reader: &mut dyn Read) -> Result<u32> {
        reader.read_u32::<BigEndian>()
    }
}
