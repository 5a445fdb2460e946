use byteorder::{BigEndian, LittleEndian, WriteBytesExt};

use crate::io::candidate::MemoryFile;

/// Little-endian TIFF header followed by the first IFD offset
pub fn little_endian_tiff_bytes() -> Vec<u8> {
    let mut buffer = Vec::new();
    buffer.write_u16::<LittleEndian>(0x4949).unwrap(); // II
    buffer.write_u16::<LittleEndian>(42).unwrap();
    buffer.write_u32::<LittleEndian>(8).unwrap();
    buffer
}

/// Big-endian TIFF header followed by the first IFD offset
pub fn big_endian_tiff_bytes() -> Vec<u8> {
    let mut buffer = Vec::new();
    buffer.write_u16::<BigEndian>(0x4D4D).unwrap(); // MM
    buffer.write_u16::<BigEndian>(42).unwrap();
    buffer.write_u32::<BigEndian>(8).unwrap();
    buffer
}

/// Full eight-byte PNG signature plus the start of an IHDR length
pub fn png_bytes() -> Vec<u8> {
    vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D]
}

/// JPEG SOI followed by an APP0 marker
pub fn jpeg_bytes() -> Vec<u8> {
    vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F']
}

pub fn file(name: &str, declared_type: &str, bytes: Vec<u8>) -> MemoryFile {
    MemoryFile::new(name, declared_type, bytes)
}
