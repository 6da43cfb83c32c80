// src/records/mod.rs

pub mod driver_descriptor;
pub mod partition_map;

pub use driver_descriptor::DriverDescriptor;
pub use partition_map::PartitionMapEntry;

use log::warn;
use std::io::{self, Write};

/// Every record on an Apple-partitioned disk occupies one 512-byte block.
pub const BLOCK_SIZE: usize = 512;

/// Fixed-width record written most-significant-byte first.
pub trait Record {
    fn write_be<W: Write>(&self, writer: &mut W) -> io::Result<()>;

    fn to_block(&self) -> io::Result<Vec<u8>> {
        let mut block = Vec::with_capacity(BLOCK_SIZE);
        self.write_be(&mut block)?;
        if block.len() != BLOCK_SIZE {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("record encoded to {} bytes, expected {}", block.len(), BLOCK_SIZE),
            ));
        }
        Ok(block)
    }
}

/// Copies `bytes` into an N-byte field, keeping room for a NUL terminator.
/// Longer values are cut at N - 1 bytes.
pub fn fixed_field<const N: usize>(bytes: &[u8], what: &str) -> [u8; N] {
    let mut field = [0u8; N];
    let len = bytes.len().min(N - 1);
    if bytes.len() > len {
        warn!("{} '{}' truncated to {} bytes", what, String::from_utf8_lossy(bytes), len);
    }
    field[..len].copy_from_slice(&bytes[..len]);
    field
}

pub(crate) fn write_zeros<W: Write>(writer: &mut W, count: usize) -> io::Result<()> {
    writer.write_all(&vec![0u8; count])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_field_pads_with_nul() {
        let field: [u8; 8] = fixed_field(b"ABC", "name");
        assert_eq!(&field, b"ABC\0\0\0\0\0");
    }

    #[test]
    fn test_fixed_field_truncates_and_terminates() {
        let field: [u8; 4] = fixed_field(b"ABCDEFG", "name");
        assert_eq!(&field, b"ABC\0");
    }

    #[test]
    fn test_fixed_field_keeps_non_ascii_bytes() {
        let field: [u8; 8] = fixed_field(b"Mac\xaaHD", "name");
        assert_eq!(&field, b"Mac\xaaHD\0\0");
    }
}
