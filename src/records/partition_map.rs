// src/records/partition_map.rs
use super::{fixed_field, write_zeros, Record, BLOCK_SIZE};
use crate::partition::PartitionSpec;
use byteorder::{BigEndian, WriteBytesExt};
use std::io::{self, Write};

/// Partition map signature, "PM".
pub const PM_SIGNATURE: u16 = 0x504D;
pub const BOOT_SIZE: u32 = 1024;
pub const PROCESSOR: &str = "6502";

const NAME_LEN: usize = 32;
const PROCESSOR_LEN: usize = 16;
// Bytes taken by the fields before pmPad.
const HEADER_LEN: usize = 136;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionMapEntry {
    pub sig: u16,
    pub sig_pad: u16,
    pub map_block_count: u32,
    pub physical_start: u32,
    pub block_count: u32,
    pub name: [u8; NAME_LEN],
    pub part_type: [u8; NAME_LEN],
    pub logical_data_start: u32,
    pub data_count: u32,
    pub status: u32,
    pub logical_boot_start: u32,
    pub boot_size: u32,
    pub boot_addr: u32,
    pub boot_addr2: u32,
    pub boot_entry: u32,
    pub boot_entry2: u32,
    pub boot_checksum: u32,
    pub processor: [u8; PROCESSOR_LEN],
}

impl PartitionMapEntry {
    pub fn new(spec: &PartitionSpec, map_block_count: u32, physical_start: u32) -> Self {
        PartitionMapEntry {
            sig: PM_SIGNATURE,
            sig_pad: 0,
            map_block_count,
            physical_start,
            block_count: spec.blocks,
            name: fixed_field(&spec.name, "Partition name"),
            part_type: fixed_field(&spec.part_type, "Partition type"),
            logical_data_start: 0,
            data_count: spec.blocks,
            status: 0,
            logical_boot_start: 0,
            boot_size: BOOT_SIZE,
            boot_addr: 0,
            boot_addr2: 0,
            boot_entry: 0,
            boot_entry2: 0,
            boot_checksum: 0,
            processor: fixed_field(PROCESSOR.as_bytes(), "Processor"),
        }
    }
}

impl Record for PartitionMapEntry {
    fn write_be<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_u16::<BigEndian>(self.sig)?;
        writer.write_u16::<BigEndian>(self.sig_pad)?;
        writer.write_u32::<BigEndian>(self.map_block_count)?;
        writer.write_u32::<BigEndian>(self.physical_start)?;
        writer.write_u32::<BigEndian>(self.block_count)?;
        writer.write_all(&self.name)?;
        writer.write_all(&self.part_type)?;
        for value in [
            self.logical_data_start,
            self.data_count,
            self.status,
            self.logical_boot_start,
            self.boot_size,
            self.boot_addr,
            self.boot_addr2,
            self.boot_entry,
            self.boot_entry2,
            self.boot_checksum,
        ] {
            writer.write_u32::<BigEndian>(value)?;
        }
        writer.write_all(&self.processor)?;
        write_zeros(writer, BLOCK_SIZE - HEADER_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(name: &str, blocks: u32, part_type: &str) -> PartitionSpec {
        PartitionSpec::new(name, blocks, part_type)
    }

    #[test]
    fn test_partition_entry_layout() {
        let entry = PartitionMapEntry::new(&spec("DISK1", 1600, "Apple_PRODOS"), 2, 3);
        let block = entry.to_block().unwrap();
        assert_eq!(block.len(), BLOCK_SIZE);
        assert_eq!(&block[0..2], b"PM");
        assert_eq!(&block[4..8], &2u32.to_be_bytes());
        assert_eq!(&block[8..12], &3u32.to_be_bytes());
        assert_eq!(&block[12..16], &1600u32.to_be_bytes());
        assert_eq!(&block[16..22], b"DISK1\0");
        assert_eq!(&block[48..61], b"Apple_PRODOS\0");
        assert_eq!(&block[84..88], &1600u32.to_be_bytes());
        assert_eq!(&block[96..100], &1024u32.to_be_bytes());
        assert_eq!(&block[120..125], b"6502\0");
        assert!(block[136..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_long_type_is_truncated() {
        let long_type = "T".repeat(40);
        let entry = PartitionMapEntry::new(&spec("X", 1, &long_type), 1, 2);
        assert_eq!(&entry.part_type[..31], "T".repeat(31).as_bytes());
        assert_eq!(entry.part_type[31], 0);
    }
}
