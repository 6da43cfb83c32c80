// src/records/driver_descriptor.rs
use super::{write_zeros, Record, BLOCK_SIZE};
use byteorder::{BigEndian, WriteBytesExt};
use std::io::{self, Write};

/// Device signature, "ER".
pub const SB_SIGNATURE: u16 = 0x4552;

// Bytes taken by the fields before ddPad.
const HEADER_LEN: usize = 26;

/// Block 0 of the disk. No boot driver is embedded, so the driver
/// fields stay zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverDescriptor {
    pub sig: u16,
    pub block_size: u16,
    pub block_count: u32,
    pub dev_type: u16,
    pub dev_id: u16,
    pub data: u32,
    pub driver_count: u16,
    pub dd_block: u32,
    pub dd_size: u16,
    pub dd_type: u16,
}

impl DriverDescriptor {
    pub fn new(block_count: u32) -> Self {
        DriverDescriptor {
            sig: SB_SIGNATURE,
            block_size: BLOCK_SIZE as u16,
            block_count,
            dev_type: 0,
            dev_id: 0,
            data: 0,
            driver_count: 0,
            dd_block: 0,
            dd_size: 0,
            dd_type: 0,
        }
    }
}

impl Record for DriverDescriptor {
    fn write_be<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_u16::<BigEndian>(self.sig)?;
        writer.write_u16::<BigEndian>(self.block_size)?;
        writer.write_u32::<BigEndian>(self.block_count)?;
        writer.write_u16::<BigEndian>(self.dev_type)?;
        writer.write_u16::<BigEndian>(self.dev_id)?;
        writer.write_u32::<BigEndian>(self.data)?;
        writer.write_u16::<BigEndian>(self.driver_count)?;
        writer.write_u32::<BigEndian>(self.dd_block)?;
        writer.write_u16::<BigEndian>(self.dd_size)?;
        writer.write_u16::<BigEndian>(self.dd_type)?;
        write_zeros(writer, BLOCK_SIZE - HEADER_LEN)
    }
}
