// src/encoder.rs
use crate::error::{PtblError, Result};
use crate::partition::PartitionSpec;
use crate::records::{DriverDescriptor, PartitionMapEntry, Record, BLOCK_SIZE};
use log::{debug, info};

/// The records that make up the partition table, one block each.
#[derive(Debug, Clone)]
pub struct DiskLayout {
    pub descriptor: DriverDescriptor,
    pub entries: Vec<PartitionMapEntry>,
}

impl DiskLayout {
    /// Lays out the partitions back to back after block 0 and the map,
    /// in the order given.
    pub fn new(partitions: &[PartitionSpec]) -> Result<Self> {
        if partitions.is_empty() {
            return Err(PtblError::NoPartitions);
        }
        let map_blocks = u32::try_from(partitions.len()).map_err(|_| PtblError::DiskTooLarge)?;
        let first_start = map_blocks.checked_add(1).ok_or(PtblError::DiskTooLarge)?;

        let mut entries = Vec::with_capacity(partitions.len());
        let mut start = first_start;
        for spec in partitions {
            entries.push(PartitionMapEntry::new(spec, map_blocks, start));
            debug!("'{}' at block {} ({} blocks)", spec.display_name(), start, spec.blocks);
            start = start.checked_add(spec.blocks).ok_or(PtblError::DiskTooLarge)?;
        }

        // `start` has run past the last partition, so it is the disk size.
        info!("{} partition(s), {} blocks total", map_blocks, start);
        Ok(DiskLayout { descriptor: DriverDescriptor::new(start), entries })
    }

    pub fn total_blocks(&self) -> u32 {
        self.descriptor.block_count
    }

    pub fn table_len(&self) -> usize {
        (1 + self.entries.len()) * BLOCK_SIZE
    }

    /// Block 0 followed by every map entry.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let mut table = Vec::with_capacity(self.table_len());
        table.extend_from_slice(&self.descriptor.to_block()?);
        for entry in &self.entries {
            table.extend_from_slice(&entry.to_block()?);
        }
        Ok(table)
    }
}

/// Builds the partition table for `partitions`. The result is exactly
/// `(1 + partitions.len()) * 512` bytes.
pub fn generate(partitions: &[PartitionSpec]) -> Result<Vec<u8>> {
    DiskLayout::new(partitions)?.encode()
}
