// src/lib.rs

pub mod encoder;
pub mod error;
pub mod partition;
pub mod records;

pub use encoder::{generate, DiskLayout};
pub use error::PtblError;
pub use partition::{parse_partitions, ParsePolicy, PartitionSpec};
