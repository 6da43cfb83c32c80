// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PtblError {
    #[error("Invalid {field}: '{value}' is not a valid number")]
    MalformedNumber { field: String, value: String },

    #[error("Partition count {expected} needs {needed} arguments, got {supplied}")]
    CountMismatch { expected: u32, needed: usize, supplied: usize },

    #[error("At least one partition is required")]
    NoPartitions,

    #[error("Partition '{name}' has zero blocks")]
    ZeroSize { name: String },

    #[error("Disk size exceeds {} blocks", u32::MAX)]
    DiskTooLarge,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PtblError>;
