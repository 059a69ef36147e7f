//! Access to raw archive entries.

use std::collections::BTreeMap;

use bytes::Bytes;

use crate::{error::SourceError, kind::PartitionId};

/// Resolves `(partition, file id)` pairs to payload bytes.
///
/// Decompression and checksum validation happen behind this trait; payloads
/// returned here are ready to decode.
pub trait ByteSource: Send + Sync {
    /// File ids present in `partition`, in enumeration order.
    fn file_ids(&self, partition: PartitionId) -> Result<Vec<u32>, SourceError>;

    /// Payload of one file, or `None` when the file is absent.
    fn fetch(&self, partition: PartitionId, file_id: u32) -> Result<Option<Bytes>, SourceError>;
}

/// In-memory [`ByteSource`], enumerating file ids in ascending order.
#[derive(Debug, Clone, Default)]
pub struct MemoryByteSource {
    partitions: BTreeMap<PartitionId, BTreeMap<u32, Bytes>>,
}

impl MemoryByteSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace one file.
    pub fn insert(&mut self, partition: PartitionId, file_id: u32, data: impl Into<Bytes>) {
        self.partitions
            .entry(partition)
            .or_default()
            .insert(file_id, data.into());
    }

    pub fn with_file(
        mut self,
        partition: PartitionId,
        file_id: u32,
        data: impl Into<Bytes>,
    ) -> Self {
        self.insert(partition, file_id, data);
        self
    }

    /// Register a partition with no files.
    pub fn with_partition(mut self, partition: PartitionId) -> Self {
        self.partitions.entry(partition).or_default();
        self
    }
}

impl ByteSource for MemoryByteSource {
    fn file_ids(&self, partition: PartitionId) -> Result<Vec<u32>, SourceError> {
        self.partitions
            .get(&partition)
            .map(|files| files.keys().copied().collect())
            .ok_or(SourceError::PartitionNotFound { partition })
    }

    fn fetch(&self, partition: PartitionId, file_id: u32) -> Result<Option<Bytes>, SourceError> {
        let files = self
            .partitions
            .get(&partition)
            .ok_or(SourceError::PartitionNotFound { partition })?;
        Ok(files.get(&file_id).cloned())
    }
}
