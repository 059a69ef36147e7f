//! [`ByteSource`] over extracted cache files on disk.

use std::{
    fs, io,
    path::PathBuf,
};

use bytes::Bytes;
use defdump_core::{ByteSource, PartitionId, SourceError};

/// Reads `<root>/<index>/<archive>/<file>.dat` for archive partitions and
/// `<root>/<index>/<file>.dat` for whole-index partitions.
#[derive(Debug, Clone)]
pub struct DirectoryByteSource {
    root: PathBuf,
}

const EXTENSION: &str = "dat";

impl DirectoryByteSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding the files of `partition`.
    pub fn partition_dir(&self, partition: PartitionId) -> PathBuf {
        match partition {
            PartitionId::Index(index) => self.root.join(index.to_string()),
            PartitionId::Archive { index, archive } => self
                .root
                .join(index.to_string())
                .join(archive.to_string()),
        }
    }
}

impl ByteSource for DirectoryByteSource {
    fn file_ids(&self, partition: PartitionId) -> Result<Vec<u32>, SourceError> {
        let dir = self.partition_dir(partition);
        let entries = fs::read_dir(&dir).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => SourceError::PartitionNotFound { partition },
            _ => SourceError::Io { partition, source },
        })?;

        let mut ids = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|source| SourceError::Io { partition, source })?
                .path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(EXTENSION) {
                continue;
            }
            // Only names that `fetch` would build back, so `007.dat` is skipped.
            if let Some(id) = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .and_then(|stem| stem.parse::<u32>().ok().filter(|id| id.to_string() == stem))
            {
                ids.push(id);
            }
        }
        ids.sort_unstable();
        Ok(ids)
    }

    fn fetch(&self, partition: PartitionId, file_id: u32) -> Result<Option<Bytes>, SourceError> {
        let path = self
            .partition_dir(partition)
            .join(format!("{file_id}.{EXTENSION}"));
        match fs::read(&path) {
            Ok(data) => Ok(Some(Bytes::from(data))),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(SourceError::Io { partition, source }),
        }
    }
}
