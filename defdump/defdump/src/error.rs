//! Error types for the dump pipeline.

use std::path::PathBuf;

use defdump_core::{DecodeError, PartitionId, RecordKind, SourceError};

/// Errors produced by [`DefinitionRegistry`](crate::DefinitionRegistry) lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The kind was never stored.
    #[error("{kind} definitions are not loaded")]
    NotLoaded { kind: RecordKind },

    /// The entry stored under `expected` holds another kind's records.
    #[error("registry entry for {expected} holds {found} records")]
    KindMismatch {
        expected: RecordKind,
        found: RecordKind,
    },
}

/// Errors produced by a [`SerializationSink`](crate::SerializationSink).
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize {kind}: {source}")]
    Json {
        kind: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors produced while loading or saving [`Properties`](crate::Properties).
#[derive(Debug, thiserror::Error)]
pub enum PropertiesError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed property file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Serialize(#[from] toml::ser::Error),
}

/// Fatal error aborting a dump or test run.
#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    /// A file id listed by the byte source had no payload.
    #[error("{kind} file {file_id} missing from partition {partition}")]
    MissingArchiveEntry {
        kind: RecordKind,
        partition: PartitionId,
        file_id: u32,
    },

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Sink(#[from] SinkError),
}
