//! Error types for the decoding layer.

use crate::kind::{PartitionId, RecordKind};

/// The cursor ran past the end of the payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("needed {needed} byte(s) at offset {offset}, {remaining} remaining")]
pub struct ReadError {
    pub offset: usize,
    pub needed: usize,
    pub remaining: usize,
}

/// Error returned by [`decode_definition`](crate::decode_definition).
///
/// Unknown opcodes are not errors; they are logged and skipped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The payload ended before the terminator or inside an opcode's operands.
    #[error("truncated {kind} definition {id}: {source}")]
    TruncatedPayload {
        kind: RecordKind,
        id: u32,
        #[source]
        source: ReadError,
    },
}

/// Error returned by [`ByteSource`](crate::ByteSource) implementations.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The partition does not exist in this source.
    #[error("partition {partition} not found")]
    PartitionNotFound { partition: PartitionId },

    /// I/O error while listing or reading entries.
    #[error("failed to read partition {partition}: {source}")]
    Io {
        partition: PartitionId,
        #[source]
        source: std::io::Error,
    },
}
