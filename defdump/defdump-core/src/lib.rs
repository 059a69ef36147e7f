//! Decoding primitives shared by every definition kind.
//!
//! This crate provides the big-endian [`Reader`], the tagged-field protocol
//! ([`Definition`] / [`decode_definition`]), the [`ByteSource`] contract and the
//! floor color derivation ([`rgb_to_hsl`]).

mod color;
mod decoder;
mod error;
mod kind;
mod reader;
mod source;

pub use color::{Hsl, rgb_to_hsl};
pub use decoder::{Definition, Opcode, decode_definition};
pub use error::{DecodeError, ReadError, SourceError};
pub use kind::{PartitionId, RecordKind};
pub use reader::Reader;
pub use source::{ByteSource, MemoryByteSource};
