//! Tagged-field stream shared by every definition kind.
//!
//! A payload is a sequence of `(opcode, operands)` pairs terminated by opcode
//! `0`. Each kind supplies the operand layout for the opcodes it knows.

use bytes::Bytes;
use tracing::warn;

use crate::{
    error::{DecodeError, ReadError},
    kind::RecordKind,
    reader::Reader,
};

/// Result of dispatching a single opcode to a definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    /// The opcode was recognised and its operands consumed.
    Handled,
    /// The opcode is not part of this kind's table; no operands were consumed.
    Unknown,
}

/// A record kind decodable from the tagged-field stream.
pub trait Definition: Sized {
    const KIND: RecordKind;

    /// Record seeded with `id` and every documented default.
    fn blank(id: u32) -> Self;

    fn id(&self) -> u32;

    /// Read the operands of `opcode` and assign the matching fields.
    fn read_opcode(&mut self, opcode: u8, reader: &mut Reader) -> Result<Opcode, ReadError>;

    /// Compute derived fields. Runs once, after the terminator.
    fn derive(&mut self) {}
}

/// Decode `data` into `definition`.
///
/// Unknown opcodes emit a warning and decoding continues with the next byte.
/// The only failure is running out of payload before the terminator.
pub fn decode_definition<D: Definition>(
    data: impl Into<Bytes>,
    mut definition: D,
) -> Result<D, DecodeError> {
    let id = definition.id();
    let truncated = |source| DecodeError::TruncatedPayload {
        kind: D::KIND,
        id,
        source,
    };
    let mut reader = Reader::new(data);

    loop {
        let opcode = reader.u8().map_err(truncated)?;
        if opcode == 0 {
            break;
        }
        if definition
            .read_opcode(opcode, &mut reader)
            .map_err(truncated)?
            == Opcode::Unknown
        {
            warn!(kind = %D::KIND, opcode, id, "unhandled definition opcode");
        }
    }

    definition.derive();
    Ok(definition)
}
