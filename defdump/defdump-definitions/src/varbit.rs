use defdump_core::{Definition, Opcode, ReadError, Reader, RecordKind};
use serde::Serialize;

/// Bit range of a player variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VarbitDefinition {
    pub id: u32,
    pub index: i32,
    pub least_significant_bit: i32,
    pub most_significant_bit: i32,
}

impl Definition for VarbitDefinition {
    const KIND: RecordKind = RecordKind::Varbit;

    fn blank(id: u32) -> Self {
        Self {
            id,
            index: 0,
            least_significant_bit: 0,
            most_significant_bit: 0,
        }
    }

    fn id(&self) -> u32 {
        self.id
    }

    fn read_opcode(&mut self, opcode: u8, reader: &mut Reader) -> Result<Opcode, ReadError> {
        if opcode != 1 {
            return Ok(Opcode::Unknown);
        }
        self.index = i32::from(reader.u16()?);
        self.least_significant_bit = i32::from(reader.u8()?);
        self.most_significant_bit = i32::from(reader.u8()?);
        Ok(Opcode::Handled)
    }
}
