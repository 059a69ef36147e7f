use defdump_core::{Definition, Opcode, ReadError, Reader, RecordKind};
use serde::Serialize;

use crate::common::read_shorts;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextureDefinition {
    pub id: u32,
    pub average_color: i32,
    pub opaque: bool,
    /// Sprite files layered to build the texture.
    pub file_ids: Vec<u16>,
    pub animation_direction: i32,
    pub animation_speed: i32,
}

impl Definition for TextureDefinition {
    const KIND: RecordKind = RecordKind::Texture;

    fn blank(id: u32) -> Self {
        Self {
            id,
            average_color: 0,
            opaque: false,
            file_ids: Vec::new(),
            animation_direction: 0,
            animation_speed: 0,
        }
    }

    fn id(&self) -> u32 {
        self.id
    }

    fn read_opcode(&mut self, opcode: u8, reader: &mut Reader) -> Result<Opcode, ReadError> {
        match opcode {
            1 => self.average_color = i32::from(reader.u16()?),
            2 => self.opaque = true,
            3 => {
                let count = usize::from(reader.u8()?);
                self.file_ids = read_shorts(reader, count)?;
            }
            4 => self.animation_direction = i32::from(reader.u8()?),
            5 => self.animation_speed = i32::from(reader.u8()?),
            _ => return Ok(Opcode::Unknown),
        }
        Ok(Opcode::Handled)
    }
}
