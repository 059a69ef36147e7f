use defdump_core::{Definition, Opcode, ReadError, Reader, RecordKind};
use serde::Serialize;

/// Sprite sheet header: dimensions, frame count and palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpriteDefinition {
    pub id: u32,
    pub width: i32,
    pub height: i32,
    pub offset_x: i32,
    pub offset_y: i32,
    pub frame_count: i32,
    pub palette: Vec<u32>,
}

impl Definition for SpriteDefinition {
    const KIND: RecordKind = RecordKind::Sprite;

    fn blank(id: u32) -> Self {
        Self {
            id,
            width: 0,
            height: 0,
            offset_x: 0,
            offset_y: 0,
            frame_count: 1,
            palette: Vec::new(),
        }
    }

    fn id(&self) -> u32 {
        self.id
    }

    fn read_opcode(&mut self, opcode: u8, reader: &mut Reader) -> Result<Opcode, ReadError> {
        match opcode {
            1 => self.width = i32::from(reader.u16()?),
            2 => self.height = i32::from(reader.u16()?),
            3 => {
                self.offset_x = i32::from(reader.i16()?);
                self.offset_y = i32::from(reader.i16()?);
            }
            4 => self.frame_count = i32::from(reader.u8()?),
            5 => {
                let count = reader.u8()?;
                self.palette = (0..count)
                    .map(|_| reader.medium())
                    .collect::<Result<_, _>>()?;
            }
            _ => return Ok(Opcode::Unknown),
        }
        Ok(Opcode::Handled)
    }
}
