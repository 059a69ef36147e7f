use defdump_core::{Definition, Opcode, ReadError, Reader, RecordKind};
use serde::Serialize;

/// Minimap icon drawn for scenery (trees, rocks, fences).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSceneDefinition {
    pub id: u32,
    pub sprite_id: i32,
    pub tint_color: i32,
    pub rotate: bool,
    pub flip_vertical: bool,
    pub flip_horizontal: bool,
}

impl Definition for MapSceneDefinition {
    const KIND: RecordKind = RecordKind::MapScene;

    fn blank(id: u32) -> Self {
        Self {
            id,
            sprite_id: -1,
            tint_color: -1,
            rotate: false,
            flip_vertical: false,
            flip_horizontal: false,
        }
    }

    fn id(&self) -> u32 {
        self.id
    }

    fn read_opcode(&mut self, opcode: u8, reader: &mut Reader) -> Result<Opcode, ReadError> {
        match opcode {
            1 => self.sprite_id = reader.u16_or_none()?,
            2 => self.tint_color = reader.medium()? as i32,
            3 => self.rotate = true,
            4 => self.flip_vertical = true,
            5 => self.flip_horizontal = true,
            _ => return Ok(Opcode::Unknown),
        }
        Ok(Opcode::Handled)
    }
}
