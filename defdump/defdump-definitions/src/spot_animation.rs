use defdump_core::{Definition, Opcode, ReadError, Reader, RecordKind};
use serde::Serialize;

use crate::common::read_swaps;

/// Graphic played on a tile or entity (spell impacts, projectiles).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpotAnimationDefinition {
    pub id: u32,
    pub model_id: i32,
    pub animation_id: i32,
    pub resize_x: i32,
    pub resize_y: i32,
    pub rotation: i32,
    pub ambient: i32,
    pub contrast: i32,
    pub recolor_to_find: Vec<u16>,
    pub recolor_to_replace: Vec<u16>,
    pub retexture_to_find: Vec<u16>,
    pub retexture_to_replace: Vec<u16>,
}

impl Definition for SpotAnimationDefinition {
    const KIND: RecordKind = RecordKind::SpotAnimation;

    fn blank(id: u32) -> Self {
        Self {
            id,
            model_id: 0,
            animation_id: -1,
            resize_x: 128,
            resize_y: 128,
            rotation: 0,
            ambient: 0,
            contrast: 0,
            recolor_to_find: Vec::new(),
            recolor_to_replace: Vec::new(),
            retexture_to_find: Vec::new(),
            retexture_to_replace: Vec::new(),
        }
    }

    fn id(&self) -> u32 {
        self.id
    }

    fn read_opcode(&mut self, opcode: u8, reader: &mut Reader) -> Result<Opcode, ReadError> {
        match opcode {
            1 => self.model_id = i32::from(reader.u16()?),
            2 => self.animation_id = reader.u16_or_none()?,
            4 => self.resize_x = i32::from(reader.u16()?),
            5 => self.resize_y = i32::from(reader.u16()?),
            6 => self.rotation = i32::from(reader.u16()?),
            7 => self.ambient = i32::from(reader.u8()?),
            8 => self.contrast = i32::from(reader.u8()?),
            40 => (self.recolor_to_find, self.recolor_to_replace) = read_swaps(reader)?,
            41 => (self.retexture_to_find, self.retexture_to_replace) = read_swaps(reader)?,
            _ => return Ok(Opcode::Unknown),
        }
        Ok(Opcode::Handled)
    }
}
