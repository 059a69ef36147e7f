use defdump_core::{Definition, Opcode, ReadError, Reader, RecordKind};
use serde::Serialize;

use crate::common::{read_shorts, read_swaps};

const CHATHEAD_SLOTS: usize = 10;

/// Player identity kit: default body part models for character creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KitDefinition {
    pub id: u32,
    pub body_part_id: i32,
    pub models: Vec<u16>,
    pub chathead_models: Vec<i32>,
    pub non_selectable: bool,
    pub recolor_to_find: Vec<u16>,
    pub recolor_to_replace: Vec<u16>,
    pub retexture_to_find: Vec<u16>,
    pub retexture_to_replace: Vec<u16>,
}

impl Definition for KitDefinition {
    const KIND: RecordKind = RecordKind::Kit;

    fn blank(id: u32) -> Self {
        Self {
            id,
            body_part_id: -1,
            models: Vec::new(),
            chathead_models: vec![-1; CHATHEAD_SLOTS],
            non_selectable: false,
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
            1 => self.body_part_id = i32::from(reader.u8()?),
            2 => {
                let count = usize::from(reader.u8()?);
                self.models = read_shorts(reader, count)?;
            }
            3 => self.non_selectable = true,
            40 => (self.recolor_to_find, self.recolor_to_replace) = read_swaps(reader)?,
            41 => (self.retexture_to_find, self.retexture_to_replace) = read_swaps(reader)?,
            60..=69 => {
                self.chathead_models[usize::from(opcode - 60)] = i32::from(reader.u16()?);
            }
            _ => return Ok(Opcode::Unknown),
        }
        Ok(Opcode::Handled)
    }
}
