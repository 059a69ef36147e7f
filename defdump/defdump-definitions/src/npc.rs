use defdump_core::{Definition, Opcode, ReadError, Reader, RecordKind};
use serde::Serialize;

use crate::common::{Params, Transforms, read_option, read_params, read_shorts, read_swaps};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NpcDefinition {
    pub id: u32,
    pub name: String,
    pub models: Vec<u16>,
    pub chathead_models: Vec<u16>,
    pub size: i32,
    pub standing_animation: i32,
    pub walk_animation: i32,
    pub idle_rotate_left_animation: i32,
    pub idle_rotate_right_animation: i32,
    pub rotate180_animation: i32,
    pub rotate_left_animation: i32,
    pub rotate_right_animation: i32,
    pub category: i32,
    pub actions: [Option<String>; 5],
    pub recolor_to_find: Vec<u16>,
    pub recolor_to_replace: Vec<u16>,
    pub retexture_to_find: Vec<u16>,
    pub retexture_to_replace: Vec<u16>,
    pub is_minimap_visible: bool,
    pub combat_level: i32,
    pub width_scale: i32,
    pub height_scale: i32,
    pub has_render_priority: bool,
    pub ambient: i32,
    pub contrast: i32,
    pub head_icon: i32,
    pub rotation_speed: i32,
    pub transforms: Option<Transforms>,
    pub is_interactable: bool,
    pub rotation_flag: bool,
    pub is_pet: bool,
    pub params: Params,
}

impl Definition for NpcDefinition {
    const KIND: RecordKind = RecordKind::Npc;

    fn blank(id: u32) -> Self {
        Self {
            id,
            name: "null".to_string(),
            models: Vec::new(),
            chathead_models: Vec::new(),
            size: 1,
            standing_animation: -1,
            walk_animation: -1,
            idle_rotate_left_animation: -1,
            idle_rotate_right_animation: -1,
            rotate180_animation: -1,
            rotate_left_animation: -1,
            rotate_right_animation: -1,
            category: -1,
            actions: Default::default(),
            recolor_to_find: Vec::new(),
            recolor_to_replace: Vec::new(),
            retexture_to_find: Vec::new(),
            retexture_to_replace: Vec::new(),
            is_minimap_visible: true,
            combat_level: -1,
            width_scale: 128,
            height_scale: 128,
            has_render_priority: false,
            ambient: 0,
            contrast: 0,
            head_icon: -1,
            rotation_speed: 32,
            transforms: None,
            is_interactable: true,
            rotation_flag: true,
            is_pet: false,
            params: Params::new(),
        }
    }

    fn id(&self) -> u32 {
        self.id
    }

    fn read_opcode(&mut self, opcode: u8, reader: &mut Reader) -> Result<Opcode, ReadError> {
        match opcode {
            1 => {
                let count = usize::from(reader.u8()?);
                self.models = read_shorts(reader, count)?;
            }
            2 => self.name = reader.string()?,
            12 => self.size = i32::from(reader.u8()?),
            13 => self.standing_animation = i32::from(reader.u16()?),
            14 => self.walk_animation = i32::from(reader.u16()?),
            15 => self.idle_rotate_left_animation = i32::from(reader.u16()?),
            16 => self.idle_rotate_right_animation = i32::from(reader.u16()?),
            17 => {
                self.walk_animation = i32::from(reader.u16()?);
                self.rotate180_animation = i32::from(reader.u16()?);
                self.rotate_left_animation = i32::from(reader.u16()?);
                self.rotate_right_animation = i32::from(reader.u16()?);
            }
            18 => self.category = i32::from(reader.u16()?),
            30..=34 => self.actions[usize::from(opcode - 30)] = read_option(reader)?,
            40 => (self.recolor_to_find, self.recolor_to_replace) = read_swaps(reader)?,
            41 => (self.retexture_to_find, self.retexture_to_replace) = read_swaps(reader)?,
            60 => {
                let count = usize::from(reader.u8()?);
                self.chathead_models = read_shorts(reader, count)?;
            }
            93 => self.is_minimap_visible = false,
            95 => self.combat_level = i32::from(reader.u16()?),
            97 => self.width_scale = i32::from(reader.u16()?),
            98 => self.height_scale = i32::from(reader.u16()?),
            99 => self.has_render_priority = true,
            100 => self.ambient = i32::from(reader.i8()?),
            101 => self.contrast = i32::from(reader.i8()?),
            102 => self.head_icon = i32::from(reader.u16()?),
            103 => self.rotation_speed = i32::from(reader.u16()?),
            106 | 118 => self.transforms = Some(Transforms::read(reader, opcode == 118)?),
            107 => self.is_interactable = false,
            109 => self.rotation_flag = false,
            111 => self.is_pet = true,
            249 => self.params = read_params(reader)?,
            _ => return Ok(Opcode::Unknown),
        }
        Ok(Opcode::Handled)
    }
}
