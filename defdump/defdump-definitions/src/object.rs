use defdump_core::{Definition, Opcode, ReadError, Reader, RecordKind};
use serde::Serialize;

use crate::common::{Params, Transforms, read_option, read_params, read_shorts, read_swaps};

/// Scenery placed on the map (walls, doors, trees, furniture).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectDefinition {
    pub id: u32,
    pub name: String,
    pub models: Vec<u16>,
    /// Model type per entry of `models`; empty when opcode 5 supplied the models.
    pub model_types: Vec<u8>,
    pub size_x: i32,
    pub size_y: i32,
    pub interact_type: i32,
    pub blocks_projectile: bool,
    pub wall_or_door: i32,
    pub contoured_ground: i32,
    pub merge_normals: bool,
    pub occludes: bool,
    pub animation_id: i32,
    pub decor_displacement: i32,
    pub ambient: i32,
    pub contrast: i32,
    pub actions: [Option<String>; 5],
    pub recolor_to_find: Vec<u16>,
    pub recolor_to_replace: Vec<u16>,
    pub retexture_to_find: Vec<u16>,
    pub retexture_to_replace: Vec<u16>,
    pub category: i32,
    pub is_rotated: bool,
    pub shadow: bool,
    pub model_size_x: i32,
    pub model_size_height: i32,
    pub model_size_y: i32,
    pub map_scene_id: i32,
    pub blocking_mask: i32,
    pub offset_x: i32,
    pub offset_height: i32,
    pub offset_y: i32,
    pub obstructs_ground: bool,
    pub is_hollow: bool,
    pub supports_items: i32,
    pub transforms: Option<Transforms>,
    pub ambient_sound_id: i32,
    pub ambient_sound_distance: i32,
    pub ambient_sound_change_min: i32,
    pub ambient_sound_change_max: i32,
    pub ambient_sound_ids: Vec<u16>,
    pub map_area_id: i32,
    pub randomize_anim_start: bool,
    pub params: Params,
}

impl Definition for ObjectDefinition {
    const KIND: RecordKind = RecordKind::Object;

    fn blank(id: u32) -> Self {
        Self {
            id,
            name: "null".to_string(),
            models: Vec::new(),
            model_types: Vec::new(),
            size_x: 1,
            size_y: 1,
            interact_type: 2,
            blocks_projectile: true,
            wall_or_door: -1,
            contoured_ground: -1,
            merge_normals: false,
            occludes: false,
            animation_id: -1,
            decor_displacement: 16,
            ambient: 0,
            contrast: 0,
            actions: Default::default(),
            recolor_to_find: Vec::new(),
            recolor_to_replace: Vec::new(),
            retexture_to_find: Vec::new(),
            retexture_to_replace: Vec::new(),
            category: -1,
            is_rotated: false,
            shadow: true,
            model_size_x: 128,
            model_size_height: 128,
            model_size_y: 128,
            map_scene_id: -1,
            blocking_mask: 0,
            offset_x: 0,
            offset_height: 0,
            offset_y: 0,
            obstructs_ground: false,
            is_hollow: false,
            supports_items: -1,
            transforms: None,
            ambient_sound_id: -1,
            ambient_sound_distance: 0,
            ambient_sound_change_min: 0,
            ambient_sound_change_max: 0,
            ambient_sound_ids: Vec::new(),
            map_area_id: -1,
            randomize_anim_start: false,
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
                let mut models = Vec::with_capacity(count);
                let mut types = Vec::with_capacity(count);
                for _ in 0..count {
                    models.push(reader.u16()?);
                    types.push(reader.u8()?);
                }
                self.models = models;
                self.model_types = types;
            }
            2 => self.name = reader.string()?,
            5 => {
                let count = usize::from(reader.u8()?);
                self.models = read_shorts(reader, count)?;
                self.model_types.clear();
            }
            14 => self.size_x = i32::from(reader.u8()?),
            15 => self.size_y = i32::from(reader.u8()?),
            17 => {
                self.interact_type = 0;
                self.blocks_projectile = false;
            }
            18 => self.blocks_projectile = false,
            19 => self.wall_or_door = i32::from(reader.u8()?),
            21 => self.contoured_ground = 0,
            22 => self.merge_normals = true,
            23 => self.occludes = true,
            24 => self.animation_id = reader.u16_or_none()?,
            27 => self.interact_type = 1,
            28 => self.decor_displacement = i32::from(reader.u8()?),
            29 => self.ambient = i32::from(reader.i8()?),
            39 => self.contrast = i32::from(reader.i8()?) * 25,
            30..=34 => self.actions[usize::from(opcode - 30)] = read_option(reader)?,
            40 => (self.recolor_to_find, self.recolor_to_replace) = read_swaps(reader)?,
            41 => (self.retexture_to_find, self.retexture_to_replace) = read_swaps(reader)?,
            61 => self.category = i32::from(reader.u16()?),
            62 => self.is_rotated = true,
            64 => self.shadow = false,
            65 => self.model_size_x = i32::from(reader.u16()?),
            66 => self.model_size_height = i32::from(reader.u16()?),
            67 => self.model_size_y = i32::from(reader.u16()?),
            68 => self.map_scene_id = i32::from(reader.u16()?),
            69 => self.blocking_mask = i32::from(reader.i8()?),
            70 => self.offset_x = i32::from(reader.i16()?),
            71 => self.offset_height = i32::from(reader.i16()?),
            72 => self.offset_y = i32::from(reader.i16()?),
            73 => self.obstructs_ground = true,
            74 => self.is_hollow = true,
            75 => self.supports_items = i32::from(reader.u8()?),
            77 | 92 => self.transforms = Some(Transforms::read(reader, opcode == 92)?),
            78 => {
                self.ambient_sound_id = i32::from(reader.u16()?);
                self.ambient_sound_distance = i32::from(reader.u8()?);
            }
            79 => {
                self.ambient_sound_change_min = i32::from(reader.u16()?);
                self.ambient_sound_change_max = i32::from(reader.u16()?);
                self.ambient_sound_distance = i32::from(reader.u8()?);
                let count = usize::from(reader.u8()?);
                self.ambient_sound_ids = read_shorts(reader, count)?;
            }
            81 => self.contoured_ground = i32::from(reader.u8()?) * 256,
            82 => self.map_area_id = i32::from(reader.u16()?),
            89 => self.randomize_anim_start = true,
            249 => self.params = read_params(reader)?,
            _ => return Ok(Opcode::Unknown),
        }
        Ok(Opcode::Handled)
    }
}
