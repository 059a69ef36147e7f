use defdump_core::{Definition, Opcode, ReadError, Reader, RecordKind};
use serde::Serialize;

use crate::common::{Params, read_option, read_params, read_swaps};

const COUNT_SLOTS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDefinition {
    pub id: u32,
    pub name: String,
    pub inventory_model: i32,
    pub zoom2d: i32,
    pub xan2d: i32,
    pub yan2d: i32,
    pub zan2d: i32,
    pub x_offset2d: i32,
    pub y_offset2d: i32,
    pub stackable: i32,
    pub cost: i32,
    pub members: bool,
    pub weight: i32,
    pub category: i32,
    pub options: [Option<String>; 5],
    pub interface_options: [Option<String>; 5],
    pub shift_click_drop_index: i32,
    pub male_model0: i32,
    pub male_model1: i32,
    pub male_model2: i32,
    pub male_offset: i32,
    pub male_head_model: i32,
    pub male_head_model2: i32,
    pub female_model0: i32,
    pub female_model1: i32,
    pub female_model2: i32,
    pub female_offset: i32,
    pub female_head_model: i32,
    pub female_head_model2: i32,
    pub recolor_to_find: Vec<u16>,
    pub recolor_to_replace: Vec<u16>,
    pub retexture_to_find: Vec<u16>,
    pub retexture_to_replace: Vec<u16>,
    pub is_tradeable: bool,
    pub noted_id: i32,
    pub noted_template: i32,
    /// Stack-size dependent replacement ids; empty unless opcodes 100..=109 occur.
    pub count_obj: Vec<u16>,
    pub count_co: Vec<u16>,
    pub resize_x: i32,
    pub resize_y: i32,
    pub resize_z: i32,
    pub ambient: i32,
    pub contrast: i32,
    pub team: i32,
    pub bought_id: i32,
    pub bought_template_id: i32,
    pub placeholder_id: i32,
    pub placeholder_template_id: i32,
    pub params: Params,
}

impl Definition for ItemDefinition {
    const KIND: RecordKind = RecordKind::Item;

    fn blank(id: u32) -> Self {
        Self {
            id,
            name: "null".to_string(),
            inventory_model: 0,
            zoom2d: 2000,
            xan2d: 0,
            yan2d: 0,
            zan2d: 0,
            x_offset2d: 0,
            y_offset2d: 0,
            stackable: 0,
            cost: 1,
            members: false,
            weight: 0,
            category: -1,
            options: [None, None, Some("Take".to_string()), None, None],
            interface_options: [None, None, None, None, Some("Drop".to_string())],
            shift_click_drop_index: -2,
            male_model0: -1,
            male_model1: -1,
            male_model2: -1,
            male_offset: 0,
            male_head_model: -1,
            male_head_model2: -1,
            female_model0: -1,
            female_model1: -1,
            female_model2: -1,
            female_offset: 0,
            female_head_model: -1,
            female_head_model2: -1,
            recolor_to_find: Vec::new(),
            recolor_to_replace: Vec::new(),
            retexture_to_find: Vec::new(),
            retexture_to_replace: Vec::new(),
            is_tradeable: false,
            noted_id: -1,
            noted_template: -1,
            count_obj: Vec::new(),
            count_co: Vec::new(),
            resize_x: 128,
            resize_y: 128,
            resize_z: 128,
            ambient: 0,
            contrast: 0,
            team: 0,
            bought_id: -1,
            bought_template_id: -1,
            placeholder_id: -1,
            placeholder_template_id: -1,
            params: Params::new(),
        }
    }

    fn id(&self) -> u32 {
        self.id
    }

    fn read_opcode(&mut self, opcode: u8, reader: &mut Reader) -> Result<Opcode, ReadError> {
        match opcode {
            1 => self.inventory_model = i32::from(reader.u16()?),
            2 => self.name = reader.string()?,
            4 => self.zoom2d = i32::from(reader.u16()?),
            5 => self.xan2d = i32::from(reader.u16()?),
            6 => self.yan2d = i32::from(reader.u16()?),
            7 => self.x_offset2d = i32::from(reader.i16()?),
            8 => self.y_offset2d = i32::from(reader.i16()?),
            11 => self.stackable = 1,
            12 => self.cost = reader.i32()?,
            16 => self.members = true,
            23 => {
                self.male_model0 = i32::from(reader.u16()?);
                self.male_offset = i32::from(reader.u8()?);
            }
            24 => self.male_model1 = i32::from(reader.u16()?),
            25 => {
                self.female_model0 = i32::from(reader.u16()?);
                self.female_offset = i32::from(reader.u8()?);
            }
            26 => self.female_model1 = i32::from(reader.u16()?),
            30..=34 => self.options[usize::from(opcode - 30)] = read_option(reader)?,
            35..=39 => {
                self.interface_options[usize::from(opcode - 35)] = Some(reader.string()?);
            }
            40 => (self.recolor_to_find, self.recolor_to_replace) = read_swaps(reader)?,
            41 => (self.retexture_to_find, self.retexture_to_replace) = read_swaps(reader)?,
            42 => self.shift_click_drop_index = i32::from(reader.i8()?),
            65 => self.is_tradeable = true,
            75 => self.weight = i32::from(reader.i16()?),
            78 => self.male_model2 = i32::from(reader.u16()?),
            79 => self.female_model2 = i32::from(reader.u16()?),
            90 => self.male_head_model = i32::from(reader.u16()?),
            91 => self.female_head_model = i32::from(reader.u16()?),
            92 => self.male_head_model2 = i32::from(reader.u16()?),
            93 => self.female_head_model2 = i32::from(reader.u16()?),
            94 => self.category = i32::from(reader.u16()?),
            95 => self.zan2d = i32::from(reader.u16()?),
            97 => self.noted_id = i32::from(reader.u16()?),
            98 => self.noted_template = i32::from(reader.u16()?),
            100..=109 => {
                if self.count_obj.is_empty() {
                    self.count_obj = vec![0; COUNT_SLOTS];
                    self.count_co = vec![0; COUNT_SLOTS];
                }
                let slot = usize::from(opcode - 100);
                self.count_obj[slot] = reader.u16()?;
                self.count_co[slot] = reader.u16()?;
            }
            110 => self.resize_x = i32::from(reader.u16()?),
            111 => self.resize_y = i32::from(reader.u16()?),
            112 => self.resize_z = i32::from(reader.u16()?),
            113 => self.ambient = i32::from(reader.i8()?),
            114 => self.contrast = i32::from(reader.i8()?),
            115 => self.team = i32::from(reader.u8()?),
            139 => self.bought_id = i32::from(reader.u16()?),
            140 => self.bought_template_id = i32::from(reader.u16()?),
            148 => self.placeholder_id = i32::from(reader.u16()?),
            149 => self.placeholder_template_id = i32::from(reader.u16()?),
            249 => self.params = read_params(reader)?,
            _ => return Ok(Opcode::Unknown),
        }
        Ok(Opcode::Handled)
    }
}
