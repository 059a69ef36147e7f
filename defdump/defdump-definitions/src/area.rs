use defdump_core::{Definition, Opcode, ReadError, Reader, RecordKind};
use serde::Serialize;

use crate::common::read_option;

/// World map area: label, icon sprite and click polygon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaDefinition {
    pub id: u32,
    /// Map function icon; `-1` when the area has none.
    pub sprite_id: i32,
    pub secondary_sprite_id: i32,
    pub hover_sprite_id: i32,
    pub name: Option<String>,
    pub font_color: i32,
    pub background_color: i32,
    pub text_size: i32,
    pub render_flags: i32,
    pub options: [Option<String>; 5],
    /// Interleaved `(x, y)` vertices.
    pub polygon: Vec<i16>,
    pub polygon_color: i32,
    pub polygon_keys: Vec<i32>,
    pub polygon_flags: Vec<i8>,
    pub menu_target_name: Option<String>,
    pub category: i32,
    pub horizontal_alignment: i32,
    pub vertical_alignment: i32,
}

impl Definition for AreaDefinition {
    const KIND: RecordKind = RecordKind::Area;

    fn blank(id: u32) -> Self {
        Self {
            id,
            sprite_id: -1,
            secondary_sprite_id: -1,
            hover_sprite_id: -1,
            name: None,
            font_color: 0,
            background_color: 0,
            text_size: 0,
            render_flags: 0,
            options: Default::default(),
            polygon: Vec::new(),
            polygon_color: 0,
            polygon_keys: Vec::new(),
            polygon_flags: Vec::new(),
            menu_target_name: None,
            category: -1,
            horizontal_alignment: 1,
            vertical_alignment: 1,
        }
    }

    fn id(&self) -> u32 {
        self.id
    }

    fn read_opcode(&mut self, opcode: u8, reader: &mut Reader) -> Result<Opcode, ReadError> {
        match opcode {
            1 => self.sprite_id = reader.big_smart()?,
            2 => self.secondary_sprite_id = reader.big_smart()?,
            3 => self.name = Some(reader.string()?),
            4 => self.font_color = reader.medium()? as i32,
            5 => self.background_color = reader.medium()? as i32,
            6 => self.text_size = i32::from(reader.u8()?),
            7 => self.render_flags = i32::from(reader.u8()?),
            8 => {
                reader.u8()?;
            }
            10..=14 => self.options[usize::from(opcode - 10)] = read_option(reader)?,
            15 => self.read_polygon(reader)?,
            17 => self.menu_target_name = Some(reader.string()?),
            18 => self.hover_sprite_id = reader.big_smart()?,
            19 => self.category = i32::from(reader.u16()?),
            // Operands present in the stream but not kept.
            21 | 22 => {
                reader.i32()?;
            }
            23 => {
                for _ in 0..3 {
                    reader.u8()?;
                }
            }
            24 => {
                reader.i16()?;
                reader.i16()?;
            }
            25 => {
                reader.big_smart()?;
            }
            28 => {
                reader.u8()?;
            }
            29 => self.horizontal_alignment = i32::from(reader.u8()?),
            30 => self.vertical_alignment = i32::from(reader.u8()?),
            _ => return Ok(Opcode::Unknown),
        }
        Ok(Opcode::Handled)
    }
}

impl AreaDefinition {
    fn read_polygon(&mut self, reader: &mut Reader) -> Result<(), ReadError> {
        let vertices = usize::from(reader.u8()?);
        self.polygon = (0..vertices * 2)
            .map(|_| reader.i16())
            .collect::<Result<_, _>>()?;
        self.polygon_color = reader.i32()?;
        let keys = reader.u8()?;
        self.polygon_keys = (0..keys)
            .map(|_| reader.i32())
            .collect::<Result<_, _>>()?;
        self.polygon_flags = (0..vertices)
            .map(|_| reader.i8())
            .collect::<Result<_, _>>()?;
        Ok(())
    }
}
