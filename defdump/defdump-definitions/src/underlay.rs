use defdump_core::{Definition, Opcode, ReadError, Reader, RecordKind, rgb_to_hsl};
use serde::Serialize;

/// Floor color drawn beneath overlays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnderlayDefinition {
    pub id: u32,
    pub color: i32,
    /// `-1` when the underlay has no texture.
    pub texture: i32,
    pub scale: i32,
    pub block_shadow: bool,
    pub secondary_flag: bool,
    pub hue: i32,
    pub saturation: i32,
    pub lightness: i32,
    pub hue_multiplier: i32,
    #[serde(skip)]
    has_color: bool,
}

impl Definition for UnderlayDefinition {
    const KIND: RecordKind = RecordKind::Underlay;

    fn blank(id: u32) -> Self {
        Self {
            id,
            color: 0,
            texture: -1,
            scale: -1,
            block_shadow: true,
            secondary_flag: true,
            hue: 0,
            saturation: 0,
            lightness: -1,
            hue_multiplier: 0,
            has_color: false,
        }
    }

    fn id(&self) -> u32 {
        self.id
    }

    fn read_opcode(&mut self, opcode: u8, reader: &mut Reader) -> Result<Opcode, ReadError> {
        match opcode {
            1 => {
                self.color = reader.medium()? as i32;
                self.has_color = true;
            }
            2 => {
                let texture = reader.u16()?;
                self.texture = if texture > i16::MAX as u16 {
                    -1
                } else {
                    i32::from(texture)
                };
            }
            3 => self.scale = i32::from(reader.u16()?) << 2,
            4 => self.block_shadow = false,
            5 => self.secondary_flag = false,
            _ => return Ok(Opcode::Unknown),
        }
        Ok(Opcode::Handled)
    }

    fn derive(&mut self) {
        if !self.has_color {
            return;
        }
        let hsl = rgb_to_hsl(self.color as u32);
        self.hue = hsl.hue;
        self.saturation = hsl.saturation;
        self.lightness = hsl.lightness;
        self.hue_multiplier = hsl.hue_multiplier;
    }
}
