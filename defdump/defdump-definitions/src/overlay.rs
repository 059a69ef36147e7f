use defdump_core::{Definition, Opcode, ReadError, Reader, RecordKind, rgb_to_hsl};
use serde::Serialize;

/// Floor decoration drawn over underlays (paths, water, roads).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayDefinition {
    pub id: u32,
    pub color: i32,
    pub texture: i32,
    pub hide_underlay: bool,
    /// Minimap color; `-1` when the primary color is used.
    pub secondary_color: i32,
    pub scale: i32,
    pub block_shadow: bool,
    pub brightness: i32,
    pub blend_texture: bool,
    pub underwater_color: i32,
    pub water_opacity: i32,
    pub hue: i32,
    pub saturation: i32,
    pub lightness: i32,
    pub secondary_hue: i32,
    pub secondary_saturation: i32,
    pub secondary_lightness: i32,
    #[serde(skip)]
    has_color: bool,
}

impl Definition for OverlayDefinition {
    const KIND: RecordKind = RecordKind::Overlay;

    fn blank(id: u32) -> Self {
        Self {
            id,
            color: 0,
            texture: -1,
            hide_underlay: true,
            secondary_color: -1,
            scale: -1,
            block_shadow: true,
            brightness: 8,
            blend_texture: false,
            underwater_color: 0x12_2B3D,
            water_opacity: 16,
            hue: 0,
            saturation: 0,
            lightness: -1,
            secondary_hue: 0,
            secondary_saturation: 0,
            secondary_lightness: -1,
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
            2 => self.texture = i32::from(reader.u8()?),
            3 => self.texture = reader.u16_or_none()?,
            5 => self.hide_underlay = false,
            7 => self.secondary_color = reader.medium()? as i32,
            9 => self.scale = i32::from(reader.u16()?) << 2,
            10 => self.block_shadow = false,
            11 => self.brightness = i32::from(reader.u8()?),
            12 => self.blend_texture = true,
            13 => self.underwater_color = reader.medium()? as i32,
            14 => self.water_opacity = i32::from(reader.u8()?),
            _ => return Ok(Opcode::Unknown),
        }
        Ok(Opcode::Handled)
    }

    fn derive(&mut self) {
        if self.has_color {
            let hsl = rgb_to_hsl(self.color as u32);
            self.hue = hsl.hue;
            self.saturation = hsl.saturation;
            self.lightness = hsl.lightness;
        }
        if self.secondary_color != -1 {
            let hsl = rgb_to_hsl(self.secondary_color as u32);
            self.secondary_hue = hsl.hue;
            self.secondary_saturation = hsl.saturation;
            self.secondary_lightness = hsl.lightness;
        }
    }
}
