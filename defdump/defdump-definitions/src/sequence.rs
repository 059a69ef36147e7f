use defdump_core::{Definition, Opcode, ReadError, Reader, RecordKind};
use serde::Serialize;

use crate::common::read_shorts;

/// Animation: frame list with timing and blending rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceDefinition {
    pub id: u32,
    pub frame_lengths: Vec<u16>,
    /// `(archive << 16) | file` for each frame.
    pub frame_ids: Vec<i32>,
    pub chat_frame_ids: Vec<i32>,
    pub frame_sounds: Vec<u32>,
    pub frame_step: i32,
    pub interleave_leave: Vec<u8>,
    pub stretches: bool,
    pub forced_priority: i32,
    pub left_hand_item: i32,
    pub right_hand_item: i32,
    pub max_loops: i32,
    pub precedence_animating: i32,
    pub priority: i32,
    pub reply_mode: i32,
}

impl Definition for SequenceDefinition {
    const KIND: RecordKind = RecordKind::Sequence;

    fn blank(id: u32) -> Self {
        Self {
            id,
            frame_lengths: Vec::new(),
            frame_ids: Vec::new(),
            chat_frame_ids: Vec::new(),
            frame_sounds: Vec::new(),
            frame_step: -1,
            interleave_leave: Vec::new(),
            stretches: false,
            forced_priority: 5,
            left_hand_item: -1,
            right_hand_item: -1,
            max_loops: 99,
            precedence_animating: -1,
            priority: -1,
            reply_mode: 2,
        }
    }

    fn id(&self) -> u32 {
        self.id
    }

    fn read_opcode(&mut self, opcode: u8, reader: &mut Reader) -> Result<Opcode, ReadError> {
        match opcode {
            1 => {
                let count = usize::from(reader.u16()?);
                self.frame_lengths = read_shorts(reader, count)?;
                self.frame_ids = read_frame_ids(reader, count)?;
            }
            2 => self.frame_step = i32::from(reader.u16()?),
            3 => {
                let count = reader.u8()?;
                self.interleave_leave = (0..count)
                    .map(|_| reader.u8())
                    .collect::<Result<_, _>>()?;
            }
            4 => self.stretches = true,
            5 => self.forced_priority = i32::from(reader.u8()?),
            6 => self.left_hand_item = i32::from(reader.u16()?),
            7 => self.right_hand_item = i32::from(reader.u16()?),
            8 => self.max_loops = i32::from(reader.u8()?),
            9 => self.precedence_animating = i32::from(reader.u8()?),
            10 => self.priority = i32::from(reader.u8()?),
            11 => self.reply_mode = i32::from(reader.u8()?),
            12 => {
                let count = usize::from(reader.u8()?);
                self.chat_frame_ids = read_frame_ids(reader, count)?;
            }
            13 => {
                let count = reader.u8()?;
                self.frame_sounds = (0..count)
                    .map(|_| reader.medium())
                    .collect::<Result<_, _>>()?;
            }
            _ => return Ok(Opcode::Unknown),
        }
        Ok(Opcode::Handled)
    }
}

/// `count` low halves followed by `count` high halves.
fn read_frame_ids(reader: &mut Reader, count: usize) -> Result<Vec<i32>, ReadError> {
    let low = read_shorts(reader, count)?;
    let high = read_shorts(reader, count)?;
    Ok(low
        .into_iter()
        .zip(high)
        .map(|(low, high)| (i32::from(high) << 16) | i32::from(low))
        .collect())
}
