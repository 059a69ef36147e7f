//! Operand layouts shared by several opcode tables.

use std::collections::BTreeMap;

use defdump_core::{ReadError, Reader};
use serde::Serialize;

/// Value of one entry in a params table (opcode 249).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Int(i32),
    Text(String),
}

pub type Params = BTreeMap<u32, ParamValue>;

/// `count:u8`, then `count` key/value entries.
pub(crate) fn read_params(reader: &mut Reader) -> Result<Params, ReadError> {
    let count = reader.u8()?;
    let mut params = BTreeMap::new();
    for _ in 0..count {
        let is_text = reader.u8()? == 1;
        let key = reader.medium()?;
        let value = if is_text {
            ParamValue::Text(reader.string()?)
        } else {
            ParamValue::Int(reader.i32()?)
        };
        params.insert(key, value);
    }
    Ok(params)
}

/// `count:u8`, then `count` interleaved `(find, replace)` shorts.
pub(crate) fn read_swaps(reader: &mut Reader) -> Result<(Vec<u16>, Vec<u16>), ReadError> {
    let count = usize::from(reader.u8()?);
    let mut find = Vec::with_capacity(count);
    let mut replace = Vec::with_capacity(count);
    for _ in 0..count {
        find.push(reader.u16()?);
        replace.push(reader.u16()?);
    }
    Ok((find, replace))
}

pub(crate) fn read_shorts(reader: &mut Reader, count: usize) -> Result<Vec<u16>, ReadError> {
    (0..count).map(|_| reader.u16()).collect()
}

/// Menu option string; `"hidden"` means the slot has no option.
pub(crate) fn read_option(reader: &mut Reader) -> Result<Option<String>, ReadError> {
    let option = reader.string()?;
    Ok((!option.eq_ignore_ascii_case("hidden")).then_some(option))
}

/// Varbit/varp driven replacement of a definition by one of its children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transforms {
    pub varbit_id: i32,
    pub varp_id: i32,
    /// Child id per state; the final slot is the fallback child.
    pub children: Vec<i32>,
}

impl Transforms {
    /// Read a transform block. `with_default` selects the layout carrying an
    /// explicit fallback child before the child list.
    pub(crate) fn read(reader: &mut Reader, with_default: bool) -> Result<Self, ReadError> {
        let varbit_id = reader.u16_or_none()?;
        let varp_id = reader.u16_or_none()?;
        let fallback = if with_default {
            reader.u16_or_none()?
        } else {
            -1
        };
        let count = usize::from(reader.u8()?);
        let mut children = Vec::with_capacity(count + 2);
        for _ in 0..=count {
            children.push(reader.u16_or_none()?);
        }
        children.push(fallback);
        Ok(Self {
            varbit_id,
            varp_id,
            children,
        })
    }
}
