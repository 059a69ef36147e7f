//! Definition records and their opcode tables.
//!
//! Every kind implements [`defdump_core::Definition`]; decoded lists are
//! carried as [`Records`], one variant per [`defdump_core::RecordKind`].

mod area;
mod common;
mod item;
mod kit;
mod map_scene;
mod npc;
mod object;
mod overlay;
mod records;
mod sequence;
mod sprite;
mod spot_animation;
mod texture;
mod underlay;
mod varbit;

pub use area::AreaDefinition;
pub use common::{ParamValue, Params, Transforms};
pub use item::ItemDefinition;
pub use kit::KitDefinition;
pub use map_scene::MapSceneDefinition;
pub use npc::NpcDefinition;
pub use object::ObjectDefinition;
pub use overlay::OverlayDefinition;
pub use records::{Record, RecordCollection, Records};
pub use sequence::SequenceDefinition;
pub use sprite::SpriteDefinition;
pub use spot_animation::SpotAnimationDefinition;
pub use texture::TextureDefinition;
pub use underlay::UnderlayDefinition;
pub use varbit::VarbitDefinition;
