//! Homogeneous record lists tagged by kind.

use std::sync::Arc;

use defdump_core::{Definition, RecordKind};
use serde::{Serialize, Serializer};

use crate::{
    AreaDefinition, ItemDefinition, KitDefinition, MapSceneDefinition, NpcDefinition,
    ObjectDefinition, OverlayDefinition, SequenceDefinition, SpotAnimationDefinition,
    SpriteDefinition, TextureDefinition, UnderlayDefinition, VarbitDefinition,
};

/// A definition type that can be stored in [`Records`].
pub trait Record: Definition + Serialize + Send + Sync + 'static {
    fn into_records(records: Vec<Self>) -> Records;

    /// The typed list, or `None` when `records` holds another kind.
    fn narrow(records: &Records) -> Option<Arc<[Self]>>;
}

macro_rules! records {
    ($($variant:ident => $ty:ty),+ $(,)?) => {
        /// Decoded definitions of one kind, one variant per [`RecordKind`].
        #[derive(Debug, Clone)]
        pub enum Records {
            $($variant(Arc<[$ty]>),)+
        }

        impl Records {
            pub fn kind(&self) -> RecordKind {
                match self {
                    $(Self::$variant(_) => RecordKind::$variant,)+
                }
            }

            pub fn len(&self) -> usize {
                match self {
                    $(Self::$variant(list) => list.len(),)+
                }
            }

            pub fn is_empty(&self) -> bool {
                self.len() == 0
            }

            /// Record ids in stored order.
            pub fn ids(&self) -> Vec<u32> {
                match self {
                    $(Self::$variant(list) => list.iter().map(Definition::id).collect(),)+
                }
            }
        }

        impl Serialize for Records {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                match self {
                    $(Self::$variant(list) => list.serialize(serializer),)+
                }
            }
        }

        $(
            impl Record for $ty {
                fn into_records(records: Vec<Self>) -> Records {
                    Records::$variant(Arc::from(records))
                }

                fn narrow(records: &Records) -> Option<Arc<[Self]>> {
                    match records {
                        Records::$variant(list) => Some(Arc::clone(list)),
                        #[allow(unreachable_patterns)]
                        _ => None,
                    }
                }
            }
        )+
    };
}

records! {
    Underlay => UnderlayDefinition,
    Overlay => OverlayDefinition,
    Texture => TextureDefinition,
    Sprite => SpriteDefinition,
    Object => ObjectDefinition,
    Area => AreaDefinition,
    Item => ItemDefinition,
    Kit => KitDefinition,
    Npc => NpcDefinition,
    Sequence => SequenceDefinition,
    SpotAnimation => SpotAnimationDefinition,
    Varbit => VarbitDefinition,
    MapScene => MapSceneDefinition,
}

/// Output of one provider run: a kind's records plus the manifest flag.
#[derive(Debug, Clone)]
pub struct RecordCollection {
    records: Records,
    emit_manifest: bool,
}

impl RecordCollection {
    pub fn new<R: Record>(records: Vec<R>, emit_manifest: bool) -> Self {
        Self::from_records(R::into_records(records), emit_manifest)
    }

    pub fn from_records(records: Records, emit_manifest: bool) -> Self {
        Self {
            records,
            emit_manifest,
        }
    }

    pub fn kind(&self) -> RecordKind {
        self.records.kind()
    }

    pub fn records(&self) -> &Records {
        &self.records
    }

    /// Whether the kind is listed in the dump manifest.
    pub fn emit_manifest(&self) -> bool {
        self.emit_manifest
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn typed<R: Record>(&self) -> Option<Arc<[R]>> {
        R::narrow(&self.records)
    }
}
