//! Process-scoped store of decoded definitions, keyed by kind.

use std::{collections::HashMap, sync::Arc};

use defdump_core::RecordKind;
use defdump_definitions::{
    AreaDefinition, ItemDefinition, KitDefinition, MapSceneDefinition, NpcDefinition,
    ObjectDefinition, OverlayDefinition, Record, RecordCollection, SequenceDefinition,
    SpotAnimationDefinition, SpriteDefinition, TextureDefinition, UnderlayDefinition,
    VarbitDefinition,
};
use parking_lot::RwLock;

use crate::error::RegistryError;

/// Thread-safe registry handle. Clones share the same entries.
///
/// Entries are keyed by the kind of records they hold. Each
/// [`store`](Self::store) replaces the whole entry for a kind; readers see
/// either the previous collection or the new one.
#[derive(Debug, Clone, Default)]
pub struct DefinitionRegistry {
    entries: Arc<RwLock<HashMap<RecordKind, Arc<RecordCollection>>>>,
}

macro_rules! typed_accessors {
    ($($name:ident => $ty:ty),+ $(,)?) => {
        $(
            pub fn $name(&self) -> Result<Arc<[$ty]>, RegistryError> {
                self.get_typed::<$ty>()
            }
        )+
    };
}

impl DefinitionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entry for `kind`.
    ///
    /// Fails with [`RegistryError::KindMismatch`] when `collection` holds
    /// another kind's records; the existing entry is left untouched.
    pub fn store(
        &self,
        kind: RecordKind,
        collection: RecordCollection,
    ) -> Result<(), RegistryError> {
        if collection.kind() != kind {
            return Err(RegistryError::KindMismatch {
                expected: kind,
                found: collection.kind(),
            });
        }
        self.entries.write().insert(kind, Arc::new(collection));
        Ok(())
    }

    /// The collection stored for `kind`.
    ///
    /// Fails with [`RegistryError::NotLoaded`] rather than returning an empty
    /// collection when `kind` was never stored.
    pub fn get(&self, kind: RecordKind) -> Result<Arc<RecordCollection>, RegistryError> {
        self.entries
            .read()
            .get(&kind)
            .cloned()
            .ok_or(RegistryError::NotLoaded { kind })
    }

    /// The records stored for `R::KIND`, narrowed to their concrete type.
    pub fn get_typed<R: Record>(&self) -> Result<Arc<[R]>, RegistryError> {
        let collection = self.get(R::KIND)?;
        collection
            .typed::<R>()
            .ok_or_else(|| RegistryError::KindMismatch {
                expected: R::KIND,
                found: collection.kind(),
            })
    }

    pub fn is_loaded(&self, kind: RecordKind) -> bool {
        self.entries.read().contains_key(&kind)
    }

    /// Loaded kinds in declaration order.
    pub fn kinds(&self) -> Vec<RecordKind> {
        let entries = self.entries.read();
        RecordKind::ALL
            .into_iter()
            .filter(|kind| entries.contains_key(kind))
            .collect()
    }

    typed_accessors! {
        underlays => UnderlayDefinition,
        overlays => OverlayDefinition,
        textures => TextureDefinition,
        sprites => SpriteDefinition,
        objects => ObjectDefinition,
        areas => AreaDefinition,
        items => ItemDefinition,
        kits => KitDefinition,
        npcs => NpcDefinition,
        sequences => SequenceDefinition,
        spot_animations => SpotAnimationDefinition,
        varbits => VarbitDefinition,
        map_scenes => MapSceneDefinition,
    }
}
