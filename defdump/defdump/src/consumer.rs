//! Stages that read the registry once their required kinds are loaded.

use std::collections::{HashMap, HashSet};

use defdump_core::RecordKind;
use serde::Serialize;
use tracing::info;

use crate::{error::DumpError, registry::DefinitionRegistry, sink::SerializationSink};

/// A stage run by [`Scheduler::run_with`](crate::Scheduler::run_with).
pub trait Consumer {
    type Output;

    /// Kinds that must be loaded before [`consume`](Self::consume) runs.
    fn required_kinds(&self) -> Vec<RecordKind>;

    fn consume(&mut self, registry: &DefinitionRegistry) -> Result<Self::Output, DumpError>;
}

/// Publishes every kind to a [`SerializationSink`], then finishes it.
#[derive(Debug)]
pub struct DumpAll<S> {
    sink: S,
    kinds: Vec<RecordKind>,
}

impl<S: SerializationSink> DumpAll<S> {
    pub fn new(sink: S) -> Self {
        Self::with_kinds(sink, RecordKind::ALL.to_vec())
    }

    pub fn with_kinds(sink: S, kinds: Vec<RecordKind>) -> Self {
        Self { sink, kinds }
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: SerializationSink> Consumer for DumpAll<S> {
    /// Number of records published.
    type Output = usize;

    fn required_kinds(&self) -> Vec<RecordKind> {
        self.kinds.clone()
    }

    fn consume(&mut self, registry: &DefinitionRegistry) -> Result<usize, DumpError> {
        let mut published = 0;
        for &kind in &self.kinds {
            let collection = registry.get(kind)?;
            self.sink
                .publish(kind, collection.records(), collection.emit_manifest())?;
            published += collection.len();
        }
        self.sink.finish()?;
        info!(kinds = self.kinds.len(), records = published, "dump written");
        Ok(published)
    }
}

/// World map function icon: an area with a sprite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapFunction {
    pub area_id: u32,
    pub name: Option<String>,
    pub sprite_id: i32,
    /// Whether `sprite_id` resolves to a loaded sprite.
    pub sprite_found: bool,
    /// Objects placed on the map that reference this area.
    pub object_count: usize,
}

/// Collects map functions from areas, sprites and objects.
#[derive(Debug, Default)]
pub struct MapFunctions;

impl Consumer for MapFunctions {
    type Output = Vec<MapFunction>;

    fn required_kinds(&self) -> Vec<RecordKind> {
        vec![RecordKind::Area, RecordKind::Sprite, RecordKind::Object]
    }

    fn consume(&mut self, registry: &DefinitionRegistry) -> Result<Vec<MapFunction>, DumpError> {
        let areas = registry.areas()?;
        let sprites = registry.sprites()?;
        let objects = registry.objects()?;

        let sprite_ids: HashSet<u32> = sprites.iter().map(|sprite| sprite.id).collect();
        let mut object_counts: HashMap<i32, usize> = HashMap::new();
        for object in objects.iter().filter(|object| object.map_area_id != -1) {
            *object_counts.entry(object.map_area_id).or_default() += 1;
        }

        let functions: Vec<MapFunction> = areas
            .iter()
            .filter(|area| area.sprite_id != -1)
            .map(|area| MapFunction {
                area_id: area.id,
                name: area.name.clone(),
                sprite_id: area.sprite_id,
                sprite_found: u32::try_from(area.sprite_id)
                    .is_ok_and(|id| sprite_ids.contains(&id)),
                object_count: i32::try_from(area.id)
                    .ok()
                    .and_then(|id| object_counts.get(&id).copied())
                    .unwrap_or_default(),
            })
            .collect();

        info!(functions = functions.len(), "collected map functions");
        Ok(functions)
    }
}
