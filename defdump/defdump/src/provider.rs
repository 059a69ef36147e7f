//! Record providers: fetch, decode and publish one kind's partition.

use std::time::Instant;

use defdump_core::{ByteSource, PartitionId, RecordKind, decode_definition};
use defdump_definitions::{
    AreaDefinition, ItemDefinition, KitDefinition, MapSceneDefinition, NpcDefinition,
    ObjectDefinition, OverlayDefinition, Record, RecordCollection, SequenceDefinition,
    SpotAnimationDefinition, SpriteDefinition, TextureDefinition, UnderlayDefinition,
    VarbitDefinition,
};
use rayon::prelude::*;
use tracing::debug;

use crate::{error::DumpError, registry::DefinitionRegistry};

/// A unit of work run by the [`Scheduler`](crate::Scheduler).
pub trait Provider: Send + Sync {
    /// Kind written to the registry by [`run`](Self::run).
    fn kind(&self) -> RecordKind;

    /// Load this provider's records and store them in `registry`.
    fn run(&self, source: &dyn ByteSource, registry: &DefinitionRegistry) -> Result<(), DumpError>;
}

/// Decodes every file of one partition into a [`RecordCollection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordProvider {
    kind: RecordKind,
    partition: PartitionId,
    emit_manifest: bool,
}

impl RecordProvider {
    /// Provider reading `kind` from its default partition, listed in the manifest.
    pub fn new(kind: RecordKind) -> Self {
        Self {
            kind,
            partition: kind.partition(),
            emit_manifest: true,
        }
    }

    pub fn with_partition(mut self, partition: PartitionId) -> Self {
        self.partition = partition;
        self
    }

    pub fn with_emit_manifest(mut self, emit_manifest: bool) -> Self {
        self.emit_manifest = emit_manifest;
        self
    }

    pub fn partition(&self) -> PartitionId {
        self.partition
    }

    pub fn emit_manifest(&self) -> bool {
        self.emit_manifest
    }

    /// Decode the partition without touching a registry.
    ///
    /// Records are ordered as the byte source enumerates file ids.
    pub fn load(&self, source: &dyn ByteSource) -> Result<RecordCollection, DumpError> {
        match self.kind {
            RecordKind::Underlay => self.load_kind::<UnderlayDefinition>(source),
            RecordKind::Overlay => self.load_kind::<OverlayDefinition>(source),
            RecordKind::Texture => self.load_kind::<TextureDefinition>(source),
            RecordKind::Sprite => self.load_kind::<SpriteDefinition>(source),
            RecordKind::Object => self.load_kind::<ObjectDefinition>(source),
            RecordKind::Area => self.load_kind::<AreaDefinition>(source),
            RecordKind::Item => self.load_kind::<ItemDefinition>(source),
            RecordKind::Kit => self.load_kind::<KitDefinition>(source),
            RecordKind::Npc => self.load_kind::<NpcDefinition>(source),
            RecordKind::Sequence => self.load_kind::<SequenceDefinition>(source),
            RecordKind::SpotAnimation => self.load_kind::<SpotAnimationDefinition>(source),
            RecordKind::Varbit => self.load_kind::<VarbitDefinition>(source),
            RecordKind::MapScene => self.load_kind::<MapSceneDefinition>(source),
        }
    }

    fn load_kind<R: Record>(&self, source: &dyn ByteSource) -> Result<RecordCollection, DumpError> {
        let file_ids = source.file_ids(self.partition)?;
        let records = file_ids
            .par_iter()
            .map(|&file_id| -> Result<R, DumpError> {
                let data = source.fetch(self.partition, file_id)?.ok_or(
                    DumpError::MissingArchiveEntry {
                        kind: self.kind,
                        partition: self.partition,
                        file_id,
                    },
                )?;
                Ok(decode_definition(data, R::blank(file_id))?)
            })
            .collect::<Result<Vec<R>, DumpError>>()?;
        Ok(RecordCollection::new(records, self.emit_manifest))
    }
}

impl Provider for RecordProvider {
    fn kind(&self) -> RecordKind {
        self.kind
    }

    fn run(
        &self,
        source: &dyn ByteSource,
        registry: &DefinitionRegistry,
    ) -> Result<(), DumpError> {
        let started = Instant::now();
        let collection = self.load(source)?;
        debug!(
            kind = %self.kind,
            partition = %self.partition,
            records = collection.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "decoded definitions"
        );
        registry.store(self.kind, collection)?;
        Ok(())
    }
}
