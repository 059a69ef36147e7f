//! Runs providers concurrently and gates consumers on their completion.

use std::{panic, thread, time::Instant};

use defdump_core::{ByteSource, RecordKind};
use tracing::{error, info};

use crate::{
    consumer::Consumer,
    error::DumpError,
    latch::CompletionLatch,
    provider::{Provider, RecordProvider},
    registry::DefinitionRegistry,
};

/// Sequences [`Provider`]s against one byte source and one registry.
///
/// The scheduler never decodes anything itself.
pub struct Scheduler<'s> {
    source: &'s dyn ByteSource,
    registry: DefinitionRegistry,
}

impl<'s> Scheduler<'s> {
    pub fn new(source: &'s dyn ByteSource, registry: DefinitionRegistry) -> Self {
        Self { source, registry }
    }

    pub fn registry(&self) -> &DefinitionRegistry {
        &self.registry
    }

    /// Run every provider on its own thread and block until all have finished.
    ///
    /// Returns the first provider error in `providers` order. A provider panic
    /// is resumed on the calling thread.
    pub fn run_batch(&self, providers: &[Box<dyn Provider>]) -> Result<(), DumpError> {
        let started = Instant::now();
        let latch = CompletionLatch::new(providers.len());

        let results = thread::scope(|scope| {
            let handles: Vec<_> = providers
                .iter()
                .map(|provider| {
                    let latch = &latch;
                    scope.spawn(move || {
                        let _done = latch.guard();
                        provider.run(self.source, &self.registry)
                    })
                })
                .collect();
            latch.wait();
            handles
                .into_iter()
                .map(|handle| handle.join())
                .collect::<Vec<_>>()
        });

        let mut first_error = None;
        for (provider, result) in providers.iter().zip(results) {
            match result {
                Ok(Ok(())) => {}
                Ok(Err(err)) => {
                    error!(kind = %provider.kind(), error = %err, "provider failed");
                    first_error.get_or_insert(err);
                }
                Err(payload) => panic::resume_unwind(payload),
            }
        }
        if let Some(err) = first_error {
            return Err(err);
        }

        info!(
            providers = providers.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "batch complete"
        );
        Ok(())
    }

    /// Load every kind from its default partition.
    pub fn run_all(&self) -> Result<(), DumpError> {
        let providers: Vec<Box<dyn Provider>> = RecordKind::ALL
            .into_iter()
            .map(|kind| Box::new(RecordProvider::new(kind)) as Box<dyn Provider>)
            .collect();
        self.run_batch(&providers)
    }

    /// Load only the kinds `consumer` requires, then hand it the registry.
    ///
    /// Kinds already present are reloaded and replaced.
    pub fn run_with<C: Consumer>(&self, consumer: &mut C) -> Result<C::Output, DumpError> {
        let mut kinds = consumer.required_kinds();
        kinds.sort_unstable();
        kinds.dedup();

        let providers: Vec<Box<dyn Provider>> = kinds
            .into_iter()
            .map(|kind| {
                Box::new(RecordProvider::new(kind).with_emit_manifest(false)) as Box<dyn Provider>
            })
            .collect();
        self.run_batch(&providers)?;
        consumer.consume(&self.registry)
    }
}
