//! Definition dumping pipeline: providers decode partitions into a shared
//! [`DefinitionRegistry`], the [`Scheduler`] fans them out and gates
//! [`Consumer`]s, and a [`SerializationSink`] writes the result.

mod config;
mod consumer;
mod error;
mod fs_source;
mod latch;
mod provider;
mod registry;
mod scheduler;
mod sink;

pub use config::{DumpSettings, Properties};
pub use consumer::{Consumer, DumpAll, MapFunction, MapFunctions};
pub use defdump_core as core;
pub use defdump_definitions as definitions;
pub use error::{DumpError, PropertiesError, RegistryError, SinkError};
pub use fs_source::DirectoryByteSource;
pub use latch::{CompletionLatch, LatchGuard};
pub use provider::{Provider, RecordProvider};
pub use registry::DefinitionRegistry;
pub use scheduler::Scheduler;
pub use sink::{JsonSink, MANIFEST_FILE, MemorySink, Published, SerializationSink};
