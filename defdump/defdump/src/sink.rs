//! Output boundary for decoded records.

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use defdump_core::RecordKind;
use defdump_definitions::Records;
use tracing::debug;

use crate::error::SinkError;

/// Receives each kind's records once loading is complete.
pub trait SerializationSink {
    fn publish(
        &mut self,
        kind: RecordKind,
        records: &Records,
        emit_manifest: bool,
    ) -> Result<(), SinkError>;

    /// Called once after the last [`publish`](Self::publish).
    fn finish(&mut self) -> Result<(), SinkError> {
        Ok(())
    }
}

/// Name of the manifest written by [`JsonSink::finish`].
pub const MANIFEST_FILE: &str = "types.json";

/// Writes `<output>/<kind>.json` per kind and a `types.json` manifest.
#[derive(Debug, Clone)]
pub struct JsonSink {
    output: PathBuf,
    manifest: Vec<RecordKind>,
}

impl JsonSink {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            manifest: Vec::new(),
        }
    }

    /// Path of the JSON file written for `kind`.
    pub fn path_for(&self, kind: RecordKind) -> PathBuf {
        self.output.join(format!("{}.json", kind.as_str()))
    }

    fn write_json<T: serde::Serialize + ?Sized>(
        &self,
        path: &Path,
        label: &str,
        value: &T,
    ) -> Result<(), SinkError> {
        let io_err = |source| SinkError::Io {
            path: path.to_path_buf(),
            source,
        };
        fs::create_dir_all(&self.output).map_err(|source| SinkError::Io {
            path: self.output.clone(),
            source,
        })?;
        let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);
        serde_json::to_writer_pretty(&mut writer, value).map_err(|source| SinkError::Json {
            kind: label.to_string(),
            source,
        })?;
        writer.flush().map_err(io_err)
    }
}

impl SerializationSink for JsonSink {
    fn publish(
        &mut self,
        kind: RecordKind,
        records: &Records,
        emit_manifest: bool,
    ) -> Result<(), SinkError> {
        let path = self.path_for(kind);
        self.write_json(&path, kind.as_str(), records)?;
        debug!(%kind, records = records.len(), path = %path.display(), "wrote definitions");
        if emit_manifest && !self.manifest.contains(&kind) {
            self.manifest.push(kind);
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), SinkError> {
        let names: Vec<&str> = self.manifest.iter().map(RecordKind::as_str).collect();
        let path = self.output.join(MANIFEST_FILE);
        self.write_json(&path, "manifest", &names)
    }
}

/// One recorded [`SerializationSink::publish`] call.
#[derive(Debug, Clone)]
pub struct Published {
    pub kind: RecordKind,
    pub records: Records,
    pub emit_manifest: bool,
}

/// Keeps published records in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub published: Vec<Published>,
    pub finished: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent records published for `kind`.
    pub fn get(&self, kind: RecordKind) -> Option<&Records> {
        self.published
            .iter()
            .rev()
            .find(|published| published.kind == kind)
            .map(|published| &published.records)
    }
}

impl SerializationSink for MemorySink {
    fn publish(
        &mut self,
        kind: RecordKind,
        records: &Records,
        emit_manifest: bool,
    ) -> Result<(), SinkError> {
        self.published.push(Published {
            kind,
            records: records.clone(),
            emit_manifest,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<(), SinkError> {
        self.finished = true;
        Ok(())
    }
}
