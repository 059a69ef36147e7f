use defdump::{SerializationSink, SinkError, core::RecordKind, definitions::Records};
use indicatif::ProgressBar;

/// Advances a progress bar once per published kind.
pub struct ProgressSink<S> {
    inner: S,
    pb: ProgressBar,
}

impl<S> ProgressSink<S> {
    pub fn new(inner: S, pb: ProgressBar) -> Self {
        Self { inner, pb }
    }
}

impl<S: SerializationSink> SerializationSink for ProgressSink<S> {
    fn publish(
        &mut self,
        kind: RecordKind,
        records: &Records,
        emit_manifest: bool,
    ) -> Result<(), SinkError> {
        self.pb.set_message(kind.as_str());
        self.inner.publish(kind, records, emit_manifest)?;
        self.pb.inc(1);
        Ok(())
    }

    fn finish(&mut self) -> Result<(), SinkError> {
        self.inner.finish()
    }
}
