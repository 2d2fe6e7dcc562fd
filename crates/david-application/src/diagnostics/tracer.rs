use super::TraceScope;
use david_domain::ports::TraceSink;
use david_domain::value_objects::{TraceEvent, TraceLevel, TraceState};
use std::fmt;
use std::sync::Arc;

/// Writes trace events to a sink
///
/// Cheap to clone; clones share the sink.
#[derive(Clone, Default)]
pub struct Tracer {
    sink: Option<Arc<dyn TraceSink>>,
}

impl Tracer {
    /// Tracer writing to `sink`
    pub fn new(sink: Arc<dyn TraceSink>) -> Self {
        Self { sink: Some(sink) }
    }

    /// Tracer that records nothing
    pub fn disabled() -> Self {
        Self { sink: None }
    }

    /// Name of the underlying sink
    pub fn sink_name(&self) -> &str {
        self.sink.as_ref().map_or("disabled", |sink| sink.sink_name())
    }

    /// Whether events are being recorded
    pub fn is_enabled(&self) -> bool {
        self.sink.as_ref().is_some_and(|sink| sink.is_enabled())
    }

    /// Write a single State event
    pub fn write(
        &self,
        level: TraceLevel,
        origin: &str,
        operation: &str,
        keyword: Option<&str>,
        annotations: &[&str],
    ) {
        if let Some(sink) = self.active_sink() {
            let event = TraceEvent::new(
                level,
                TraceState::State,
                origin,
                operation,
                keyword.map(str::to_string),
                annotations.iter().map(|a| (*a).to_string()).collect(),
            );
            sink.write_row(&event.fields());
        }
    }

    /// Write a Begin event and return the scope that writes the End event
    ///
    /// When tracing is disabled the returned scope is inert.
    pub fn begin_scope(
        &self,
        level: TraceLevel,
        origin: &str,
        operation: &str,
        keyword: Option<&str>,
        annotations: &[&str],
    ) -> TraceScope {
        let Some(sink) = self.active_sink() else {
            return TraceScope::inactive(level, origin, operation);
        };
        let keyword = keyword.map(str::to_string);
        let begin = TraceEvent::new(
            level,
            TraceState::Begin,
            origin,
            operation,
            keyword.clone(),
            annotations.iter().map(|a| (*a).to_string()).collect(),
        );
        sink.write_row(&begin.fields());
        TraceScope::active(Arc::clone(sink), level, origin, operation, keyword)
    }

    fn active_sink(&self) -> Option<&Arc<dyn TraceSink>> {
        self.sink.as_ref().filter(|sink| sink.is_enabled())
    }
}

impl fmt::Debug for Tracer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tracer")
            .field("sink", &self.sink_name())
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
