use david_domain::ports::TraceSink;
use david_domain::value_objects::{TraceEvent, TraceLevel, TraceState};
use std::fmt;
use std::sync::Arc;

/// Open trace scope
///
/// Collects end information and writes the End event once, on
/// [`close`](Self::close) or on drop.
pub struct TraceScope {
    sink: Option<Arc<dyn TraceSink>>,
    level: TraceLevel,
    origin: String,
    operation: String,
    keyword: Option<String>,
    end_info: Vec<String>,
}

impl TraceScope {
    pub(super) fn active(
        sink: Arc<dyn TraceSink>,
        level: TraceLevel,
        origin: &str,
        operation: &str,
        keyword: Option<String>,
    ) -> Self {
        Self {
            sink: Some(sink),
            level,
            origin: origin.to_string(),
            operation: operation.to_string(),
            keyword,
            end_info: Vec::new(),
        }
    }

    pub(super) fn inactive(level: TraceLevel, origin: &str, operation: &str) -> Self {
        Self {
            sink: None,
            level,
            origin: origin.to_string(),
            operation: operation.to_string(),
            keyword: None,
            end_info: Vec::new(),
        }
    }

    /// Append annotations to the End event
    pub fn add_end_info<I, S>(&mut self, info: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.sink.is_some() {
            self.end_info.extend(info.into_iter().map(Into::into));
        }
    }

    /// Whether the End event is still pending
    pub fn is_open(&self) -> bool {
        self.sink.is_some()
    }

    /// Write the End event now; later calls do nothing
    pub fn close(&mut self) {
        let Some(sink) = self.sink.take() else {
            return;
        };
        let end = TraceEvent::new(
            self.level,
            TraceState::End,
            std::mem::take(&mut self.origin),
            std::mem::take(&mut self.operation),
            self.keyword.take(),
            std::mem::take(&mut self.end_info),
        );
        sink.write_row(&end.fields());
    }
}

impl Drop for TraceScope {
    fn drop(&mut self) {
        self.close();
    }
}

impl fmt::Debug for TraceScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TraceScope")
            .field("origin", &self.origin)
            .field("operation", &self.operation)
            .field("open", &self.is_open())
            .field("end_info", &self.end_info)
            .finish_non_exhaustive()
    }
}
