//! Diagnostic trace events

use crate::constants::TRACE_TIMESTAMP_FORMAT;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a trace event
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TraceLevel {
    Debug,
    Info,
    Warning,
    Error,
    Exception,
    Panic,
}

impl TraceLevel {
    /// Name written to the level column
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "Debug",
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Exception => "Exception",
            Self::Panic => "Panic",
        }
    }
}

impl fmt::Display for TraceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a trace event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TraceState {
    /// Opening event of a scope
    Begin,
    /// Standalone event
    State,
    /// Closing event of a scope
    End,
}

impl TraceState {
    /// Single-letter marker written to the state column
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Begin => "B",
            Self::State => "S",
            Self::End => "E",
        }
    }

    /// Parse a state column marker
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "B" => Some(Self::Begin),
            "S" => Some(Self::State),
            "E" => Some(Self::End),
            _ => None,
        }
    }
}

/// One immutable row of the diagnostic trace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEvent {
    /// When the event was produced
    pub timestamp: DateTime<Local>,
    /// Severity
    pub level: TraceLevel,
    /// Begin, State or End
    pub state: TraceState,
    /// Type the event originates from
    pub origin: String,
    /// Operation the event originates from
    pub operation: String,
    /// Optional search keyword
    pub keyword: Option<String>,
    /// Free-form annotations in the order they were added
    pub annotations: Vec<String>,
}

impl TraceEvent {
    /// Create an event stamped with the current local time
    pub fn new<O: Into<String>, P: Into<String>>(
        level: TraceLevel,
        state: TraceState,
        origin: O,
        operation: P,
        keyword: Option<String>,
        annotations: Vec<String>,
    ) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            state,
            origin: origin.into(),
            operation: operation.into(),
            keyword,
            annotations,
        }
    }

    /// Column values in trace row order
    ///
    /// `timestamp;level;B|S|E;origin;operation;keyword;annotation...`
    pub fn fields(&self) -> Vec<String> {
        let mut fields = Vec::with_capacity(6 + self.annotations.len());
        fields.push(self.timestamp.format(TRACE_TIMESTAMP_FORMAT).to_string());
        fields.push(self.level.to_string());
        fields.push(self.state.marker().to_string());
        fields.push(self.origin.clone());
        fields.push(self.operation.clone());
        fields.push(self.keyword.clone().unwrap_or_default());
        fields.extend(self.annotations.iter().cloned());
        fields
    }
}
