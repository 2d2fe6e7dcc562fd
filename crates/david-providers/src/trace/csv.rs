//! CSV file trace sink
//!
//! Appends semicolon-separated rows to one file per process, created on the
//! first write as `<trace dir>/<unix-nanos>.csv`. The sink never reports an
//! error to its caller: insufficient disk space or any I/O failure disables
//! it for the rest of the process, a lock timeout drops the row.

use crate::constants::{TRACE_FILE_CREATE_ATTEMPTS, TRACE_QUOTED_CHARS};
use crate::disk::SysinfoDiskSpace;
use david_application::BoundedMutex;
use david_domain::constants::{
    TRACE_FIELD_SEPARATOR, TRACE_FILE_EXTENSION, TRACE_HEADER, TRACE_WRITER_LOCK_NAME,
};
use david_domain::ports::{DiskSpaceProbe, TraceSink};
use std::borrow::Cow;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

/// Trace file opened by the sink
#[derive(Debug)]
struct TraceFile {
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
}

/// Trace sink writing CSV rows to a file
pub struct CsvTraceSink {
    directory: PathBuf,
    min_free_space_kb: u64,
    probe: Arc<dyn DiskSpaceProbe>,
    creation_lock: BoundedMutex,
    file: OnceLock<TraceFile>,
    disabled: AtomicBool,
}

impl CsvTraceSink {
    /// Sink writing under `directory`, probing free space through `sysinfo`
    pub fn new(directory: impl Into<PathBuf>, min_free_space_kb: u64, lock_timeout_ms: i64) -> Self {
        Self::with_probe(
            directory,
            min_free_space_kb,
            lock_timeout_ms,
            Arc::new(SysinfoDiskSpace::new()),
        )
    }

    /// Sink with an explicit free space probe
    pub fn with_probe(
        directory: impl Into<PathBuf>,
        min_free_space_kb: u64,
        lock_timeout_ms: i64,
        probe: Arc<dyn DiskSpaceProbe>,
    ) -> Self {
        Self {
            directory: directory.into(),
            min_free_space_kb,
            probe,
            creation_lock: BoundedMutex::with_timeout_ms(TRACE_WRITER_LOCK_NAME, lock_timeout_ms),
            file: OnceLock::new(),
            disabled: AtomicBool::new(false),
        }
    }

    /// Directory receiving the trace file
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Path of the trace file, once created
    pub fn file_path(&self) -> Option<&Path> {
        self.file.get().map(|file| file.path.as_path())
    }

    fn open(&self) -> Option<&TraceFile> {
        if let Some(file) = self.file.get() {
            return Some(file);
        }

        let _guard = match self.creation_lock.acquire() {
            Ok(guard) => guard,
            Err(e) => {
                tracing::debug!(error = %e, "Trace row dropped");
                return None;
            }
        };
        if let Some(file) = self.file.get() {
            return Some(file);
        }
        if self.is_disabled() {
            return None;
        }

        // Unknown free space does not disable the sink
        if let Some(available_kb) = self.probe.available_kb(&self.directory)
            && available_kb < self.min_free_space_kb
        {
            self.disable(&format!(
                "insufficient disk space: {available_kb} KB available, {} KB required",
                self.min_free_space_kb
            ));
            return None;
        }

        match self.create_file() {
            Ok(file) => Some(self.file.get_or_init(|| file)),
            Err(e) => {
                self.disable(&format!("cannot create trace file: {e}"));
                None
            }
        }
    }

    fn create_file(&self) -> io::Result<TraceFile> {
        fs::create_dir_all(&self.directory)?;

        let stamp = chrono::Local::now().timestamp_nanos_opt().unwrap_or_default();
        let mut attempt = 0;
        let (path, file) = loop {
            let path = self
                .directory
                .join(format!("{}.{TRACE_FILE_EXTENSION}", stamp + i64::from(attempt)));
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => break (path, file),
                Err(e)
                    if e.kind() == io::ErrorKind::AlreadyExists
                        && attempt + 1 < TRACE_FILE_CREATE_ATTEMPTS =>
                {
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        };

        let mut writer = BufWriter::new(file);
        let header: Vec<String> = TRACE_HEADER.iter().map(|h| (*h).to_string()).collect();
        writer.write_all(encode_row(&header).as_bytes())?;
        writer.flush()?;

        tracing::debug!(path = %path.display(), "Trace file created");
        Ok(TraceFile {
            path,
            writer: Mutex::new(writer),
        })
    }

    fn is_disabled(&self) -> bool {
        self.disabled.load(Ordering::Acquire)
    }

    fn disable(&self, reason: &str) {
        if !self.disabled.swap(true, Ordering::AcqRel) {
            tracing::warn!(directory = %self.directory.display(), reason, "Trace sink disabled");
        }
    }
}

impl TraceSink for CsvTraceSink {
    fn sink_name(&self) -> &str {
        "csv"
    }

    fn write_row(&self, fields: &[String]) {
        if self.is_disabled() {
            return;
        }
        let Some(file) = self.open() else {
            return;
        };

        let line = encode_row(fields);
        let mut writer = file.writer.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writer
            .write_all(line.as_bytes())
            .and_then(|()| writer.flush())
        {
            drop(writer);
            self.disable(&format!("cannot write trace row: {e}"));
        }
    }

    fn is_enabled(&self) -> bool {
        !self.is_disabled()
    }
}

impl std::fmt::Debug for CsvTraceSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CsvTraceSink")
            .field("directory", &self.directory)
            .field("min_free_space_kb", &self.min_free_space_kb)
            .field("file", &self.file_path())
            .field("disabled", &self.is_disabled())
            .finish_non_exhaustive()
    }
}

/// Join fields with the separator and terminate the line
pub fn encode_row(fields: &[String]) -> String {
    let mut line = String::new();
    for (index, field) in fields.iter().enumerate() {
        if index > 0 {
            line.push(TRACE_FIELD_SEPARATOR);
        }
        line.push_str(&encode_field(field));
    }
    line.push('\n');
    line
}

/// Quote a field containing a separator, a quote or a line break
pub fn encode_field(field: &str) -> Cow<'_, str> {
    if field.contains(TRACE_QUOTED_CHARS) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use david_application::ports::registry::{TRACE_PROVIDERS, TraceProviderConfig, TraceProviderEntry};

#[linkme::distributed_slice(TRACE_PROVIDERS)]
static CSV_TRACE_PROVIDER: TraceProviderEntry = TraceProviderEntry {
    name: "csv",
    description: "Semicolon-separated trace file per process",
    factory: |config: &TraceProviderConfig| {
        Ok(Arc::new(CsvTraceSink::new(
            config.directory.clone(),
            config.min_free_space_kb,
            config.lock_timeout_ms,
        )))
    },
};
