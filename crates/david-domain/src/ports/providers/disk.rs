//! Disk Space Probe Port

use std::path::Path;

/// Reports free disk space for a path
pub trait DiskSpaceProbe: Send + Sync {
    /// Free space in KB on the volume holding `path`, `None` when unknown
    fn available_kb(&self, path: &Path) -> Option<u64>;
}
