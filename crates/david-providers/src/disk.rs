//! Free disk space probes
//!
//! | Probe | Description |
//! |-------|-------------|
//! | [`SysinfoDiskSpace`] | Queries mounted disks through `sysinfo` |
//! | [`StaticDiskSpace`] | Reports a fixed value, for tests |

use david_domain::ports::DiskSpaceProbe;
use std::path::Path;
use sysinfo::Disks;

/// Free space of the disk holding a path, read from `sysinfo`
///
/// The disk is the one whose mount point is the longest prefix of the
/// absolute path. Paths matching no mounted disk report `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SysinfoDiskSpace;

impl SysinfoDiskSpace {
    /// Create a new probe
    pub fn new() -> Self {
        Self
    }
}

impl DiskSpaceProbe for SysinfoDiskSpace {
    fn available_kb(&self, path: &Path) -> Option<u64> {
        let target = std::path::absolute(path).ok()?;
        let disks = Disks::new_with_refreshed_list();
        disks
            .list()
            .iter()
            .filter(|disk| target.starts_with(disk.mount_point()))
            .max_by_key(|disk| disk.mount_point().as_os_str().len())
            .map(|disk| disk.available_space() / 1024)
    }
}

/// Probe reporting the same value for every path
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticDiskSpace {
    available_kb: Option<u64>,
}

impl StaticDiskSpace {
    /// Report `available_kb` for every path
    pub fn new(available_kb: u64) -> Self {
        Self {
            available_kb: Some(available_kb),
        }
    }

    /// Report unknown free space
    pub fn unknown() -> Self {
        Self { available_kb: None }
    }
}

impl DiskSpaceProbe for StaticDiskSpace {
    fn available_kb(&self, _path: &Path) -> Option<u64> {
        self.available_kb
    }
}
