//! Scoped file handle for one read operation

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Read-only file opened for exactly one operation
///
/// The size is captured once, right after opening, and never re-queried.
/// The handle is released when the value is dropped, which covers the
/// success path as well as every early return on error.
#[derive(Debug)]
pub struct SourceFile {
    file: File,
    path: PathBuf,
    size: u64,
}

impl SourceFile {
    /// Open `path` read-only and snapshot its size
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let size = file
            .metadata()
            .map_err(|source| Error::Metadata {
                path: path.to_path_buf(),
                source,
            })?
            .len();

        log::debug!("opened {} ({} bytes)", path.display(), size);

        Ok(Self {
            file,
            path: path.to_path_buf(),
            size,
        })
    }

    /// Size captured at open time
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Path this handle was opened from
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Read for SourceFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

impl Drop for SourceFile {
    fn drop(&mut self) {
        log::trace!("releasing {}", self.path.display());
    }
}
