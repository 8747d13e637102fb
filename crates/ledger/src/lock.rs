//! Per-job advisory lock.
//!
//! An exclusive `flock`-style lock on a sidecar file in the job directory.
//! Each acquisition opens its own handle, so the lock serializes threads of
//! one process as well as separate processes. Released on drop.

use fs4::FileExt;
use logist_core::LedgerError;
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Holds the exclusive lock for one job directory until dropped.
#[derive(Debug)]
pub struct JobLock {
    file: File,
    path: PathBuf,
}

impl JobLock {
    /// Block until the lock file at `path` can be locked exclusively.
    pub fn acquire(path: &Path) -> Result<Self, LedgerError> {
        let file = Self::open(path)?;
        file.lock_exclusive().map_err(|e| LedgerError::Write {
            path: path.to_path_buf(),
            reason: format!("failed to lock: {e}"),
        })?;
        debug!(path = %path.display(), "Job lock acquired");
        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    /// Lock without waiting. Returns `Ok(None)` if another holder has it;
    /// any other locking failure is an error.
    pub fn try_acquire(path: &Path) -> Result<Option<Self>, LedgerError> {
        let file = Self::open(path)?;
        match file.try_lock_exclusive() {
            Ok(()) => Ok(Some(Self {
                file,
                path: path.to_path_buf(),
            })),
            Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                debug!(path = %path.display(), "Job lock is held elsewhere");
                Ok(None)
            }
            Err(e) => Err(LedgerError::Write {
                path: path.to_path_buf(),
                reason: format!("failed to lock: {e}"),
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(path: &Path) -> Result<File, LedgerError> {
        OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(path)
            .map_err(|e| LedgerError::Write {
                path: path.to_path_buf(),
                reason: format!("failed to open lock file: {e}"),
            })
    }
}

impl Drop for JobLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
        debug!(path = %self.path.display(), "Job lock released");
    }
}
