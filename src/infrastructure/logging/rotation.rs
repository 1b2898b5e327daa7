//! Size-based log file rotation
//!
//! When a write would take the live file past `max_file_size`, the file is
//! rolled over: `app.log.(n-1)` becomes `app.log.n`, ..., `app.log` becomes
//! `app.log.1`, and the oldest backup beyond `backup_count` is removed. A
//! fresh `app.log` is then opened.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Path of the `index`-th backup of `path` (`app.log` -> `app.log.3`)
pub fn backup_path(path: &Path, index: usize) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(format!(".{index}"));
    PathBuf::from(name)
}

/// Append-only log file writer with numbered backups
#[derive(Debug)]
pub struct RotatingFileWriter {
    path: PathBuf,
    max_file_size: u64,
    backup_count: usize,
    file: File,
    written: u64,
}

impl RotatingFileWriter {
    /// Open (or create) the log file in append mode
    ///
    /// # Errors
    /// Returns an error if the parent directory or file cannot be created.
    pub fn open(path: impl Into<PathBuf>, max_file_size: u64, backup_count: usize) -> io::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = open_append(&path)?;
        let written = file.metadata()?.len();

        Ok(Self {
            path,
            max_file_size,
            backup_count,
            file,
            written,
        })
    }

    const fn rotation_enabled(&self) -> bool {
        self.max_file_size > 0 && self.backup_count > 0
    }

    /// Whether writing `incoming` more bytes calls for a rollover first
    pub const fn should_rotate(&self, incoming: usize) -> bool {
        self.rotation_enabled()
            && self.written > 0
            && self.written + incoming as u64 >= self.max_file_size
    }

    /// Shift backups up by one and start a new live file
    ///
    /// # Errors
    /// Returns an error if a rename or the reopen fails.
    pub fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;

        let oldest = backup_path(&self.path, self.backup_count);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for index in (1..self.backup_count).rev() {
            let from = backup_path(&self.path, index);
            if from.exists() {
                fs::rename(&from, backup_path(&self.path, index + 1))?;
            }
        }
        fs::rename(&self.path, backup_path(&self.path, 1))?;

        self.file = open_append(&self.path)?;
        self.written = 0;
        Ok(())
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

impl Write for RotatingFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.should_rotate(buf.len()) {
            self.rotate()?;
        }
        let n = self.file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}
