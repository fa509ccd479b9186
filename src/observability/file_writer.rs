//! Rotating file writer with size-based rotation and backup retention.
//!
//! This module provides a thread-safe file writer that rotates the log file
//! when it exceeds a size threshold, keeping a fixed number of backups. It
//! implements [`std::io::Write`] for `&FileWriter`, so an `Arc<FileWriter>`
//! plugs straight into `tracing_subscriber::fmt` as a `MakeWriter`.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Maximum file size before rotation (10 MB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
pub const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating file writer.
///
/// # Rotation Strategy
///
/// 1. Check file size before each write
/// 2. If size exceeds the threshold, rotate:
///    - Rename current file to `<name>.<timestamp>`
///    - Create new empty file
///    - Remove oldest backups beyond [`MAX_BACKUP_FILES`]
///
/// # Example
///
/// ```rust
/// use resume_analyzer::observability::FileWriter;
/// use std::io::Write;
///
/// let dir = tempfile::tempdir().unwrap();
/// let writer = FileWriter::new(dir.path().join("resume-analyzer.log"));
/// (&writer).write_all(b"analysis completed\n").unwrap();
/// ```
pub struct FileWriter {
    /// Path to the primary log file.
    file_path: PathBuf,
    /// Size above which the file is rotated.
    max_size: u64,
    /// Lazily-initialized file handle (opens on first write).
    writer: Mutex<Option<File>>,
}

impl FileWriter {
    /// Creates a writer rotating at [`MAX_FILE_SIZE_BYTES`].
    ///
    /// The file is not opened until the first write.
    #[must_use]
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_max_size(file_path, MAX_FILE_SIZE_BYTES)
    }

    /// Creates a writer rotating at `max_size` bytes.
    #[must_use]
    pub const fn with_max_size(file_path: PathBuf, max_size: u64) -> Self {
        Self {
            file_path,
            max_size,
            writer: Mutex::new(None),
        }
    }

    /// Path of the primary log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Appends `buf` to the file, rotating first if the file is too large.
    ///
    /// # Errors
    ///
    /// May fail due to file system permissions, disk space exhaustion or a
    /// poisoned lock.
    fn append(&self, buf: &[u8]) -> io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        self.check_and_rotate(&mut writer)?;

        if writer.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.file_path)?;
            *writer = Some(file);
        }

        let file = writer
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No file available"))?;

        file.write_all(buf)?;
        file.flush()
    }

    /// Closes the handle and rotates if the file exceeds the threshold.
    fn check_and_rotate(&self, writer: &mut Option<File>) -> io::Result<()> {
        if let Ok(metadata) = fs::metadata(&self.file_path) {
            if metadata.len() > self.max_size {
                *writer = None;
                self.rotate_files()?;
            }
        }
        Ok(())
    }

    /// Renames the current file to a timestamped backup and prunes old ones.
    ///
    /// Backups are named `<file_name>.<YYYYmmddTHHMMSS.fffffffff>`; a numeric
    /// suffix is added if that name is already taken.
    fn rotate_files(&self) -> io::Result<()> {
        let timestamp = chrono::Local::now().format("%Y%m%dT%H%M%S%.9f");
        let file_name = self.file_name()?;

        let mut backup_path = self.file_path.with_file_name(format!("{file_name}.{timestamp}"));
        let mut collision = 0;
        while backup_path.exists() {
            collision += 1;
            backup_path = self
                .file_path
                .with_file_name(format!("{file_name}.{timestamp}-{collision}"));
        }

        if self.file_path.exists() {
            fs::rename(&self.file_path, &backup_path)?;
        }

        self.cleanup_old_backups()
    }

    /// Removes backups beyond the retention limit, oldest first.
    ///
    /// Timestamps sort lexicographically, so backups are ordered by name.
    /// Individual deletion errors are ignored.
    fn cleanup_old_backups(&self) -> io::Result<()> {
        let parent_dir = self
            .file_path
            .parent()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No parent directory"))?;
        let prefix = format!("{}.", self.file_name()?);

        let mut backups = list_backups(parent_dir, &prefix)?;
        backups.sort();
        backups.reverse();

        for old_backup in backups.iter().skip(MAX_BACKUP_FILES) {
            let _ = fs::remove_file(old_backup);
        }

        Ok(())
    }

    fn file_name(&self) -> io::Result<&str> {
        self.file_path
            .file_name()
            .and_then(|s| s.to_str())
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "Invalid file name"))
    }
}

fn list_backups(dir: &Path, prefix: &str) -> io::Result<Vec<PathBuf>> {
    Ok(fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(prefix))
        })
        .collect())
}

impl Write for &FileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.append(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_size", &self.max_size)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let writer = FileWriter::new(path.clone());

        (&writer).write_all(b"first\n").unwrap();
        (&writer).write_all(b"second\n").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn rotates_and_keeps_three_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let writer = FileWriter::with_max_size(path.clone(), 8);

        for i in 0..6 {
            (&writer).write_all(format!("line number {i}\n").as_bytes()).unwrap();
        }

        let backups = list_backups(dir.path(), "app.log.").unwrap();
        assert_eq!(backups.len(), MAX_BACKUP_FILES);
        assert_eq!(fs::read_to_string(path).unwrap(), "line number 5\n");
    }
}
