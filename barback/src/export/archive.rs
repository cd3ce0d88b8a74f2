//! Archive container writing.
//!
//! The writer owns the output file for the duration of a run. Until
//! `finalize` succeeds the container is not a valid artifact; dropping the
//! writer on any earlier path deletes the partial file, so a failed export
//! never leaves a truncated archive behind.

use crate::error::{Error, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::FileOptions;
use zip::ZipWriter;

pub struct ArchiveWriter {
    path: PathBuf,
    inner: Option<ZipWriter<File>>,
}

impl ArchiveWriter {
    /// Open a new container at `path` for writing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ContainerCreate`] if the destination cannot be
    /// opened (permissions, missing parent directory).
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|e| Error::ContainerCreate {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            inner: Some(ZipWriter::new(file)),
        })
    }

    /// Store a named byte payload.
    pub fn put_bytes(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        let writer = self.writer()?;
        writer
            .start_file(name, FileOptions::default())
            .map_err(|e| Error::Archive(format!("Cannot start entry {}: {}", name, e)))?;
        writer
            .write_all(bytes)
            .map_err(|e| Error::Archive(format!("Cannot write entry {}: {}", name, e)))?;
        tracing::debug!("Wrote entry {} ({} bytes)", name, bytes.len());
        Ok(())
    }

    /// Copy a source file into the container under `name`.
    ///
    /// The source is streamed rather than loaded whole, so large media
    /// files stay off the heap.
    pub fn put_file(&mut self, source: &Path, name: &str) -> Result<()> {
        let mut file = File::open(source)
            .map_err(|e| Error::Archive(format!("Cannot open {}: {}", source.display(), e)))?;

        let writer = self.writer()?;
        writer
            .start_file(name, FileOptions::default())
            .map_err(|e| Error::Archive(format!("Cannot start entry {}: {}", name, e)))?;
        let copied = std::io::copy(&mut file, writer)
            .map_err(|e| Error::Archive(format!("Cannot copy {} into {}: {}", source.display(), name, e)))?;
        tracing::debug!("Copied {} into entry {} ({} bytes)", source.display(), name, copied);
        Ok(())
    }

    /// Finish the container. After this returns the file at the returned
    /// path is immutable and valid.
    pub fn finalize(mut self) -> Result<PathBuf> {
        let mut writer = self
            .inner
            .take()
            .ok_or_else(|| Error::Archive("container already finalized".to_string()))?;
        writer.finish().map_err(|e| {
            let _ = fs::remove_file(&self.path);
            Error::Archive(format!("Archive finalization failed: {}", e))
        })?;
        Ok(self.path.clone())
    }

    fn writer(&mut self) -> Result<&mut ZipWriter<File>> {
        self.inner
            .as_mut()
            .ok_or_else(|| Error::Archive("container already finalized".to_string()))
    }
}

impl Drop for ArchiveWriter {
    fn drop(&mut self) {
        if let Some(writer) = self.inner.take() {
            drop(writer);
            tracing::warn!("Discarding partial archive {}", self.path.display());
            let _ = fs::remove_file(&self.path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::TempDir;
    use zip::ZipArchive;

    #[test]
    fn test_put_bytes_and_read_back() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.zip");

        let mut writer = ArchiveWriter::create(&path).unwrap();
        writer.put_bytes("hello.txt", b"hello world").unwrap();
        let finished = writer.finalize().unwrap();
        assert_eq!(finished, path);

        let mut archive = ZipArchive::new(File::open(&path).unwrap()).unwrap();
        let mut content = String::new();
        archive
            .by_name("hello.txt")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "hello world");
    }

    #[test]
    fn test_put_file_streams_source() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("image.jpg");
        fs::write(&source, b"not really a jpeg").unwrap();
        let path = temp.path().join("out.zip");

        let mut writer = ArchiveWriter::create(&path).unwrap();
        writer.put_file(&source, "cocktails/images/negroni-1.jpg").unwrap();
        writer.finalize().unwrap();

        let mut archive = ZipArchive::new(File::open(&path).unwrap()).unwrap();
        let mut content = Vec::new();
        archive
            .by_name("cocktails/images/negroni-1.jpg")
            .unwrap()
            .read_to_end(&mut content)
            .unwrap();
        assert_eq!(content, b"not really a jpeg");
    }

    #[test]
    fn test_drop_without_finalize_deletes_partial_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.zip");

        let mut writer = ArchiveWriter::create(&path).unwrap();
        writer.put_bytes("a.txt", b"a").unwrap();
        assert!(path.exists());
        drop(writer);

        assert!(!path.exists(), "partial archive must be discarded on drop");
    }

    #[test]
    fn test_create_fails_without_parent_directory() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("no-such-dir").join("out.zip");

        let result = ArchiveWriter::create(&path);
        assert!(matches!(result, Err(Error::ContainerCreate { .. })));
        assert!(!path.exists());
    }

    #[test]
    fn test_put_missing_file_errors_and_drop_cleans_up() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out.zip");

        let mut writer = ArchiveWriter::create(&path).unwrap();
        let result = writer.put_file(Path::new("/nonexistent/file.jpg"), "x-1.jpg");
        assert!(matches!(result, Err(Error::Archive(_))));

        drop(writer);
        assert!(!path.exists());
    }
}
