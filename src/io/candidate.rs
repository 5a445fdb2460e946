//! Candidate file abstraction
//!
//! A candidate file is anything with a name, a declared MIME type and
//! bytes that can be read asynchronously by range. The declared type is
//! supplied by whoever hands the file over (a browser, an upload form, a
//! CLI flag) and is never verified against the content here.

use std::io::{self, SeekFrom};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::debug;
use tokio::io::{AsyncReadExt, AsyncSeekExt};

use crate::validation::constants::mime;

/// A byte-bearing resource offered for upload
#[async_trait]
pub trait CandidateFile: Send + Sync {
    /// File name as chosen by the user, used to derive the extension
    fn name(&self) -> &str;

    /// MIME type attached by the host environment
    fn declared_type(&self) -> &str;

    /// Reads up to `len` bytes starting at `start`
    ///
    /// Returns fewer bytes when the resource ends early.
    async fn read_range(&self, start: u64, len: usize) -> io::Result<Vec<u8>>;
}

/// Candidate file held in memory
#[derive(Debug, Clone)]
pub struct MemoryFile {
    name: String,
    declared_type: String,
    bytes: Vec<u8>,
}

impl MemoryFile {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        MemoryFile {
            name: name.into(),
            declared_type: declared_type.into(),
            bytes,
        }
    }
}

#[async_trait]
impl CandidateFile for MemoryFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn declared_type(&self) -> &str {
        &self.declared_type
    }

    async fn read_range(&self, start: u64, len: usize) -> io::Result<Vec<u8>> {
        let start = usize::try_from(start)
            .unwrap_or(usize::MAX)
            .min(self.bytes.len());
        let end = start.saturating_add(len).min(self.bytes.len());
        Ok(self.bytes[start..end].to_vec())
    }
}

/// Candidate file on the local file system
///
/// The file is opened on each read, so constructing a `LocalFile` never
/// touches the disk.
#[derive(Debug, Clone)]
pub struct LocalFile {
    path: PathBuf,
    name: String,
    declared_type: String,
}

impl LocalFile {
    /// Wraps `path` with an explicitly declared MIME type
    pub fn new(path: impl AsRef<Path>, declared_type: impl Into<String>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        LocalFile {
            path,
            name,
            declared_type: declared_type.into(),
        }
    }

    /// Wraps `path`, declaring the type a browser would guess from the
    /// extension
    pub fn with_guessed_type(path: impl AsRef<Path>) -> Self {
        let declared_type = guess_mime(path.as_ref());
        debug!("Guessed MIME type '{}' for {}", declared_type, path.as_ref().display());
        Self::new(path, declared_type)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CandidateFile for LocalFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn declared_type(&self) -> &str {
        &self.declared_type
    }

    async fn read_range(&self, start: u64, len: usize) -> io::Result<Vec<u8>> {
        let mut file = tokio::fs::File::open(&self.path).await?;
        file.seek(SeekFrom::Start(start)).await?;

        let mut buffer = Vec::with_capacity(len);
        file.take(len as u64).read_to_end(&mut buffer).await?;
        Ok(buffer)
    }
}

/// MIME type guessed from a path's extension
pub fn guess_mime(path: &Path) -> String {
    mime_guess::from_path(path)
        .first()
        .map(|m| m.essence_str().to_string())
        .unwrap_or_else(|| mime::OCTET_STREAM.to_string())
}
