use exn::ResultExt;
use serde::{Deserialize, Serialize};
use std::io::{ErrorKind as IoErrorKind, Write};
use std::path::{Path, PathBuf};
use time::OffsetDateTime;
use tracing::instrument;

use super::{CacheStore, Entries};
use crate::error::{ErrorKind, Result};

const FORMAT_VERSION: &str = "1.0";

#[derive(Serialize, Deserialize)]
struct CacheDocument {
    #[serde(default)]
    version: String,
    #[serde(default, with = "time::serde::rfc3339::option")]
    updated_at: Option<OffsetDateTime>,
    #[serde(default)]
    entries: Entries,
}

/// Stores the cache as a single JSON document:
///
/// ```json
/// {"version": "1.0", "updated_at": "2024-05-01T12:30:00Z", "entries": {"title": {...}}}
/// ```
///
/// Writes go to a temporary file in the same directory which is then renamed
/// over the target, so a crash mid-write never leaves a truncated cache.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}
impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn directory(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}
impl CacheStore for JsonFileStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Entries> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == IoErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => return Err(e).or_raise(|| ErrorKind::Io(self.path.clone())),
        };
        let document: CacheDocument = serde_json::from_str(&contents).or_raise(|| ErrorKind::InvalidData)?;
        if document.version != FORMAT_VERSION {
            tracing::debug!(version = %document.version, "unexpected cache format version");
        }
        Ok(document.entries)
    }

    #[instrument(skip_all, fields(path = %self.path.display(), entries = entries.len()))]
    fn store(&self, entries: &Entries) -> Result<()> {
        let directory = self.directory();
        std::fs::create_dir_all(directory).or_raise(|| ErrorKind::Io(directory.to_path_buf()))?;
        let document = CacheDocument {
            version: FORMAT_VERSION.to_string(),
            updated_at: Some(OffsetDateTime::now_utc()),
            entries: entries.clone(),
        };
        let mut file = tempfile::NamedTempFile::new_in(directory).or_raise(|| ErrorKind::Io(directory.to_path_buf()))?;
        serde_json::to_writer_pretty(&mut file, &document).or_raise(|| ErrorKind::InvalidData)?;
        file.flush().or_raise(|| ErrorKind::Io(file.path().to_path_buf()))?;
        file.as_file().sync_all().or_raise(|| ErrorKind::Io(file.path().to_path_buf()))?;
        file.persist(&self.path).or_raise(|| ErrorKind::Io(self.path.clone()))?;
        Ok(())
    }
}
