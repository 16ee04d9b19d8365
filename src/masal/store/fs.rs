use super::{StoredStory, StoryStore, SCHEMA_VERSION};
use crate::error::{MasalError, Result};
use crate::model::Story;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const RECORD_PREFIX: &str = "story-";
const RECORD_EXT: &str = ".json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Opens (creating if needed) the store directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| {
            MasalError::StorageUnavailable(format!("cannot open {}: {}", root.display(), e))
        })?;
        tracing::debug!(root = %root.display(), "opened story store");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn record_path(&self, id: &str) -> PathBuf {
        self.root.join(record_filename(id))
    }

    fn read_record(&self, path: &Path) -> Result<Option<Story>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "skipping story record that cannot be read"
                );
                return Ok(None);
            }
        };

        let record: StoredStory = match serde_json::from_str(&content) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping unreadable story record");
                return Ok(None);
            }
        };

        if record.schema_version > SCHEMA_VERSION {
            tracing::warn!(
                path = %path.display(),
                version = record.schema_version,
                "skipping story record from a newer version"
            );
            return Ok(None);
        }

        let expected = record_filename(&record.story.id);
        if path.file_name().and_then(|n| n.to_str()) != Some(expected.as_str()) {
            tracing::warn!(
                path = %path.display(),
                id = %record.story.id,
                "skipping story record stored under another id's file name"
            );
            return Ok(None);
        }

        Ok(Some(record.story))
    }
}

impl StoryStore for FileStore {
    fn get_all(&self) -> Result<Vec<Story>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.root).map_err(|e| {
            MasalError::StorageUnavailable(format!("cannot list {}: {}", self.root.display(), e))
        })?;

        let mut stories = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| MasalError::StorageUnavailable(e.to_string()))?;
            let path = entry.path();
            if !is_record_file(&path) {
                continue;
            }
            if let Some(story) = self.read_record(&path)? {
                stories.push(story);
            }
        }

        tracing::debug!(count = stories.len(), "loaded stories");
        Ok(stories)
    }

    fn save(&mut self, story: &Story) -> Result<()> {
        let write_err = |e: std::io::Error| MasalError::StorageWrite(e.to_string());

        fs::create_dir_all(&self.root).map_err(write_err)?;
        let content = serde_json::to_string_pretty(&StoredStory::new(story.clone()))?;

        let target = self.record_path(&story.id);
        let tmp = self.root.join(format!(".story-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp, content).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            write_err(e)
        })?;
        fs::rename(&tmp, &target).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            write_err(e)
        })?;

        tracing::debug!(id = %story.id, "saved story");
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        match fs::remove_file(self.record_path(id)) {
            Ok(()) => {
                tracing::debug!(id, "deleted story");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(MasalError::StorageWrite(e.to_string())),
        }
    }
}

fn is_record_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with(RECORD_PREFIX) && n.ends_with(RECORD_EXT))
        .unwrap_or(false)
}

/// Ids are opaque, so anything outside `[a-z0-9_-]` is percent-encoded.
/// Uppercase letters are encoded too, so ids differing only in case stay
/// distinct on case-insensitive filesystems.
fn record_filename(id: &str) -> String {
    let mut name = String::with_capacity(RECORD_PREFIX.len() + id.len() + RECORD_EXT.len());
    name.push_str(RECORD_PREFIX);
    for byte in id.bytes() {
        if byte.is_ascii_lowercase() || byte.is_ascii_digit() || byte == b'-' || byte == b'_' {
            name.push(byte as char);
        } else {
            name.push_str(&format!("%{:02X}", byte));
        }
    }
    name.push_str(RECORD_EXT);
    name
}
