//! # Storage Layer
//!
//! The [`StoryStore`] trait is the record store for generated stories. The
//! application only ever needs three queries: everything, upsert one, and
//! delete one. Sorting and filtering happen in memory on the caller side.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - One JSON file per story: `story-{id}.json`
//!   - Writes are atomic (temp file + rename)
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can be told to fail reads or writes
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! stories/
//! ├── story-{id}.json      # { "schemaVersion": 1, "story": { ... } }
//! └── .story-{uuid}.tmp    # only while a write is in flight
//! ```

use crate::error::Result;
use crate::model::Story;
use serde::{Deserialize, Serialize};

pub mod fs;
pub mod memory;

/// Current version of the on-disk record envelope.
pub const SCHEMA_VERSION: u32 = 1;

/// Abstract interface for story persistence.
pub trait StoryStore {
    /// Every stored story, in no particular order.
    ///
    /// Fails with `StorageUnavailable` when the storage cannot be opened.
    fn get_all(&self) -> Result<Vec<Story>>;

    /// Insert or replace the story with the same id.
    ///
    /// Fails with `StorageWrite`. A failed save never leaves a partial record.
    fn save(&mut self, story: &Story) -> Result<()>;

    /// Remove a story. Removing an unknown id succeeds.
    fn delete(&mut self, id: &str) -> Result<()>;
}

/// Versioned wrapper around a story as it is written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredStory {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    pub story: Story,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

impl StoredStory {
    pub fn new(story: Story) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            story,
        }
    }
}
