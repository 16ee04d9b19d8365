use super::StoryStore;
use crate::error::{MasalError, Result};
use crate::model::Story;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
///
/// Reads and writes can be switched to fail, which is how the error paths of
/// the command layer are exercised without a real disk.
#[derive(Default)]
pub struct InMemoryStore {
    stories: HashMap<String, Story>,
    fail_reads: bool,
    fail_writes: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn len(&self) -> usize {
        self.stories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.stories.contains_key(id)
    }
}

impl StoryStore for InMemoryStore {
    fn get_all(&self) -> Result<Vec<Story>> {
        if self.fail_reads {
            return Err(MasalError::StorageUnavailable("simulated read failure".into()));
        }
        Ok(self.stories.values().cloned().collect())
    }

    fn save(&mut self, story: &Story) -> Result<()> {
        if self.fail_writes {
            return Err(MasalError::StorageWrite("simulated quota exceeded".into()));
        }
        self.stories.insert(story.id.clone(), story.clone());
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        if self.fail_writes {
            return Err(MasalError::StorageWrite("simulated write failure".into()));
        }
        self.stories.remove(id);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Page;

    /// A story with a fixed id and timestamp.
    pub fn story(id: &str, created_at: i64) -> Story {
        Story {
            id: id.to_string(),
            title: format!("Story {}", id),
            summary: format!("Summary of {}", id),
            pages: vec![
                Page::new("Once upon a time", "a castle at dawn"),
                Page::new("The end", "a sleeping dragon"),
            ],
            cover_image: None,
            category: "adventure".to_string(),
            created_at,
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_story(mut self, id: &str, created_at: i64) -> Self {
            self.store.save(&story(id, created_at)).unwrap();
            self
        }

        pub fn with_stories(mut self, created_at: &[i64]) -> Self {
            for (i, ts) in created_at.iter().enumerate() {
                self.store.save(&story(&format!("s{}", i + 1), *ts)).unwrap();
            }
            self
        }

        pub fn failing_reads(mut self) -> Self {
            self.store.set_fail_reads(true);
            self
        }

        pub fn failing_writes(mut self) -> Self {
            self.store.set_fail_writes(true);
            self
        }
    }
}
