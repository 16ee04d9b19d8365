//! The in-memory story list shown in the library view.
//!
//! Once loaded, this list is the source of truth for the library screen. It
//! is never re-fetched from the store; every command that changes the store
//! applies the same change here, in the same step, after the store call
//! succeeded. The only mutations are insert-at-front and remove-by-id.
//!
//! Stories are ordered newest first. Display indexes are 1-based positions in
//! that order (`1` is the newest story).

use crate::model::Story;
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct StoryList {
    stories: Vec<Story>,
}

impl StoryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the list from store output: newest first, ties keep their
    /// incoming order, and only the first story per id is kept.
    pub fn from_unsorted(mut stories: Vec<Story>) -> Self {
        stories.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let mut seen = HashSet::new();
        stories.retain(|s| seen.insert(s.id.clone()));
        Self { stories }
    }

    pub fn prepend(&mut self, story: Story) {
        self.remove(&story.id);
        self.stories.insert(0, story);
    }

    pub fn remove(&mut self, id: &str) -> Option<Story> {
        let pos = self.position(id)?;
        Some(self.stories.remove(pos))
    }

    pub fn get(&self, id: &str) -> Option<&Story> {
        self.stories.iter().find(|s| s.id == id)
    }

    /// Looks up a story by its 1-based display index.
    pub fn get_index(&self, index: usize) -> Option<&Story> {
        index.checked_sub(1).and_then(|i| self.stories.get(i))
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.stories.iter().position(|s| s.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Story> {
        self.stories.iter()
    }

    pub fn as_slice(&self) -> &[Story] {
        &self.stories
    }

    pub fn len(&self) -> usize {
        self.stories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }
}
