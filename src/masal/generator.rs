//! # Story Generation
//!
//! Stories are produced by an external generation service. The core only
//! needs one async operation from it: turn a [`StoryGenerationConfig`] into a
//! finished [`Story`], or fail. Retries, timeouts and transport-level
//! cancellation all belong to the implementation, not to the caller.

use crate::error::{MasalError, Result};
use crate::model::{new_story_id, now_millis, Page, Story, StoryGenerationConfig};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::PathBuf;

#[async_trait]
pub trait StoryGenerator {
    async fn generate(&self, config: &StoryGenerationConfig) -> Result<Story>;
}

/// Yields a story that the generation service already wrote to a JSON file.
///
/// Files from the service may leave out `id` and `createdAt`; those are
/// assigned here.
pub struct StoryFileGenerator {
    path: PathBuf,
}

impl StoryFileGenerator {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedStory {
    id: Option<String>,
    title: String,
    #[serde(default)]
    summary: String,
    pages: Vec<Page>,
    cover_image: Option<String>,
    #[serde(default)]
    category: String,
    created_at: Option<i64>,
}

impl From<GeneratedStory> for Story {
    fn from(g: GeneratedStory) -> Self {
        Story {
            id: g.id.filter(|id| !id.is_empty()).unwrap_or_else(new_story_id),
            title: g.title,
            summary: g.summary,
            pages: g.pages,
            cover_image: g.cover_image,
            category: g.category,
            created_at: g.created_at.unwrap_or_else(now_millis),
        }
    }
}

#[async_trait]
impl StoryGenerator for StoryFileGenerator {
    async fn generate(&self, config: &StoryGenerationConfig) -> Result<Story> {
        tracing::debug!(path = %self.path.display(), theme = %config.theme, "reading generated story");

        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            MasalError::Generation(format!("cannot read {}: {}", self.path.display(), e))
        })?;
        let generated: GeneratedStory = serde_json::from_str(&content).map_err(|e| {
            MasalError::Generation(format!("{} is not a story: {}", self.path.display(), e))
        })?;

        if generated.pages.is_empty() {
            return Err(MasalError::Generation(format!(
                "{} has no pages",
                self.path.display()
            )));
        }

        Ok(generated.into())
    }
}
