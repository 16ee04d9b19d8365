use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// One page of a story. Pages have no identity of their own; their position
/// in [`Story::pages`] is the reading order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub text: String,
    pub illustration_prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_data: Option<String>,
}

impl Page {
    pub fn new(text: impl Into<String>, illustration_prompt: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            illustration_prompt: illustration_prompt.into(),
            image_url: None,
            audio_data: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub pages: Vec<Page>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    pub category: String,
    /// Epoch milliseconds.
    pub created_at: i64,
}

impl Story {
    pub fn new(
        title: impl Into<String>,
        summary: impl Into<String>,
        category: impl Into<String>,
        pages: Vec<Page>,
    ) -> Self {
        Self {
            id: new_story_id(),
            title: title.into(),
            summary: summary.into(),
            pages,
            cover_image: None,
            category: category.into(),
            created_at: now_millis(),
        }
    }
}

pub fn new_story_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Parameters handed to a story generator. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryGenerationConfig {
    pub child_name: String,
    pub age: u8,
    pub theme: String,
    pub keywords: String,
}

/// The screen the application is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppState {
    Library,
    Generating,
    Reading,
}

impl fmt::Display for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppState::Library => write!(f, "library"),
            AppState::Generating => write!(f, "generating"),
            AppState::Reading => write!(f, "reading"),
        }
    }
}
