//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It owns the
//! store and the [`Session`] and is the single entry point for every view
//! layer (the bundled CLI, a GUI, tests).
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** each trigger to its command function
//! - **Normalizes inputs** (display indexes and ids → story ids)
//! - **Drives the generator** for the whole generating step
//! - **Exposes state** for rendering: current [`AppState`], the sorted
//!   story list, the active story, the loading flag
//!
//! Business logic lives in `commands/*.rs`; nothing here prints or exits.
//!
//! ## Generic Over StoryStore
//!
//! `MasalApi<S: StoryStore>` is generic over the storage backend:
//! - Production: `MasalApi<FileStore>`
//! - Testing: `MasalApi<InMemoryStore>`
//!
//! Every instance is independent; there is no global application state.

use crate::commands::{self, CmdResult};
use crate::error::{MasalError, Result};
use crate::generator::StoryGenerator;
use crate::library::StoryList;
use crate::model::{AppState, Story, StoryGenerationConfig};
use crate::session::Session;
use crate::store::StoryStore;
use std::fmt;
use std::str::FromStr;

pub struct MasalApi<S: StoryStore> {
    store: S,
    session: Session,
}

impl<S: StoryStore> MasalApi<S> {
    /// Creates the API in the loading state. Call [`MasalApi::load`] next.
    pub fn new(store: S) -> Self {
        Self {
            store,
            session: Session::new(),
        }
    }

    pub fn load(&mut self) -> Result<CmdResult> {
        commands::load::run(&mut self.session, &self.store)
    }

    pub fn start_new(&mut self) -> Result<CmdResult> {
        commands::navigate::start_new(&mut self.session)
    }

    pub fn open_story(&mut self, id: &str) -> Result<CmdResult> {
        commands::open::run(&mut self.session, id)
    }

    pub fn delete_story(&mut self, id: &str) -> Result<CmdResult> {
        commands::delete::run(&mut self.session, &mut self.store, id)
    }

    pub fn back_to_library(&mut self) -> Result<CmdResult> {
        commands::navigate::back_to_library(&mut self.session)
    }

    pub fn generation_complete(&mut self, story: Story) -> Result<CmdResult> {
        commands::generate::complete(&mut self.session, &mut self.store, story)
    }

    pub fn cancel_generation(&mut self) -> Result<CmdResult> {
        commands::generate::cancel(&mut self.session)
    }

    /// Runs one generation while in `Generating`. No retry: a failure is
    /// reported and the session goes back to the library.
    pub async fn generate<G>(
        &mut self,
        generator: &G,
        config: &StoryGenerationConfig,
    ) -> Result<CmdResult>
    where
        G: StoryGenerator + ?Sized,
    {
        self.session
            .expect_state(&[AppState::Generating], "generate a story")?;

        match generator.generate(config).await {
            Ok(story) => self.generation_complete(story),
            Err(e) => {
                tracing::warn!(error = %e, "story generation failed");
                commands::generate::fail(&mut self.session, &e)
            }
        }
    }

    /// Turns a user selector into the id of a story in the library.
    pub fn resolve(&self, selector: &StorySelector) -> Result<String> {
        let stories = self.session.stories();
        let story = match selector {
            StorySelector::Index(n) => stories.get_index(*n),
            StorySelector::Id(id) => stories.get(id),
        };
        story
            .map(|s| s.id.clone())
            .ok_or_else(|| MasalError::StoryNotFound(selector.to_string()))
    }

    pub fn state(&self) -> AppState {
        self.session.state()
    }

    pub fn stories(&self) -> &StoryList {
        self.session.stories()
    }

    pub fn active_story(&self) -> Option<&Story> {
        self.session.active_story()
    }

    pub fn is_loading(&self) -> bool {
        self.session.is_loading()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

/// A user's way of naming a story: its 1-based position in the library or its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorySelector {
    Index(usize),
    Id(String),
}

impl From<&str> for StorySelector {
    fn from(s: &str) -> Self {
        let s = s.trim();
        match s.parse::<usize>() {
            Ok(n) => StorySelector::Index(n),
            Err(_) => StorySelector::Id(s.to_string()),
        }
    }
}

impl FromStr for StorySelector {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(StorySelector::from(s))
    }
}

impl fmt::Display for StorySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorySelector::Index(n) => write!(f, "{}", n),
            StorySelector::Id(id) => write!(f, "\"{}\"", id),
        }
    }
}

pub use crate::commands::{CmdMessage, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Page;
    use crate::store::memory::fixtures::{story, StoreFixture};
    use crate::store::memory::InMemoryStore;
    use async_trait::async_trait;

    struct FixedGenerator(Story);

    #[async_trait]
    impl StoryGenerator for FixedGenerator {
        async fn generate(&self, _config: &StoryGenerationConfig) -> Result<Story> {
            Ok(self.0.clone())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl StoryGenerator for FailingGenerator {
        async fn generate(&self, _config: &StoryGenerationConfig) -> Result<Story> {
            Err(MasalError::Generation("quota exhausted".into()))
        }
    }

    fn loaded(store: InMemoryStore) -> MasalApi<InMemoryStore> {
        let mut api = MasalApi::new(store);
        api.load().unwrap();
        api
    }

    fn reload(api: MasalApi<InMemoryStore>) -> MasalApi<InMemoryStore> {
        let mut store = api.into_store();
        store.set_fail_reads(false);
        store.set_fail_writes(false);
        loaded(store)
    }

    #[test]
    fn end_to_end_generate_read_and_return() {
        let mut api = loaded(InMemoryStore::new());

        api.start_new().unwrap();
        let s1 = Story {
            id: "s1".into(),
            created_at: 1000,
            pages: vec![Page::new("Once", "a lighthouse")],
            ..story("s1", 1000)
        };
        api.generation_complete(s1).unwrap();

        assert_eq!(api.state(), AppState::Reading);
        assert_eq!(api.active_story().map(|s| s.id.as_str()), Some("s1"));

        api.back_to_library().unwrap();
        assert_eq!(api.state(), AppState::Library);
        let ids: Vec<&str> = api.stories().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["s1"]);
    }

    #[test]
    fn saved_story_survives_reload() {
        let mut api = loaded(StoreFixture::new().with_story("old", 1).store);
        api.start_new().unwrap();
        api.generation_complete(story("new", 2)).unwrap();

        let api = reload(api);
        let ids: Vec<&str> = api.stories().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "old"]);
    }

    #[test]
    fn unsaved_story_is_read_but_gone_after_reload() {
        let mut api = loaded(StoreFixture::new().failing_writes().store);
        api.start_new().unwrap();

        let result = api.generation_complete(story("s1", 1)).unwrap();
        assert!(!result.has_errors());
        assert!(result.has_warnings());
        assert_eq!(api.state(), AppState::Reading);
        assert_eq!(api.active_story().map(|s| s.id.as_str()), Some("s1"));

        let api = reload(api);
        assert!(!api.stories().contains("s1"));
    }

    #[test]
    fn failed_delete_keeps_story_after_reload() {
        let mut api = loaded(StoreFixture::new().with_story("a", 1).store);
        let mut store = api.into_store();
        store.set_fail_writes(true);
        let mut api = loaded(store);

        let result = api.delete_story("a").unwrap();
        assert!(result.has_errors());
        assert!(api.stories().contains("a"));

        let api = reload(api);
        assert!(api.stories().contains("a"));
    }

    #[test]
    fn commands_before_load_are_refused() {
        let mut api = MasalApi::new(InMemoryStore::new());
        assert!(api.is_loading());
        assert!(matches!(api.start_new(), Err(MasalError::NotLoaded)));
        assert!(matches!(
            api.generation_complete(story("a", 1)),
            Err(MasalError::NotLoaded)
        ));
    }

    #[tokio::test]
    async fn generate_success_goes_to_reading() {
        let mut api = loaded(InMemoryStore::new());
        api.start_new().unwrap();

        let generator = FixedGenerator(story("g1", 5));
        api.generate(&generator, &StoryGenerationConfig::default())
            .await
            .unwrap();

        assert_eq!(api.state(), AppState::Reading);
        assert_eq!(api.stories().as_slice()[0].id, "g1");
        assert!(api.store().contains("g1"));
    }

    #[tokio::test]
    async fn generate_failure_returns_to_library() {
        let mut api = loaded(StoreFixture::new().with_story("a", 1).store);
        api.start_new().unwrap();

        let result = api
            .generate(&FailingGenerator, &StoryGenerationConfig::default())
            .await
            .unwrap();

        assert!(result.has_errors());
        assert_eq!(api.state(), AppState::Library);
        assert_eq!(api.stories().len(), 1);
    }

    #[tokio::test]
    async fn generate_requires_generating_state() {
        let mut api = loaded(InMemoryStore::new());
        let generator = FixedGenerator(story("g1", 5));
        assert!(matches!(
            api.generate(&generator, &StoryGenerationConfig::default())
                .await,
            Err(MasalError::InvalidTransition { .. })
        ));
        assert!(api.store().is_empty());
    }

    #[test]
    fn selectors_parse_indexes_and_ids() {
        assert_eq!("2".parse::<StorySelector>().unwrap(), StorySelector::Index(2));
        assert_eq!(
            "b7e1-x".parse::<StorySelector>().unwrap(),
            StorySelector::Id("b7e1-x".into())
        );
    }

    #[test]
    fn resolve_by_index_or_id() {
        let api = loaded(StoreFixture::new().with_stories(&[10, 20]).store);
        // s2 is newest
        assert_eq!(api.resolve(&StorySelector::Index(1)).unwrap(), "s2");
        assert_eq!(api.resolve(&StorySelector::Id("s1".into())).unwrap(), "s1");
        assert!(matches!(
            api.resolve(&StorySelector::Index(3)),
            Err(MasalError::StoryNotFound(_))
        ));
    }
}
