use crate::error::{MasalError, Result};
use crate::library::StoryList;
use crate::model::{AppState, Story};

/// Everything the view layer renders from.
///
/// A session starts out loading. Until the initial load finishes, the view
/// must not dispatch commands, and command functions refuse with
/// [`MasalError::NotLoaded`].
///
/// `active_story` is `Some` exactly when `state` is [`AppState::Reading`].
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) state: AppState,
    pub(crate) stories: StoryList,
    pub(crate) active_story: Option<Story>,
    pub(crate) loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: AppState::Library,
            stories: StoryList::new(),
            active_story: None,
            loading: true,
        }
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn stories(&self) -> &StoryList {
        &self.stories
    }

    pub fn active_story(&self) -> Option<&Story> {
        self.active_story.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Checks that the library is loaded and the current state is one of `allowed`.
    pub(crate) fn expect_state(&self, allowed: &[AppState], command: &'static str) -> Result<()> {
        if self.loading {
            return Err(MasalError::NotLoaded);
        }
        if !allowed.contains(&self.state) {
            return Err(MasalError::InvalidTransition {
                state: self.state,
                command,
            });
        }
        Ok(())
    }

    pub(crate) fn enter_reading(&mut self, story: Story) {
        self.active_story = Some(story);
        self.state = AppState::Reading;
    }

    pub(crate) fn enter_library(&mut self) {
        self.active_story = None;
        self.state = AppState::Library;
    }

    pub(crate) fn enter_generating(&mut self) {
        self.active_story = None;
        self.state = AppState::Generating;
    }
}
