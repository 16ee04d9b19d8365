use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MasalError, Result};
use crate::library::StoryList;
use crate::session::Session;
use crate::store::StoryStore;

/// Initial load: fetch everything, sort newest first, enter the library.
///
/// An unavailable store degrades to an empty library with an error message;
/// nothing is written back, so the stored data is left as it was.
pub fn run<S: StoryStore>(session: &mut Session, store: &S) -> Result<CmdResult> {
    if !session.loading {
        return Err(MasalError::InvalidTransition {
            state: session.state,
            command: "load the library",
        });
    }

    let mut result = CmdResult::default();
    match store.get_all() {
        Ok(stories) => {
            session.stories = StoryList::from_unsorted(stories);
            tracing::debug!(count = session.stories.len(), "library loaded");
        }
        Err(e) => {
            tracing::warn!(error = %e, "could not load stories, starting with an empty library");
            session.stories = StoryList::new();
            result.add_message(CmdMessage::error(format!(
                "Could not load your stories: {}",
                e
            )));
        }
    }

    session.loading = false;
    session.enter_library();
    Ok(result)
}
