use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MasalError, Result};
use crate::model::AppState;
use crate::session::Session;
use crate::store::StoryStore;

/// Deletes a story from the store, then from the library list.
///
/// When the store refuses, the list keeps the story so that it still matches
/// what is on disk.
pub fn run<S: StoryStore>(session: &mut Session, store: &mut S, id: &str) -> Result<CmdResult> {
    session.expect_state(&[AppState::Library], "delete a story")?;

    let title = session
        .stories
        .get(id)
        .map(|s| s.title.clone())
        .ok_or_else(|| MasalError::StoryNotFound(id.to_string()))?;

    let mut result = CmdResult::default();
    match store.delete(id) {
        Ok(()) => {
            if let Some(story) = session.stories.remove(id) {
                result.affected_stories.push(story);
            }
            result.add_message(CmdMessage::success(format!("Story deleted: {}", title)));
        }
        Err(e) => {
            tracing::warn!(id, error = %e, "delete failed, keeping story in library");
            result.add_message(CmdMessage::error(format!(
                "Could not delete \"{}\": {}",
                title, e
            )));
        }
    }

    Ok(result)
}
