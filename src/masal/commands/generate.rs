use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MasalError, Result};
use crate::model::{AppState, Story};
use crate::session::Session;
use crate::store::StoryStore;

/// A finished story arrived from the generator.
///
/// The story is saved and put at the front of the library. If the save
/// fails the user still gets to read it: the story was just generated and
/// throwing it away over a local storage error is worse than it not
/// surviving a restart. In that case it is not added to the library list,
/// which keeps the list matching the store.
///
/// A result that arrives after the generation was cancelled is dropped.
pub fn complete<S: StoryStore>(
    session: &mut Session,
    store: &mut S,
    story: Story,
) -> Result<CmdResult> {
    if session.loading {
        return Err(MasalError::NotLoaded);
    }

    let mut result = CmdResult::default();
    if session.state != AppState::Generating {
        tracing::debug!(id = %story.id, state = %session.state, "discarding late generation result");
        result.add_message(CmdMessage::info("Generation was cancelled, result discarded."));
        return Ok(result);
    }

    match store.save(&story) {
        Ok(()) => {
            session.stories.prepend(story.clone());
            result.add_message(CmdMessage::success(format!(
                "Story saved: {}",
                story.title
            )));
        }
        Err(e) => {
            tracing::warn!(id = %story.id, error = %e, "could not save generated story");
            result.add_message(CmdMessage::warning(format!(
                "The story was created but could not be saved: {}",
                e
            )));
        }
    }

    session.enter_reading(story.clone());
    Ok(result.with_affected_stories(vec![story]))
}

/// Generating -> Library. Any in-flight generation keeps running on the
/// generator's side; its result will be discarded by [`complete`].
pub fn cancel(session: &mut Session) -> Result<CmdResult> {
    session.expect_state(&[AppState::Generating], "cancel generation")?;
    session.enter_library();
    Ok(CmdResult::default())
}

/// The generator gave up. Report it and go back to the library.
pub fn fail(session: &mut Session, error: &MasalError) -> Result<CmdResult> {
    let mut result = cancel(session)?;
    result.add_message(CmdMessage::error(format!(
        "Could not create the story: {}",
        error
    )));
    Ok(result)
}
