use crate::commands::CmdResult;
use crate::error::{MasalError, Result};
use crate::model::AppState;
use crate::session::Session;

pub fn run(session: &mut Session, id: &str) -> Result<CmdResult> {
    session.expect_state(&[AppState::Library], "open a story")?;

    let story = session
        .stories
        .get(id)
        .cloned()
        .ok_or_else(|| MasalError::StoryNotFound(id.to_string()))?;

    tracing::debug!(id, "opening story");
    session.enter_reading(story.clone());
    Ok(CmdResult::default().with_affected_stories(vec![story]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::StoryList;
    use crate::store::memory::fixtures::story;

    fn library_with(ids: &[&str]) -> Session {
        let mut session = Session::new();
        session.loading = false;
        session.stories =
            StoryList::from_unsorted(ids.iter().map(|id| story(id, 1)).collect());
        session
    }

    #[test]
    fn opens_selected_story() {
        let mut session = library_with(&["a", "b"]);
        let result = run(&mut session, "b").unwrap();

        assert_eq!(session.state(), AppState::Reading);
        assert_eq!(session.active_story().map(|s| s.id.as_str()), Some("b"));
        assert_eq!(result.affected_stories[0].id, "b");
    }

    #[test]
    fn unknown_id_stays_in_library() {
        let mut session = library_with(&["a"]);
        assert!(matches!(
            run(&mut session, "zzz"),
            Err(MasalError::StoryNotFound(_))
        ));
        assert_eq!(session.state(), AppState::Library);
        assert!(session.active_story().is_none());
    }

    #[test]
    fn cannot_open_while_reading() {
        let mut session = library_with(&["a", "b"]);
        run(&mut session, "a").unwrap();
        assert!(matches!(
            run(&mut session, "b"),
            Err(MasalError::InvalidTransition { .. })
        ));
        assert_eq!(session.active_story().map(|s| s.id.as_str()), Some("a"));
    }
}
