use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::AppState;
use crate::session::Session;

/// Library or Reading -> Generating.
pub fn start_new(session: &mut Session) -> Result<CmdResult> {
    session.expect_state(
        &[AppState::Library, AppState::Reading],
        "start a new story",
    )?;
    session.enter_generating();
    Ok(CmdResult::default())
}

/// Reading -> Library. Already being in the library is a no-op.
pub fn back_to_library(session: &mut Session) -> Result<CmdResult> {
    session.expect_state(
        &[AppState::Library, AppState::Reading],
        "go back to the library",
    )?;
    session.enter_library();
    Ok(CmdResult::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MasalError;
    use crate::store::memory::fixtures::story;

    fn loaded() -> Session {
        let mut session = Session::new();
        session.loading = false;
        session
    }

    #[test]
    fn start_new_from_library() {
        let mut session = loaded();
        start_new(&mut session).unwrap();
        assert_eq!(session.state(), AppState::Generating);
    }

    #[test]
    fn start_new_from_reading_drops_active_story() {
        let mut session = loaded();
        session.enter_reading(story("a", 1));
        start_new(&mut session).unwrap();
        assert_eq!(session.state(), AppState::Generating);
        assert!(session.active_story().is_none());
    }

    #[test]
    fn start_new_while_generating_is_refused() {
        let mut session = loaded();
        start_new(&mut session).unwrap();
        assert!(matches!(
            start_new(&mut session),
            Err(MasalError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn back_clears_active_story() {
        let mut session = loaded();
        session.enter_reading(story("a", 1));
        back_to_library(&mut session).unwrap();
        assert_eq!(session.state(), AppState::Library);
        assert!(session.active_story().is_none());
    }

    #[test]
    fn back_is_refused_while_generating() {
        let mut session = loaded();
        start_new(&mut session).unwrap();
        assert!(back_to_library(&mut session).is_err());
        assert_eq!(session.state(), AppState::Generating);
    }
}
