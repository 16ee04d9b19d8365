//! # Command Layer
//!
//! One module per state-machine trigger. Each command takes the [`Session`]
//! and the store explicitly, performs the transition, and returns a
//! [`CmdResult`] with the stories it touched and the notifications the user
//! should see.
//!
//! Storage failures are recovered here and reported as messages. `Err` is
//! reserved for commands the view should never have sent: a command before
//! the initial load, a trigger the current state does not accept, or an id
//! that is not in the library.
//!
//! [`Session`]: crate::session::Session

use crate::model::Story;

pub mod config;
pub mod delete;
pub mod generate;
pub mod load;
pub mod navigate;
pub mod open;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_stories: Vec<Story>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_stories(mut self, stories: Vec<Story>) -> Self {
        self.affected_stories = stories;
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }

    pub fn has_warnings(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning)
    }
}
