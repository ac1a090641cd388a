use std::collections::VecDeque;

use crate::domain::{AppError, Session};
use crate::ports::{SessionAction, SessionPrompter};

/// Prompter that replays a fixed list of actions and records what it was shown.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    actions: VecDeque<SessionAction>,
    pub renders: usize,
    pub errors_seen: Vec<String>,
    pub notices: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(actions: Vec<SessionAction>) -> Self {
        Self { actions: actions.into(), ..Self::default() }
    }
}

impl SessionPrompter for ScriptedPrompter {
    fn render(&mut self, session: &Session) {
        self.renders += 1;
        if let Some(error) = session.last_error()
            && self.errors_seen.last() != Some(&error.message)
        {
            self.errors_seen.push(error.message.clone());
        }
    }

    fn next_action(&mut self, _session: &Session) -> Result<SessionAction, AppError> {
        self.actions
            .pop_front()
            .ok_or_else(|| AppError::Validation("Script exhausted".to_string()))
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}
