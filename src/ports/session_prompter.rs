//! Interactive session I/O port.

use crate::domain::{AppError, FragmentKind, OptimizationMode, Session};

/// One user step in an interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    /// Replace one fragment with new text.
    EditFragment(FragmentKind, String),
    /// Switch the optimization mode for subsequent calls.
    SetMode(OptimizationMode),
    /// Optimize the current combined prompt.
    Optimize,
    /// Refine the current result with the given feedback.
    Refine(String),
    /// Copy the current optimized prompt to the clipboard.
    Copy,
    /// Copy the current combined prompt to the clipboard.
    CopyCombined,
    /// End the session.
    Quit,
}

/// Port for reading user actions and presenting session state.
pub trait SessionPrompter {
    /// Show the current session state.
    fn render(&mut self, session: &Session);

    /// Ask the user for the next action.
    fn next_action(&mut self, session: &Session) -> Result<SessionAction, AppError>;

    /// Report a completed side effect such as a clipboard copy.
    fn notify(&mut self, message: &str);
}
