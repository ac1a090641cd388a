//! Interactive session backed by dialoguer.

use std::io::ErrorKind;
use std::path::Path;

use dialoguer::{Error as DialoguerError, Input, Select};

use crate::app::api;
use crate::app::cli::output::format_result;
use crate::domain::{AppError, FragmentKind, OptimizationMode, Session};
use crate::ports::{SessionAction, SessionPrompter};

pub fn run_session(mode: OptimizationMode, config: Option<&Path>) -> Result<(), AppError> {
    let mut prompter = DialoguerPrompter;
    api::run_session(mode, &mut prompter, config)?;
    println!("👋 Session ended");
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    EditFragment,
    ChangeMode,
    CopyCombined,
    Optimize,
    Refine,
    Copy,
    Quit,
}

impl MenuItem {
    fn label(&self, session: &Session) -> String {
        match self {
            MenuItem::EditFragment => "Edit a fragment".to_string(),
            MenuItem::ChangeMode => format!("Change mode (current: {})", session.mode()),
            MenuItem::CopyCombined => "Copy combined prompt".to_string(),
            MenuItem::Optimize => "Optimize prompt".to_string(),
            MenuItem::Refine => "Refine with feedback".to_string(),
            MenuItem::Copy => "Copy optimized prompt".to_string(),
            MenuItem::Quit => "Quit".to_string(),
        }
    }
}

/// Menu entries available for the current session; refine and copy need a result.
fn menu_for(session: &Session) -> Vec<MenuItem> {
    let mut items = vec![MenuItem::EditFragment, MenuItem::ChangeMode];
    if !session.combined_prompt().is_empty() {
        items.push(MenuItem::CopyCombined);
    }
    items.push(MenuItem::Optimize);
    if session.result().is_some() {
        items.push(MenuItem::Refine);
        items.push(MenuItem::Copy);
    }
    items.push(MenuItem::Quit);
    items
}

struct DialoguerPrompter;

impl SessionPrompter for DialoguerPrompter {
    fn render(&mut self, session: &Session) {
        let combined = session.combined_prompt();
        println!();
        println!("== Combined prompt ({}) ==", session.mode());
        if combined.is_empty() {
            println!("(empty: fill in at least one fragment)");
        } else {
            println!("{}", combined);
        }

        if let Some(result) = session.result() {
            println!();
            println!("{}", format_result(result, "Optimized prompt"));
        }

        if let Some(error) = session.last_error() {
            println!();
            println!("❌ {}", error.message);
        }
        println!();
    }

    fn next_action(&mut self, session: &Session) -> Result<SessionAction, AppError> {
        loop {
            let items = menu_for(session);
            let labels: Vec<String> = items.iter().map(|item| item.label(session)).collect();
            let Some(index) = select("What next?", &labels, 0)? else {
                return Ok(SessionAction::Quit);
            };

            let action = match items[index] {
                MenuItem::EditFragment => prompt_fragment(session)?,
                MenuItem::ChangeMode => prompt_mode(session.mode())?.map(SessionAction::SetMode),
                MenuItem::CopyCombined => Some(SessionAction::CopyCombined),
                MenuItem::Optimize => Some(SessionAction::Optimize),
                MenuItem::Refine => prompt_text("Feedback on the output", session.feedback())?
                    .map(SessionAction::Refine),
                MenuItem::Copy => Some(SessionAction::Copy),
                MenuItem::Quit => Some(SessionAction::Quit),
            };

            // Cancelling a sub-prompt returns to the menu.
            if let Some(action) = action {
                return Ok(action);
            }
        }
    }

    fn notify(&mut self, message: &str) {
        println!("✅ {}", message);
    }
}

fn prompt_fragment(session: &Session) -> Result<Option<SessionAction>, AppError> {
    let fragments = session.fragments();
    let labels: Vec<String> = FragmentKind::ALL
        .iter()
        .map(|kind| {
            let current = fragments.get(*kind);
            if current.trim().is_empty() {
                format!("{} (empty)", kind.label())
            } else {
                format!("{}: {}", kind.label(), preview(current))
            }
        })
        .collect();

    let Some(index) = select("Select fragment", &labels, 0)? else {
        return Ok(None);
    };
    let kind = FragmentKind::ALL[index];
    println!("{} e.g. \"{}\"", kind.help(), kind.placeholder());

    Ok(prompt_text(kind.label(), fragments.get(kind))?
        .map(|value| SessionAction::EditFragment(kind, value)))
}

fn prompt_mode(current: OptimizationMode) -> Result<Option<OptimizationMode>, AppError> {
    let labels: Vec<&str> = OptimizationMode::ALL.iter().map(|mode| mode.display_name()).collect();
    let default = OptimizationMode::ALL.iter().position(|mode| *mode == current).unwrap_or(0);
    Ok(select("Optimization mode", &labels, default)?.map(|index| OptimizationMode::ALL[index]))
}

fn select<T: ToString>(
    prompt: &str,
    items: &[T],
    default: usize,
) -> Result<Option<usize>, AppError> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(default)
        .interact_opt()
        .map_err(|err| AppError::Validation(format!("Failed to read selection: {}", err)))
}

fn prompt_text(prompt: &str, initial: &str) -> Result<Option<String>, AppError> {
    match Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()
    {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Validation(format!("Failed to read {}: {}", prompt, err))),
    }
}

fn preview(text: &str) -> String {
    const MAX_CHARS: usize = 40;
    let single_line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if single_line.chars().count() <= MAX_CHARS {
        single_line
    } else {
        let truncated: String = single_line.chars().take(MAX_CHARS).collect();
        format!("{}…", truncated)
    }
}
