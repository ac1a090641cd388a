//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together configuration,
//! context creation and command execution.

use std::path::Path;

use crate::adapters::{ArboardClipboardWriter, HttpGeminiClient};
use crate::app::{
    AppContext,
    commands::{compose, optimize, refine, session},
    config::load_config,
};
use crate::domain::{OptimizationMode, OptimizedResult, Session};
use crate::ports::{ClipboardWriter, NoopClipboard, SessionPrompter};

pub use crate::app::commands::compose::ComposeOptions;
pub use crate::app::commands::optimize::OptimizeOptions;
pub use crate::app::commands::refine::RefineOptions;
pub use crate::domain::AppError;

/// Build the Gemini client from configuration and `GEMINI_API_KEY`.
///
/// Fails before any operation runs when the credential or config is invalid.
fn create_client(config_path: Option<&Path>) -> Result<HttpGeminiClient, AppError> {
    let config = load_config(config_path)?;
    HttpGeminiClient::from_env_with_config(&config.gemini)
}

fn create_context<W: ClipboardWriter>(
    config_path: Option<&Path>,
    clipboard: W,
) -> Result<AppContext<HttpGeminiClient, W>, AppError> {
    Ok(AppContext::new(create_client(config_path)?, clipboard))
}

// =============================================================================
// Compose Command API
// =============================================================================

/// Combine the non-empty fragments into a single prompt, copying it when requested.
///
/// Needs neither configuration nor credentials.
pub fn compose(options: &ComposeOptions) -> Result<String, AppError> {
    if options.copy {
        compose::execute(&mut ArboardClipboardWriter::new(), options)
    } else {
        compose::execute(&mut NoopClipboard, options)
    }
}

// =============================================================================
// Optimize / Refine Command API
// =============================================================================

/// Optimize a prompt with the remote model.
pub fn optimize(
    options: &OptimizeOptions,
    config_path: Option<&Path>,
) -> Result<OptimizedResult, AppError> {
    if options.copy {
        let mut ctx = create_context(config_path, ArboardClipboardWriter::new())?;
        optimize::execute(&mut ctx, options)
    } else {
        let mut ctx = create_context(config_path, NoopClipboard)?;
        optimize::execute(&mut ctx, options)
    }
}

/// Refine a previously optimized prompt with user feedback.
pub fn refine(
    options: &RefineOptions,
    config_path: Option<&Path>,
) -> Result<OptimizedResult, AppError> {
    if options.copy {
        let mut ctx = create_context(config_path, ArboardClipboardWriter::new())?;
        refine::execute(&mut ctx, options)
    } else {
        let mut ctx = create_context(config_path, NoopClipboard)?;
        refine::execute(&mut ctx, options)
    }
}

// =============================================================================
// Session Command API
// =============================================================================

/// Run an interactive session driven by `prompter` until the user quits.
///
/// Returns the final session state.
pub fn run_session<P: SessionPrompter>(
    mode: OptimizationMode,
    prompter: &mut P,
    config_path: Option<&Path>,
) -> Result<Session, AppError> {
    let mut ctx = create_context(config_path, ArboardClipboardWriter::new())?;
    let mut state = Session::with_mode(mode);
    session::execute(&mut ctx, &mut state, prompter)?;
    Ok(state)
}
