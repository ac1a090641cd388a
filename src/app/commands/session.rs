//! Interactive optimize/refine loop over a single [`Session`].

use crate::app::AppContext;
use crate::app::commands::compose::copy_combined;
use crate::domain::{AppError, PendingOperation, Session};
use crate::ports::{ClipboardWriter, GenerationClient, SessionAction, SessionPrompter};

/// Execute the interactive session command until the user quits.
pub fn execute<C, W, P>(
    ctx: &mut AppContext<C, W>,
    session: &mut Session,
    prompter: &mut P,
) -> Result<(), AppError>
where
    C: GenerationClient,
    W: ClipboardWriter,
    P: SessionPrompter,
{
    loop {
        prompter.render(session);

        match prompter.next_action(session)? {
            SessionAction::EditFragment(kind, value) => session.set_fragment(kind, value),
            SessionAction::SetMode(mode) => session.set_mode(mode),
            SessionAction::Optimize => {
                let admitted = session.begin_optimize();
                run_admitted(ctx, session, admitted);
            }
            SessionAction::Refine(feedback) => {
                session.set_feedback(feedback);
                let admitted = session.begin_refine();
                run_admitted(ctx, session, admitted);
            }
            SessionAction::Copy => {
                let outcome = copy_result(ctx, session);
                report_copy(session, prompter, outcome, "Copied optimized prompt to clipboard");
            }
            SessionAction::CopyCombined => {
                let outcome = copy_combined(ctx.clipboard_mut(), session.fragments()).map(drop);
                report_copy(session, prompter, outcome, "Copied combined prompt to clipboard");
            }
            SessionAction::Quit => return Ok(()),
        }
    }
}

fn run_admitted<C, W>(
    ctx: &AppContext<C, W>,
    session: &mut Session,
    admitted: Result<PendingOperation, AppError>,
) where
    C: GenerationClient,
    W: ClipboardWriter,
{
    match admitted {
        Ok(pending) => {
            let outcome = ctx.optimizer().execute(&pending.request);
            session.complete(pending.ticket, outcome);
        }
        // Rejections are recorded on the session and shown by the next render.
        Err(err) => tracing::debug!(error = %err, "Operation not started"),
    }
}

fn copy_result<C, W>(ctx: &mut AppContext<C, W>, session: &Session) -> Result<(), AppError>
where
    C: GenerationClient,
    W: ClipboardWriter,
{
    let result = session.result().ok_or_else(|| {
        AppError::Validation("Nothing to copy yet; optimize a prompt first.".to_string())
    })?;
    ctx.clipboard_mut().write_text(result.prompt())
}

/// Copy failures land on the session so the next render shows them.
fn report_copy<P: SessionPrompter>(
    session: &mut Session,
    prompter: &mut P,
    outcome: Result<(), AppError>,
    message: &str,
) {
    match outcome {
        Ok(()) => {
            session.clear_error();
            prompter.notify(message);
        }
        Err(err) => {
            tracing::warn!(error = %err, "Copy failed");
            session.record_error(&err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ErrorKind, FragmentKind, OperationState, OptimizationMode};
    use crate::testing::{FakeGenerationClient, MockClipboard, ScriptedPrompter};

    const VALID: &str = r#"{"prompt":"Optimized","explanation":"Why"}"#;

    fn context(client: FakeGenerationClient) -> AppContext<FakeGenerationClient, MockClipboard> {
        AppContext::new(client, MockClipboard::new())
    }

    #[test]
    fn full_flow_optimize_refine_copy() {
        let mut ctx = context(FakeGenerationClient::replying(VALID));
        let mut session = Session::new();
        let mut prompter = ScriptedPrompter::new(vec![
            SessionAction::EditFragment(FragmentKind::Persona, "a coach".into()),
            SessionAction::EditFragment(FragmentKind::Task, "write a plan".into()),
            SessionAction::SetMode(OptimizationMode::TokenSaver),
            SessionAction::Optimize,
            SessionAction::Refine("shorter".into()),
            SessionAction::Copy,
            SessionAction::Quit,
        ]);

        execute(&mut ctx, &mut session, &mut prompter).unwrap();

        let sent = ctx.optimizer().client().requests();
        assert_eq!(sent.len(), 2);
        assert!(sent[0].contents.contains("a coach write a plan"));
        assert!(sent[1].contents.contains("---START PROMPT---\nOptimized\n"));
        assert!(sent.iter().all(|r| r.mode == OptimizationMode::TokenSaver));

        assert_eq!(session.result().unwrap().prompt(), "Optimized");
        assert_eq!(session.feedback(), "");
        assert_eq!(session.state(), OperationState::Idle);
        assert_eq!(ctx.clipboard().last_written(), Some("Optimized"));
        assert_eq!(prompter.notices, vec!["Copied optimized prompt to clipboard".to_string()]);
        assert_eq!(prompter.renders, 7);
    }

    #[test]
    fn empty_prompt_is_surfaced_without_network_call() {
        let mut ctx = context(FakeGenerationClient::replying(VALID));
        let mut session = Session::new();
        let mut prompter =
            ScriptedPrompter::new(vec![SessionAction::Optimize, SessionAction::Quit]);

        execute(&mut ctx, &mut session, &mut prompter).unwrap();

        assert!(ctx.optimizer().client().requests().is_empty());
        assert_eq!(session.last_error().unwrap().kind, ErrorKind::EmptyInput);
        assert_eq!(prompter.errors_seen, vec!["Cannot optimize an empty prompt.".to_string()]);
    }

    #[test]
    fn service_failure_is_recorded_and_session_continues() {
        let mut ctx = context(FakeGenerationClient::failing("offline"));
        let mut session = Session::new();
        let mut prompter = ScriptedPrompter::new(vec![
            SessionAction::EditFragment(FragmentKind::Task, "write a plan".into()),
            SessionAction::Optimize,
            SessionAction::Copy,
            SessionAction::Quit,
        ]);

        execute(&mut ctx, &mut session, &mut prompter).unwrap();

        assert!(session.result().is_none());
        assert!(ctx.clipboard().writes.is_empty());
        assert_eq!(
            prompter.errors_seen,
            vec![
                "An error occurred while communicating with the AI service.".to_string(),
                "Nothing to copy yet; optimize a prompt first.".to_string(),
            ]
        );
    }

    #[test]
    fn exhausted_script_ends_with_error() {
        let mut ctx = context(FakeGenerationClient::replying(VALID));
        let mut session = Session::new();
        let mut prompter = ScriptedPrompter::new(vec![]);

        assert!(execute(&mut ctx, &mut session, &mut prompter).is_err());
    }

    #[test]
    fn clipboard_failure_is_shown_on_next_render() {
        let mut ctx =
            AppContext::new(FakeGenerationClient::replying(VALID), MockClipboard::failing());
        let mut session = Session::new();
        let mut prompter = ScriptedPrompter::new(vec![
            SessionAction::EditFragment(FragmentKind::Task, "t".into()),
            SessionAction::Optimize,
            SessionAction::Copy,
            SessionAction::Quit,
        ]);

        execute(&mut ctx, &mut session, &mut prompter).unwrap();

        assert!(session.result().is_some());
        let error = session.last_error().unwrap();
        assert_eq!(error.message, "Clipboard error: Mock clipboard error");
        assert_eq!(prompter.errors_seen, vec![error.message.clone()]);
        assert!(prompter.notices.is_empty());
    }

    #[test]
    fn copy_combined_writes_composed_prompt_without_network_call() {
        let mut ctx = context(FakeGenerationClient::replying(VALID));
        let mut session = Session::new();
        let mut prompter = ScriptedPrompter::new(vec![
            SessionAction::EditFragment(FragmentKind::Persona, " a coach ".into()),
            SessionAction::EditFragment(FragmentKind::Task, "write a plan".into()),
            SessionAction::CopyCombined,
            SessionAction::Quit,
        ]);

        execute(&mut ctx, &mut session, &mut prompter).unwrap();

        assert_eq!(ctx.clipboard().last_written(), Some("a coach write a plan"));
        assert_eq!(prompter.notices, vec!["Copied combined prompt to clipboard".to_string()]);
        assert!(ctx.optimizer().client().requests().is_empty());
        assert!(session.last_error().is_none());
    }

    #[test]
    fn copy_combined_rejects_empty_prompt() {
        let mut ctx = context(FakeGenerationClient::replying(VALID));
        let mut session = Session::new();
        let mut prompter =
            ScriptedPrompter::new(vec![SessionAction::CopyCombined, SessionAction::Quit]);

        execute(&mut ctx, &mut session, &mut prompter).unwrap();

        assert!(ctx.clipboard().writes.is_empty());
        assert_eq!(session.last_error().unwrap().kind, ErrorKind::EmptyInput);
        assert_eq!(prompter.errors_seen, vec!["Cannot copy an empty prompt.".to_string()]);
    }

    #[test]
    fn copy_before_optimize_is_reported() {
        let mut ctx = context(FakeGenerationClient::replying(VALID));
        let mut session = Session::new();
        let mut prompter = ScriptedPrompter::new(vec![SessionAction::Copy, SessionAction::Quit]);

        execute(&mut ctx, &mut session, &mut prompter).unwrap();

        assert!(ctx.clipboard().writes.is_empty());
        assert_eq!(
            prompter.errors_seen,
            vec!["Nothing to copy yet; optimize a prompt first.".to_string()]
        );
    }
}
