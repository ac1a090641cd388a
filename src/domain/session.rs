//! Per-user session state and the guarded optimize/refine lifecycle.

use std::fmt;

use crate::domain::optimization::{
    Operation, OptimizationMode, OptimizationRequest, OptimizedResult,
};
use crate::domain::prompt::{FragmentKind, PromptFragments};
use crate::domain::{AppError, ErrorKind};

/// Which remote operation, if any, is currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperationState {
    #[default]
    Idle,
    Optimizing,
    Refining,
}

impl OperationState {
    fn for_operation(operation: Operation) -> Self {
        match operation {
            Operation::Optimize => OperationState::Optimizing,
            Operation::Refine => OperationState::Refining,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, OperationState::Idle)
    }
}

impl fmt::Display for OperationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OperationState::Idle => "idle",
            OperationState::Optimizing => "optimizing",
            OperationState::Refining => "refining",
        };
        f.write_str(label)
    }
}

/// Sequence token identifying one issued operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    seq: u64,
    operation: Operation,
}

/// An operation the session has admitted; the caller performs the remote call
/// and reports back through [`Session::complete`].
#[derive(Debug, Clone)]
pub struct PendingOperation {
    pub ticket: Ticket,
    pub request: OptimizationRequest,
}

/// Last error shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&AppError> for ErrorRecord {
    fn from(err: &AppError) -> Self {
        Self { kind: err.kind(), message: err.to_string() }
    }
}

/// All state owned by one user session.
#[derive(Debug, Default)]
pub struct Session {
    fragments: PromptFragments,
    mode: OptimizationMode,
    result: Option<OptimizedResult>,
    feedback: String,
    last_error: Option<ErrorRecord>,
    state: OperationState,
    issued: u64,
    active: Option<Ticket>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: OptimizationMode) -> Self {
        Self { mode, ..Self::default() }
    }

    pub fn fragments(&self) -> &PromptFragments {
        &self.fragments
    }

    pub fn set_fragment(&mut self, kind: FragmentKind, value: impl Into<String>) {
        self.fragments.set(kind, value);
    }

    /// The combined prompt, derived from the current fragments.
    pub fn combined_prompt(&self) -> String {
        self.fragments.combined()
    }

    pub fn mode(&self) -> OptimizationMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: OptimizationMode) {
        self.mode = mode;
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn set_feedback(&mut self, feedback: impl Into<String>) {
        self.feedback = feedback.into();
    }

    pub fn result(&self) -> Option<&OptimizedResult> {
        self.result.as_ref()
    }

    pub fn last_error(&self) -> Option<&ErrorRecord> {
        self.last_error.as_ref()
    }

    pub fn state(&self) -> OperationState {
        self.state
    }

    /// Record a failure from an action outside the optimize/refine lifecycle.
    pub fn record_error(&mut self, err: &AppError) {
        self.last_error = Some(ErrorRecord::from(err));
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// Admit an optimize call for the current combined prompt.
    ///
    /// Clears the previous result and error before the call starts.
    pub fn begin_optimize(&mut self) -> Result<PendingOperation, AppError> {
        self.ensure_idle()?;
        let request = OptimizationRequest::optimize(&self.combined_prompt(), self.mode)
            .inspect_err(|err| self.last_error = Some(ErrorRecord::from(err)))?;

        self.result = None;
        Ok(self.admit(request))
    }

    /// Admit a refine call against the current result and pending feedback.
    ///
    /// The current result is kept so a failed refinement leaves it intact.
    pub fn begin_refine(&mut self) -> Result<PendingOperation, AppError> {
        self.ensure_idle()?;
        let current = self.result.as_ref().map(OptimizedResult::prompt).unwrap_or_default();
        let request = OptimizationRequest::refine(current, &self.feedback, self.mode)
            .inspect_err(|err| self.last_error = Some(ErrorRecord::from(err)))?;

        Ok(self.admit(request))
    }

    /// Apply the outcome of an admitted operation.
    ///
    /// Returns `false` without touching state when `ticket` is not the most
    /// recently issued one.
    pub fn complete(&mut self, ticket: Ticket, outcome: Result<OptimizedResult, AppError>) -> bool {
        if self.active != Some(ticket) {
            tracing::debug!(seq = ticket.seq, "Discarding stale {} response", ticket.operation);
            return false;
        }

        self.active = None;
        self.state = OperationState::Idle;

        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.last_error = None;
                if ticket.operation == Operation::Refine {
                    self.feedback.clear();
                }
            }
            Err(err) => {
                self.last_error = Some(ErrorRecord::from(&err));
            }
        }
        true
    }

    fn ensure_idle(&self) -> Result<(), AppError> {
        if self.state.is_idle() { Ok(()) } else { Err(AppError::OperationInProgress(self.state)) }
    }

    fn admit(&mut self, request: OptimizationRequest) -> PendingOperation {
        self.issued += 1;
        let ticket = Ticket { seq: self.issued, operation: request.operation };
        self.active = Some(ticket);
        self.state = OperationState::for_operation(request.operation);
        self.last_error = None;
        PendingOperation { ticket, request }
    }
}
