//! Optimization client: one shared request path for optimize and refine.

use crate::domain::{AppError, OptimizationMode, OptimizationRequest, OptimizedResult};
use crate::ports::GenerationClient;

/// Runs optimize/refine requests against a [`GenerationClient`] and classifies
/// every failure into `EmptyInput`, `MalformedResponse` or `ServiceUnavailable`.
#[derive(Debug, Clone)]
pub struct Optimizer<C: GenerationClient> {
    client: C,
}

impl<C: GenerationClient> Optimizer<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Rewrite `prompt` according to `mode`.
    pub fn optimize(
        &self,
        prompt: &str,
        mode: OptimizationMode,
    ) -> Result<OptimizedResult, AppError> {
        let request = OptimizationRequest::optimize(prompt, mode)?;
        self.execute(&request)
    }

    /// Rewrite a previously optimized prompt to address `feedback`.
    pub fn refine(
        &self,
        current_prompt: &str,
        feedback: &str,
        mode: OptimizationMode,
    ) -> Result<OptimizedResult, AppError> {
        let request = OptimizationRequest::refine(current_prompt, feedback, mode)?;
        self.execute(&request)
    }

    /// Perform one remote call for an already-built request.
    pub fn execute(&self, request: &OptimizationRequest) -> Result<OptimizedResult, AppError> {
        let operation = request.operation;

        let text = self.client.generate(request).map_err(|err| {
            tracing::error!(%operation, error = %err, "Remote model call failed");
            AppError::ServiceUnavailable(operation.service_unavailable_message().to_string())
        })?;

        OptimizedResult::parse(&text).map_err(|err| {
            tracing::error!(%operation, error = %err, "Reply did not match the result contract");
            AppError::MalformedResponse(operation.malformed_response_message().to_string())
        })
    }
}
