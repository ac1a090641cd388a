//! Text-generation client port definition.

use crate::domain::{AppError, OptimizationRequest};

/// Port for the remote text-generation service.
///
/// Implementations perform exactly one round trip per call and return the raw
/// reply text. Transport or remote-side failures are reported as
/// [`AppError::ServiceUnavailable`] carrying diagnostic detail; callers decide
/// what the user sees.
pub trait GenerationClient {
    /// Send one optimize/refine request and return the model's text reply.
    fn generate(&self, request: &OptimizationRequest) -> Result<String, AppError>;
}
