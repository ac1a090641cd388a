use std::sync::{Arc, Mutex};

use crate::domain::{AppError, OptimizationRequest};
use crate::ports::GenerationClient;

/// Scripted generation client that records every request it receives.
#[derive(Clone)]
pub struct FakeGenerationClient {
    requests: Arc<Mutex<Vec<OptimizationRequest>>>,
    reply: Result<String, String>,
}

impl FakeGenerationClient {
    /// Always reply with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self { requests: Arc::new(Mutex::new(vec![])), reply: Ok(text.into()) }
    }

    /// Always fail as the transport would, with `detail` as diagnostic text.
    pub fn failing(detail: impl Into<String>) -> Self {
        Self { requests: Arc::new(Mutex::new(vec![])), reply: Err(detail.into()) }
    }

    pub fn requests(&self) -> Vec<OptimizationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl GenerationClient for FakeGenerationClient {
    fn generate(&self, request: &OptimizationRequest) -> Result<String, AppError> {
        self.requests.lock().unwrap().push(request.clone());
        self.reply.clone().map_err(AppError::ServiceUnavailable)
    }
}
