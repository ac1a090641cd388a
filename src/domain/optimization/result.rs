use std::fmt;

use serde::{Deserialize, Serialize};

/// A rewritten prompt together with the model's rationale.
///
/// Both fields are guaranteed non-empty; values are only produced through
/// [`OptimizedResult::new`] or [`OptimizedResult::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptimizedResult {
    prompt: String,
    explanation: String,
}

impl OptimizedResult {
    pub fn new(
        prompt: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Result<Self, ResultShapeError> {
        RawOptimizedResult { prompt: Some(prompt.into()), explanation: Some(explanation.into()) }
            .try_into()
    }

    /// Parse the raw text returned by the remote model.
    pub fn parse(text: &str) -> Result<Self, ResultShapeError> {
        let value: serde_json::Value = serde_json::from_str(text.trim())
            .map_err(|e| ResultShapeError::InvalidJson(e.to_string()))?;
        if !value.is_object() {
            return Err(ResultShapeError::InvalidJson("expected a JSON object".to_string()));
        }
        let raw: RawOptimizedResult = serde_json::from_value(value)
            .map_err(|e| ResultShapeError::InvalidJson(e.to_string()))?;
        raw.try_into()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }
}

/// Wire shape of the model reply before the contract is checked.
#[derive(Debug, Deserialize)]
struct RawOptimizedResult {
    #[serde(default)]
    prompt: Option<String>,
    #[serde(default)]
    explanation: Option<String>,
}

impl TryFrom<RawOptimizedResult> for OptimizedResult {
    type Error = ResultShapeError;

    fn try_from(raw: RawOptimizedResult) -> Result<Self, Self::Error> {
        let prompt = require_field("prompt", raw.prompt)?;
        let explanation = require_field("explanation", raw.explanation)?;
        Ok(Self { prompt, explanation })
    }
}

fn require_field(name: &'static str, value: Option<String>) -> Result<String, ResultShapeError> {
    match value {
        None => Err(ResultShapeError::MissingField(name)),
        Some(v) if v.is_empty() => Err(ResultShapeError::EmptyField(name)),
        Some(v) => Ok(v),
    }
}

/// Why a model reply failed the result contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultShapeError {
    /// The reply was not a JSON object of the expected shape.
    InvalidJson(String),
    /// A required field was absent.
    MissingField(&'static str),
    /// A required field was present but empty.
    EmptyField(&'static str),
}

impl fmt::Display for ResultShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultShapeError::InvalidJson(reason) => write!(f, "invalid JSON: {}", reason),
            ResultShapeError::MissingField(name) => write!(f, "missing required field '{}'", name),
            ResultShapeError::EmptyField(name) => write!(f, "required field '{}' is empty", name),
        }
    }
}

impl std::error::Error for ResultShapeError {}
