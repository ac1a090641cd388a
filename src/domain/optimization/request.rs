//! Instruction and payload construction for optimize/refine calls.

use std::fmt;
use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior, context};
use serde_json::{Value, json};

use crate::domain::AppError;
use crate::domain::optimization::OptimizationMode;

const OPTIMIZE_TEMPLATE: &str = include_str!("../../assets/prompts/optimize.txt.j2");
const REFINE_TEMPLATE: &str = include_str!("../../assets/prompts/refine.txt.j2");

const JSON_DIRECTIVE: &str =
    "Return your response strictly as a JSON object matching the defined schema.";

const OPTIMIZE_DEFAULT_INSTRUCTION: &str = "You are an expert in prompt engineering. Your task is to refine and optimize user-provided prompts to get the best possible results from a large language model. Analyze the user's prompt and rewrite it to be clearer, more specific, and better structured.";

const OPTIMIZE_TOKEN_SAVER_INSTRUCTION: &str = "You are an expert in prompt engineering with a focus on token efficiency. Your task is to rewrite the user-provided prompt to be as concise as possible while preserving the core intent and expected output quality. The goal is to minimize the number of tokens used in the prompt.";

const REFINE_BASE_INSTRUCTION: &str = "You are an expert in prompt engineering, currently refining a prompt based on user feedback. The user was not fully satisfied with the output from the previous prompt. Your task is to modify the prompt to incorporate their specific feedback, improving its alignment with their desired outcome while preserving the original intent.";

const REFINE_TOKEN_SAVER_DIRECTIVE: &str =
    "Focus on making the prompt as token-efficient as possible during this refinement.";

const PROMPT_FIELD_DESCRIPTION: &str = "The new, optimized prompt.";

const EXPLANATION_FIELD_DESCRIPTION: &str = "A brief, clear explanation of the changes made and why they will lead to a better result. Focus on concepts like clarity, specificity, context, and role-setting. If token saving was requested, explain how the prompt was made more concise. If refining, explain how the feedback was incorporated.";

/// Temperature for the optimize path.
pub const OPTIMIZE_TEMPERATURE: f32 = 0.3;
/// Slightly higher temperature so refinement can rewrite more freely.
pub const REFINE_TEMPERATURE: f32 = 0.4;

/// The two remote operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Optimize,
    Refine,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Optimize => "optimize",
            Operation::Refine => "refine",
        }
    }

    /// User-facing text for a local precondition failure.
    pub fn empty_input_message(&self) -> &'static str {
        match self {
            Operation::Optimize => "Cannot optimize an empty prompt.",
            Operation::Refine => "Cannot refine without feedback and an existing optimized prompt.",
        }
    }

    /// User-facing text when the model reply breaks the result contract.
    pub fn malformed_response_message(&self) -> &'static str {
        match self {
            Operation::Optimize => {
                "Failed to get a valid optimization from the AI. Please try again with a more specific prompt."
            }
            Operation::Refine => {
                "Failed to get a valid refinement from the AI. Please try again with different feedback."
            }
        }
    }

    /// User-facing text for transport or remote-side failures.
    pub fn service_unavailable_message(&self) -> &'static str {
        match self {
            Operation::Optimize => "An error occurred while communicating with the AI service.",
            Operation::Refine => {
                "An error occurred while communicating with the AI service for refinement."
            }
        }
    }

    pub fn temperature(&self) -> f32 {
        match self {
            Operation::Optimize => OPTIMIZE_TEMPERATURE,
            Operation::Refine => REFINE_TEMPERATURE,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the remote model needs for one call, independent of transport.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationRequest {
    pub operation: Operation,
    pub mode: OptimizationMode,
    pub system_instruction: String,
    pub contents: String,
    pub temperature: f32,
}

impl OptimizationRequest {
    /// Build an optimize request. Fails with `EmptyInput` for a blank prompt.
    pub fn optimize(prompt: &str, mode: OptimizationMode) -> Result<Self, AppError> {
        let operation = Operation::Optimize;
        if prompt.trim().is_empty() {
            return Err(AppError::EmptyInput(operation.empty_input_message().to_string()));
        }

        let instruction = match mode {
            OptimizationMode::Default => OPTIMIZE_DEFAULT_INSTRUCTION,
            OptimizationMode::TokenSaver => OPTIMIZE_TOKEN_SAVER_INSTRUCTION,
        };

        Ok(Self {
            operation,
            mode,
            system_instruction: format!("{} {}", instruction, JSON_DIRECTIVE),
            contents: render("optimize", OPTIMIZE_TEMPLATE, context! { prompt => prompt })?,
            temperature: operation.temperature(),
        })
    }

    /// Build a refine request. Fails with `EmptyInput` when either input is blank.
    pub fn refine(
        current_prompt: &str,
        feedback: &str,
        mode: OptimizationMode,
    ) -> Result<Self, AppError> {
        let operation = Operation::Refine;
        if current_prompt.trim().is_empty() || feedback.trim().is_empty() {
            return Err(AppError::EmptyInput(operation.empty_input_message().to_string()));
        }

        let system_instruction = match mode {
            OptimizationMode::Default => format!("{} {}", REFINE_BASE_INSTRUCTION, JSON_DIRECTIVE),
            OptimizationMode::TokenSaver => format!(
                "{} {} {}",
                REFINE_BASE_INSTRUCTION, REFINE_TOKEN_SAVER_DIRECTIVE, JSON_DIRECTIVE
            ),
        };

        Ok(Self {
            operation,
            mode,
            system_instruction,
            contents: render(
                "refine",
                REFINE_TEMPLATE,
                context! { prompt => current_prompt, feedback => feedback },
            )?,
            temperature: operation.temperature(),
        })
    }
}

/// JSON schema the remote model must constrain its reply to.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "prompt": {
                "type": "STRING",
                "description": PROMPT_FIELD_DESCRIPTION,
            },
            "explanation": {
                "type": "STRING",
                "description": EXPLANATION_FIELD_DESCRIPTION,
            },
        },
        "required": ["prompt", "explanation"],
    })
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn render(name: &str, template: &str, ctx: minijinja::Value) -> Result<String, AppError> {
    let env = ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env
    });

    env.render_str(template, ctx).map_err(|err| {
        AppError::InternalError(format!("Failed to render {} template: {}", name, err))
    })
}
