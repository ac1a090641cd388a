//! promptopt: Compose structured prompts from fragments and optimize them with Gemini.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use adapters::HttpGeminiClient;
pub use app::api::{
    ComposeOptions, OptimizeOptions, RefineOptions, compose, optimize, refine, run_session,
};
pub use app::services::Optimizer;
pub use domain::{
    AppError, ErrorKind, FragmentKind, OptimizationMode, OptimizedResult, PromptFragments,
    Session,
};
pub use ports::{ClipboardWriter, GenerationClient, SessionAction, SessionPrompter};
