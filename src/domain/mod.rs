pub mod configuration;
pub mod error;
pub mod optimization;
pub mod prompt;
pub mod session;

pub use configuration::{AppConfig, GeminiApiConfig};
pub use error::{AppError, ErrorKind};
pub use optimization::{
    Operation, OptimizationMode, OptimizationRequest, OptimizedResult, ResultShapeError,
};
pub use prompt::{FragmentKind, PromptFragments, compose};
pub use session::{ErrorRecord, OperationState, PendingOperation, Session, Ticket};
