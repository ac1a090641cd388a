use crate::app::AppContext;
use crate::domain::{AppError, OptimizationMode, OptimizedResult};
use crate::ports::{ClipboardWriter, GenerationClient};

/// Options for the refine command.
#[derive(Debug, Clone, Default)]
pub struct RefineOptions {
    /// Previously optimized prompt to refine.
    pub prompt: String,
    /// What was wrong with the output of `prompt`.
    pub feedback: String,
    pub mode: OptimizationMode,
    /// Copy the refined prompt to the clipboard on success.
    pub copy: bool,
}

/// Execute the refine command.
pub fn execute<C, W>(
    ctx: &mut AppContext<C, W>,
    options: &RefineOptions,
) -> Result<OptimizedResult, AppError>
where
    C: GenerationClient,
    W: ClipboardWriter,
{
    let result = ctx.optimizer().refine(&options.prompt, &options.feedback, options.mode)?;

    if options.copy {
        ctx.clipboard_mut().write_text(result.prompt())?;
    }

    Ok(result)
}
