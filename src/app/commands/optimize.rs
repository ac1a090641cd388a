use crate::app::AppContext;
use crate::domain::{AppError, OptimizationMode, OptimizedResult};
use crate::ports::{ClipboardWriter, GenerationClient};

/// Options for the optimize command.
#[derive(Debug, Clone, Default)]
pub struct OptimizeOptions {
    /// Combined prompt to optimize.
    pub prompt: String,
    pub mode: OptimizationMode,
    /// Copy the optimized prompt to the clipboard on success.
    pub copy: bool,
}

/// Execute the optimize command.
pub fn execute<C, W>(
    ctx: &mut AppContext<C, W>,
    options: &OptimizeOptions,
) -> Result<OptimizedResult, AppError>
where
    C: GenerationClient,
    W: ClipboardWriter,
{
    let result = ctx.optimizer().optimize(&options.prompt, options.mode)?;

    if options.copy {
        ctx.clipboard_mut().write_text(result.prompt())?;
    }

    Ok(result)
}
