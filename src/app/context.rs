use crate::app::services::Optimizer;
use crate::ports::{ClipboardWriter, GenerationClient};

/// Application context holding dependencies for command execution.
pub struct AppContext<C: GenerationClient, W: ClipboardWriter> {
    optimizer: Optimizer<C>,
    clipboard: W,
}

impl<C: GenerationClient, W: ClipboardWriter> AppContext<C, W> {
    /// Create a new application context.
    pub fn new(client: C, clipboard: W) -> Self {
        Self { optimizer: Optimizer::new(client), clipboard }
    }

    /// Get a reference to the optimizer.
    pub fn optimizer(&self) -> &Optimizer<C> {
        &self.optimizer
    }

    /// Get a mutable reference to the clipboard writer.
    pub fn clipboard_mut(&mut self) -> &mut W {
        &mut self.clipboard
    }

    /// Get a reference to the clipboard writer.
    pub fn clipboard(&self) -> &W {
        &self.clipboard
    }
}
