use crate::domain::{AppError, PromptFragments, compose};
use crate::ports::ClipboardWriter;

const EMPTY_COPY_MESSAGE: &str = "Cannot copy an empty prompt.";

/// Options for the compose command.
#[derive(Debug, Clone, Default)]
pub struct ComposeOptions {
    pub fragments: PromptFragments,
    /// Copy the combined prompt to the clipboard.
    pub copy: bool,
}

/// Execute the compose command.
///
/// Returns the combined prompt; empty when every fragment is blank.
pub fn execute<W: ClipboardWriter>(
    clipboard: &mut W,
    options: &ComposeOptions,
) -> Result<String, AppError> {
    if options.copy {
        copy_combined(clipboard, &options.fragments)
    } else {
        Ok(compose(&options.fragments))
    }
}

/// Write the combined prompt to `clipboard` and return it.
///
/// A blank combined prompt is rejected before the clipboard is touched.
pub fn copy_combined<W: ClipboardWriter>(
    clipboard: &mut W,
    fragments: &PromptFragments,
) -> Result<String, AppError> {
    let combined = compose(fragments);
    if combined.is_empty() {
        return Err(AppError::EmptyInput(EMPTY_COPY_MESSAGE.to_string()));
    }

    clipboard.write_text(&combined)?;
    Ok(combined)
}
