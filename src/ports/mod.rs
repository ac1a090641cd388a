mod clipboard_writer;
mod generation_client;
mod session_prompter;

pub use clipboard_writer::{ClipboardWriter, NoopClipboard};
pub use generation_client::GenerationClient;
pub use session_prompter::{SessionAction, SessionPrompter};
