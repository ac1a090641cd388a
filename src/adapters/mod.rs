pub mod clipboard_arboard;
pub mod gemini_client_http;

pub use clipboard_arboard::ArboardClipboardWriter;
pub use gemini_client_http::{API_KEY_ENV, HttpGeminiClient};
