mod fake_generation_client;
mod mock_clipboard;
mod scripted_prompter;

pub use fake_generation_client::FakeGenerationClient;
pub use mock_clipboard::MockClipboard;
pub use scripted_prompter::ScriptedPrompter;
