//! Prompt composition from labeled fragments.

mod fragments;

pub use fragments::{FragmentKind, PromptFragments, compose};
