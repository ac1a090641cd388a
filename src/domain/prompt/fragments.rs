use std::fmt;

use serde::{Deserialize, Serialize};

/// The five labeled slots a prompt is assembled from, in composition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    Persona,
    Task,
    Context,
    Format,
    Constraints,
}

impl FragmentKind {
    /// All fragment kinds in the order they are joined.
    pub const ALL: [FragmentKind; 5] = [
        FragmentKind::Persona,
        FragmentKind::Task,
        FragmentKind::Context,
        FragmentKind::Format,
        FragmentKind::Constraints,
    ];

    /// Human-readable label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            FragmentKind::Persona => "Persona / Role",
            FragmentKind::Task => "Task / Goal",
            FragmentKind::Context => "Context / Background",
            FragmentKind::Format => "Format / Output Structure",
            FragmentKind::Constraints => "Constraints / Rules",
        }
    }

    /// Example value for the slot.
    pub fn placeholder(&self) -> &'static str {
        match self {
            FragmentKind::Persona => "A witty copywriter",
            FragmentKind::Task => "Write a product description",
            FragmentKind::Context => "The product is a smart coffee mug...",
            FragmentKind::Format => "A JSON object with 'name' and 'description' keys",
            FragmentKind::Constraints => "Use a formal tone, do not exceed 100 words",
        }
    }

    /// Guidance on what belongs in the slot.
    pub fn help(&self) -> &'static str {
        match self {
            FragmentKind::Persona => "Define the AI's personality or role.",
            FragmentKind::Task => "Clearly state what you want the AI to do. Be specific.",
            FragmentKind::Context => "Provide background information the AI needs for the task.",
            FragmentKind::Format => "Specify how you want the output structured.",
            FragmentKind::Constraints => "Set rules such as tone, length, or topics to avoid.",
        }
    }
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The five user-supplied prompt fragments.
///
/// The combined prompt is never stored here; it is derived on every read with
/// [`compose`], so it cannot drift from the fragments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptFragments {
    #[serde(default)]
    pub persona: String,
    #[serde(default)]
    pub task: String,
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub format: String,
    #[serde(default)]
    pub constraints: String,
}

impl PromptFragments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the fragment stored in `kind`.
    pub fn get(&self, kind: FragmentKind) -> &str {
        match kind {
            FragmentKind::Persona => &self.persona,
            FragmentKind::Task => &self.task,
            FragmentKind::Context => &self.context,
            FragmentKind::Format => &self.format,
            FragmentKind::Constraints => &self.constraints,
        }
    }

    /// Replace the fragment stored in `kind`.
    pub fn set(&mut self, kind: FragmentKind, value: impl Into<String>) {
        let value = value.into();
        match kind {
            FragmentKind::Persona => self.persona = value,
            FragmentKind::Task => self.task = value,
            FragmentKind::Context => self.context = value,
            FragmentKind::Format => self.format = value,
            FragmentKind::Constraints => self.constraints = value,
        }
    }

    /// Builder-style variant of [`PromptFragments::set`].
    pub fn with(mut self, kind: FragmentKind, value: impl Into<String>) -> Self {
        self.set(kind, value);
        self
    }

    /// Fragments in composition order, paired with their kind.
    pub fn iter(&self) -> impl Iterator<Item = (FragmentKind, &str)> {
        FragmentKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }

    /// The derived combined prompt.
    pub fn combined(&self) -> String {
        compose(self)
    }
}

/// Join the non-empty fragments into a single prompt.
///
/// Each fragment is trimmed, blank ones are dropped, and the survivors are
/// joined with one ASCII space.
pub fn compose(fragments: &PromptFragments) -> String {
    fragments
        .iter()
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}
