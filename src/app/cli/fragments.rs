use clap::Args;

use crate::domain::{FragmentKind, PromptFragments};

/// The five prompt fragments as command-line flags.
#[derive(Args, Debug, Clone, Default)]
#[group(id = "fragments", multiple = true)]
pub struct FragmentArgs {
    /// Persona / role the model should adopt (e.g. "A witty copywriter")
    #[arg(long)]
    pub persona: Option<String>,
    /// Task / goal to accomplish (e.g. "Write a product description")
    #[arg(long)]
    pub task: Option<String>,
    /// Context / background the model needs
    #[arg(long)]
    pub context: Option<String>,
    /// Format / output structure of the answer
    #[arg(long)]
    pub format: Option<String>,
    /// Constraints / rules such as tone or length
    #[arg(long)]
    pub constraints: Option<String>,
}

impl FragmentArgs {
    pub fn to_fragments(&self) -> PromptFragments {
        let mut fragments = PromptFragments::new();
        for (kind, value) in [
            (FragmentKind::Persona, &self.persona),
            (FragmentKind::Task, &self.task),
            (FragmentKind::Context, &self.context),
            (FragmentKind::Format, &self.format),
            (FragmentKind::Constraints, &self.constraints),
        ] {
            if let Some(value) = value {
                fragments.set(kind, value.as_str());
            }
        }
        fragments
    }
}
