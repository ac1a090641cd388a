use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// How aggressively the remote model should rewrite a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimizationMode {
    /// Balanced rewrite for clarity, specificity and structure.
    #[default]
    Default,
    /// Rewrite for minimum token count while preserving intent.
    TokenSaver,
}

impl OptimizationMode {
    pub const ALL: [OptimizationMode; 2] =
        [OptimizationMode::Default, OptimizationMode::TokenSaver];

    /// Wire/config representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptimizationMode::Default => "default",
            OptimizationMode::TokenSaver => "token_saver",
        }
    }

    /// Label used in interactive menus.
    pub fn display_name(&self) -> &'static str {
        match self {
            OptimizationMode::Default => "Default (balanced rewrite)",
            OptimizationMode::TokenSaver => "Token saver (minimize length)",
        }
    }
}

impl fmt::Display for OptimizationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptimizationMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "default" => Ok(OptimizationMode::Default),
            "token_saver" | "token-saver" | "tokensaver" => Ok(OptimizationMode::TokenSaver),
            other => Err(AppError::Validation(format!(
                "Invalid optimization mode '{}': must be one of default, token-saver",
                other
            ))),
        }
    }
}
