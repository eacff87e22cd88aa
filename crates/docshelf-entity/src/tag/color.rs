//! Tag color palette.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display color of a tag chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagColor {
    /// Neutral grey.
    #[default]
    Default,
    /// Brand primary.
    Primary,
    /// Brand secondary.
    Secondary,
    /// Red.
    Error,
    /// Blue.
    Info,
    /// Green.
    Success,
    /// Amber.
    Warning,
}

impl TagColor {
    /// Return the color as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Error => "error",
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for TagColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TagColor {
    type Err = docshelf_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "primary" => Ok(Self::Primary),
            "secondary" => Ok(Self::Secondary),
            "error" => Ok(Self::Error),
            "info" => Ok(Self::Info),
            "success" => Ok(Self::Success),
            "warning" => Ok(Self::Warning),
            _ => Err(docshelf_core::AppError::validation(format!(
                "Invalid tag color: '{s}'. Expected one of: default, primary, secondary, error, info, success, warning"
            ))),
        }
    }
}
