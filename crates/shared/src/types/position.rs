//! Placement of a currency label relative to the formatted amount.

use serde::{Deserialize, Serialize};

/// Where the currency label goes around a formatted number.
///
/// Text input is parsed leniently: an empty name selects the default
/// (`LeftSpace`) and any unrecognized name selects `Left`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Position {
    /// `{label}{number}`
    Left,
    /// `{label} {number}`
    #[default]
    LeftSpace,
    /// `{number}{label}`
    Right,
    /// `{number} {label}`
    RightSpace,
}

impl Position {
    /// Parses a position name, falling back as described on the type.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "" | "left_space" => Self::LeftSpace,
            "right" => Self::Right,
            "right_space" => Self::RightSpace,
            _ => Self::Left,
        }
    }

    /// Returns the canonical name of this position.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::LeftSpace => "left_space",
            Self::Right => "right",
            Self::RightSpace => "right_space",
        }
    }

    /// Places `label` around `number`.
    #[must_use]
    pub fn compose(self, label: &str, number: &str) -> String {
        match self {
            Self::Left => format!("{label}{number}"),
            Self::LeftSpace => format!("{label} {number}"),
            Self::Right => format!("{number}{label}"),
            Self::RightSpace => format!("{number} {label}"),
        }
    }
}

impl From<&str> for Position {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<String> for Position {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
