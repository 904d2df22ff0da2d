//! Case style selector

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Naming convention applied to field names
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum CaseStyle {
    #[default]
    #[serde(rename = "camelCase", alias = "camel")]
    #[value(name = "camelCase", alias = "camel")]
    Camel,
    #[serde(rename = "PascalCase", alias = "pascalCase", alias = "pascal")]
    #[value(name = "PascalCase", alias = "pascalCase", alias = "pascal")]
    Pascal,
    #[serde(rename = "snake_case", alias = "snake")]
    #[value(name = "snake_case", alias = "snake")]
    Snake,
    #[serde(rename = "kebab-case", alias = "kebab")]
    #[value(name = "kebab-case", alias = "kebab")]
    Kebab,
    #[serde(rename = "UPPER_SNAKE_CASE", alias = "upper_snake")]
    #[value(name = "UPPER_SNAKE_CASE", alias = "upper_snake")]
    UpperSnake,
}

impl CaseStyle {
    /// All styles in display order
    pub const ALL: [CaseStyle; 5] = [
        CaseStyle::Camel,
        CaseStyle::Pascal,
        CaseStyle::Snake,
        CaseStyle::Kebab,
        CaseStyle::UpperSnake,
    ];

    /// Style identifier
    pub fn as_str(self) -> &'static str {
        match self {
            CaseStyle::Camel => "camelCase",
            CaseStyle::Pascal => "PascalCase",
            CaseStyle::Snake => "snake_case",
            CaseStyle::Kebab => "kebab-case",
            CaseStyle::UpperSnake => "UPPER_SNAKE_CASE",
        }
    }

    /// Word separator used by this style, if any
    pub fn separator(self) -> Option<char> {
        match self {
            CaseStyle::Camel | CaseStyle::Pascal => None,
            CaseStyle::Snake | CaseStyle::UpperSnake => Some('_'),
            CaseStyle::Kebab => Some('-'),
        }
    }

    /// Convert `name` into this style
    pub fn apply(self, name: &str) -> String {
        super::convert(name, self)
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "camelCase" | "camel" => Ok(CaseStyle::Camel),
            "PascalCase" | "pascalCase" | "pascal" => Ok(CaseStyle::Pascal),
            "snake_case" | "snake" => Ok(CaseStyle::Snake),
            "kebab-case" | "kebab" => Ok(CaseStyle::Kebab),
            "UPPER_SNAKE_CASE" | "upper_snake" => Ok(CaseStyle::UpperSnake),
            other => Err(Error::UnknownCaseStyle(other.to_string())),
        }
    }
}
