//! Parsed enum members as the generator sees them before emission.

use serde::{Deserialize, Serialize};

/// Kind of literal an enum member's value is emitted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnumKind {
    String,
    Number,
}

/// One member of a schema enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumMember {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub value: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub kind: EnumKind,
}

impl EnumMember {
    pub fn new(name: impl Into<String>, value: impl Into<String>, kind: EnumKind) -> Self {
        Self {
            name: name.into(),
            description: None,
            value: value.into(),
            title: None,
            kind,
        }
    }
}
