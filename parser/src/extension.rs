//! Vendor extensions that rename, retitle, and describe enum members.
//!
//! # Design
//! A schema may carry up to four arrays parallel to its `enum` list:
//! `x-enum-values`, `x-enum-varnames`, `x-enum-titles`, and
//! `x-enum-descriptions`. They are matched to members purely by position.
//! Name, title, and description arrays are reduced to their string entries
//! before indexing, so a non-string entry shifts every later entry one slot
//! forward. The values array is used as-is.

use serde::Deserialize;
use serde_json::Value;

use crate::model::EnumMember;

pub const VALUES: &str = "x-enum-values";
pub const VARNAMES: &str = "x-enum-varnames";
pub const TITLES: &str = "x-enum-titles";
pub const DESCRIPTIONS: &str = "x-enum-descriptions";

/// Extension arrays read from one schema node. Missing or malformed arrays
/// are `None`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct EnumExtensions {
    pub values: Option<Vec<Value>>,
    pub names: Option<Vec<String>>,
    pub titles: Option<Vec<String>>,
    pub descriptions: Option<Vec<String>>,
}

impl EnumExtensions {
    pub fn from_schema(node: &Value) -> Self {
        Self {
            values: node.get(VALUES).and_then(Value::as_array).cloned(),
            names: strings(node, VARNAMES),
            titles: strings(node, TITLES),
            descriptions: strings(node, DESCRIPTIONS),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_none() && self.names.is_none() && self.titles.is_none() && self.descriptions.is_none()
    }
}

impl From<Value> for EnumExtensions {
    fn from(node: Value) -> Self {
        Self::from_schema(&node)
    }
}

fn strings(node: &Value, key: &str) -> Option<Vec<String>> {
    node.get(key).and_then(Value::as_array).map(|items| {
        items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()
    })
}

/// Overlay `extensions` onto `members` by position.
///
/// Each field takes the extension entry at the member's index when that
/// entry exists and is non-empty; otherwise the member's own field is kept.
/// `kind` always comes from the member.
pub fn extend_enum(members: &[EnumMember], extensions: &EnumExtensions) -> Vec<EnumMember> {
    members
        .iter()
        .enumerate()
        .map(|(index, member)| EnumMember {
            name: text_at(&extensions.names, index).unwrap_or_else(|| member.name.clone()),
            description: text_at(&extensions.descriptions, index).or_else(|| member.description.clone()),
            value: value_at(&extensions.values, index).unwrap_or_else(|| member.value.clone()),
            title: text_at(&extensions.titles, index).or_else(|| member.title.clone()),
            kind: member.kind,
        })
        .collect()
}

fn text_at(items: &Option<Vec<String>>, index: usize) -> Option<String> {
    items
        .as_ref()?
        .get(index)
        .filter(|text| !text.is_empty())
        .cloned()
}

/// Entry `index` of the values array rendered as text, if it is truthy:
/// non-empty strings, non-zero numbers, `true`, and any array or object.
fn value_at(items: &Option<Vec<Value>>, index: usize) -> Option<String> {
    match items.as_ref()?.get(index)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        value @ (Value::Array(_) | Value::Object(_)) => Some(value.to_string()),
        _ => None,
    }
}
