//! Frontend Models
//!
//! Data structures matching the `data.json` payload.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier as it appears in the payload, normalised to text.
///
/// The dataset mixes JSON numbers and JSON strings for ids; both are kept
/// as their string form so comparisons and clipboard writes agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    #[cfg(test)]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(serde_json::Number),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(n) => ItemId(number_text(&n)),
            RawId::Text(s) => ItemId(s),
        })
    }
}

/// Integers as written; whole floats such as `1e2` or `100.0` without a
/// fractional part, the way a browser stringifies them
fn number_text(n: &serde_json::Number) -> String {
    if n.is_f64() {
        if let Some(f) = n.as_f64() {
            if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 {
                // + 0.0 folds -0 into 0
                return format!("{:.0}", f + 0.0);
            }
        }
    }
    n.to_string()
}

/// Sub-category entry inside a category's `list`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubCategory {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub pic: Option<String>,
}

/// Top-level category (matches payload)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: Option<ItemId>,
    pub name: String,
    pub list: Vec<SubCategory>,
}

/// Sub-category tagged with the name of the category that contained it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatItem {
    pub id: ItemId,
    pub name: String,
    pub pic: Option<String>,
    pub parent_name: String,
}

impl FlatItem {
    pub fn from_sub(sub: &SubCategory, parent_name: &str) -> Self {
        Self {
            id: sub.id.clone(),
            name: sub.name.clone(),
            pic: sub.pic.clone(),
            parent_name: parent_name.to_string(),
        }
    }

    /// Hover text shown on a card
    pub fn card_title(&self) -> String {
        format!("{} - {}\n点击复制ID: {}", self.parent_name, self.name, self.id)
    }
}
