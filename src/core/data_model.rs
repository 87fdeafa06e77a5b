use std::fmt;

use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Opaque host-issued identity for one data row.
///
/// The engine never inspects the token; it is only compared for equality and
/// handed back to the host's selection and tooltip services.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionId(String);

impl SelectionId {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SelectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One render-ready category row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataItem {
    pub category: String,
    pub value: f64,
    pub color: Color,
    pub selection_id: SelectionId,
    pub highlighted: bool,
}

/// Normalized chart input for one update cycle.
///
/// `min_value`/`max_value` cover both the value and the target series, but the
/// target itself is not required to lie inside them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataModel {
    pub items: Vec<DataItem>,
    pub min_value: f64,
    pub max_value: f64,
    pub target: f64,
    pub format_string: String,
}

impl DataModel {
    /// Fallback model produced for malformed input.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            min_value: 0.0,
            max_value: 0.0,
            target: 0.0,
            format_string: String::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn has_highlights(&self) -> bool {
        self.items.iter().any(|item| item.highlighted)
    }

    #[must_use]
    pub fn item(&self, category: &str) -> Option<&DataItem> {
        self.items.iter().find(|item| item.category == category)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.category.as_str())
    }
}

impl Default for DataModel {
    fn default() -> Self {
        Self::empty()
    }
}
