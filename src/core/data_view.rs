//! Raw tabular input as delivered by the host on every update.
//!
//! The shapes mirror a categorical data view: one category column plus measure
//! series, with optional per-row formatting objects and a highlight mask. All
//! types deserialize from camelCase JSON so captured host payloads can be
//! replayed directly.

use serde::{Deserialize, Serialize};

use super::SelectionId;

/// Scalar cell value of a category column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrimitiveValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl PrimitiveValue {
    /// Label used as the category key and the rendered category text.
    #[must_use]
    pub fn to_label(&self) -> String {
        match self {
            Self::Null => "(Blank)".to_owned(),
            Self::Bool(value) => value.to_string(),
            Self::Number(value) => value.to_string(),
            Self::Text(value) => value.clone(),
        }
    }
}

impl From<&str> for PrimitiveValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for PrimitiveValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for PrimitiveValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Column metadata.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSource {
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub query_name: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
}

impl ColumnSource {
    #[must_use]
    pub fn named(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryColumn {
    #[serde(default)]
    pub source: ColumnSource,
    pub values: Vec<PrimitiveValue>,
    /// Host-issued row identities, parallel to `values`.
    #[serde(default)]
    pub identity: Option<Vec<SelectionId>>,
    /// Free-form per-row formatting objects, parallel to `values`.
    #[serde(default)]
    pub objects: Option<Vec<Option<serde_json::Value>>>,
}

impl CategoryColumn {
    #[must_use]
    pub fn new<I, V>(source: ColumnSource, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<PrimitiveValue>,
    {
        Self {
            source,
            values: values.into_iter().map(Into::into).collect(),
            identity: None,
            objects: None,
        }
    }

    #[must_use]
    pub fn with_identities(mut self, identities: Vec<SelectionId>) -> Self {
        self.identity = Some(identities);
        self
    }

    #[must_use]
    pub fn with_objects(mut self, objects: Vec<Option<serde_json::Value>>) -> Self {
        self.objects = Some(objects);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueColumn {
    #[serde(default)]
    pub source: ColumnSource,
    pub values: Vec<Option<f64>>,
    #[serde(default)]
    pub highlights: Option<Vec<Option<f64>>>,
    #[serde(default)]
    pub min_local: Option<f64>,
    #[serde(default)]
    pub max_local: Option<f64>,
}

impl ValueColumn {
    #[must_use]
    pub fn new(source: ColumnSource, values: Vec<Option<f64>>) -> Self {
        Self {
            source,
            values,
            highlights: None,
            min_local: None,
            max_local: None,
        }
    }

    #[must_use]
    pub fn from_values(source: ColumnSource, values: &[f64]) -> Self {
        Self::new(source, values.iter().copied().map(Some).collect())
    }

    #[must_use]
    pub fn with_highlights(mut self, highlights: Vec<Option<f64>>) -> Self {
        self.highlights = Some(highlights);
        self
    }

    #[must_use]
    pub fn with_local_extent(mut self, min_local: f64, max_local: f64) -> Self {
        self.min_local = Some(min_local);
        self.max_local = Some(max_local);
        self
    }

    /// Declared `[min_local, max_local]`, falling back to the finite values.
    #[must_use]
    pub fn extent(&self) -> Option<(f64, f64)> {
        let computed = || {
            self.values
                .iter()
                .flatten()
                .copied()
                .filter(|value| value.is_finite())
                .fold(None, |acc: Option<(f64, f64)>, value| match acc {
                    Some((min, max)) => Some((min.min(value), max.max(value))),
                    None => Some((value, value)),
                })
        };

        match (self.min_local, self.max_local) {
            (Some(min), Some(max)) if min.is_finite() && max.is_finite() => Some((min, max)),
            _ => computed(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoricalView {
    #[serde(default)]
    pub categories: Vec<CategoryColumn>,
    #[serde(default)]
    pub values: Vec<ValueColumn>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataView {
    #[serde(default)]
    pub categorical: Option<CategoricalView>,
}

impl DataView {
    /// Builds the usual single-category, value + target view.
    #[must_use]
    pub fn categorical(category: CategoryColumn, value: ValueColumn, target: ValueColumn) -> Self {
        Self {
            categorical: Some(CategoricalView {
                categories: vec![category],
                values: vec![value, target],
            }),
        }
    }
}
