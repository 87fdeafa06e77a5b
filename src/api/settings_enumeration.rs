//! Property groups exposed to the host settings pane.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::StyleSettings;

pub const LOLLIPOP_SETTINGS_OBJECT: &str = "lollipopSettings";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WildcardMatchingOption {
    InstancesAndTotals,
    InstancesOnly,
    TotalsOnly,
}

/// Which data the instance applies to. `None` on an instance means the whole visual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum InstanceSelector {
    DataViewWildcard { matching_option: WildcardMatchingOption },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyInstanceKind {
    Constant,
    Rule,
    ConstantOrRule,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectInstance {
    pub object_name: String,
    pub properties: IndexMap<String, Value>,
    pub selector: Option<InstanceSelector>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_constant_value_selector: Option<Value>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub property_instance_kind: IndexMap<String, PropertyInstanceKind>,
}

impl ObjectInstance {
    fn new(
        object_name: &str,
        properties: impl IntoIterator<Item = (&'static str, Value)>,
    ) -> Self {
        Self {
            object_name: object_name.to_owned(),
            properties: properties
                .into_iter()
                .map(|(name, value)| (name.to_owned(), value))
                .collect(),
            selector: None,
            alt_constant_value_selector: None,
            property_instance_kind: IndexMap::new(),
        }
    }
}

/// Enumerates the instances of `object_name` for the current settings.
///
/// Only `lollipopSettings` is known; any other name yields no instances.
#[must_use]
pub fn enumerate_object_instances(
    object_name: &str,
    settings: &StyleSettings,
) -> Vec<ObjectInstance> {
    if object_name != LOLLIPOP_SETTINGS_OBJECT {
        return Vec::new();
    }

    let default_color = json!(settings.default_color.to_hex());

    let general = ObjectInstance::new(object_name, [("defaultColor", default_color.clone())]);

    let mut per_category = ObjectInstance::new(
        object_name,
        [(
            "dataPointColor",
            json!(settings.resolved_data_point_color().to_hex()),
        )],
    );
    per_category.selector = Some(InstanceSelector::DataViewWildcard {
        matching_option: WildcardMatchingOption::InstancesAndTotals,
    });
    per_category.alt_constant_value_selector = Some(default_color);
    per_category
        .property_instance_kind
        .insert("dataPointColor".to_owned(), PropertyInstanceKind::ConstantOrRule);

    let geometry = ObjectInstance::new(
        object_name,
        [
            ("radius", json!(settings.radius)),
            ("lineWidth", json!(settings.line_width)),
            ("fontSize", json!(settings.font_size)),
            ("fontFamily", json!(settings.font_family)),
        ],
    );

    vec![general, per_category, geometry]
}
