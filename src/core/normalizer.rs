use indexmap::IndexMap;
use indexmap::map::Entry;
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::render::Color;

use super::{CategoryColumn, DataItem, DataModel, DataView, SelectionId, ValueColumn};

/// JSON pointer of the per-row color override inside a row's formatting objects.
pub const ROW_COLOR_POINTER: &str = "/lollipopSettings/dataPointColor/solid/color";

/// Structural problems that make a data view unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputShapeError {
    #[error("no data view supplied")]
    MissingDataView,
    #[error("data view has no categorical section")]
    MissingCategorical,
    #[error("categorical section has no category column")]
    MissingCategories,
    #[error("expected value and target series, found {found} measure series")]
    MissingSeries { found: usize },
    #[error("target series has no value")]
    MissingTarget,
    #[error("category column has {categories} rows but value series has {values}")]
    RowCountMismatch { categories: usize, values: usize },
    #[error("measure series have no finite extent")]
    MissingExtent,
}

/// Host contract used to mint identities when the data view carries none.
pub trait SelectionIdBuilder {
    fn category_identity(&self, column: &CategoryColumn, row: usize, label: &str) -> SelectionId;
}

/// Default identity builder: `<column>=<category label>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnIdentityBuilder;

impl SelectionIdBuilder for ColumnIdentityBuilder {
    fn category_identity(&self, column: &CategoryColumn, _row: usize, label: &str) -> SelectionId {
        let column_name = column
            .source
            .query_name
            .as_deref()
            .unwrap_or(column.source.display_name.as_str());
        SelectionId::new(format!("{column_name}={label}"))
    }
}

/// Converts a raw data view into a render-ready model.
///
/// Never fails: any structural problem degrades to [`DataModel::empty`].
pub fn normalize(
    data_view: Option<&DataView>,
    default_color: Color,
    identities: &dyn SelectionIdBuilder,
) -> DataModel {
    match try_normalize(data_view, default_color, identities) {
        Ok(model) => model,
        Err(err) => {
            warn!(error = %err, "data view is malformed; rendering empty chart");
            DataModel::empty()
        }
    }
}

/// Fallible variant of [`normalize`] exposing why a data view was rejected.
pub fn try_normalize(
    data_view: Option<&DataView>,
    default_color: Color,
    identities: &dyn SelectionIdBuilder,
) -> Result<DataModel, InputShapeError> {
    let categorical = data_view
        .ok_or(InputShapeError::MissingDataView)?
        .categorical
        .as_ref()
        .ok_or(InputShapeError::MissingCategorical)?;
    let category_column = categorical
        .categories
        .first()
        .ok_or(InputShapeError::MissingCategories)?;
    let (value_series, target_series) = match categorical.values.as_slice() {
        [value, target, ..] => (value, target),
        other => return Err(InputShapeError::MissingSeries { found: other.len() }),
    };

    let target = target_series
        .values
        .first()
        .copied()
        .flatten()
        .filter(|value| value.is_finite())
        .ok_or(InputShapeError::MissingTarget)?;

    let row_count = category_column.values.len();
    if value_series.values.len() != row_count {
        return Err(InputShapeError::RowCountMismatch {
            categories: row_count,
            values: value_series.values.len(),
        });
    }

    let (min_value, max_value) = combined_extent(value_series, target_series)?;
    let items = collect_items(category_column, value_series, default_color, identities);

    debug!(
        rows = row_count,
        items = items.len(),
        min_value,
        max_value,
        target,
        "normalized data view"
    );

    Ok(DataModel {
        items,
        min_value,
        max_value,
        target,
        format_string: value_series.source.format.clone().unwrap_or_default(),
    })
}

fn combined_extent(
    value_series: &ValueColumn,
    target_series: &ValueColumn,
) -> Result<(f64, f64), InputShapeError> {
    match (value_series.extent(), target_series.extent()) {
        (Some((value_min, value_max)), Some((target_min, target_max))) => {
            let min = value_min.min(target_min);
            let max = value_max.max(target_max);
            Ok((min.min(max), max.max(min)))
        }
        (Some((min, max)), None) | (None, Some((min, max))) => Ok((min.min(max), max.max(min))),
        (None, None) => Err(InputShapeError::MissingExtent),
    }
}

fn collect_items(
    category_column: &CategoryColumn,
    value_series: &ValueColumn,
    default_color: Color,
    identities: &dyn SelectionIdBuilder,
) -> Vec<DataItem> {
    let mut by_category: IndexMap<String, DataItem> = IndexMap::new();

    for (row, raw_category) in category_column.values.iter().enumerate() {
        let Some(value) = value_series
            .values
            .get(row)
            .copied()
            .flatten()
            .filter(|value| value.is_finite())
        else {
            trace!(row, "skipping row without a finite value");
            continue;
        };

        let category = raw_category.to_label();
        let selection_id = category_column
            .identity
            .as_ref()
            .and_then(|identity| identity.get(row))
            .cloned()
            .unwrap_or_else(|| identities.category_identity(category_column, row, &category));
        let item = DataItem {
            color: resolve_row_color(category_column, row).unwrap_or(default_color),
            highlighted: is_row_highlighted(value_series, row),
            category,
            value,
            selection_id,
        };

        match by_category.entry(item.category.clone()) {
            Entry::Occupied(mut slot) => {
                warn!(
                    category = %item.category,
                    row,
                    "repeated category; keeping the latest row at the first position"
                );
                slot.insert(item);
            }
            Entry::Vacant(slot) => {
                slot.insert(item);
            }
        }
    }

    by_category.into_values().collect()
}

/// Resolves the optional per-row color override; any missing or malformed piece yields `None`.
fn resolve_row_color(column: &CategoryColumn, row: usize) -> Option<Color> {
    let objects = column.objects.as_ref()?.get(row)?.as_ref()?;
    let raw = objects.pointer(ROW_COLOR_POINTER)?.as_str()?;
    match Color::from_css(raw) {
        Ok(color) => Some(color),
        Err(err) => {
            trace!(row, error = %err, "ignoring malformed row color override");
            None
        }
    }
}

fn is_row_highlighted(series: &ValueColumn, row: usize) -> bool {
    series
        .highlights
        .as_ref()
        .and_then(|mask| mask.get(row).copied().flatten())
        .is_some_and(|flag| flag != 0.0 && !flag.is_nan())
}
