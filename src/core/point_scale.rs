use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Ordinal point scale: maps distinct categories to evenly spaced positions.
///
/// `padding` is the outer padding expressed in multiples of the step, so the
/// default of `0.5` leaves half a slot before the first and after the last
/// category. Repeated categories collapse onto their first occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointScale {
    domain: IndexSet<String>,
    range_start: f64,
    range_end: f64,
    padding: f64,
    first: f64,
    step: f64,
}

impl PointScale {
    pub fn new<I, S>(categories: I, range: (f64, f64), padding: f64) -> ChartResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ChartError::InvalidData(
                "point scale range must be finite".to_owned(),
            ));
        }
        if !padding.is_finite() || padding < 0.0 {
            return Err(ChartError::InvalidData(
                "point scale padding must be finite and >= 0".to_owned(),
            ));
        }

        let domain: IndexSet<String> = categories.into_iter().map(Into::into).collect();
        let (first, step) = resolve_layout(domain.len(), range, padding);
        Ok(Self {
            domain,
            range_start: range.0,
            range_end: range.1,
            padding,
            first,
            step,
        })
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn range_end(&self) -> f64 {
        self.range_end
    }

    #[must_use]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Signed distance between adjacent categories.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.domain.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.domain.iter().map(String::as_str)
    }

    /// Returns `None` for categories outside the domain.
    #[must_use]
    pub fn position(&self, category: &str) -> Option<f64> {
        self.domain
            .get_index_of(category)
            .map(|index| self.first + self.step * index as f64)
    }
}

fn resolve_layout(count: usize, range: (f64, f64), padding: f64) -> (f64, f64) {
    let reversed = range.1 < range.0;
    let (low, high) = if reversed {
        (range.1, range.0)
    } else {
        range
    };
    let span = high - low;
    let slots = (count as f64 - 1.0 + padding * 2.0).max(1.0);
    let step = span / slots;
    let used = step * (count.saturating_sub(1)) as f64;
    let start = low + (span - used) * 0.5;

    if reversed {
        (start + used, -step)
    } else {
        (start, step)
    }
}
