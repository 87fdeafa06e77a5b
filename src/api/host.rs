//! Contracts of the host collaborators and their headless defaults.

use serde::{Deserialize, Serialize};

use crate::core::{ColumnIdentityBuilder, PixelPoint, SelectionId, SelectionIdBuilder};
use crate::error::ChartResult;
use crate::render::{EstimatedTextMeasurer, TextMeasurer};

/// Host selection manager.
pub trait SelectionService {
    /// Toggles `id` and returns the resulting selection set.
    fn select(&mut self, id: &SelectionId) -> ChartResult<Vec<SelectionId>>;

    fn has_selection(&self) -> bool;

    fn selection_ids(&self) -> Vec<SelectionId>;
}

/// Single-select manager: selecting the only selected identity clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemorySelectionService {
    selected: Vec<SelectionId>,
}

impl SelectionService for InMemorySelectionService {
    fn select(&mut self, id: &SelectionId) -> ChartResult<Vec<SelectionId>> {
        if self.selected.len() == 1 && self.selected[0] == *id {
            self.selected.clear();
        } else {
            self.selected = vec![id.clone()];
        }
        Ok(self.selected.clone())
    }

    fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    fn selection_ids(&self) -> Vec<SelectionId> {
        self.selected.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipDataItem {
    pub display_name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipShowOptions {
    pub coordinates: PixelPoint,
    pub identities: Vec<SelectionId>,
    pub data_items: Vec<TooltipDataItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipHideOptions {
    pub immediately: bool,
}

/// Host tooltip service.
pub trait TooltipService {
    fn show(&mut self, options: TooltipShowOptions) -> ChartResult<()>;

    fn hide(&mut self, options: TooltipHideOptions) -> ChartResult<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTooltipService;

impl TooltipService for NoopTooltipService {
    fn show(&mut self, _options: TooltipShowOptions) -> ChartResult<()> {
        Ok(())
    }

    fn hide(&mut self, _options: TooltipHideOptions) -> ChartResult<()> {
        Ok(())
    }
}

/// Bundle of host collaborators owned by the engine.
pub struct HostServices {
    pub selection: Box<dyn SelectionService>,
    pub tooltip: Box<dyn TooltipService>,
    pub identities: Box<dyn SelectionIdBuilder>,
    pub text_measurer: Box<dyn TextMeasurer>,
}

impl HostServices {
    /// In-memory selection, no tooltips, column identities, estimated text widths.
    #[must_use]
    pub fn headless() -> Self {
        Self {
            selection: Box::new(InMemorySelectionService::default()),
            tooltip: Box::new(NoopTooltipService),
            identities: Box::new(ColumnIdentityBuilder),
            text_measurer: Box::new(EstimatedTextMeasurer),
        }
    }

    #[must_use]
    pub fn with_selection_service(mut self, service: impl SelectionService + 'static) -> Self {
        self.selection = Box::new(service);
        self
    }

    #[must_use]
    pub fn with_tooltip_service(mut self, service: impl TooltipService + 'static) -> Self {
        self.tooltip = Box::new(service);
        self
    }

    #[must_use]
    pub fn with_identity_builder(mut self, builder: impl SelectionIdBuilder + 'static) -> Self {
        self.identities = Box::new(builder);
        self
    }

    #[must_use]
    pub fn with_text_measurer(mut self, measurer: impl TextMeasurer + 'static) -> Self {
        self.text_measurer = Box::new(measurer);
        self
    }
}

impl Default for HostServices {
    fn default() -> Self {
        Self::headless()
    }
}
