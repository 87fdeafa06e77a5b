use serde::{Deserialize, Serialize};

/// Scene layers in paint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SceneLayerKind {
    TargetLine,
    TargetLabel,
    DataPoints,
    Connectors,
    CategoryLabels,
}

impl SceneLayerKind {
    /// Paint order used by every frame: markers are painted before their stems
    /// and labels end up on top.
    pub const CANONICAL: [Self; 5] = [
        Self::TargetLine,
        Self::TargetLabel,
        Self::DataPoints,
        Self::Connectors,
        Self::CategoryLabels,
    ];

    /// Layers whose opacity follows selection and highlight state.
    #[must_use]
    pub const fn is_selectable(self) -> bool {
        matches!(
            self,
            Self::DataPoints | Self::Connectors | Self::CategoryLabels
        )
    }
}
