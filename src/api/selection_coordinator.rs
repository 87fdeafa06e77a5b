use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::SelectionId;
use crate::interaction::VisualMode;

use super::scene::SceneGraph;

/// Deferred result of a click, resolved with `LollipopEngine::resolve_click`.
///
/// The ticket remembers the render cycle it was issued in; resolving it after
/// a newer update is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickTicket {
    pub version: u64,
    pub category: String,
    pub index: usize,
    pub selection: Vec<SelectionId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickResolution {
    /// Opacity was updated; `dimmed` is true when a selection is active.
    Applied { dimmed: bool },
    /// A newer update cycle started after the click.
    Stale,
    /// Host highlight owns opacity in this cycle.
    SuppressedByHighlight,
}

pub(super) struct SelectionCoordinator;

impl SelectionCoordinator {
    /// Applies the opacity rule of `mode` after a reconcile pass.
    pub(super) fn apply_mode(scene: &mut SceneGraph, mode: VisualMode, dimmed_opacity: f64) {
        match mode {
            VisualMode::Highlighted => {
                let SceneGraph {
                    data_points,
                    connectors,
                    category_labels,
                    ..
                } = scene;
                let opacity_for = |highlighted: bool| {
                    if highlighted { 1.0 } else { dimmed_opacity }
                };
                for point in data_points.values_mut() {
                    point.opacity = opacity_for(point.highlighted);
                }
                for (category, connector) in connectors.iter_mut() {
                    connector.opacity = opacity_for(
                        data_points
                            .get(category)
                            .is_some_and(|point| point.highlighted),
                    );
                }
                for (category, label) in category_labels.iter_mut() {
                    label.opacity = opacity_for(
                        data_points
                            .get(category)
                            .is_some_and(|point| point.highlighted),
                    );
                }
            }
            // Click resolution owns opacity; entering elements were created opaque.
            VisualMode::Selected => {}
            VisualMode::Neutral => scene.set_all_opacity(1.0),
        }
    }

    /// Broadcast dimming after a resolved click.
    pub(super) fn apply_click(scene: &mut SceneGraph, ticket: &ClickTicket, dimmed_opacity: f64) {
        if ticket.selection.is_empty() {
            scene.set_all_opacity(1.0);
            return;
        }

        scene.set_all_opacity(dimmed_opacity);
        if let Some(point) = scene.data_points.get_mut(&ticket.category) {
            point.opacity = 1.0;
        }
        for connector in scene
            .connectors
            .values_mut()
            .filter(|connector| connector.index == ticket.index)
        {
            connector.opacity = 1.0;
        }
        for label in scene
            .category_labels
            .values_mut()
            .filter(|label| label.index == ticket.index)
        {
            label.opacity = 1.0;
        }
        debug!(
            category = %ticket.category,
            index = ticket.index,
            "applied selection dimming"
        );
    }
}
