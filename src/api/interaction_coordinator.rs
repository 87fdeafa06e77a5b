use tracing::{debug, trace};

use crate::core::PixelPoint;
use crate::error::{ChartError, ChartResult};
use crate::interaction::{HoverTransition, VisualMode};
use crate::render::Renderer;

use super::selection_coordinator::SelectionCoordinator;
use super::{
    ClickResolution, ClickTicket, LollipopEngine, TooltipDataItem, TooltipHideOptions,
    TooltipShowOptions,
};

pub(super) struct InteractionCoordinator;

impl InteractionCoordinator {
    pub(super) fn pointer_enter<R: Renderer>(
        engine: &mut LollipopEngine<R>,
        category: &str,
    ) -> ChartResult<()> {
        if engine.scene.data_point(category).is_none() {
            return Err(ChartError::UnknownCategory(category.to_owned()));
        }
        let transitions = engine.interaction.hover(Some(category));
        Self::dispatch_hover(engine, transitions)
    }

    pub(super) fn pointer_move<R: Renderer>(
        engine: &mut LollipopEngine<R>,
        x: f64,
        y: f64,
    ) -> ChartResult<Option<String>> {
        if !x.is_finite() || !y.is_finite() {
            return Err(ChartError::InvalidData(
                "pointer position must be finite".to_owned(),
            ));
        }
        let pointer = PixelPoint::new(x, y);
        let t = engine.transition.eased_progress();
        // Later markers paint on top, so they win overlapping hits.
        let hit = engine
            .scene
            .data_points()
            .iter()
            .rev()
            .find(|(_, point)| point.geometry.at(t).contains(pointer))
            .map(|(category, _)| category.clone());
        trace!(x, y, hit = ?hit, "pointer move");

        let transitions = engine.interaction.hover(hit.as_deref());
        Self::dispatch_hover(engine, transitions)?;
        Ok(hit)
    }

    pub(super) fn pointer_leave<R: Renderer>(engine: &mut LollipopEngine<R>) -> ChartResult<()> {
        if engine.interaction.clear().is_some() {
            engine
                .services
                .tooltip
                .hide(TooltipHideOptions { immediately: true })?;
        }
        Ok(())
    }

    pub(super) fn click<R: Renderer>(
        engine: &mut LollipopEngine<R>,
        category: &str,
    ) -> ChartResult<ClickTicket> {
        let point = engine
            .scene
            .data_point(category)
            .ok_or_else(|| ChartError::UnknownCategory(category.to_owned()))?;
        let index = point.index;
        let id = point.selection_id.clone();

        let selection = engine.services.selection.select(&id)?;
        debug!(
            category,
            selection_id = %id,
            selected = selection.len(),
            "data point clicked"
        );
        Ok(ClickTicket {
            version: engine.version,
            category: category.to_owned(),
            index,
            selection,
        })
    }

    pub(super) fn resolve_click<R: Renderer>(
        engine: &mut LollipopEngine<R>,
        ticket: &ClickTicket,
    ) -> ClickResolution {
        if ticket.version != engine.version {
            debug!(
                ticket_version = ticket.version,
                current_version = engine.version,
                category = %ticket.category,
                "discarding stale click resolution"
            );
            return ClickResolution::Stale;
        }
        if engine.mode == VisualMode::Highlighted {
            return ClickResolution::SuppressedByHighlight;
        }

        SelectionCoordinator::apply_click(&mut engine.scene, ticket, engine.config.dimmed_opacity);
        let dimmed = !ticket.selection.is_empty();
        engine.mode = if dimmed {
            VisualMode::Selected
        } else {
            VisualMode::Neutral
        };
        ClickResolution::Applied { dimmed }
    }

    /// Drops hover on a category that left the scene during an update.
    pub(super) fn forget_vanished_hover<R: Renderer>(
        engine: &mut LollipopEngine<R>,
    ) -> ChartResult<()> {
        let vanished = engine
            .interaction
            .hovered()
            .is_some_and(|category| engine.scene.data_point(category).is_none());
        if vanished {
            let transitions = engine.interaction.hover(None);
            Self::dispatch_hover(engine, transitions)?;
        }
        Ok(())
    }

    fn dispatch_hover<R: Renderer>(
        engine: &mut LollipopEngine<R>,
        transitions: Vec<HoverTransition>,
    ) -> ChartResult<()> {
        for transition in transitions {
            match transition {
                HoverTransition::Leave(_) => engine
                    .services
                    .tooltip
                    .hide(TooltipHideOptions { immediately: true })?,
                HoverTransition::Enter(category) => {
                    let options = Self::tooltip_options(engine, &category)?;
                    engine.services.tooltip.show(options)?;
                }
            }
        }
        Ok(())
    }

    /// Tooltip anchored at the item's final scaled position, carrying the
    /// host's active selection.
    fn tooltip_options<R: Renderer>(
        engine: &LollipopEngine<R>,
        category: &str,
    ) -> ChartResult<TooltipShowOptions> {
        let unknown = || ChartError::UnknownCategory(category.to_owned());
        let item = engine.model.item(category).ok_or_else(unknown)?;
        let scales = engine.scales.as_ref().ok_or_else(unknown)?;
        let x = scales.x(category).ok_or_else(unknown)?;

        Ok(TooltipShowOptions {
            coordinates: PixelPoint::new(x, scales.y(item.value)),
            identities: engine.services.selection.selection_ids(),
            data_items: vec![TooltipDataItem {
                display_name: item.category.clone(),
                value: engine.formatter.format(item.value),
            }],
        })
    }
}
