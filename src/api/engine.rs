use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{DataModel, DataView, Viewport, normalize};
use crate::error::ChartResult;
use crate::interaction::{InteractionState, VisualMode};
use crate::render::{LayeredRenderFrame, Renderer, StyleVariables};

use super::interaction_coordinator::InteractionCoordinator;
use super::render_frame_builder::build_layered_frame;
use super::scene::SceneGraph;
use super::scene_reconciler::{SceneLayout, SceneReconcileSummary, reconcile_scene};
use super::selection_coordinator::SelectionCoordinator;
use super::validation::{validate_delta_ms, validate_engine_config, validate_style_settings};
use super::{
    ChartScales, ClickResolution, ClickTicket, HostServices, LollipopEngineConfig, StyleSettings,
    Transition, ValueFormatter, build_scales, export_style_variables,
};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Everything the host supplies for one update cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInput {
    pub viewport: Viewport,
    #[serde(default)]
    pub data_view: Option<DataView>,
    #[serde(default)]
    pub settings: StyleSettings,
}

impl UpdateInput {
    #[must_use]
    pub fn new(viewport: Viewport, data_view: Option<DataView>) -> Self {
        Self {
            viewport,
            data_view,
            settings: StyleSettings::default(),
        }
    }

    #[must_use]
    pub fn with_settings(mut self, settings: StyleSettings) -> Self {
        self.settings = settings;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSummary {
    pub version: u64,
    pub mode: VisualMode,
    pub item_count: usize,
    pub scene: SceneReconcileSummary,
}

/// Main orchestration facade consumed by host applications.
///
/// `LollipopEngine` owns the persistent scene, the shared transition, the
/// visual mode and the host collaborators. Each `update` runs normalize,
/// scales, reconcile and opacity synchronously; geometry then animates as the
/// host calls `advance`.
pub struct LollipopEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: LollipopEngineConfig,
    pub(super) services: HostServices,
    pub(super) viewport: Viewport,
    pub(super) settings: StyleSettings,
    pub(super) model: DataModel,
    pub(super) formatter: ValueFormatter,
    pub(super) scales: Option<ChartScales>,
    pub(super) scene: SceneGraph,
    pub(super) transition: Transition,
    pub(super) mode: VisualMode,
    pub(super) version: u64,
    pub(super) interaction: InteractionState,
    pub(super) style_variables: StyleVariables,
}

impl<R: Renderer> LollipopEngine<R> {
    pub fn new(
        renderer: R,
        config: LollipopEngineConfig,
        services: HostServices,
    ) -> ChartResult<Self> {
        validate_engine_config(&config)?;
        Ok(Self {
            renderer,
            config,
            services,
            viewport: Viewport::new(0.0, 0.0),
            settings: StyleSettings::default(),
            model: DataModel::empty(),
            formatter: ValueFormatter::default(),
            scales: None,
            scene: SceneGraph::default(),
            transition: Transition::settled(config.easing),
            mode: VisualMode::Neutral,
            version: 0,
            interaction: InteractionState::default(),
            style_variables: StyleVariables::new(),
        })
    }

    /// Headless engine with default config and in-memory host services.
    pub fn headless(renderer: R) -> ChartResult<Self> {
        Self::new(renderer, LollipopEngineConfig::default(), HostServices::headless())
    }

    /// Runs one update cycle.
    ///
    /// Viewport and style errors are reported before any engine state changes.
    /// Malformed data never errors; it renders as an empty chart.
    pub fn update(&mut self, input: &UpdateInput) -> ChartResult<UpdateSummary> {
        let viewport = input.viewport.validate()?;
        validate_style_settings(&input.settings)?;
        let settings = input.settings.clone();

        let model = normalize(
            input.data_view.as_ref(),
            settings.default_color,
            &*self.services.identities,
        );
        let formatter = ValueFormatter::parse(&model.format_string);
        let target_text = formatter.format(model.target);
        let target_label_width = self
            .services
            .text_measurer
            .measure_text_width(&target_text, &settings.font());
        let scales = build_scales(
            &model,
            viewport,
            &settings,
            target_label_width,
            self.config.category_padding,
        )?;

        let style_variables = export_style_variables(&settings);
        self.renderer.apply_style_variables(&style_variables)?;

        let t = self.transition.eased_progress();
        let scene_summary = reconcile_scene(
            &mut self.scene,
            &SceneLayout {
                model: &model,
                scales: &scales,
                settings: &settings,
                target_text: &target_text,
            },
            t,
        );
        self.transition = Transition::new(self.config.transition_duration_ms, self.config.easing);

        let mode = VisualMode::resolve(model.has_highlights(), self.services.selection.has_selection());
        SelectionCoordinator::apply_mode(&mut self.scene, mode, self.config.dimmed_opacity);

        self.version += 1;
        self.mode = mode;
        self.viewport = viewport;
        self.settings = settings;
        self.model = model;
        self.formatter = formatter;
        self.scales = Some(scales);
        self.style_variables = style_variables;

        // Already committed: tooltip faults are logged, not returned.
        if let Err(err) = InteractionCoordinator::forget_vanished_hover(self) {
            warn!(error = %err, "failed to hide tooltip of vanished category");
        }

        let summary = UpdateSummary {
            version: self.version,
            mode,
            item_count: self.model.items.len(),
            scene: scene_summary,
        };
        debug!(
            version = summary.version,
            mode = ?summary.mode,
            items = summary.item_count,
            entered = summary.scene.data_points.entered,
            updated = summary.scene.data_points.updated,
            exited = summary.scene.data_points.exited,
            "update cycle complete"
        );
        Ok(summary)
    }

    /// Advances the shared transition clock; returns whether it is still running.
    pub fn advance(&mut self, delta_ms: f64) -> ChartResult<bool> {
        let delta_ms = validate_delta_ms(delta_ms)?;
        Ok(self.transition.advance(delta_ms))
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_running()
    }

    /// Draw commands for the scene at the current transition progress.
    #[must_use]
    pub fn build_render_frame(&self) -> LayeredRenderFrame {
        build_layered_frame(
            &self.scene,
            self.viewport,
            &self.settings,
            &self.config,
            self.transition.eased_progress(),
        )
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame().flatten();
        self.renderer.render(&frame)
    }

    /// Renders the frame into an external cairo context.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame().flatten();
        self.renderer.render_on_cairo_context(context, &frame)
    }

    /// Pointer entered the marker of `category`; shows its tooltip.
    pub fn pointer_enter(&mut self, category: &str) -> ChartResult<()> {
        InteractionCoordinator::pointer_enter(self, category)
    }

    /// Hit-tests the current marker geometry and returns the hovered category.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<Option<String>> {
        InteractionCoordinator::pointer_move(self, x, y)
    }

    /// Pointer left the chart; hides any tooltip immediately.
    pub fn pointer_leave(&mut self) -> ChartResult<()> {
        InteractionCoordinator::pointer_leave(self)
    }

    /// Toggles the selection of `category` with the host selection service.
    ///
    /// Opacity only changes once the returned ticket is resolved.
    pub fn click(&mut self, category: &str) -> ChartResult<ClickTicket> {
        InteractionCoordinator::click(self, category)
    }

    pub fn resolve_click(&mut self, ticket: &ClickTicket) -> ClickResolution {
        InteractionCoordinator::resolve_click(self, ticket)
    }

    /// Click followed by immediate resolution.
    pub fn click_and_resolve(&mut self, category: &str) -> ChartResult<ClickResolution> {
        let ticket = self.click(category)?;
        Ok(self.resolve_click(&ticket))
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
