use crate::core::{DataModel, Viewport};
use crate::interaction::{InteractionState, VisualMode};
use crate::render::{Renderer, StyleVariables};

use super::scene::SceneGraph;
use super::settings_enumeration::{ObjectInstance, enumerate_object_instances};
use super::{
    ChartScales, HostServices, LollipopEngine, LollipopEngineConfig, StyleSettings, Transition,
};

impl<R: Renderer> LollipopEngine<R> {
    #[must_use]
    pub fn config(&self) -> &LollipopEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn settings(&self) -> &StyleSettings {
        &self.settings
    }

    #[must_use]
    pub fn model(&self) -> &DataModel {
        &self.model
    }

    /// `None` until the first update.
    #[must_use]
    pub fn scales(&self) -> Option<&ChartScales> {
        self.scales.as_ref()
    }

    #[must_use]
    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    #[must_use]
    pub fn transition(&self) -> Transition {
        self.transition
    }

    #[must_use]
    pub fn mode(&self) -> VisualMode {
        self.mode
    }

    /// Number of completed update cycles.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    #[must_use]
    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    #[must_use]
    pub fn style_variables(&self) -> &StyleVariables {
        &self.style_variables
    }

    #[must_use]
    pub fn formatted_target(&self) -> String {
        self.formatter.format(self.model.target)
    }

    #[must_use]
    pub fn services(&self) -> &HostServices {
        &self.services
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Settings-pane instances for `object_name` under the current settings.
    #[must_use]
    pub fn enumerate_object_instances(&self, object_name: &str) -> Vec<ObjectInstance> {
        enumerate_object_instances(object_name, &self.settings)
    }
}
