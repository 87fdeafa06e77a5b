mod connector_geometry;
mod engine;
mod engine_accessors;
mod engine_config;
mod engine_snapshot;
mod host;
mod interaction_coordinator;
mod json_contract;
mod reconcile;
mod render_frame_builder;
mod scale_coordinator;
mod scene;
mod scene_reconciler;
mod selection_coordinator;
mod settings_enumeration;
mod style_export;
mod style_settings;
mod transition;
mod validation;
mod value_formatter;

pub use connector_geometry::{connector_end_y, connector_geometry};
pub use engine::{LollipopEngine, UpdateInput, UpdateSummary};
pub use engine_config::LollipopEngineConfig;
pub use engine_snapshot::{ElementGeometry, ElementSnapshot, SceneSnapshot};
pub use host::{
    HostServices, InMemorySelectionService, NoopTooltipService, SelectionService,
    TooltipDataItem, TooltipHideOptions, TooltipService, TooltipShowOptions,
};
pub use json_contract::{SCENE_SNAPSHOT_JSON_SCHEMA_V1, SceneSnapshotJsonContractV1};
pub use reconcile::{ReconcileOutcome, reconcile_layer};
pub use scale_coordinator::{ChartScales, build_scales};
pub use scene::{
    CategoryLabelElement, CircleGeometry, ConnectorElement, DataPointElement, ElementId,
    LineGeometry, SceneGraph, TargetKey, TargetLabelElement, TargetLineElement,
};
pub use scene_reconciler::SceneReconcileSummary;
pub use selection_coordinator::{ClickResolution, ClickTicket};
pub use settings_enumeration::{
    InstanceSelector, LOLLIPOP_SETTINGS_OBJECT, ObjectInstance, PropertyInstanceKind,
    WildcardMatchingOption, enumerate_object_instances,
};
pub use style_export::{
    DEFAULT_COLOR_VARIABLE, FONT_FAMILY_VARIABLE, FONT_SIZE_VARIABLE, LINE_WIDTH_VARIABLE,
    export_style_variables,
};
pub use style_settings::{DEFAULT_MARKER_COLOR, StyleSettings};
pub use transition::{Animated, Interpolate, Transition, TransitionEasing};
pub use value_formatter::ValueFormatter;
