//! lollipop-chart: keyed, animated lollipop chart engine.
//!
//! The crate turns a host-supplied categorical data view into a persistent
//! scene of target line, markers, stems and labels, reconciles that scene on
//! every update, and keeps selection/highlight opacity consistent across
//! layers. Drawing is delegated to a `Renderer` backend.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{LollipopEngine, LollipopEngineConfig};
pub use error::{ChartError, ChartResult};
