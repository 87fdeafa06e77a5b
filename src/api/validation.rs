use crate::error::{ChartError, ChartResult};

use super::{LollipopEngineConfig, StyleSettings};

pub(super) fn validate_style_settings(settings: &StyleSettings) -> ChartResult<()> {
    if !settings.line_width.is_finite() || settings.line_width < 0.0 {
        return Err(ChartError::InvalidStyle(
            "lineWidth must be finite and >= 0".to_owned(),
        ));
    }
    if !settings.radius.is_finite() || settings.radius < 0.0 {
        return Err(ChartError::InvalidStyle(
            "radius must be finite and >= 0".to_owned(),
        ));
    }
    if !settings.font_size.is_finite() || settings.font_size <= 0.0 {
        return Err(ChartError::InvalidStyle(
            "fontSize must be finite and > 0".to_owned(),
        ));
    }
    if settings.font_family.trim().is_empty() {
        return Err(ChartError::InvalidStyle(
            "fontFamily must not be empty".to_owned(),
        ));
    }
    settings
        .default_color
        .validate()
        .map_err(|err| ChartError::InvalidStyle(format!("defaultColor: {err}")))?;
    if let Some(color) = settings.data_point_color {
        color
            .validate()
            .map_err(|err| ChartError::InvalidStyle(format!("dataPointColor: {err}")))?;
    }
    Ok(())
}

pub(super) fn validate_engine_config(config: &LollipopEngineConfig) -> ChartResult<()> {
    if !config.transition_duration_ms.is_finite() || config.transition_duration_ms < 0.0 {
        return Err(ChartError::InvalidData(
            "transition duration must be finite and >= 0".to_owned(),
        ));
    }
    if !config.dimmed_opacity.is_finite() || !(0.0..=1.0).contains(&config.dimmed_opacity) {
        return Err(ChartError::InvalidData(
            "dimmed opacity must be finite and in [0, 1]".to_owned(),
        ));
    }
    if !config.category_padding.is_finite() || config.category_padding < 0.0 {
        return Err(ChartError::InvalidData(
            "category padding must be finite and >= 0".to_owned(),
        ));
    }
    config.label_color.validate()
}

pub(super) fn validate_delta_ms(delta_ms: f64) -> ChartResult<f64> {
    if !delta_ms.is_finite() || delta_ms < 0.0 {
        return Err(ChartError::InvalidData(
            "animation delta must be finite and >= 0".to_owned(),
        ));
    }
    Ok(delta_ms)
}
