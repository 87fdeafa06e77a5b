use crate::render::StyleVariables;

use super::StyleSettings;

pub const DEFAULT_COLOR_VARIABLE: &str = "--default-color";
pub const LINE_WIDTH_VARIABLE: &str = "--line-width";
pub const FONT_FAMILY_VARIABLE: &str = "--font-family";
pub const FONT_SIZE_VARIABLE: &str = "--font-size";

/// Style variables written to the rendering surface on every update.
#[must_use]
pub fn export_style_variables(settings: &StyleSettings) -> StyleVariables {
    let mut variables = StyleVariables::new();
    variables.set(DEFAULT_COLOR_VARIABLE, settings.default_color.to_hex());
    variables.set(LINE_WIDTH_VARIABLE, settings.line_width.to_string());
    variables.set(FONT_FAMILY_VARIABLE, settings.font_family.clone());
    variables.set(FONT_SIZE_VARIABLE, format!("{}pt", settings.font_size));
    variables
}
