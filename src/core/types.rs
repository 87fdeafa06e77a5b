use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Host-provided drawing surface size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Zero-sized viewports are valid; they produce a collapsed but consistent scene.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

/// Point in viewport pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::Viewport;

    #[test]
    fn zero_sized_viewport_is_valid() {
        assert!(Viewport::new(0.0, 0.0).is_valid());
    }

    #[test]
    fn negative_or_nan_viewport_is_rejected() {
        assert!(Viewport::new(-1.0, 10.0).validate().is_err());
        assert!(Viewport::new(10.0, f64::NAN).validate().is_err());
    }
}
