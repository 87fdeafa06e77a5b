use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Continuous linear mapping from a numeric domain to a pixel range.
///
/// The range may be inverted (`range_start > range_end`), which is how the
/// value axis plots larger values higher on screen. A degenerate domain
/// (`domain_start == domain_end`) maps every input to the range midpoint.
/// Domains whose width overflows `f64` are mapped in half-scale arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() {
            return Err(ChartError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.domain_start == self.domain_end
    }

    /// Maps a domain value to pixel space. Values outside the domain extrapolate.
    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let normalized = if self.is_degenerate() {
            0.5
        } else {
            let span = self.domain_end - self.domain_start;
            if span.is_finite() {
                (value - self.domain_start) / span
            } else {
                (value * 0.5 - self.domain_start * 0.5) / self.half_span()
            }
        };
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Maps a pixel back to the domain. Degenerate domains return their single value.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 || self.is_degenerate() {
            return self.domain_start;
        }
        let normalized = (pixel - self.range_start) / range_span;
        let span = self.domain_end - self.domain_start;
        if span.is_finite() {
            self.domain_start + normalized * span
        } else {
            let offset = normalized * self.half_span();
            self.domain_start + offset + offset
        }
    }

    fn half_span(self) -> f64 {
        self.domain_end * 0.5 - self.domain_start * 0.5
    }
}
