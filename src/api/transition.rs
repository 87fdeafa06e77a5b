use serde::{Deserialize, Serialize};

use crate::core::PixelPoint;
use crate::render::Color;

/// Easing curve applied to raw transition progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransitionEasing {
    #[default]
    Linear,
    CubicInOut,
}

impl TransitionEasing {
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = 2.0 * t - 2.0;
                    0.5 * u * u * u + 1.0
                }
            }
        }
    }
}

/// One shared, host-clocked transition per update cycle.
///
/// Time only moves through [`Transition::advance`]; there is no wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    duration_ms: f64,
    elapsed_ms: f64,
    easing: TransitionEasing,
}

impl Transition {
    #[must_use]
    pub fn new(duration_ms: f64, easing: TransitionEasing) -> Self {
        Self {
            duration_ms: duration_ms.max(0.0),
            elapsed_ms: 0.0,
            easing,
        }
    }

    /// A transition that has already finished.
    #[must_use]
    pub fn settled(easing: TransitionEasing) -> Self {
        Self::new(0.0, easing)
    }

    #[must_use]
    pub fn duration_ms(self) -> f64 {
        self.duration_ms
    }

    #[must_use]
    pub fn elapsed_ms(self) -> f64 {
        self.elapsed_ms
    }

    /// Raw linear progress in `[0, 1]`.
    #[must_use]
    pub fn progress(self) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Progress after easing; this is what geometry interpolates with.
    #[must_use]
    pub fn eased_progress(self) -> f64 {
        self.easing.apply(self.progress())
    }

    #[must_use]
    pub fn is_running(self) -> bool {
        self.progress() < 1.0
    }

    /// Advances the clock; returns whether the transition is still running.
    pub fn advance(&mut self, delta_ms: f64) -> bool {
        self.elapsed_ms = (self.elapsed_ms + delta_ms).min(self.duration_ms);
        self.is_running()
    }
}

/// Values that can be interpolated by a transition.
pub trait Interpolate: Copy {
    #[must_use]
    fn interpolate(self, to: Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    fn interpolate(self, to: Self, t: f64) -> Self {
        self + (to - self) * t
    }
}

impl Interpolate for Color {
    fn interpolate(self, to: Self, t: f64) -> Self {
        self.lerp(to, t)
    }
}

impl Interpolate for PixelPoint {
    fn interpolate(self, to: Self, t: f64) -> Self {
        PixelPoint::new(self.x.interpolate(to.x, t), self.y.interpolate(to.y, t))
    }
}

/// A property moving from `from` to `to` under the shared transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Animated<T> {
    from: T,
    to: T,
}

impl<T: Interpolate> Animated<T> {
    /// A property that starts at its final value.
    #[must_use]
    pub fn fixed(value: T) -> Self {
        Self {
            from: value,
            to: value,
        }
    }

    #[must_use]
    pub fn at(&self, t: f64) -> T {
        self.from.interpolate(self.to, t)
    }

    #[must_use]
    pub fn target(&self) -> T {
        self.to
    }

    /// Restarts the animation from its value at `t` towards `to`.
    pub fn retarget(&mut self, t: f64, to: T) {
        self.from = self.at(t);
        self.to = to;
    }
}

#[cfg(test)]
mod tests {
    use super::{Animated, Transition, TransitionEasing};

    #[test]
    fn transition_progress_tracks_advanced_time() {
        let mut transition = Transition::new(500.0, TransitionEasing::Linear);
        assert_eq!(transition.progress(), 0.0);
        assert!(transition.advance(250.0));
        assert_eq!(transition.progress(), 0.5);
        assert!(!transition.advance(1_000.0));
        assert_eq!(transition.progress(), 1.0);
        assert_eq!(transition.elapsed_ms(), 500.0);
    }

    #[test]
    fn zero_duration_transition_is_already_finished() {
        let transition = Transition::new(0.0, TransitionEasing::Linear);
        assert_eq!(transition.progress(), 1.0);
        assert!(!transition.is_running());
    }

    #[test]
    fn cubic_easing_is_symmetric_and_pinned_at_ends() {
        let easing = TransitionEasing::CubicInOut;
        assert_eq!(easing.apply(0.0), 0.0);
        assert_eq!(easing.apply(1.0), 1.0);
        assert!((easing.apply(0.5) - 0.5).abs() < 1e-12);
        assert!((easing.apply(0.25) + easing.apply(0.75) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn retarget_starts_from_mid_flight_value() {
        let mut value = Animated::fixed(0.0);
        value.retarget(1.0, 100.0);
        assert_eq!(value.at(0.5), 50.0);

        value.retarget(0.5, 0.0);
        assert_eq!(value.at(0.0), 50.0);
        assert_eq!(value.at(1.0), 0.0);
    }
}
