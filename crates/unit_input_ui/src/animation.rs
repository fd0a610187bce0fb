//! Hover colour transitions.
//!
//! Buttons fade between idle and hovered colours with a short exponential
//! ease so the snap is immediate but not jarring.

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation.
    Linear,
    /// Exponential ease-out, fast start then settle.
    #[default]
    ExponentialOut,
}

impl Easing {
    /// Applies the easing function to a t value (0-1).
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::ExponentialOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
        }
    }
}

/// A single animated value.
#[derive(Debug, Clone)]
pub struct Animation {
    /// Current value.
    current: f32,
    /// Target value.
    target: f32,
    /// Value the running transition started from.
    start: f32,
    /// Transition progress (0-1).
    progress: f32,
    /// Transition duration (seconds).
    duration: f32,
    /// Easing function.
    easing: Easing,
}

impl Animation {
    /// Default transition duration.
    pub const DEFAULT_DURATION: f32 = 0.15;

    /// Creates an animation resting at `value`.
    #[must_use]
    pub fn new(value: f32, easing: Easing) -> Self {
        Self {
            current: value,
            target: value,
            start: value,
            progress: 1.0,
            duration: Self::DEFAULT_DURATION,
            easing,
        }
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.current
    }

    /// Returns true if the transition is complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    /// Starts a transition from the current value towards `target`.
    pub fn set_target(&mut self, target: f32) {
        if (target - self.target).abs() > 0.0001 {
            self.start = self.current;
            self.target = target;
            self.progress = 0.0;
        }
    }

    /// Advances the transition by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if self.progress >= 1.0 {
            return;
        }

        self.progress = if self.duration > 0.0 {
            (self.progress + dt / self.duration).min(1.0)
        } else {
            1.0
        };

        let eased = self.easing.apply(self.progress);
        self.current = self.start + (self.target - self.start) * eased;

        if self.progress >= 1.0 {
            self.current = self.target;
        }
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::new(0.0, Easing::ExponentialOut)
    }
}
