//! The value editor state machine.
//!
//! Owns the current unit and value of one widget instance. The four
//! interaction handlers ([`ValueEditor::increment`],
//! [`ValueEditor::decrement`], [`ValueEditor::switch_unit`],
//! [`ValueEditor::edit_text`]) and the blur pass ([`ValueEditor::commit`])
//! are the only ways to mutate it, and none of them can leave the value
//! outside the bounds of the current unit.

use crate::config::UnitInputConfig;
use crate::sanitize::parse_input;
use crate::unit::{Unit, PERCENT_CEILING};

/// What a text edit did to the value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditOutcome {
    /// Nothing numeric was typed; the previous value is kept.
    Ignored,
    /// The parsed number was stored as typed.
    Accepted(f64),
    /// The parsed number was out of range and the boundary was stored.
    Clamped(f64),
}

impl EditOutcome {
    /// Returns the value stored by the edit, if any.
    #[must_use]
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Ignored => None,
            Self::Accepted(value) | Self::Clamped(value) => Some(value),
        }
    }
}

/// Formats a value the way the text field shows it.
///
/// Integral values print without a fraction (`50`, not `50.0`).
#[must_use]
pub fn format_value(value: f64) -> String {
    format!("{value}")
}

/// Unit and value state of one editor instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueEditor {
    /// Bounds and step, fixed at construction.
    config: UnitInputConfig,
    /// Current unit.
    unit: Unit,
    /// Current value.
    value: f64,
}

impl ValueEditor {
    /// Creates an editor at the configured starting unit and value.
    #[must_use]
    pub fn new(config: UnitInputConfig) -> Self {
        Self {
            unit: config.default_unit,
            value: config.default_value,
            config,
        }
    }

    /// Returns the configuration this editor was built with.
    #[must_use]
    pub fn config(&self) -> &UnitInputConfig {
        &self.config
    }

    /// Returns the current unit.
    #[inline]
    #[must_use]
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Returns the current value.
    #[inline]
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the value formatted for the text field.
    #[must_use]
    pub fn display_value(&self) -> String {
        format_value(self.value)
    }

    /// Adds one step.
    ///
    /// In percent mode this is a no-op once the value reaches `max`, and the
    /// result is capped at `max` (never above [`PERCENT_CEILING`]). Pixel
    /// mode has no upper bound. The result is always clamped to the unit
    /// bounds, even for a config that skipped validation.
    ///
    /// Returns true if the value changed.
    pub fn increment(&mut self) -> bool {
        let next = if self.unit.is_percent() {
            if self.value >= self.config.max {
                return false;
            }
            (self.value + self.config.step)
                .min(self.config.max)
                .min(PERCENT_CEILING)
        } else {
            self.value + self.config.step
        };
        let next = self.unit.clamp(next, self.config.min);
        tracing::trace!("Increment {} -> {}{}", self.value, next, self.unit);
        self.set_value(next)
    }

    /// Removes one step, never going below `min`.
    ///
    /// Returns true if the value changed.
    pub fn decrement(&mut self) -> bool {
        if self.value <= self.config.min {
            return false;
        }
        let next = self.unit.clamp(self.value - self.config.step, self.config.min);
        tracing::trace!("Decrement {} -> {}{}", self.value, next, self.unit);
        self.set_value(next)
    }

    /// Switches to `unit`.
    ///
    /// Moving into percent caps the value at 100; moving into pixels keeps
    /// it untouched.
    ///
    /// Returns true if the unit or the value changed.
    pub fn switch_unit(&mut self, unit: Unit) -> bool {
        let unit_changed = self.unit != unit;
        self.unit = unit;

        let value_changed = if unit.is_percent() && self.value > PERCENT_CEILING {
            tracing::debug!("Unit switch to {} caps {} at {}", unit, self.value, PERCENT_CEILING);
            self.set_value(PERCENT_CEILING)
        } else {
            false
        };

        unit_changed || value_changed
    }

    /// Applies raw text from the field.
    ///
    /// The text is sanitized and parsed; if nothing numeric remains the edit
    /// is dropped. Otherwise the number is clamped to the current unit and
    /// stored without rounding to the step.
    #[allow(clippy::float_cmp)]
    pub fn edit_text(&mut self, raw: &str) -> EditOutcome {
        let Some(parsed) = parse_input(raw) else {
            tracing::trace!("Ignoring non-numeric edit {:?}", raw);
            return EditOutcome::Ignored;
        };

        let clamped = self.unit.clamp(parsed, self.config.min);
        self.set_value(clamped);

        if clamped == parsed {
            EditOutcome::Accepted(clamped)
        } else {
            tracing::debug!("Edit {} clamped to {}{}", parsed, clamped, self.unit);
            EditOutcome::Clamped(clamped)
        }
    }

    /// Re-validates the value on blur or Enter.
    ///
    /// Returns true if the value had to be corrected.
    pub fn commit(&mut self) -> bool {
        let corrected = self.unit.clamp(self.value, self.config.min);
        let changed = self.set_value(corrected);
        if changed {
            tracing::debug!("Commit corrected value to {}{}", corrected, self.unit);
        }
        changed
    }

    /// True when the decrement control must be disabled.
    #[must_use]
    pub fn is_decrement_disabled(&self) -> bool {
        self.value <= self.config.min
    }

    /// True when the increment control must be disabled.
    ///
    /// Compares against the fixed percent ceiling, not `max`. Pixel mode
    /// never disables it.
    #[must_use]
    pub fn is_increment_disabled(&self) -> bool {
        self.unit.is_percent() && self.value >= PERCENT_CEILING
    }

    /// Stores `value`, returning true if it differs from the current one.
    #[allow(clippy::float_cmp)]
    fn set_value(&mut self, value: f64) -> bool {
        if value == self.value {
            return false;
        }
        self.value = value;
        true
    }
}

impl Default for ValueEditor {
    fn default() -> Self {
        Self::new(UnitInputConfig::DEFAULT)
    }
}
