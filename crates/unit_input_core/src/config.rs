//! Editor configuration.
//!
//! Every field is optional. In TOML:
//!
//! ```toml
//! default_unit = "px"
//! min = 0
//! max = 100
//! step = 1
//! default_value = 0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{UnitInputError, UnitInputResult};
use crate::unit::Unit;

/// Construction parameters for a [`crate::ValueEditor`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UnitInputConfig {
    /// Unit selected when the editor is created.
    pub default_unit: Unit,
    /// Lower bound for every unit.
    pub min: f64,
    /// Stepping ceiling, only consulted in percent mode.
    pub max: f64,
    /// Amount added or removed by one increment/decrement.
    pub step: f64,
    /// Value the editor starts with.
    pub default_value: f64,
}

impl UnitInputConfig {
    /// Defaults: percent, `min = 0`, `max = 100`, `step = 1`, value `0`.
    pub const DEFAULT: Self = Self {
        default_unit: Unit::Percent,
        min: 0.0,
        max: 100.0,
        step: 1.0,
        default_value: 0.0,
    };

    /// Sets the starting unit.
    #[must_use]
    pub const fn with_unit(mut self, unit: Unit) -> Self {
        self.default_unit = unit;
        self
    }

    /// Sets the lower bound.
    #[must_use]
    pub const fn with_min(mut self, min: f64) -> Self {
        self.min = min;
        self
    }

    /// Sets the percent stepping ceiling.
    #[must_use]
    pub const fn with_max(mut self, max: f64) -> Self {
        self.max = max;
        self
    }

    /// Sets the step size.
    #[must_use]
    pub const fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Sets the starting value.
    #[must_use]
    pub const fn with_value(mut self, value: f64) -> Self {
        self.default_value = value;
        self
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`UnitInputError::ConfigParse`] for malformed TOML or unknown
    /// keys, and [`UnitInputError::InvalidConfig`] when [`Self::validate`]
    /// fails.
    pub fn from_toml_str(text: &str) -> UnitInputResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        tracing::debug!("Loaded unit input config: {:?}", config);
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`UnitInputError::ConfigRead`] if the file cannot be read,
    /// otherwise the same errors as [`Self::from_toml_str`].
    pub fn from_toml_file(path: impl AsRef<Path>) -> UnitInputResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| UnitInputError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Checks that the numbers can drive an editor.
    ///
    /// The starting value is not checked against the bounds; the editor's
    /// commit pass corrects it on first blur.
    ///
    /// # Errors
    ///
    /// Returns [`UnitInputError::InvalidConfig`] for non-finite numbers, a
    /// step that is not positive, or `max < min`.
    pub fn validate(&self) -> UnitInputResult<()> {
        let fields = [
            ("min", self.min),
            ("max", self.max),
            ("step", self.step),
            ("default_value", self.default_value),
        ];
        if let Some((name, value)) = fields.into_iter().find(|(_, value)| !value.is_finite()) {
            return Err(UnitInputError::InvalidConfig(format!(
                "{name} must be finite, got {value}"
            )));
        }
        if self.step <= 0.0 {
            return Err(UnitInputError::InvalidConfig(format!(
                "step must be positive, got {}",
                self.step
            )));
        }
        if self.max < self.min {
            return Err(UnitInputError::InvalidConfig(format!(
                "max ({}) is below min ({})",
                self.max, self.min
            )));
        }
        Ok(())
    }
}

impl Default for UnitInputConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = UnitInputConfig::from_toml_str("").unwrap();
        assert_eq!(config, UnitInputConfig::default());
    }

    #[test]
    fn test_full_document() {
        let config = UnitInputConfig::from_toml_str(
            r#"
            default_unit = "px"
            min = 4
            max = 80.5
            step = 0.5
            default_value = 12
            "#,
        )
        .unwrap();

        assert_eq!(config.default_unit, Unit::Pixel);
        assert_eq!(config.min, 4.0);
        assert_eq!(config.max, 80.5);
        assert_eq!(config.step, 0.5);
        assert_eq!(config.default_value, 12.0);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = UnitInputConfig::from_toml_str("precision = 2").unwrap_err();
        assert!(matches!(err, UnitInputError::ConfigParse(_)));
    }

    #[test]
    fn test_unknown_unit_rejected() {
        let err = UnitInputConfig::from_toml_str(r#"default_unit = "em""#).unwrap_err();
        assert!(matches!(err, UnitInputError::ConfigParse(_)));
    }

    #[test]
    fn test_validation_failures() {
        let zero_step = UnitInputConfig::default().with_step(0.0);
        assert!(matches!(zero_step.validate(), Err(UnitInputError::InvalidConfig(_))));

        let inverted = UnitInputConfig::default().with_min(50.0).with_max(10.0);
        assert!(matches!(inverted.validate(), Err(UnitInputError::InvalidConfig(_))));

        let nan = UnitInputConfig::default().with_value(f64::NAN);
        let err = nan.validate().unwrap_err();
        assert!(err.to_string().contains("default_value"));
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("unit_input_core_missing_config.toml");
        let err = UnitInputConfig::from_toml_file(&path).unwrap_err();
        assert!(matches!(err, UnitInputError::ConfigRead { .. }));
    }

    #[test]
    fn test_serialize_round_trip() {
        let config = UnitInputConfig::default().with_unit(Unit::Pixel).with_step(2.0);
        let text = toml::to_string(&config).unwrap();
        assert!(text.contains("default_unit = \"px\""));
        assert_eq!(UnitInputConfig::from_toml_str(&text).unwrap(), config);
    }
}
