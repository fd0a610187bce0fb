//! # Unit Input Error Types
//!
//! Editing never fails; these errors only come out of building an editor
//! configuration from text.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while parsing units or loading a configuration.
#[derive(Error, Debug)]
pub enum UnitInputError {
    /// A unit string was neither `"%"` nor `"px"`.
    #[error("unknown unit {0:?}, expected \"%\" or \"px\"")]
    UnknownUnit(String),

    /// A configuration parsed but its values cannot drive an editor.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration file could not be read.
    #[error("failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The configuration text is not valid TOML for [`crate::UnitInputConfig`].
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Result type for configuration and unit parsing.
pub type UnitInputResult<T> = Result<T, UnitInputError>;
