//! # Unit Input Core
//!
//! Headless model behind the percent/pixel value editor:
//! - Two units, [`Unit::Percent`] bounded to `[0, 100]` and [`Unit::Pixel`]
//!   bounded only below by the configured minimum
//! - Stepping, unit switching and free text entry, all clamping instead of
//!   failing
//! - One shared sanitizer for everything that turns keystrokes into numbers
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     EDIT PIPELINE                        │
//! ├──────────────────────────────────────────────────────────┤
//! │  raw text → sanitize_input → parse → clamp → ValueEditor │
//! │  +/- click ───────────────────────→ step  → ValueEditor  │
//! │  %/px click ──────────────────────→ clamp → ValueEditor  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use unit_input_core::{EditOutcome, Unit, UnitInputConfig, ValueEditor};
//!
//! let mut editor = ValueEditor::new(UnitInputConfig::default().with_value(95.0));
//! editor.increment();
//! assert_eq!(editor.edit_text("150"), EditOutcome::Clamped(100.0));
//!
//! editor.switch_unit(Unit::Pixel);
//! assert_eq!(editor.edit_text("1.2.3"), EditOutcome::Accepted(1.23));
//! ```
//!
//! None of the editor operations can fail. Only building a configuration
//! from text returns a [`UnitInputError`].

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod error;
pub mod sanitize;
pub mod unit;

pub use config::UnitInputConfig;
pub use editor::{format_value, EditOutcome, ValueEditor};
pub use error::{UnitInputError, UnitInputResult};
pub use sanitize::{parse_input, sanitize_input};
pub use unit::{Unit, PERCENT_CEILING};
