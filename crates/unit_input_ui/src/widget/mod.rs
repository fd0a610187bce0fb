//! Widgets that make up the unit input.
//!
//! [`UnitInputWidget`] is the only widget a host needs to hold; the rest are
//! its parts and are public so hosts can inspect them.

mod button;
mod core;
mod field;
mod tooltip;
mod unit_input;

pub use button::{Button, ButtonKind};
pub use self::core::{TooltipWidget, Widget, WidgetFlags, WidgetId, WidgetResponse, WidgetState};
pub use field::ValueField;
pub use tooltip::{Tooltip, TooltipConfig, TooltipManager};
pub use unit_input::{UnitInputWidget, DECREMENT_DISABLED_TOOLTIP, INCREMENT_DISABLED_TOOLTIP};
