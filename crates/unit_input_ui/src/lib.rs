//! # Unit Input UI
//!
//! Immediate-mode widget for editing a value in percent or pixels:
//! - Unit toggle pair, active unit highlighted
//! - Stepper buttons around a free-text field
//! - Tooltips on disabled steppers, shown on the first hovered frame
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       UI PIPELINE                        │
//! ├──────────────────────────────────────────────────────────┤
//! │  InputState → UnitInputWidget::update → ValueEditor      │
//! │                        ↓                                 │
//! │        UnitInputWidget::render → RenderCommand list      │
//! │                        ↓                                 │
//! │               UIRenderer → UIBatch → UIVertex quads      │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The widget never owns a second copy of the value: every frame it derives
//! labels and disabled states from the [`unit_input_core::ValueEditor`] it
//! wraps.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod animation;
pub mod input;
pub mod layout;
pub mod render;
pub mod style;
pub mod widget;

pub use animation::{Animation, Easing};
pub use input::{InputState, Key, MouseButton};
pub use layout::{Rect, UnitInputLayout};
pub use render::{RenderCommand, TextAlign, UIBatch, UIRenderer, UIVertex};
pub use style::{Color, Palette};
pub use widget::{
    Button, ButtonKind, TooltipWidget, UnitInputWidget, ValueField, Widget, WidgetFlags, WidgetId,
    WidgetResponse, WidgetState,
};

pub use unit_input_core::{Unit, UnitInputConfig, ValueEditor};
