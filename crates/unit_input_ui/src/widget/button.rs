//! Clickable buttons: the unit toggles and the stepper ends.

use super::{TooltipWidget, Widget, WidgetFlags, WidgetId, WidgetResponse, WidgetState};
use crate::animation::{Animation, Easing};
use crate::input::{InputState, MouseButton};
use crate::render::{RenderCommand, TextAlign};
use crate::style::{Color, Palette};

/// How a button draws itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// One half of the unit toggle; the selected half is filled.
    Toggle,
    /// `-` or `+` stepper end; greyed out when disabled.
    Step,
}

/// A text button.
#[derive(Debug, Clone)]
pub struct Button {
    /// Widget state.
    state: WidgetState,
    /// Visual style.
    kind: ButtonKind,
    /// Label text.
    label: &'static str,
    /// Selected toggle half.
    active: bool,
    /// Tooltip shown while hovered and disabled.
    disabled_tooltip: Option<&'static str>,
    /// Hover transition, 0 idle to 1 hovered.
    hover_anim: Animation,
    /// Colours.
    palette: Palette,
}

impl Button {
    /// Font size of button labels.
    pub const FONT_SIZE: f32 = 14.0;
    /// Corner radius of the button background.
    pub const CORNER_RADIUS: f32 = 6.0;

    /// Creates an enabled, inactive button.
    #[must_use]
    pub fn new(id: WidgetId, kind: ButtonKind, label: &'static str) -> Self {
        Self {
            state: WidgetState::new(id),
            kind,
            label,
            active: false,
            disabled_tooltip: None,
            hover_anim: Animation::new(0.0, Easing::ExponentialOut),
            palette: Palette::NEUTRAL,
        }
    }

    /// Sets the text shown while the button is disabled and hovered.
    #[must_use]
    pub fn with_disabled_tooltip(mut self, text: &'static str) -> Self {
        self.disabled_tooltip = Some(text);
        self
    }

    /// Returns the label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Returns true if the button reacts to clicks.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.state.is_enabled()
    }

    /// Enables or disables the button.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.state.flags.assign(WidgetFlags::ENABLED, enabled) {
            self.state.mark_dirty();
        }
    }

    /// Returns true for the selected toggle half.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Marks the button as the selected toggle half.
    pub fn set_active(&mut self, active: bool) {
        if self.active != active {
            self.active = active;
            self.state.mark_dirty();
        }
    }

    /// Background and text colour for the current state.
    fn colors(&self) -> (Color, Color) {
        let palette = &self.palette;
        let hover_t = self.hover_anim.value();
        match self.kind {
            ButtonKind::Toggle if self.active => (palette.active_background, palette.text),
            ButtonKind::Toggle => (
                Color::TRANSPARENT,
                palette.muted_text.lerp(palette.text, hover_t),
            ),
            ButtonKind::Step if !self.is_enabled() => {
                (palette.disabled_background, palette.disabled_text)
            }
            ButtonKind::Step if self.state.is_pressed() => {
                (palette.active_background, palette.text)
            }
            ButtonKind::Step => (
                Color::TRANSPARENT.lerp(palette.hover_background, hover_t),
                palette.muted_text.lerp(palette.text, hover_t),
            ),
        }
    }
}

impl Widget for Button {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    fn update(&mut self, input: &InputState, dt: f32) -> WidgetResponse {
        let mut response = WidgetResponse::default();

        // Hover is tracked while disabled too, the tooltip depends on it.
        let hovered = self.state.track_hover(input, &mut response);
        let interactive = hovered && self.is_enabled();

        self.hover_anim.set_target(if interactive { 1.0 } else { 0.0 });
        self.hover_anim.update(dt);
        if !self.hover_anim.is_complete() {
            self.state.mark_dirty();
        }

        let pressed = interactive && input.mouse_down(MouseButton::Left);
        if self.state.flags.assign(WidgetFlags::PRESSED, pressed) {
            self.state.mark_dirty();
        }

        if interactive && input.mouse_clicked(MouseButton::Left) {
            response.clicked = true;
        }

        response
    }

    fn render(&self, commands: &mut Vec<RenderCommand>) {
        if !self.state.is_visible() {
            return;
        }

        let rect = self.state.rect;
        let (background, text) = self.colors();

        if background.a > 0.0 {
            commands.push(RenderCommand::Rect {
                bounds: rect,
                color: background,
                corner_radius: Self::CORNER_RADIUS,
            });
        }

        let (x, y) = rect.center();
        commands.push(RenderCommand::Text {
            text: self.label.to_string(),
            x,
            y,
            color: text,
            font_size: Self::FONT_SIZE,
            align: TextAlign::Center,
        });
    }

    fn min_size(&self) -> (f32, f32) {
        (24.0, 24.0)
    }
}

impl TooltipWidget for Button {
    fn tooltip_text(&self) -> Option<&str> {
        if self.is_enabled() {
            None
        } else {
            self.disabled_tooltip
        }
    }
}
