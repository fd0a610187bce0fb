//! The text field between the stepper buttons.
//!
//! The field only owns the text being typed. Turning that text into a value
//! is the parent's job, driven by the `changed` and `unfocused` responses.

use super::{Widget, WidgetFlags, WidgetId, WidgetResponse, WidgetState};
use crate::input::{InputState, Key, MouseButton};
use crate::layout::Rect;
use crate::render::{RenderCommand, TextAlign};
use crate::style::Palette;

/// Single-line text field with focus handling.
#[derive(Debug, Clone)]
pub struct ValueField {
    /// Widget state.
    state: WidgetState,
    /// Text currently shown.
    text: String,
    /// Colours.
    palette: Palette,
}

impl ValueField {
    /// Font size of the field text.
    pub const FONT_SIZE: f32 = 14.0;
    /// Width of the caret drawn while focused.
    pub const CARET_WIDTH: f32 = 1.0;
    /// Width of the focus ring.
    pub const RING_WIDTH: f32 = 1.0;

    /// Creates an unfocused field showing `text`.
    #[must_use]
    pub fn new(id: WidgetId, text: impl Into<String>) -> Self {
        Self {
            state: WidgetState::new(id),
            text: text.into(),
            palette: Palette::NEUTRAL,
        }
    }

    /// Returns the text currently shown.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the text, e.g. after the parent clamped the value.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.text != text {
            self.text = text;
            self.state.mark_dirty();
        }
    }

    /// Returns true while the field has keyboard focus.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.state.is_focused()
    }

    /// Gives the field keyboard focus.
    pub fn focus(&mut self) -> bool {
        let gained = self.state.flags.assign(WidgetFlags::FOCUSED, true);
        if gained {
            tracing::trace!("Field {} focused", self.state.id.raw());
            self.state.mark_dirty();
        }
        gained
    }

    /// Takes keyboard focus away.
    pub fn blur(&mut self) -> bool {
        let lost = self.state.flags.assign(WidgetFlags::FOCUSED, false);
        if lost {
            tracing::trace!("Field {} blurred", self.state.id.raw());
            self.state.mark_dirty();
        }
        lost
    }

    /// Rough text width used to place the caret.
    #[allow(clippy::cast_precision_loss)]
    fn text_width(&self) -> f32 {
        self.text.chars().count() as f32 * Self::FONT_SIZE * 0.6
    }
}

impl Widget for ValueField {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    fn update(&mut self, input: &InputState, _dt: f32) -> WidgetResponse {
        let mut response = WidgetResponse::default();
        let hovered = self.state.track_hover(input, &mut response);

        if input.mouse_clicked(MouseButton::Left) {
            if hovered {
                response.focused = self.focus();
            } else if self.blur() {
                response.unfocused = true;
                return response;
            }
        }

        if !self.is_focused() {
            return response;
        }

        let typed = input.typed_text();
        if !typed.is_empty() {
            self.text.push_str(typed);
            response.changed = true;
        }
        if input.key_pressed(Key::Backspace) && self.text.pop().is_some() {
            response.changed = true;
        }
        if response.changed {
            self.state.mark_dirty();
        }

        if input.key_pressed(Key::Enter) {
            response.submitted = true;
            response.unfocused = self.blur();
        } else if input.key_pressed(Key::Tab) || input.key_pressed(Key::Escape) {
            response.unfocused = self.blur();
        }

        response
    }

    fn render(&self, commands: &mut Vec<RenderCommand>) {
        let rect = self.state.rect;
        let (x, y) = rect.center();

        commands.push(RenderCommand::Text {
            text: self.text.clone(),
            x,
            y,
            color: self.palette.text,
            font_size: Self::FONT_SIZE,
            align: TextAlign::Center,
        });

        if self.is_focused() {
            commands.push(RenderCommand::RectOutline {
                bounds: rect,
                color: self.palette.muted_text,
                width: Self::RING_WIDTH,
                corner_radius: 4.0,
            });

            let caret_height = Self::FONT_SIZE * 1.2;
            commands.push(RenderCommand::Rect {
                bounds: Rect::new(
                    x + self.text_width() * 0.5 + 1.0,
                    y - caret_height * 0.5,
                    Self::CARET_WIDTH,
                    caret_height,
                ),
                color: self.palette.text,
                corner_radius: 0.0,
            });
        }
    }

    fn min_size(&self) -> (f32, f32) {
        (32.0, 24.0)
    }
}
